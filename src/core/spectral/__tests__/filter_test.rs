//! # 주파수 마스크 합성 테스트

use approx::assert_abs_diff_eq;

use crate::core::error::WorkbenchError;
use crate::core::spectral::filter::{
    build_filter_mask, normalized_distance_grid, BandType, Cutoff, FilterFamily, FilterSpec,
};

const FAMILIES: [FilterFamily; 3] = [
    FilterFamily::Ideal,
    FilterFamily::Gaussian,
    FilterFamily::Butterworth,
];
const BANDS: [BandType; 4] = [
    BandType::LowPass,
    BandType::HighPass,
    BandType::BandPass,
    BandType::BandStop,
];

#[test]
fn 이름_파싱_테스트() {
    let spec = FilterSpec::parse("Gaussiano", "HIGHPASS", 0.3, 2).unwrap();
    assert_eq!(spec.family, FilterFamily::Gaussian);
    assert_eq!(spec.band, BandType::HighPass);

    let spec = FilterSpec::parse(" butterworth ", "bandstop", (0.1, 0.3), 4).unwrap();
    assert_eq!(spec.cutoff, Cutoff::Band { inner: 0.1, outer: 0.3 });
    assert_eq!(spec.order, 4);

    assert!(matches!(
        FilterSpec::parse("sinc", "lowpass", 0.2, 2),
        Err(WorkbenchError::InvalidFilterSpec(_))
    ));
    assert!(matches!(
        "notch".parse::<BandType>(),
        Err(WorkbenchError::InvalidFilterSpec(_))
    ));
    println!("✅ 필터 이름 파싱 테스트 통과");
}

#[test]
fn 잘못된_차단반경_거부_테스트() {
    let shape = (16, 16);
    let cases = [
        FilterSpec::new(FilterFamily::Gaussian, BandType::LowPass, 0.0),
        FilterSpec::new(FilterFamily::Gaussian, BandType::LowPass, f64::NAN),
        FilterSpec::new(FilterFamily::Butterworth, BandType::LowPass, -0.1),
        FilterSpec::new(FilterFamily::Gaussian, BandType::BandPass, (0.0, 0.3)),
        FilterSpec::new(FilterFamily::Ideal, BandType::HighPass, (0.1, 0.3)),
        FilterSpec::new(FilterFamily::Ideal, BandType::BandPass, (0.3, 0.3)),
        FilterSpec::new(FilterFamily::Gaussian, BandType::BandStop, (0.4, 0.2)),
        FilterSpec::new(FilterFamily::Butterworth, BandType::LowPass, 0.2).with_order(0),
    ];
    for spec in &cases {
        assert!(
            matches!(build_filter_mask(shape, spec), Err(WorkbenchError::InvalidFilterSpec(_))),
            "{:?}는 거부되어야 함",
            spec
        );
    }
    assert_eq!(
        build_filter_mask((0, 8), &FilterSpec::default()),
        Err(WorkbenchError::EmptyImage)
    );
}

#[test]
fn 차단반경_0_butterworth_테스트() {
    let (rows, cols) = (16, 16);
    let center = (rows / 2, cols / 2);

    // d = 0 → (0/ε)^2n = 0 → H = 1, 그 외 픽셀은 d/ε가 매우 커서 H ≈ 0
    let lowpass = build_filter_mask(
        (rows, cols),
        &FilterSpec::new(FilterFamily::Butterworth, BandType::LowPass, 0.0),
    )
    .unwrap();
    let highpass = build_filter_mask(
        (rows, cols),
        &FilterSpec::new(FilterFamily::Butterworth, BandType::HighPass, 0.0),
    )
    .unwrap();

    assert!(lowpass.iter().chain(highpass.iter()).all(|v| v.is_finite()));
    assert_abs_diff_eq!(lowpass[center], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(highpass[center], 0.0, epsilon = 1e-12);
    for ((r, c), &h) in lowpass.indexed_iter() {
        if (r, c) != center {
            assert_abs_diff_eq!(h, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(highpass[[r, c]], 1.0, epsilon = 1e-12);
        }
    }

    // ideal도 0을 허용: 중심 한 점만 통과
    let ideal = build_filter_mask(
        (rows, cols),
        &FilterSpec::new(FilterFamily::Ideal, BandType::LowPass, 0.0),
    )
    .unwrap();
    assert_eq!(ideal.sum(), 1.0);
    assert_eq!(ideal[center], 1.0);
    println!("✅ 차단반경 0 butterworth 테스트 통과");
}

#[test]
fn 거리_정규화_테스트() {
    let distance = normalized_distance_grid((40, 100));
    // 반경 기준 = min(20, 50) = 20
    assert_eq!(distance[[20, 50]], 0.0);
    assert_abs_diff_eq!(distance[[0, 50]], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(distance[[20, 60]], 0.5, epsilon = 1e-12);

    // 한 변이 1이면 기준 반경 1
    let thin = normalized_distance_grid((1, 5));
    assert_eq!(thin.iter().cloned().fold(0.0, f64::max), 2.0);
}

#[test]
fn 이상_필터_이진값_테스트() {
    let mask = build_filter_mask(
        (32, 32),
        &FilterSpec::new(FilterFamily::Ideal, BandType::LowPass, 0.25),
    )
    .unwrap();
    assert!(mask.iter().all(|&v| v == 0.0 || v == 1.0));
    assert_eq!(mask[[16, 16]], 1.0);
    assert_eq!(mask[[16, 20]], 1.0); // d = 4/16 = 0.25 경계 포함
    assert_eq!(mask[[16, 21]], 0.0);
}

#[test]
fn 저역통과_단조감소_테스트() {
    for family in FAMILIES {
        let mask = build_filter_mask((64, 64), &FilterSpec::new(family, BandType::LowPass, 0.3))
            .unwrap();
        assert_abs_diff_eq!(mask[[32, 32]], 1.0, epsilon = 1e-12);
        for c in 33..64 {
            assert!(
                mask[[32, c]] <= mask[[32, c - 1]],
                "{family}: 반경이 커질수록 응답이 증가함 (열 {c})"
            );
        }
    }
    println!("✅ 저역통과 단조감소 테스트 통과");
}

#[test]
fn 반전력_반경_테스트() {
    // 64×64: 기준 반경 32, 중심에서 8픽셀 = 0.25
    let butterworth = build_filter_mask(
        (64, 64),
        &FilterSpec::new(FilterFamily::Butterworth, BandType::LowPass, 0.25).with_order(3),
    )
    .unwrap();
    assert_abs_diff_eq!(butterworth[[32, 40]], 0.5, epsilon = 1e-6);

    let gaussian = build_filter_mask(
        (64, 64),
        &FilterSpec::new(FilterFamily::Gaussian, BandType::LowPass, 0.25),
    )
    .unwrap();
    assert_abs_diff_eq!(gaussian[[32, 40]], (-0.5f64).exp(), epsilon = 1e-12);
}

#[test]
fn 해상도_독립성_테스트() {
    let spec = FilterSpec::new(FilterFamily::Gaussian, BandType::HighPass, 0.2);
    let small = build_filter_mask((32, 32), &spec).unwrap();
    let large = build_filter_mask((128, 128), &spec).unwrap();
    // 둘 다 정규화 거리 0.5 지점
    assert_abs_diff_eq!(small[[16, 24]], large[[64, 96]], epsilon = 1e-12);
}

#[test]
fn 고역통과_보수_테스트() {
    for family in FAMILIES {
        let low = build_filter_mask((24, 40), &FilterSpec::new(family, BandType::LowPass, 0.35))
            .unwrap();
        let high = build_filter_mask((24, 40), &FilterSpec::new(family, BandType::HighPass, 0.35))
            .unwrap();
        assert_eq!(high, low.mapv(|h| 1.0 - h));
    }
}

#[test]
fn 대역통과_대역저지_합_테스트() {
    let cutoffs = [Cutoff::Radius(0.3), Cutoff::Band { inner: 0.05, outer: 0.6 }];
    for family in FAMILIES {
        for cutoff in cutoffs {
            let pass = build_filter_mask(
                (33, 48),
                &FilterSpec::new(family, BandType::BandPass, cutoff),
            )
            .unwrap();
            let stop = build_filter_mask(
                (33, 48),
                &FilterSpec::new(family, BandType::BandStop, cutoff),
            )
            .unwrap();
            for (p, s) in pass.iter().zip(stop.iter()) {
                assert_abs_diff_eq!(p + s, 1.0, epsilon = 1e-12);
            }
        }
    }
    println!("✅ 대역통과 + 대역저지 = 1 테스트 통과");
}

#[test]
fn 마스크_값_범위_테스트() {
    for family in FAMILIES {
        for band in BANDS {
            let spec = FilterSpec::new(family, band, 0.2).with_order(2);
            let mask = build_filter_mask((31, 50), &spec).unwrap();
            assert_eq!(mask.dim(), (31, 50));
            assert!(
                mask.iter().all(|&v| (-1e-12..=1.0 + 1e-12).contains(&v)),
                "{family} {band} 마스크가 [0,1]을 벗어남"
            );
        }
    }
}
