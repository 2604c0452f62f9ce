//! # 주파수 영역 모듈 테스트
//!
//! 2D FFT, 필터 마스크, 스펙트럼 엔진 단위테스트

pub mod filter_test;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 고정 시드 균등 잡음 이미지 [0,1]
pub(crate) fn noise_image(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((rows, cols), |_| rng.gen::<f64>())
}

/// 부드러운 사인 패턴 [0,1]
pub(crate) fn wave_image(rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        let x = r as f64 / rows as f64;
        let y = c as f64 / cols as f64;
        (x * 6.28).sin() * (y * 6.28).cos() * 0.4 + 0.5
    })
}
