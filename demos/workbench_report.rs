//! 합성 이미지로 스펙트럼 필터와 블록 DCT 압축을 돌려 JSON 보고서를 출력한다.
//!
//! ```text
//! cargo run --example workbench_report -- spectrum --pattern noise --filter gaussian:highpass:0.3
//! cargo run --example workbench_report -- compress --pattern checkerboard --quality 0.1,0.5,2.0
//! ```

use anyhow::{Context, Result};
use clap::{Arg, Command};
use dip_workbench::core::image::{channel_statistics, extract_channels};
use dip_workbench::{
    BlockTransformCodec, ColorSpace, DisplayImage, FilterSpec, SpectralEngine, WorkbenchConfig,
};
use ndarray::{Array2, Array3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use std::process;

fn main() {
    env_logger::init();

    let pattern_arg = || {
        Arg::new("pattern")
            .long("pattern")
            .short('p')
            .value_name("PATTERN")
            .help("합성 패턴 (checkerboard | gradient | noise)")
            .default_value("gradient")
    };
    let size_arg = || {
        Arg::new("size")
            .long("size")
            .short('s')
            .value_name("PIXELS")
            .help("이미지 한 변 크기")
            .value_parser(clap::value_parser!(usize))
            .default_value("64")
    };
    let config_arg = || {
        Arg::new("config")
            .long("config")
            .short('c')
            .value_name("FILE")
            .help("워크벤치 JSON 설정 파일")
    };

    let matches = Command::new("DIP Workbench")
        .version("0.1.0")
        .about("주파수 영역 필터와 블록 DCT 압축 보고서")
        .subcommand(
            Command::new("spectrum")
                .about("스펙트럼 통계, 반경 프로파일, 필터 결과")
                .arg(pattern_arg())
                .arg(size_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .short('f')
                        .value_name("FAMILY:BAND:CUTOFF[:ORDER]")
                        .help("필터 지정 (예: butterworth:lowpass:0.2:4, ideal:bandpass:0.1-0.4)"),
                ),
        )
        .subcommand(
            Command::new("compress")
                .about("품질 계수별 블록 DCT 압축 비교")
                .arg(pattern_arg())
                .arg(size_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("quality")
                        .long("quality")
                        .short('q')
                        .value_name("FACTORS")
                        .value_delimiter(',')
                        .value_parser(clap::value_parser!(f64))
                        .help("비교할 품질 계수 목록 (쉼표 구분)"),
                ),
        )
        .subcommand(
            Command::new("channels")
                .about("RGB / HSV / CMY 채널 통계")
                .arg(pattern_arg())
                .arg(size_arg()),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("spectrum", sub_matches)) => handle_spectrum(sub_matches),
        Some(("compress", sub_matches)) => handle_compress(sub_matches),
        Some(("channels", sub_matches)) => handle_channels(sub_matches),
        _ => {
            println!("❌ 명령을 지정해주세요. --help를 참조하세요.");
            process::exit(1);
        }
    };

    match result {
        Ok(report) => println!("{report:#}"),
        Err(e) => {
            eprintln!("❌ 오류: {e:#}");
            process::exit(1);
        }
    }
}

fn load_config(matches: &clap::ArgMatches) -> Result<WorkbenchConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("설정 파일을 읽을 수 없음: {path}"))?;
            WorkbenchConfig::from_json_str(&text)
                .with_context(|| format!("설정 파일 파싱 실패: {path}"))
        }
        None => Ok(WorkbenchConfig::default()),
    }
}

fn synthesize(matches: &clap::ArgMatches) -> Result<DisplayImage> {
    let pattern = matches
        .get_one::<String>("pattern")
        .map(String::as_str)
        .unwrap_or("gradient");
    let size = matches.get_one::<usize>("size").copied().unwrap_or(64);
    if size == 0 {
        anyhow::bail!("이미지 크기는 1 이상이어야 함");
    }

    let image = match pattern {
        "checkerboard" => Array2::from_shape_fn((size, size), |(r, c)| {
            if (r / 4 + c / 4) % 2 == 0 { 255u8 } else { 0 }
        }),
        "gradient" => Array2::from_shape_fn((size, size), |(r, c)| {
            ((r + c) * 255 / (2 * (size - 1)).max(1)) as u8
        }),
        "noise" => {
            let mut rng = StdRng::seed_from_u64(42);
            let rgb = Array3::from_shape_fn((size, size, 3), |_| rng.gen_range(0..=255u8));
            return Ok(DisplayImage::Rgb(rgb));
        }
        other => anyhow::bail!("알 수 없는 패턴: {other}"),
    };
    Ok(DisplayImage::Gray(image))
}

/// "family:band:cutoff[:order]", cutoff는 "0.2" 또는 "0.1-0.4"
fn parse_filter_arg(text: &str) -> Result<FilterSpec> {
    let parts: Vec<&str> = text.split(':').collect();
    let (family, band, cutoff) = match parts.as_slice() {
        [family, band, cutoff] | [family, band, cutoff, _] => (*family, *band, *cutoff),
        _ => anyhow::bail!("형식은 family:band:cutoff[:order]"),
    };
    let order = match parts.get(3) {
        Some(order) => order.parse::<u32>()?,
        None => 2,
    };

    let spec = match cutoff.split_once('-') {
        Some((inner, outer)) => {
            FilterSpec::parse(family, band, (inner.parse::<f64>()?, outer.parse::<f64>()?), order)?
        }
        None => FilterSpec::parse(family, band, cutoff.parse::<f64>()?, order)?,
    };
    Ok(spec)
}

fn handle_spectrum(matches: &clap::ArgMatches) -> Result<serde_json::Value> {
    let config = load_config(matches)?;
    let image = synthesize(matches)?.to_normalized_gray()?;
    let engine = SpectralEngine::from_config(&config.spectral);

    let spec = match matches.get_one::<String>("filter") {
        Some(text) => parse_filter_arg(text).with_context(|| format!("필터 지정 파싱 실패: {text}"))?,
        None => *engine.default_filter(),
    };

    let statistics = engine.spectrum_statistics(&image)?;
    let analysis = engine.transform_to_spectrum(&image)?;
    let radial = engine.radial_profile(&analysis.magnitude)?;
    let filtered = engine.apply_frequency_filter(&image, &spec)?;

    let pass_ratio = filtered.mask.mean().unwrap_or(0.0);
    Ok(json!({
        "shape": analysis.shape(),
        "statistics": statistics,
        "radial_profile": radial,
        "filter": spec,
        "mask_mean": pass_ratio,
        "filtered_mean": filtered.image.mean().unwrap_or(0.0),
    }))
}

fn handle_compress(matches: &clap::ArgMatches) -> Result<serde_json::Value> {
    let config = load_config(matches)?;
    let image = synthesize(matches)?.to_normalized_gray()?;
    let codec = BlockTransformCodec::from_config(&config.codec)?;

    let factors: Vec<f64> = match matches.get_many::<f64>("quality") {
        Some(values) => values.copied().collect(),
        None => config.codec.comparison_factors.clone(),
    };

    let comparisons = codec.compare_qualities(&image, &factors)?;
    let center = codec.analyze_block(&image, image.nrows() / 2, image.ncols() / 2)?;

    Ok(json!({
        "block_size": codec.block_size(),
        "comparisons": comparisons.iter().map(|c| c.result.metrics).collect::<Vec<_>>(),
        "center_block": {
            "position": center.position,
            "dc": center.dc,
            "ac_energy": center.ac_energy,
        },
    }))
}

fn handle_channels(matches: &clap::ArgMatches) -> Result<serde_json::Value> {
    let rgb = match synthesize(matches)? {
        DisplayImage::Rgb(rgb) => rgb,
        DisplayImage::Gray(gray) => {
            let (rows, cols) = gray.dim();
            Array3::from_shape_fn((rows, cols, 3), |(r, c, _)| gray[[r, c]])
        }
    };

    let mut report = serde_json::Map::new();
    for space in [ColorSpace::Rgb, ColorSpace::Hsv, ColorSpace::Cmy] {
        let mut entries = serde_json::Map::new();
        for channel in extract_channels(&rgb, space)? {
            entries.insert(
                channel.name.to_string(),
                serde_json::to_value(channel_statistics(&channel.data)?)?,
            );
        }
        report.insert(format!("{space:?}"), serde_json::Value::Object(entries));
    }
    Ok(serde_json::Value::Object(report))
}
