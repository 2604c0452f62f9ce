//! # 블록 DCT 모듈 테스트
//!
//! 양자화 테이블, 품질 지표, 블록 코덱 단위테스트

pub mod quantization_test;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 고정 시드 균등 잡음 이미지 [0,1]
pub(crate) fn noise_image(rows: usize, cols: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((rows, cols), |_| rng.gen::<f64>())
}

/// 2×2 타일이 번갈아 0/1인 체커보드
pub(crate) fn checkerboard(rows: usize, cols: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, cols), |(r, c)| ((r / 2 + c / 2) % 2) as f64)
}
