//! JPEG 표준 휘도 양자화 테이블과 양자화 연산

use ndarray::{Array2, Zip};

/// 표준 테이블의 기준 블록 크기
pub const BASE_BLOCK_SIZE: usize = 8;

/// JPEG 표준 휘도 양자화 테이블 (행 우선)
pub const JPEG_LUMINANCE_TABLE: [[f64; BASE_BLOCK_SIZE]; BASE_BLOCK_SIZE] = [
    [16.0, 11.0, 10.0, 16.0, 24.0, 40.0, 51.0, 61.0],
    [12.0, 12.0, 14.0, 19.0, 26.0, 58.0, 60.0, 55.0],
    [14.0, 13.0, 16.0, 24.0, 40.0, 57.0, 69.0, 56.0],
    [14.0, 17.0, 22.0, 29.0, 51.0, 87.0, 80.0, 62.0],
    [18.0, 22.0, 37.0, 56.0, 68.0, 109.0, 103.0, 77.0],
    [24.0, 35.0, 55.0, 64.0, 81.0, 104.0, 113.0, 92.0],
    [49.0, 64.0, 78.0, 87.0, 103.0, 121.0, 120.0, 101.0],
    [72.0, 92.0, 95.0, 98.0, 112.0, 100.0, 103.0, 99.0],
];

/// N×N 기본 양자화 테이블.
/// N ≠ 8이면 표준 테이블을 최근접 이웃으로 리샘플링
pub fn base_quant_table(block_size: usize) -> Array2<f64> {
    let n = block_size.max(1);
    Array2::from_shape_fn((n, n), |(k, l)| {
        JPEG_LUMINANCE_TABLE[k * BASE_BLOCK_SIZE / n][l * BASE_BLOCK_SIZE / n]
    })
}

/// 계수 / 간격 → 가장 가까운 정수(짝수 우선) → × 간격
pub fn quantize(coefficients: &Array2<f64>, steps: &Array2<f64>) -> Array2<f64> {
    Zip::from(coefficients)
        .and(steps)
        .map_collect(|&c, &s| (c / s).round_ties_even() * s)
}
