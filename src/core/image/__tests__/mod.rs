//! # 이미지 변환 모듈 테스트


use ndarray::Array3;

/// (rows, cols) 크기의 단색 RGB 이미지
pub(crate) fn solid_rgb(rows: usize, cols: usize, rgb: [u8; 3]) -> Array3<u8> {
    Array3::from_shape_fn((rows, cols, 3), |(_, _, ch)| rgb[ch])
}
