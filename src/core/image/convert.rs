//! 표시용 8비트 이미지 ↔ 엔진용 정규화 단일 채널 변환

use ndarray::{Array2, Array3};
use ndarray_stats::QuantileExt;

use crate::core::error::{Result, WorkbenchError};

/// 화면 표시 형식의 이미지
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayImage {
    Gray(Array2<u8>),
    /// (rows, cols, 3) RGB
    Rgb(Array3<u8>),
}

impl DisplayImage {
    pub fn dim(&self) -> (usize, usize) {
        match self {
            DisplayImage::Gray(img) => img.dim(),
            DisplayImage::Rgb(img) => {
                let (rows, cols, _) = img.dim();
                (rows, cols)
            }
        }
    }

    /// 그레이스케일 변환 후 [0,1] 정규화
    pub fn to_normalized_gray(&self) -> Result<Array2<f64>> {
        match self {
            DisplayImage::Gray(img) => Ok(normalize(img)),
            DisplayImage::Rgb(img) => Ok(normalize(&rgb_to_gray(img)?)),
        }
    }
}

pub(crate) fn ensure_rgb(rgb: &Array3<u8>) -> Result<()> {
    let channels = rgb.dim().2;
    if channels != 3 {
        return Err(WorkbenchError::InvalidChannelLayout(channels));
    }
    Ok(())
}

/// Y = 0.299R + 0.587G + 0.114B (14비트 고정소수점, 반올림)
pub fn rgb_to_gray(rgb: &Array3<u8>) -> Result<Array2<u8>> {
    ensure_rgb(rgb)?;
    let (rows, cols, _) = rgb.dim();

    Ok(Array2::from_shape_fn((rows, cols), |(r, c)| {
        let red = rgb[[r, c, 0]] as u32;
        let green = rgb[[r, c, 1]] as u32;
        let blue = rgb[[r, c, 2]] as u32;
        ((red * 4899 + green * 9617 + blue * 1868 + (1 << 13)) >> 14) as u8
    }))
}

/// [0,255] → [0,1]
pub fn normalize(image: &Array2<u8>) -> Array2<f64> {
    image.mapv(|v| v as f64 / 255.0)
}

/// [0,1] → [0,255]. 범위 밖 값은 먼저 잘라내고 소수부는 버림
pub fn denormalize(image: &Array2<f64>) -> Array2<u8> {
    image.mapv(|v| (v.clamp(0.0, 1.0) * 255.0) as u8)
}

/// 로그 크기 스펙트럼을 최대값으로 나눠 [0,1] 표시용으로 변환
pub fn spectrum_display(log_magnitude: &Array2<f64>) -> Array2<f64> {
    match log_magnitude.max() {
        Ok(&max) if max > 0.0 => log_magnitude.mapv(|v| v / max),
        _ => Array2::zeros(log_magnitude.dim()),
    }
}
