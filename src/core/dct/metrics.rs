//! 압축 품질 지표: MSE, PSNR, 전역 SSIM, 계수 유지율

use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_non_empty, ensure_same_shape, Result};

/// SSIM 안정화 상수 C1 = 0.01²
pub const SSIM_C1: f64 = 1e-4;
/// SSIM 안정화 상수 C2 = 0.03²
pub const SSIM_C2: f64 = 9e-4;

/// 압축 1회에 대한 품질 기록
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub mse: f64,
    /// 최대값 1.0 기준 (dB). mse = 0이면 +∞
    pub psnr: f64,
    pub ssim: f64,
    /// 0이 아닌 양자화 계수 / 전체 계수
    pub retention_rate: f64,
    pub quality_factor: f64,
}

impl QualityMetrics {
    pub fn measure(
        original: &Array2<f64>,
        reconstructed: &Array2<f64>,
        non_zero: usize,
        total: usize,
        quality_factor: f64,
    ) -> Result<Self> {
        let mse = mse(original, reconstructed)?;
        Ok(Self {
            mse,
            psnr: psnr(mse),
            ssim: ssim(original, reconstructed)?,
            retention_rate: if total > 0 {
                non_zero as f64 / total as f64
            } else {
                0.0
            },
            quality_factor,
        })
    }
}

/// 평균 제곱 오차
pub fn mse(a: &Array2<f64>, b: &Array2<f64>) -> Result<f64> {
    ensure_same_shape(a.dim(), b.dim())?;
    ensure_non_empty(a.dim())?;

    let sum = Zip::from(a)
        .and(b)
        .fold(0.0, |acc, &x, &y| acc + (x - y) * (x - y));
    Ok(sum / a.len() as f64)
}

/// 10·log10(1 / mse)
pub fn psnr(mse: f64) -> f64 {
    if mse == 0.0 {
        f64::INFINITY
    } else {
        10.0 * (1.0 / mse).log10()
    }
}

/// 전역(단일 윈도우) SSIM.
///
/// 슬라이딩 윈도우가 아니라 이미지 전체의 평균/분산/공분산 하나씩으로 계산한다.
/// 표준 윈도우 SSIM과 값이 다르다.
pub fn ssim(a: &Array2<f64>, b: &Array2<f64>) -> Result<f64> {
    ensure_same_shape(a.dim(), b.dim())?;
    ensure_non_empty(a.dim())?;

    let n = a.len() as f64;
    let mu1 = a.sum() / n;
    let mu2 = b.sum() / n;

    let (var1, var2, cov) = Zip::from(a).and(b).fold(
        (0.0, 0.0, 0.0),
        |(v1, v2, c), &x, &y| {
            let dx = x - mu1;
            let dy = y - mu2;
            (v1 + dx * dx, v2 + dy * dy, c + dx * dy)
        },
    );
    let (var1, var2, cov) = (var1 / n, var2 / n, cov / n);

    let numerator = (2.0 * mu1 * mu2 + SSIM_C1) * (2.0 * cov + SSIM_C2);
    let denominator = (mu1 * mu1 + mu2 * mu2 + SSIM_C1) * (var1 + var2 + SSIM_C2);
    Ok(numerator / denominator)
}
