//! 스펙트럼 엔진: 2D 푸리에 파이프라인
//!
//! 변환 결과는 인스턴스에 보관하지 않고 [`SpectrumAnalysis`]로 돌려준다.
//! 연쇄 호출(통계, 크기/위상 재구성)은 호출자가 이 값을 넘겨서 수행한다.

use log::debug;
use ndarray::{Array1, Array2, Zip};
use ndarray_stats::QuantileExt;
use rustfft::num_complex::Complex;
use serde::{Deserialize, Serialize};

use super::fft2d::{fft2, fftshift, ifft2, ifftshift, ComplexGrid};
use super::filter::{build_filter_mask, FilterSpec, FrequencyMask};
use crate::core::error::{ensure_non_empty, ensure_same_shape, Result, WorkbenchError};
use crate::core::systems::config::SpectralConfig;

/// 한 번의 순방향 변환 결과 묶음
#[derive(Debug, Clone)]
pub struct SpectrumAnalysis {
    /// shift 하지 않은 원시 FFT
    pub raw: ComplexGrid,
    /// 영주파수가 (⌊H/2⌋, ⌊W/2⌋)에 오도록 이동한 스펙트럼
    pub centered: ComplexGrid,
    pub magnitude: Array2<f64>,
    /// ln(1 + |F|), 표시용
    pub log_magnitude: Array2<f64>,
    /// (-π, π]
    pub phase: Array2<f64>,
}

impl SpectrumAnalysis {
    pub fn shape(&self) -> (usize, usize) {
        self.centered.dim()
    }
}

/// 주파수 필터 적용 결과
#[derive(Debug, Clone)]
pub struct FilterOutput {
    /// [0,1]로 잘린 공간 영역 결과
    pub image: Array2<f64>,
    pub mask: FrequencyMask,
    /// 마스크를 곱한 (중심 이동된) 스펙트럼
    pub spectrum: ComplexGrid,
}

/// 반경별 평균 크기 프로파일
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadialProfile {
    pub radii: Vec<usize>,
    pub profile: Array1<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumStatistics {
    pub mag_min: f64,
    pub mag_max: f64,
    pub mag_mean: f64,
    pub mag_std: f64,
    pub phase_min: f64,
    pub phase_max: f64,
    pub phase_mean: f64,
    pub phase_std: f64,
}

/// 2D 푸리에 변환 / 주파수 필터 / 재구성 엔진
///
/// 내부 가변 상태가 없으므로 여러 스레드에서 공유해도 안전하다.
#[derive(Debug, Clone, Default)]
pub struct SpectralEngine {
    config: SpectralConfig,
}

impl SpectralEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SpectralConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn default_filter(&self) -> &FilterSpec {
        &self.config.filter
    }

    /// 정규화된 단일 채널 이미지 → 중심 이동 스펙트럼과 크기/로그크기/위상
    pub fn transform_to_spectrum(&self, image: &Array2<f64>) -> Result<SpectrumAnalysis> {
        ensure_non_empty(image.dim())?;

        let raw = fft2(image);
        let centered = fftshift(&raw);
        let magnitude = centered.mapv(|c| c.norm());
        let log_magnitude = magnitude.mapv(f64::ln_1p);
        let phase = centered.mapv(|c| c.arg());

        debug!("스펙트럼 변환 완료: {:?}", image.dim());

        Ok(SpectrumAnalysis {
            raw,
            centered,
            magnitude,
            log_magnitude,
            phase,
        })
    }

    pub fn build_filter_mask(&self, shape: (usize, usize), spec: &FilterSpec) -> Result<FrequencyMask> {
        build_filter_mask(shape, spec)
    }

    /// shift → 마스크 곱 → 역 shift → 역변환 → 실수부 → [0,1] 클리핑
    pub fn apply_frequency_filter(&self, image: &Array2<f64>, spec: &FilterSpec) -> Result<FilterOutput> {
        ensure_non_empty(image.dim())?;
        let mask = build_filter_mask(image.dim(), spec)?;

        let centered = fftshift(&fft2(image));
        let spectrum = Zip::from(&centered)
            .and(&mask)
            .map_collect(|&c, &m| c * m);
        let filtered = inverse_centered(&spectrum);

        debug!(
            "주파수 필터 적용: {} {} {:?} (order {}) on {:?}",
            spec.family,
            spec.band,
            spec.cutoff,
            spec.order,
            image.dim()
        );

        Ok(FilterOutput {
            image: filtered,
            mask,
            spectrum,
        })
    }

    /// 설정의 기본 필터로 적용
    pub fn apply_default_filter(&self, image: &Array2<f64>) -> Result<FilterOutput> {
        self.apply_frequency_filter(image, &self.config.filter)
    }

    /// magnitude·e^(i·phase) → 역 shift → 역변환 → 실수부 → [0,1] 클리핑
    pub fn reconstruct_from_magnitude_phase(
        &self,
        magnitude: &Array2<f64>,
        phase: &Array2<f64>,
    ) -> Result<Array2<f64>> {
        ensure_same_shape(magnitude.dim(), phase.dim())?;
        ensure_non_empty(magnitude.dim())?;

        let centered = Zip::from(magnitude)
            .and(phase)
            .map_collect(|&m, &p| Complex::from_polar(m, p));
        Ok(inverse_centered(&centered))
    }

    /// 정수 반경 r = 0..=⌈√(crow²+ccol²)⌉ 별 평균 크기.
    /// 해당 픽셀이 없는 반경은 0
    pub fn radial_profile(&self, magnitude: &Array2<f64>) -> Result<RadialProfile> {
        let (rows, cols) = magnitude.dim();
        ensure_non_empty((rows, cols))?;

        let (crow, ccol) = (rows / 2, cols / 2);
        let max_radius = ((crow * crow + ccol * ccol) as f64).sqrt().ceil() as usize;

        let mut sums = vec![0.0f64; max_radius + 1];
        let mut counts = vec![0usize; max_radius + 1];
        for ((r, c), &value) in magnitude.indexed_iter() {
            let dy = r as f64 - crow as f64;
            let dx = c as f64 - ccol as f64;
            let bin = (dy * dy + dx * dx).sqrt().round() as usize;
            if bin <= max_radius {
                sums[bin] += value;
                counts[bin] += 1;
            }
        }

        let profile = sums
            .iter()
            .zip(&counts)
            .map(|(&sum, &count)| if count > 0 { sum / count as f64 } else { 0.0 })
            .collect::<Array1<f64>>();

        Ok(RadialProfile {
            radii: (0..=max_radius).collect(),
            profile,
        })
    }

    /// 크기/위상 스펙트럼의 요약 통계 (표준편차는 모집단 기준)
    pub fn spectrum_statistics(&self, image: &Array2<f64>) -> Result<SpectrumStatistics> {
        let analysis = self.transform_to_spectrum(image)?;
        let (mag_min, mag_max, mag_mean, mag_std) = summarize(&analysis.magnitude)?;
        let (phase_min, phase_max, phase_mean, phase_std) = summarize(&analysis.phase)?;

        Ok(SpectrumStatistics {
            mag_min,
            mag_max,
            mag_mean,
            mag_std,
            phase_min,
            phase_max,
            phase_mean,
            phase_std,
        })
    }
}

fn inverse_centered(centered: &ComplexGrid) -> Array2<f64> {
    ifft2(&ifftshift(centered)).mapv(|c| c.re.clamp(0.0, 1.0))
}

fn summarize(grid: &Array2<f64>) -> Result<(f64, f64, f64, f64)> {
    let min = *grid.min().map_err(|_| WorkbenchError::EmptyImage)?;
    let max = *grid.max().map_err(|_| WorkbenchError::EmptyImage)?;
    let mean = grid.mean().ok_or(WorkbenchError::EmptyImage)?;
    Ok((min, max, mean, grid.std(0.0)))
}
