//! # 주파수 영역 처리
//!
//! 2D FFT, 중심 이동, 필터 마스크 합성, 크기/위상 재구성, 반경 프로파일

pub mod fft2d;
pub mod filter;
pub mod engine;

#[cfg(test)]
mod __tests__;

pub use fft2d::{fft2, ifft2, fftshift, ifftshift, ComplexGrid};
pub use filter::{
    build_filter_mask, lowpass_response, normalized_distance_grid, BandType, Cutoff,
    FilterFamily, FilterSpec, FrequencyMask, BUTTERWORTH_EPSILON,
};
pub use engine::{FilterOutput, RadialProfile, SpectralEngine, SpectrumAnalysis, SpectrumStatistics};
