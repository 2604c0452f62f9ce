//! 디지털 영상처리 워크벤치 라이브러리
//!
//! 정규화된 단일 채널 이미지([0,1] 실수)를 입력으로 받는 두 개의 독립 엔진:
//! - [`SpectralEngine`]: 2D 푸리에 스펙트럼, 주파수 필터, 크기/위상 재구성, 반경 프로파일
//! - [`BlockTransformCodec`]: 8×8 블록 DCT 압축, JPEG 양자화, MSE/PSNR/SSIM 지표

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 에러 및 설정
    Result, WorkbenchError, WorkbenchConfig, SpectralConfig, CodecConfig,
    // 주파수 영역
    SpectralEngine, SpectrumAnalysis, FilterOutput, RadialProfile, SpectrumStatistics,
    FilterSpec, FilterFamily, BandType, Cutoff, FrequencyMask,
    // 블록 DCT
    BlockTransformCodec, DctState, PaddedImage, CompressionResult, QualityComparison,
    BlockInfo, QualityMetrics,
    // 이미지 변환
    DisplayImage, ColorSpace, Channel, ChannelStatistics,
};
