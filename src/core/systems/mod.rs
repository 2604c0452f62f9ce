//! # 시스템 구성 모듈
//!
//! 엔진/코덱의 기본 파라미터와 JSON 구성 로딩

pub mod config;

// 설정 관련 재수출
pub use config::{CodecConfig, SpectralConfig, WorkbenchConfig, DEFAULT_COMPARISON_FACTORS};

// 테스트 모듈들
#[cfg(test)]
pub mod __tests__;
