//! # 워크벤치 구성 설정
//!
//! 스펙트럼 엔진과 블록 코덱의 기본 파라미터. 모든 필드에 기본값이 있으므로
//! JSON으로 일부만 덮어쓸 수 있다.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WorkbenchError};
use crate::core::spectral::FilterSpec;

/// 비교 실행에 쓰는 기본 품질 계수 목록
pub const DEFAULT_COMPARISON_FACTORS: [f64; 5] = [0.1, 0.2, 0.5, 1.0, 2.0];

/// 전체 구성
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    pub spectral: SpectralConfig,
    pub codec: CodecConfig,
}

/// 스펙트럼 엔진 설정
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectralConfig {
    /// 필터를 지정하지 않았을 때 쓰는 필터 (butterworth / lowpass / 0.2 / 2차)
    pub filter: FilterSpec,
}

/// 블록 DCT 코덱 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// 블록 한 변의 길이
    pub block_size: usize,
    /// 기본 품질 계수 (클수록 양자화 간격이 커짐)
    pub quality_factor: f64,
    /// compare_qualities 기본 목록
    pub comparison_factors: Vec<f64>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            block_size: 8,
            quality_factor: 0.5,
            comparison_factors: DEFAULT_COMPARISON_FACTORS.to_vec(),
        }
    }
}

impl CodecConfig {
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(WorkbenchError::InvalidBlockSize(self.block_size));
        }
        validate_quality_factor(self.quality_factor)?;
        for &q in &self.comparison_factors {
            validate_quality_factor(q)?;
        }
        Ok(())
    }
}

impl WorkbenchConfig {
    /// JSON 문자열에서 로드. 빠진 필드는 기본값
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.spectral.filter.validate()?;
        self.codec.validate()
    }
}

pub(crate) fn validate_quality_factor(q: f64) -> Result<()> {
    if !q.is_finite() || q <= 0.0 {
        return Err(WorkbenchError::InvalidQualityFactor(q));
    }
    Ok(())
}
