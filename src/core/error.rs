//! 워크벤치 전역 에러 타입

use std::fmt;

/// 스펙트럼 엔진/블록 코덱/이미지 변환에서 발생하는 에러
#[derive(Debug, Clone, PartialEq)]
pub enum WorkbenchError {
    /// 필터 계열/대역 이름을 인식할 수 없거나 차단 반경이 잘못됨
    InvalidFilterSpec(String),
    /// 두 배열의 형태가 서로 다름
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// 품질 계수는 유한한 양수여야 함
    InvalidQualityFactor(f64),
    /// 블록 크기 0
    InvalidBlockSize(usize),
    /// 행 또는 열이 0인 이미지
    EmptyImage,
    /// RGB 버퍼의 채널 축 길이가 3이 아님
    InvalidChannelLayout(usize),
}

impl fmt::Display for WorkbenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilterSpec(msg) => write!(f, "invalid filter spec: {msg}"),
            Self::ShapeMismatch { expected, found } => write!(
                f,
                "shape mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Self::InvalidQualityFactor(q) => {
                write!(f, "quality factor must be finite and > 0, got {q}")
            }
            Self::InvalidBlockSize(n) => write!(f, "invalid block size: {n}"),
            Self::EmptyImage => write!(f, "image has a zero-length dimension"),
            Self::InvalidChannelLayout(c) => {
                write!(f, "expected 3 color channels, found {c}")
            }
        }
    }
}

impl std::error::Error for WorkbenchError {}

pub type Result<T> = std::result::Result<T, WorkbenchError>;

/// 두 2D 형태가 같은지 확인
pub(crate) fn ensure_same_shape(expected: (usize, usize), found: (usize, usize)) -> Result<()> {
    if expected != found {
        return Err(WorkbenchError::ShapeMismatch { expected, found });
    }
    Ok(())
}

/// 비어 있지 않은 이미지인지 확인
pub(crate) fn ensure_non_empty(shape: (usize, usize)) -> Result<()> {
    if shape.0 == 0 || shape.1 == 0 {
        return Err(WorkbenchError::EmptyImage);
    }
    Ok(())
}
