//! # 워크벤치 핵심 모듈
//!
//! 주파수 영역 엔진과 블록 DCT 코덱, 그리고 두 엔진이 공유하는 에러/설정/이미지 변환

pub mod error;
pub mod systems;
pub mod image;
pub mod spectral;
pub mod dct;

// 주요 타입들 재수출
pub use error::{Result, WorkbenchError};
pub use systems::*;
pub use image::*;
pub use spectral::*;
pub use dct::*;
