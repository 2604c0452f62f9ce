//! # 블록 DCT 변환 부호화
//!
//! 직교 DCT-II 행렬, JPEG 양자화 테이블, 블록 압축기, 품질 지표

pub mod quantization;
pub mod metrics;
pub mod codec;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use quantization::{base_quant_table, quantize, BASE_BLOCK_SIZE, JPEG_LUMINANCE_TABLE};
pub use metrics::{mse, psnr, ssim, QualityMetrics, SSIM_C1, SSIM_C2};
pub use codec::{
    dct_matrix, pad_to_multiple, BlockInfo, BlockTransformCodec, CompressionResult, DctState,
    PaddedImage, QualityComparison, LEVEL_SHIFT,
};
