//! # 이미지 변환 및 채널 분석
//!
//! 표시용 8비트 이미지와 엔진 입력(정규화 단일 채널) 사이의 변환, 색 공간 채널 분석

pub mod convert;
pub mod channels;

#[cfg(test)]
mod __tests__;

pub use convert::{denormalize, normalize, rgb_to_gray, spectrum_display, DisplayImage};
pub use channels::{channel_statistics, extract_channels, histogram, Channel, ChannelStatistics, ColorSpace};
