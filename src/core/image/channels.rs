//! 색 공간별 채널 분리와 채널 히스토그램/통계

use ndarray::{Array2, Array3};
use ndarray_stats::QuantileExt;
use serde::{Deserialize, Serialize};

use super::convert::ensure_rgb;
use crate::core::error::{ensure_non_empty, Result, WorkbenchError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    Rgb,
    Hsv, // 8비트 규약: H ∈ [0,180), S,V ∈ [0,255]
    Cmy,
}

/// 이름이 붙은 단일 채널
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub name: &'static str,
    pub data: Array2<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStatistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: u8,
    pub max: u8,
}

impl ColorSpace {
    pub fn channel_names(&self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["Red", "Green", "Blue"],
            ColorSpace::Hsv => ["H", "S", "V"],
            ColorSpace::Cmy => ["Cyan", "Magenta", "Yellow"],
        }
    }
}

/// RGB 이미지를 지정한 색 공간의 세 채널로 분리
pub fn extract_channels(rgb: &Array3<u8>, space: ColorSpace) -> Result<Vec<Channel>> {
    ensure_rgb(rgb)?;
    let (rows, cols, _) = rgb.dim();

    let converted: Array3<u8> = match space {
        ColorSpace::Rgb => rgb.clone(),
        ColorSpace::Cmy => rgb.mapv(|v| 255 - v),
        ColorSpace::Hsv => {
            let mut hsv = Array3::zeros((rows, cols, 3));
            for r in 0..rows {
                for c in 0..cols {
                    let [h, s, v] = rgb_to_hsv_u8([rgb[[r, c, 0]], rgb[[r, c, 1]], rgb[[r, c, 2]]]);
                    hsv[[r, c, 0]] = h;
                    hsv[[r, c, 1]] = s;
                    hsv[[r, c, 2]] = v;
                }
            }
            hsv
        }
    };

    Ok(space
        .channel_names()
        .iter()
        .enumerate()
        .map(|(idx, &name)| Channel {
            name,
            data: converted.index_axis(ndarray::Axis(2), idx).to_owned(),
        })
        .collect())
}

/// 8비트 RGB → 8비트 HSV
fn rgb_to_hsv_u8(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb.map(f64::from);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max > 0.0 { 255.0 * delta / max } else { 0.0 };

    let hue_degrees = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };
    let hue_degrees = if hue_degrees < 0.0 { hue_degrees + 360.0 } else { hue_degrees };
    let hue = (hue_degrees / 2.0).round() as u16 % 180;

    [hue as u8, saturation.round() as u8, max as u8]
}

/// 256 구간 히스토그램
pub fn histogram(channel: &Array2<u8>) -> Vec<u64> {
    let mut bins = vec![0u64; 256];
    for &v in channel {
        bins[v as usize] += 1;
    }
    bins
}

/// 채널 통계 (표준편차는 모집단 기준, 짝수 개수의 중앙값은 두 중간값의 평균)
pub fn channel_statistics(channel: &Array2<u8>) -> Result<ChannelStatistics> {
    ensure_non_empty(channel.dim())?;

    let values = channel.mapv(f64::from);
    let mean = values.mean().ok_or(WorkbenchError::EmptyImage)?;

    let mut sorted: Vec<u8> = channel.iter().copied().collect();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    };

    Ok(ChannelStatistics {
        mean,
        median,
        std_dev: values.std(0.0),
        min: *channel.min().map_err(|_| WorkbenchError::EmptyImage)?,
        max: *channel.max().map_err(|_| WorkbenchError::EmptyImage)?,
    })
}
