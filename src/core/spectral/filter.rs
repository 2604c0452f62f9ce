//! 주파수 영역 필터 마스크 합성
//!
//! 세 가지 필터 계열(ideal / gaussian / butterworth)의 저역통과 응답 H(d)를 하나의
//! 헬퍼로 만들고, 네 가지 대역 유형은 모두 이 응답의 조합으로 유도한다.
//! 차단 반경은 중심에서 가장 가까운 가장자리까지 거리의 비율이므로 해상도와 무관하다.

use std::fmt;
use std::str::FromStr;

use log::warn;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::core::error::{ensure_non_empty, Result, WorkbenchError};

/// butterworth 차단 반경이 0일 때의 0 나눗셈 방지
pub const BUTTERWORTH_EPSILON: f64 = 1e-8;

/// 주파수 마스크: 스펙트럼과 같은 형태의 [0,1] 실수 격자
pub type FrequencyMask = Array2<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterFamily {
    Ideal,       // 계단형 차단, 재구성 시 링잉 발생
    Gaussian,
    Butterworth, // 차단 반경 = 반전력 반경
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandType {
    LowPass,
    HighPass,
    BandPass,
    BandStop,
}

/// 차단 반경. 대역 유형에는 (inner, outer) 쌍을 줄 수 있음
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cutoff {
    Radius(f64),
    Band { inner: f64, outer: f64 },
}

impl Cutoff {
    /// 대역 필터용 (inner, outer) 반경. 단일 값이면 0.5배 / 1.5배로 분할
    pub fn band_radii(&self) -> (f64, f64) {
        match *self {
            Cutoff::Radius(c) => (c * 0.5, c * 1.5),
            Cutoff::Band { inner, outer } => (inner, outer),
        }
    }
}

impl From<f64> for Cutoff {
    fn from(radius: f64) -> Self {
        Cutoff::Radius(radius)
    }
}

impl From<(f64, f64)> for Cutoff {
    fn from((inner, outer): (f64, f64)) -> Self {
        Cutoff::Band { inner, outer }
    }
}

/// 주파수 마스크 설정
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub family: FilterFamily,
    pub band: BandType,
    pub cutoff: Cutoff,
    /// butterworth 전용 차수
    pub order: u32,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            family: FilterFamily::Butterworth,
            band: BandType::LowPass,
            cutoff: Cutoff::Radius(0.2),
            order: 2,
        }
    }
}

impl FilterSpec {
    pub fn new(family: FilterFamily, band: BandType, cutoff: impl Into<Cutoff>) -> Self {
        Self {
            family,
            band,
            cutoff: cutoff.into(),
            order: 2,
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// 문자열 이름으로부터 설정 생성 (UI 콤보박스 값 등)
    pub fn parse(family: &str, band: &str, cutoff: impl Into<Cutoff>, order: u32) -> Result<Self> {
        let spec = Self {
            family: family.parse()?,
            band: band.parse()?,
            cutoff: cutoff.into(),
            order,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if self.family == FilterFamily::Butterworth && self.order == 0 {
            return Err(WorkbenchError::InvalidFilterSpec(
                "butterworth order must be at least 1".to_string(),
            ));
        }

        match (self.band, self.cutoff) {
            (BandType::LowPass | BandType::HighPass, Cutoff::Radius(c)) => check_radius(c, self.family),
            (BandType::LowPass | BandType::HighPass, Cutoff::Band { .. }) => {
                Err(WorkbenchError::InvalidFilterSpec(format!(
                    "{} takes a single cutoff radius, not an (inner, outer) pair",
                    self.band
                )))
            }
            (BandType::BandPass | BandType::BandStop, cutoff) => {
                let (inner, outer) = cutoff.band_radii();
                check_radius(inner, self.family)?;
                check_radius(outer, self.family)?;
                if inner >= outer {
                    return Err(WorkbenchError::InvalidFilterSpec(format!(
                        "inner cutoff {inner} must be smaller than outer cutoff {outer}"
                    )));
                }
                Ok(())
            }
        }
    }
}

/// 차단 반경 0은 gaussian만 거부 (중심에서 0/0).
/// butterworth는 [`BUTTERWORTH_EPSILON`]으로, ideal은 d <= 0 비교로 처리된다
fn check_radius(c: f64, family: FilterFamily) -> Result<()> {
    if !c.is_finite() || c < 0.0 {
        return Err(WorkbenchError::InvalidFilterSpec(format!(
            "cutoff must be a finite non-negative radius, got {c}"
        )));
    }
    if c == 0.0 && family == FilterFamily::Gaussian {
        return Err(WorkbenchError::InvalidFilterSpec(
            "gaussian cutoff must be positive".to_string(),
        ));
    }
    Ok(())
}

impl FromStr for FilterFamily {
    type Err = WorkbenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ideal" => Ok(FilterFamily::Ideal),
            "gaussian" | "gaussiano" => Ok(FilterFamily::Gaussian),
            "butterworth" => Ok(FilterFamily::Butterworth),
            other => Err(WorkbenchError::InvalidFilterSpec(format!(
                "unknown filter family '{other}'"
            ))),
        }
    }
}

impl FromStr for BandType {
    type Err = WorkbenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowpass" => Ok(BandType::LowPass),
            "highpass" => Ok(BandType::HighPass),
            "bandpass" => Ok(BandType::BandPass),
            "bandstop" => Ok(BandType::BandStop),
            other => Err(WorkbenchError::InvalidFilterSpec(format!(
                "unknown band type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for FilterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterFamily::Ideal => "ideal",
            FilterFamily::Gaussian => "gaussian",
            FilterFamily::Butterworth => "butterworth",
        };
        f.write_str(name)
    }
}

impl fmt::Display for BandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BandType::LowPass => "lowpass",
            BandType::HighPass => "highpass",
            BandType::BandPass => "bandpass",
            BandType::BandStop => "bandstop",
        };
        f.write_str(name)
    }
}

/// 중심으로부터의 유클리드 거리 / min(⌊H/2⌋, ⌊W/2⌋)
pub fn normalized_distance_grid(shape: (usize, usize)) -> Array2<f64> {
    let (rows, cols) = shape;
    let (crow, ccol) = (rows / 2, cols / 2);
    let half = crow.min(ccol);
    if half == 0 {
        warn!("{rows}x{cols} 스펙트럼은 반경 정규화 기준이 0이므로 1을 사용");
    }
    let radius = half.max(1) as f64;

    Array2::from_shape_fn(shape, |(r, c)| {
        let dy = r as f64 - crow as f64;
        let dx = c as f64 - ccol as f64;
        (dy * dy + dx * dx).sqrt() / radius
    })
}

/// 계열별 저역통과 기본 응답 H(d)
pub fn lowpass_response(
    distance: &Array2<f64>,
    family: FilterFamily,
    cutoff: f64,
    order: u32,
) -> Array2<f64> {
    match family {
        FilterFamily::Ideal => distance.mapv(|d| if d <= cutoff { 1.0 } else { 0.0 }),
        FilterFamily::Gaussian => {
            let denom = 2.0 * cutoff * cutoff;
            distance.mapv(|d| (-(d * d) / denom).exp())
        }
        FilterFamily::Butterworth => {
            let radius = cutoff + BUTTERWORTH_EPSILON;
            let exponent = 2 * order as i32;
            distance.mapv(|d| 1.0 / (1.0 + (d / radius).powi(exponent)))
        }
    }
}

/// FilterSpec으로부터 마스크 생성
pub fn build_filter_mask(shape: (usize, usize), spec: &FilterSpec) -> Result<FrequencyMask> {
    ensure_non_empty(shape)?;
    spec.validate()?;

    let distance = normalized_distance_grid(shape);

    let mask = match (spec.band, spec.cutoff) {
        (BandType::LowPass, Cutoff::Radius(c)) => {
            lowpass_response(&distance, spec.family, c, spec.order)
        }
        (BandType::HighPass, Cutoff::Radius(c)) => {
            lowpass_response(&distance, spec.family, c, spec.order).mapv(|h| 1.0 - h)
        }
        (BandType::BandPass | BandType::BandStop, cutoff) => {
            let (inner, outer) = cutoff.band_radii();
            let h_inner = lowpass_response(&distance, spec.family, inner, spec.order);
            let h_outer = lowpass_response(&distance, spec.family, outer, spec.order);
            let pass = h_outer - h_inner;
            if spec.band == BandType::BandStop {
                pass.mapv(|b| 1.0 - b)
            } else {
                pass
            }
        }
        (BandType::LowPass | BandType::HighPass, Cutoff::Band { .. }) => {
            return Err(WorkbenchError::InvalidFilterSpec(format!(
                "{} takes a single cutoff radius",
                spec.band
            )));
        }
    };

    Ok(mask)
}
