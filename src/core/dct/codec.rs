//! 블록 DCT 코덱
//!
//! 패딩 → N×N 타일 분할 → 0.5 레벨 시프트 → C·B·Cᵀ → 양자화 → Cᵀ·Q·C → 재조립.
//! 변환 행렬과 양자화 테이블은 생성 시 한 번 만들어지고 이후 불변이다.

use std::f64::consts::PI;

use log::{debug, trace};
use ndarray::{s, Array2, ArrayView2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::metrics::QualityMetrics;
use super::quantization::{base_quant_table, quantize};
use crate::core::error::{ensure_non_empty, ensure_same_shape, Result, WorkbenchError};
use crate::core::systems::config::{validate_quality_factor, CodecConfig};

/// 변환 전 빼고 역변환 후 더하는 레벨 시프트
pub const LEVEL_SHIFT: f64 = 0.5;

/// 직교 DCT-II 행렬: C[k][n] = α(k)·cos((2n+1)kπ / 2N)
pub fn dct_matrix(n: usize) -> Array2<f64> {
    let size = n as f64;
    Array2::from_shape_fn((n, n), |(k, i)| {
        let alpha = if k == 0 {
            (1.0 / size).sqrt()
        } else {
            (2.0 / size).sqrt()
        };
        alpha * ((2 * i + 1) as f64 * k as f64 * PI / (2.0 * size)).cos()
    })
}

/// 블록 크기에 대한 고정 변환 상태
#[derive(Debug, Clone)]
pub struct DctState {
    pub block_size: usize,
    pub transform: Array2<f64>,
    /// 품질 계수 1.0일 때의 양자화 간격
    pub quant_table: Array2<f64>,
}

impl DctState {
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(WorkbenchError::InvalidBlockSize(block_size));
        }
        Ok(Self {
            block_size,
            transform: dct_matrix(block_size),
            quant_table: base_quant_table(block_size),
        })
    }
}

/// 패딩된 이미지와 원래 크기
#[derive(Debug, Clone)]
pub struct PaddedImage {
    pub data: Array2<f64>,
    pub original_rows: usize,
    pub original_cols: usize,
}

impl PaddedImage {
    /// 원래 크기로 잘라낸 사본
    pub fn crop(&self) -> Array2<f64> {
        self.data
            .slice(s![..self.original_rows, ..self.original_cols])
            .to_owned()
    }
}

/// 오른쪽/아래쪽을 0으로 채워 각 변을 N의 배수로 만든다
pub fn pad_to_multiple(image: &Array2<f64>, n: usize) -> Result<PaddedImage> {
    if n == 0 {
        return Err(WorkbenchError::InvalidBlockSize(n));
    }
    let (rows, cols) = image.dim();
    let padded_rows = rows.div_ceil(n) * n;
    let padded_cols = cols.div_ceil(n) * n;

    let mut data = Array2::zeros((padded_rows, padded_cols));
    data.slice_mut(s![..rows, ..cols]).assign(image);

    Ok(PaddedImage {
        data,
        original_rows: rows,
        original_cols: cols,
    })
}

/// 압축 결과
#[derive(Debug, Clone)]
pub struct CompressionResult {
    /// 원래 크기, [0,1] 클리핑
    pub reconstructed: Array2<f64>,
    pub metrics: QualityMetrics,
}

/// 품질 계수 하나에 대한 비교 항목
#[derive(Debug, Clone)]
pub struct QualityComparison {
    pub quality_factor: f64,
    pub result: CompressionResult,
}

/// 단일 블록 분석 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockInfo {
    /// 클램프된 좌상단 위치 (패딩 이미지 기준)
    pub position: (usize, usize),
    /// 레벨 시프트 전 원본 타일
    pub block: Array2<f64>,
    pub coefficients: Array2<f64>,
    pub dc: f64,
    /// DC를 제외한 모든 계수의 절대값 합
    pub ac_energy: f64,
}

struct TileOutput {
    row: usize,
    col: usize,
    non_zero: usize,
    pixels: Array2<f64>,
}

/// 블록 기반 DCT 압축기
#[derive(Debug, Clone)]
pub struct BlockTransformCodec {
    state: DctState,
}

impl BlockTransformCodec {
    pub fn new(block_size: usize) -> Result<Self> {
        Ok(Self {
            state: DctState::new(block_size)?,
        })
    }

    pub fn from_config(config: &CodecConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.block_size)
    }

    pub fn block_size(&self) -> usize {
        self.state.block_size
    }

    pub fn state(&self) -> &DctState {
        &self.state
    }

    pub fn transform_matrix(&self) -> &Array2<f64> {
        &self.state.transform
    }

    pub fn quant_table(&self) -> &Array2<f64> {
        &self.state.quant_table
    }

    /// C · block · Cᵀ
    pub fn forward_block(&self, block: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_block(block.dim())?;
        Ok(self.forward(block))
    }

    /// Cᵀ · coefficients · C
    pub fn inverse_block(&self, coefficients: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.check_block(coefficients.dim())?;
        Ok(self.inverse(coefficients))
    }

    fn check_block(&self, dim: (usize, usize)) -> Result<()> {
        let n = self.state.block_size;
        ensure_same_shape((n, n), dim)
    }

    fn forward(&self, block: ArrayView2<f64>) -> Array2<f64> {
        let c = &self.state.transform;
        c.dot(&block).dot(&c.t())
    }

    fn inverse(&self, coefficients: ArrayView2<f64>) -> Array2<f64> {
        let c = &self.state.transform;
        c.t().dot(&coefficients).dot(c)
    }

    pub fn pad_to_multiple(&self, image: &Array2<f64>) -> Result<PaddedImage> {
        pad_to_multiple(image, self.state.block_size)
    }

    /// 블록 DCT 압축 후 재구성 이미지와 품질 지표 반환
    pub fn compress(&self, image: &Array2<f64>, quality_factor: f64) -> Result<CompressionResult> {
        validate_quality_factor(quality_factor)?;
        ensure_non_empty(image.dim())?;

        let n = self.state.block_size;
        let padded = self.pad_to_multiple(image)?;
        let steps = &self.state.quant_table * quality_factor;

        let (rows, cols) = padded.data.dim();
        let tiles_per_row = cols / n;
        let tile_count = (rows / n) * tiles_per_row;

        // --- 타일별 변환/양자화 병렬 처리 ---
        let tiles: Vec<TileOutput> = (0..tile_count)
            .into_par_iter()
            .map(|idx| {
                let row = (idx / tiles_per_row) * n;
                let col = (idx % tiles_per_row) * n;
                let block = padded
                    .data
                    .slice(s![row..row + n, col..col + n])
                    .mapv(|v| v - LEVEL_SHIFT);

                let coefficients = self.forward(block.view());
                let quantized = quantize(&coefficients, &steps);
                let non_zero = quantized.iter().filter(|&&c| c != 0.0).count();
                let pixels = self.inverse(quantized.view()).mapv(|v| v + LEVEL_SHIFT);

                trace!("타일 ({row}, {col}): 0이 아닌 계수 {non_zero}/{}", n * n);
                TileOutput {
                    row,
                    col,
                    non_zero,
                    pixels,
                }
            })
            .collect();

        // --- 재조립 ---
        let mut reconstruction = Array2::<f64>::zeros((rows, cols));
        let mut non_zero = 0usize;
        for tile in &tiles {
            reconstruction
                .slice_mut(s![tile.row..tile.row + n, tile.col..tile.col + n])
                .assign(&tile.pixels);
            non_zero += tile.non_zero;
        }
        let total = tile_count * n * n;

        let reconstructed = reconstruction
            .slice(s![..padded.original_rows, ..padded.original_cols])
            .mapv(|v| v.clamp(0.0, 1.0));
        let metrics = QualityMetrics::measure(image, &reconstructed, non_zero, total, quality_factor)?;

        debug!(
            "DCT 압축 q={quality_factor}: {tile_count}개 타일, 유지율 {:.4}, PSNR {:.2} dB, SSIM {:.4}",
            metrics.retention_rate, metrics.psnr, metrics.ssim
        );

        Ok(CompressionResult {
            reconstructed,
            metrics,
        })
    }

    /// (row, col)을 패딩 이미지 안으로 클램프한 타일의 DCT 분석
    pub fn analyze_block(&self, image: &Array2<f64>, row: usize, col: usize) -> Result<BlockInfo> {
        ensure_non_empty(image.dim())?;

        let n = self.state.block_size;
        let padded = self.pad_to_multiple(image)?;
        let (rows, cols) = padded.data.dim();
        let row = row.min(rows - n);
        let col = col.min(cols - n);

        let block = padded.data.slice(s![row..row + n, col..col + n]).to_owned();
        let coefficients = self.forward(block.mapv(|v| v - LEVEL_SHIFT).view());
        let dc = coefficients[[0, 0]];
        let ac_energy = coefficients
            .indexed_iter()
            .filter(|&(pos, _)| pos != (0, 0))
            .map(|(_, c)| c.abs())
            .sum();

        Ok(BlockInfo {
            position: (row, col),
            block,
            coefficients,
            dc,
            ac_energy,
        })
    }

    /// 품질 계수마다 독립적으로 압축. 결과 순서는 입력 순서와 같음
    pub fn compare_qualities(
        &self,
        image: &Array2<f64>,
        quality_factors: &[f64],
    ) -> Result<Vec<QualityComparison>> {
        quality_factors
            .par_iter()
            .map(|&quality_factor| {
                self.compress(image, quality_factor)
                    .map(|result| QualityComparison {
                        quality_factor,
                        result,
                    })
            })
            .collect()
    }
}
