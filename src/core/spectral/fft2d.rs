//! 2D FFT 및 스펙트럼 중심 이동(shift)
//!
//! 행 방향 1D FFT → 열 방향 1D FFT 순서의 분리 가능한(separable) 2D 변환.
//! 크기가 2의 거듭제곱일 필요는 없음 (rustfft가 임의 길이 지원)

use ndarray::{Array2, Axis};
use rustfft::num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

/// 복소수 2D 격자 (스펙트럼)
pub type ComplexGrid = Array2<Complex<f64>>;

/// 실수 이미지의 2D 이산 푸리에 변환 (shift 없음)
pub fn fft2(image: &Array2<f64>) -> ComplexGrid {
    let mut grid = image.mapv(|v| Complex::new(v, 0.0));
    process_2d(&mut grid, FftDirection::Forward);
    grid
}

/// 2D 역변환. rustfft는 정규화하지 않으므로 1/(H·W)를 곱함
pub fn ifft2(spectrum: &ComplexGrid) -> ComplexGrid {
    let mut grid = spectrum.clone();
    process_2d(&mut grid, FftDirection::Inverse);

    let (rows, cols) = grid.dim();
    let scale = 1.0 / (rows * cols).max(1) as f64;
    grid.mapv_inplace(|c| c * scale);
    grid
}

fn process_2d(grid: &mut ComplexGrid, direction: FftDirection) {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return;
    }

    let mut planner = FftPlanner::<f64>::new();
    let row_fft = planner.plan_fft(cols, direction);
    let col_fft = planner.plan_fft(rows, direction);
    let mut buffer: Vec<Complex<f64>> = Vec::with_capacity(rows.max(cols));

    // --- 행별 FFT ---
    for mut lane in grid.lanes_mut(Axis(1)) {
        buffer.clear();
        buffer.extend(lane.iter().copied());
        row_fft.process(&mut buffer);
        lane.iter_mut().zip(&buffer).for_each(|(dst, src)| *dst = *src);
    }

    // --- 열별 FFT ---
    for mut lane in grid.lanes_mut(Axis(0)) {
        buffer.clear();
        buffer.extend(lane.iter().copied());
        col_fft.process(&mut buffer);
        lane.iter_mut().zip(&buffer).for_each(|(dst, src)| *dst = *src);
    }
}

/// 영주파수 성분을 (⌊H/2⌋, ⌊W/2⌋)로 옮기는 순환 사분면 교환
pub fn fftshift<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    let (rows, cols) = grid.dim();
    roll(grid, rows / 2, cols / 2)
}

/// `fftshift`의 역연산 (홀수 길이에서도 정확히 되돌림)
pub fn ifftshift<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    let (rows, cols) = grid.dim();
    roll(grid, rows - rows / 2, cols - cols / 2)
}

/// out[(r + dr) % H, (c + dc) % W] = grid[r, c]
fn roll<T: Clone>(grid: &Array2<T>, dr: usize, dc: usize) -> Array2<T> {
    let (rows, cols) = grid.dim();
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        grid[[(r + rows - dr) % rows, (c + cols - dc) % cols]].clone()
    })
}
