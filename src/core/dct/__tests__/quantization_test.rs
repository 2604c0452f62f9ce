use ndarray::{array, Array2};

use crate::core::dct::quantization::{base_quant_table, quantize, JPEG_LUMINANCE_TABLE};

#[test]
fn 기본_테이블_테스트() {
    let table = base_quant_table(8);
    assert_eq!(table.dim(), (8, 8));
    assert_eq!(table[[0, 0]], 16.0);
    assert_eq!(table[[7, 7]], 99.0);
    assert_eq!(table[[4, 5]], 109.0);
    for k in 0..8 {
        for l in 0..8 {
            assert_eq!(table[[k, l]], JPEG_LUMINANCE_TABLE[k][l]);
        }
    }
}

#[test]
fn 리샘플링_테이블_테스트() {
    let large = base_quant_table(16);
    let small = base_quant_table(4);
    for k in 0..8 {
        for l in 0..8 {
            assert_eq!(large[[2 * k, 2 * l]], JPEG_LUMINANCE_TABLE[k][l]);
            assert_eq!(large[[2 * k + 1, 2 * l + 1]], JPEG_LUMINANCE_TABLE[k][l]);
        }
    }
    assert_eq!(small, array![[16.0, 10.0, 24.0, 51.0], [14.0, 16.0, 40.0, 69.0], [18.0, 37.0, 68.0, 103.0], [49.0, 78.0, 103.0, 120.0]]);
}

#[test]
fn 양자화_반올림_테스트() {
    let steps = Array2::from_elem((1, 6), 2.0);
    let coeffs = array![[0.9, 1.0, 3.0, -1.1, 5.2, -0.4]];
    // 0.45→0, 0.5→0 (짝수), 1.5→2, -0.55→-1, 2.6→3, -0.2→-0
    assert_eq!(quantize(&coeffs, &steps), array![[0.0, 0.0, 4.0, -2.0, 6.0, -0.0]]);
}
