//! Compositor operations for final frame output.
//!
//! Converts the RGBA float pattern layer to RGB uint8 for presentation.
//! Pattern frames carry alpha 1.0 everywhere, so for them conversion
//! reduces to a clamp and scale; the background path exists for hosts
//! that fade patterns in and out.

use numpy::{PyArray3, PyArrayMethods, PyReadonlyArray3};
use pyo3::prelude::*;

/// Convert an RGBA f64 frame to RGB u8 for presentation.
///
/// Alpha-composites the input against a background color and converts
/// to uint8 [0-255].
///
/// # Arguments
/// * `arr` - Input RGBA f64 array shape (height, width, 4)
/// * `output` - Output RGB u8 array shape (height, width, 3), written in-place
/// * `bg_r` - Background red component (0.0..1.0)
/// * `bg_g` - Background green component (0.0..1.0)
/// * `bg_b` - Background blue component (0.0..1.0)
///
/// # Formula
/// ```text
/// out_c = (1.0 - alpha) * bg_c + alpha * src_c
/// // Then clamped to [0.0, 1.0] and scaled to u8 [0, 255]
/// ```
#[pyfunction]
pub fn rgba2rgb<'py>(
    _py: Python<'py>,
    arr: PyReadonlyArray3<'py, f64>,
    output: &Bound<'py, PyArray3<u8>>,
    bg_r: f64,
    bg_g: f64,
    bg_b: f64,
) -> PyResult<()> {
    let input = arr.as_array();
    let shape = input.shape();

    debug_assert_eq!(shape[2], 4, "Input must have 4 channels (RGBA)");

    let (h, w) = (shape[0], shape[1]);
    let bg = [bg_r, bg_g, bg_b];

    // SAFETY: We have exclusive write access to output through PyO3's
    // borrow rules
    unsafe {
        let mut out = output.as_array_mut();

        for row in 0..h {
            for col in 0..w {
                let alpha = input[[row, col, 3]];
                let inv_alpha = 1.0 - alpha;

                for c in 0..3 {
                    let src = input[[row, col, c]];
                    let composited = inv_alpha * bg[c] + alpha * src;
                    let clamped = composited.clamp(0.0, 1.0);
                    out[[row, col, c]] = (clamped * 255.0) as u8;
                }
            }
        }
    }

    Ok(())
}

/// Pure conversion over flat buffers, for benchmarking and tests.
///
/// `input` holds pixels * 4 RGBA floats, `output` pixels * 3 bytes.
pub fn rgba2rgb_impl(input: &[f64], bg: [f64; 3], output: &mut [u8]) {
    let pixels = input.len() / 4;
    debug_assert_eq!(output.len(), pixels * 3, "Output must be pixels * 3");

    for p in 0..pixels {
        let src_idx = p * 4;
        let dst_idx = p * 3;
        let alpha = input[src_idx + 3];
        let inv_alpha = 1.0 - alpha;

        for c in 0..3 {
            let src = input[src_idx + c];
            let composited = inv_alpha * bg[c] + alpha * src;
            let clamped = composited.clamp(0.0, 1.0);
            output[dst_idx + c] = (clamped * 255.0) as u8;
        }
    }
}
