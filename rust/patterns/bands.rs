//! Band pattern fill kernel.
//!
//! The ground-plane sibling of the stripe kernel: the frame is read as an
//! `(x, z)` slice, bands repeat 10 times per unit of z, and the clock runs
//! at 10x so the pattern scrolls an order of magnitude faster.

use numpy::{PyArray3, PyArrayMethods};
use pyo3::prelude::*;

use super::check_frame;
use crate::fragment::band_fragment;

/// Fill a frame with the band pattern.
///
/// # Arguments
/// * `width` - Frame width in pixels
/// * `height` - Frame height in pixels
/// * `matrix` - Target numpy array of shape (height, width, 4) for RGBA output
/// * `time` - Animation clock in seconds, constant for the whole frame
#[pyfunction]
pub fn draw_bands<'py>(
    _py: Python<'py>,
    width: usize,
    height: usize,
    matrix: &Bound<'py, PyArray3<f64>>,
    time: f64,
) -> PyResult<()> {
    // SAFETY: We have exclusive write access to the matrix through PyO3's
    // borrow rules
    unsafe {
        let mut array = matrix.as_array_mut();
        check_frame(array.shape(), width, height)?;

        let inv_w = 1.0 / width as f64;
        let inv_h = 1.0 / height as f64;

        for row in 0..height {
            let z = row as f64 * inv_h;
            for col in 0..width {
                let x = col as f64 * inv_w;
                let [r, g, b, a] = band_fragment([x, 0.0, z], time);
                array[[row, col, 0]] = r;
                array[[row, col, 1]] = g;
                array[[row, col, 2]] = b;
                array[[row, col, 3]] = a;
            }
        }
    }

    Ok(())
}

/// Fill a flat RGBA buffer with the band pattern.
///
/// Pure path for benchmarking and tests; same traversal as [`draw_bands`].
pub fn draw_bands_impl(width: usize, height: usize, time: f64, output: &mut [f64]) {
    debug_assert_eq!(output.len(), width * height * 4, "Output must be h*w*4");

    if width == 0 || height == 0 {
        return;
    }

    let inv_w = 1.0 / width as f64;
    let inv_h = 1.0 / height as f64;

    for row in 0..height {
        let z = row as f64 * inv_h;
        for col in 0..width {
            let x = col as f64 * inv_w;
            let idx = (row * width + col) * 4;
            output[idx..idx + 4].copy_from_slice(&band_fragment([x, 0.0, z], time));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_agrees_with_evaluator() {
        let (w, h) = (10, 20);
        let mut frame = vec![0.0f64; w * h * 4];
        let time = 1.13;
        draw_bands_impl(w, h, time, &mut frame);

        for &(row, col) in &[(0, 0), (19, 9), (7, 2), (10, 5)] {
            let x = col as f64 / w as f64;
            let z = row as f64 / h as f64;
            let expected = band_fragment([x, 0.0, z], time);
            let idx = (row * w + col) * 4;
            assert_eq!(frame[idx..idx + 4], expected);
        }
    }

    #[test]
    fn test_clock_period_is_one_tenth() {
        let (w, h) = (8, 16);
        let mut before = vec![0.0f64; w * h * 4];
        let mut after = vec![0.0f64; w * h * 4];
        draw_bands_impl(w, h, 0.42, &mut before);
        draw_bands_impl(w, h, 0.52, &mut after);
        assert_eq!(before, after);
    }

    #[test]
    fn test_fill_is_binary_with_opaque_alpha() {
        let (w, h) = (9, 9);
        let mut frame = vec![0.25f64; w * h * 4];
        draw_bands_impl(w, h, 0.8, &mut frame);

        for px in frame.chunks_exact(4) {
            assert!(px[0] == 0.0 || px[0] == 1.0);
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 1.0);
        }
    }
}
