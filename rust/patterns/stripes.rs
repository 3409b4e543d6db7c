//! Stripe pattern fill kernel.
//!
//! Animated horizontal bands over the `(x, y)` face of the frame,
//! perturbed by distance from the vertical midline and scrolling one
//! full period per unit of clock time.

use numpy::{PyArray3, PyArrayMethods};
use pyo3::prelude::*;

use super::check_frame;
use crate::fragment::stripe_fragment;

/// Fill a frame with the stripe pattern.
///
/// # Arguments
/// * `width` - Frame width in pixels
/// * `height` - Frame height in pixels
/// * `matrix` - Target numpy array of shape (height, width, 4) for RGBA output
/// * `time` - Animation clock in seconds, constant for the whole frame
#[pyfunction]
pub fn draw_stripes<'py>(
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
            let y = row as f64 * inv_h;
            for col in 0..width {
                let x = col as f64 * inv_w;
                let [r, g, b, a] = stripe_fragment([x, y, 0.0], time);
                array[[row, col, 0]] = r;
                array[[row, col, 1]] = g;
                array[[row, col, 2]] = b;
                array[[row, col, 3]] = a;
            }
        }
    }

    Ok(())
}

/// Fill a flat RGBA buffer with the stripe pattern.
///
/// Pure path for benchmarking and tests; same traversal as [`draw_stripes`].
pub fn draw_stripes_impl(width: usize, height: usize, time: f64, output: &mut [f64]) {
    debug_assert_eq!(output.len(), width * height * 4, "Output must be h*w*4");

    if width == 0 || height == 0 {
        return;
    }

    let inv_w = 1.0 / width as f64;
    let inv_h = 1.0 / height as f64;

    for row in 0..height {
        let y = row as f64 * inv_h;
        for col in 0..width {
            let x = col as f64 * inv_w;
            let idx = (row * width + col) * 4;
            output[idx..idx + 4].copy_from_slice(&stripe_fragment([x, y, 0.0], time));
        }
    }
}
