//! Pattern fill kernels.
//!
//! Rasterize the per-fragment evaluators across whole frames.
//! Python wrappers hand over the target matrix and the animation clock;
//! the hot loops stay in Rust.

pub mod bands;
pub mod checker;
pub mod stripes;

pub use bands::{draw_bands, draw_bands_impl};
pub use checker::{draw_checker, draw_checker_impl};
pub use stripes::{draw_stripes, draw_stripes_impl};

use crate::error::{PatternError, Result};

/// Validate a target frame against the caller-declared dimensions.
///
/// Kernels expect a `(height, width, 4)` RGBA matrix; anything else is a
/// host configuration error surfaced before the fill loop runs.
pub(crate) fn check_frame(shape: &[usize], width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PatternError::EmptyFrame { width, height });
    }

    if shape.len() != 3 || shape[0] != height || shape[1] != width || shape[2] != 4 {
        return Err(PatternError::ShapeMismatch {
            expected_h: height,
            expected_w: width,
            actual: shape.to_vec(),
        });
    }

    Ok(())
}
