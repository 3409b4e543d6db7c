//! Native Rust extensions for tilefx
//!
//! High-performance implementations of hot paths:
//! - Pattern fill kernels (stripes, bands, checker)
//! - Single-fragment evaluators for host-side probing
//! - RGBA to RGB conversion for presentation

use pyo3::prelude::*;

mod compositor;
mod error;
mod fragment;
mod patterns;

// Re-export for benchmarks
pub use compositor::rgba2rgb_impl;
pub use fragment::{band_fragment, checker_fragment, fract, stripe_fragment};
pub use patterns::{draw_bands_impl, draw_checker_impl, draw_stripes_impl};

/// Native Rust extensions for tilefx performance-critical code.
#[pymodule(name = "_native")]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Pattern fill kernels
    m.add_function(wrap_pyfunction!(patterns::draw_stripes, m)?)?;
    m.add_function(wrap_pyfunction!(patterns::draw_bands, m)?)?;
    m.add_function(wrap_pyfunction!(patterns::draw_checker, m)?)?;

    // Single-fragment evaluators
    m.add_function(wrap_pyfunction!(fragment::shade_stripe, m)?)?;
    m.add_function(wrap_pyfunction!(fragment::shade_band, m)?)?;
    m.add_function(wrap_pyfunction!(fragment::shade_checker, m)?)?;

    // Compositor
    m.add_function(wrap_pyfunction!(compositor::rgba2rgb, m)?)?;

    Ok(())
}
