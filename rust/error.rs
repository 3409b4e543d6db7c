//! Error types for the host boundary.
//!
//! The evaluators themselves are total; the only failures are frames
//! handed over with the wrong geometry.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Frame shape mismatch: expected {expected_h}x{expected_w}x4, got {actual:?}")]
    ShapeMismatch {
        expected_h: usize,
        expected_w: usize,
        actual: Vec<usize>,
    },

    #[error("Frame has zero extent: {width}x{height}")]
    EmptyFrame { width: usize, height: usize },
}

impl From<PatternError> for PyErr {
    fn from(err: PatternError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
