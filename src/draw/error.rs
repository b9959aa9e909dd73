//! Validation errors raised by drawable annotations.

use thiserror::Error;

/// Errors that can occur when repositioning or resizing an annotation.
///
/// Rejected calls leave the object's geometry untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("Rectangle size must not be negative (got {width} x {height})")]
    NegativeSize { width: f64, height: f64 },

    #[error("Scale factor must be positive and finite (got {0})")]
    InvalidScale(f64),

    #[error("Geometry values must be finite numbers")]
    NonFinite,
}
