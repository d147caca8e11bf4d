//! Validation Error Types

use thiserror::Error;

/// Errors during submission validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Text length outside the allowed bounds
    #[error("{field} length {length} is outside [{min}, {max}]")]
    InvalidLength {
        field: &'static str,
        length: usize,
        min: usize,
        max: usize,
    },

    /// Value not in the allowed set
    #[error("{field} value {value:?} is not one of {allowed:?}")]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: Vec<String>,
    },

    /// Invalid data format
    #[error("Invalid {field} format: {value:?}")]
    InvalidFormat { field: &'static str, value: String },
}
