//! Error types for statistical operations

use thiserror::Error;

/// Error type shared by every estimator in this crate
#[derive(Error, Debug)]
pub enum Error {
    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Quantile probability outside [0, 1]
    #[error("Invalid quantile: {0} must be in [0, 1]")]
    InvalidQuantile(f64),

    /// Paired inputs of different lengths
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

impl Error {
    /// Shorthand for the empty-input case.
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
