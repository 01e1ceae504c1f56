//! Error types for setup and time marching.
//!
//! The flux engine itself never fails: invalid primitive states propagate as
//! NaN/Inf through the arithmetic. Errors are raised only by setup code
//! (inconsistent dimensions, bad parameters) and by the driver when it finds a
//! non-finite cell state after an update.

use thiserror::Error;

/// Errors raised by mesh/solver setup and by the time-marching driver.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UgksError {
    /// Array shape does not agree with the discrete velocity grid.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Non-finite macroscopic state after an update. Fatal; the run cannot
    /// be recovered other than by restarting with a smaller CFL number.
    #[error("Numerical breakdown at iteration {iteration}: non-finite state in cell ({i}, {j})")]
    Diverged { iteration: usize, i: usize, j: usize },
}

impl UgksError {
    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UgksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = UgksError::dimension_mismatch("29x29", "33x29");
        assert_eq!(err.to_string(), "Dimension mismatch: expected 29x29, got 33x29");

        let err = UgksError::Diverged {
            iteration: 12,
            i: 3,
            j: 4,
        };
        assert!(err.to_string().contains("iteration 12"));
    }
}
