//! Error types for the sidereal time pipeline.
//!
//! [`AstroError`] covers the two ways the core can fail: a value outside the
//! domain an algorithm accepts, and coefficient data that cannot be read.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Who fixes it |
//! |---------|----------|--------------|
//! | [`MathError`](AstroError::MathError) | Out-of-range values | Caller input |
//! | [`DataError`](AstroError::DataError) | Coefficient table I/O and parsing | Deployment |
//!
//! Input errors are user-facing. Data errors are fatal at start-up: nothing
//! is computed without a complete coefficient set.
//!
//! ```
//! use greenwich_core::{AstroError, MathErrorKind};
//!
//! fn checked_centuries(days: f64) -> Result<f64, AstroError> {
//!     if days.abs() > 1e9 {
//!         return Err(AstroError::math_error(
//!             "checked_centuries",
//!             MathErrorKind::OutOfRange,
//!             "day count too large",
//!         ));
//!     }
//!     Ok(days / 36525.0)
//! }
//!
//! assert!(checked_centuries(2e9).unwrap_err().is_input_error());
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Value outside valid domain.
    OutOfRange,
}

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Coefficient data could not be opened or parsed.
    #[error("Data error ({file_type} - {operation}): {message}")]
    DataError {
        file_type: String,
        operation: String,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn data_error(file_type: &str, operation: &str, reason: &str) -> Self {
        Self::DataError {
            file_type: file_type.to_string(),
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns `true` for errors caused by the caller's input rather than by
    /// the deployment's data files.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MathError { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_with_kind() {
        let err = AstroError::math_error(
            "era00",
            MathErrorKind::OutOfRange,
            "Julian Date is outside the representable range",
        );
        assert!(err.to_string().contains("Math error in era00"));
        assert!(err.to_string().contains("OutOfRange"));
    }

    #[test]
    fn test_data_error() {
        let err = AstroError::data_error("nut_ls", "parse", "line 3: bad integer");
        assert_eq!(
            err.to_string(),
            "Data error (nut_ls - parse): line 3: bad integer"
        );
    }

    #[test]
    fn test_input_error_classification() {
        let math = AstroError::math_error("era00", MathErrorKind::OutOfRange, "range");
        assert!(math.is_input_error());
        assert!(!AstroError::data_error("nut_pl", "open", "missing").is_input_error());
    }
}
