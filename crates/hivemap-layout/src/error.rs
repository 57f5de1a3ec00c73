//! Error types for hivemap-layout.

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during layout operations.
///
/// The engine performs no I/O, so the only failure is a caller handing in
/// values the geometry cannot work with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument was outside its valid domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::invalid(name, format!("must be finite and > 0, got {value}")))
    }
}
