//! Error types for Product Manager
//!
//! Two kinds of failure are recognised: a validation failure (the form is
//! missing a field) and a remote call failure (any network or HTTP error on
//! one of the four store operations). Configuration errors are reported by
//! the binary at startup and never reach this type.

use thiserror::Error;

/// The main error type for Product Manager
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// Form validation failed. The message is shown to the user verbatim.
    #[error("{0}")]
    Validation(String),

    /// A call to the remote product store failed
    #[error("{operation} failed: {message}")]
    Remote {
        operation: &'static str,
        message: String,
    },
}

impl ProductError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ProductError::Validation(msg.into())
    }

    /// Create a remote call error for the named operation
    pub fn remote(operation: &'static str, msg: impl Into<String>) -> Self {
        ProductError::Remote {
            operation,
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, ProductError::Validation(_))
    }

    /// Check if this error came from the remote store
    pub fn is_remote(&self) -> bool {
        matches!(self, ProductError::Remote { .. })
    }
}

/// Result type alias using ProductError
pub type ProductResult<T> = Result<T, ProductError>;

// ============================================================================
// Tests
// ============================================================================
