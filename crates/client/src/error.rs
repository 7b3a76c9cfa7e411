//! Errors raised while talking to the products API.

use pm_core::ProductError;
use thiserror::Error;

/// Errors that can occur when making API requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, DNS, broken body, etc.).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, or a generic message when the body is empty.
        message: String,
    },

    /// Failed to deserialise the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The configured base URL is unusable.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ClientError {
    /// Convert into the store-level error, tagging the failed operation.
    pub fn into_product_error(self, operation: &'static str) -> ProductError {
        ProductError::remote(operation, self.to_string())
    }
}
