//! Core traits for Product Manager
//!
//! This module defines the seams between the view-model and the outside
//! world: the remote product store and input validation.

use async_trait::async_trait;

use crate::error::ProductResult;
use crate::types::{Product, ProductDraft, ProductId};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `ProductError` describing the problem.
    fn validate(&self) -> ProductResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// ProductStore Trait
// ============================================================================

/// The remote collaborator holding the product records.
///
/// Maps one-to-one onto the REST contract:
///
/// ```text
/// GET    /products        -> list_products
/// POST   /products        -> create_product
/// PUT    /products/{id}   -> update_product
/// DELETE /products/{id}   -> delete_product
/// ```
///
/// Every failure is reported as `ProductError::Remote`; callers do not
/// distinguish client errors, server errors, and unreachable hosts.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch the full product list
    async fn list_products(&self) -> ProductResult<Vec<Product>>;

    /// Create a record; the identifier is assigned server-side
    async fn create_product(&self, draft: &ProductDraft) -> ProductResult<()>;

    /// Replace the fields of an existing record
    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> ProductResult<()>;

    /// Remove a record
    async fn delete_product(&self, id: &ProductId) -> ProductResult<()>;
}
