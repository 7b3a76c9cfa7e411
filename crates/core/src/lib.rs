//! # Product Manager Core
//!
//! Core types, traits, and error handling for Product Manager.
//!
//! This crate provides the building blocks shared by the HTTP client and
//! the desktop UI:
//!
//! - **Types**: the remote `Product` record, its opaque `ProductId`, and the
//!   `ProductDraft` body sent on create/update
//! - **Traits**: `ProductStore` (the remote collaborator) and `Validatable`
//! - **Errors**: unified error handling with `ProductError` and `ProductResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{ProductError, ProductResult};
pub use traits::{ProductStore, Validatable};
pub use types::{Product, ProductDraft, ProductId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
