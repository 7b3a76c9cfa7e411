//! # Product Manager Client
//!
//! HTTP implementation of [`pm_core::ProductStore`] backed by `reqwest`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let store = HttpProductStore::new("http://127.0.0.1:5000")?;
//! let products = store.list_products().await?;
//! ```

pub mod error;
pub mod http_store;

pub use error::ClientError;
pub use http_store::HttpProductStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
