//! # UI Components
//!
//! Dioxus components for the product manager view.
//!
//! ## Component Hierarchy
//!
//! ```text
//! App
//! ├── ProductForm
//! │   ├── TextInput (name, price, description)
//! │   └── Button (Add Product / Update Product)
//! └── ProductTable
//!     └── ProductRow (multiple)
//!         └── Button (Delete, Edit)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod inputs;
pub mod product_form;
pub mod product_table;

// ============================================================================
// Re-exports
// ============================================================================

pub use inputs::{Button, ButtonVariant, TextInput};
pub use product_form::{FORM_FIELDS, ProductForm};
pub use product_table::{ProductTable, ROW_ACTIONS, RowAction, TABLE_HEADERS, row_cells};
