//! # Product Table
//!
//! One row per product in the last-fetched snapshot, each with Delete and
//! Edit actions.

use dioxus::prelude::*;
use pm_core::Product;

use crate::components::inputs::{Button, ButtonVariant};
use crate::manager::ProductManager;
use crate::state::ManagerState;

/// Column headers
pub const TABLE_HEADERS: [&str; 4] = ["Name", "Price", "Description", "Actions"];

/// Table of products
#[component]
pub fn ProductTable(state: Signal<ManagerState>, manager: Signal<ProductManager>) -> Element {
    let products = state.read().products.clone();

    rsx! {
        table {
            class: "product-table",

            thead {
                tr {
                    for header in TABLE_HEADERS {
                        th { "{header}" }
                    }
                }
            }

            tbody {
                for product in products {
                    ProductRow {
                        key: "{product.id}",
                        product: product.clone(),
                        state: state,
                        manager: manager,
                    }
                }
            }
        }
    }
}

/// Controls rendered at the end of every row, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Edit,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Delete => "Delete",
            RowAction::Edit => "Edit",
        }
    }

    fn variant(&self) -> ButtonVariant {
        match self {
            RowAction::Delete => ButtonVariant::Danger,
            RowAction::Edit => ButtonVariant::Secondary,
        }
    }
}

impl std::fmt::Display for RowAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Actions available on each row
pub const ROW_ACTIONS: [RowAction; 2] = [RowAction::Delete, RowAction::Edit];

/// A single product row
#[component]
fn ProductRow(
    product: Product,
    state: Signal<ManagerState>,
    manager: Signal<ProductManager>,
) -> Element {
    let cells = row_cells(&product);

    let on_action = use_callback(move |action: RowAction| {
        let manager = manager.read().clone();
        match action {
            RowAction::Delete => {
                let id = product.id.clone();
                spawn(async move {
                    manager.delete_product(&id, &state).await;
                });
            }
            RowAction::Edit => manager.begin_edit(&state, &product),
        }
    });

    rsx! {
        tr {
            for cell in cells {
                td { "{cell}" }
            }
            td {
                for action in ROW_ACTIONS {
                    Button {
                        key: "{action}",
                        label: action.label().to_string(),
                        variant: action.variant(),
                        onclick: move |_| on_action.call(action),
                    }
                }
            }
        }
    }
}

/// Display text of the data cells, in column order
pub fn row_cells(product: &Product) -> [String; 3] {
    [
        product.name.clone(),
        product.price_label(),
        product.description.clone(),
    ]
}
