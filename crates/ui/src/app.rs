//! Main Application Component for Product Manager
//!
//! The root component owns the view-model signal and wires the initial
//! list load.

use dioxus::prelude::*;

use crate::components::{ProductForm, ProductTable};
use crate::manager::ProductManager;
use crate::state::ManagerState;

/// Page heading
pub const HEADING: &str = "Product List";

/// Root application component
///
/// Expects a [`ProductManager`] in context (see [`crate::launch`]).
#[component]
pub fn App() -> Element {
    let initial = use_context::<ProductManager>();
    let manager = use_signal(move || initial);
    let state = use_signal(ManagerState::new);

    // Runs on mount, and again whenever the manager (and so the endpoint)
    // is replaced. In-flight loads are not cancelled.
    use_effect(move || {
        let manager = manager.read().clone();
        tracing::debug!("Loading products");
        spawn(async move {
            manager.load_products(&state).await;
        });
    });

    let success_message = state.read().success_message.clone();

    rsx! {
        div {
            class: "product-manager",

            h1 { class: "title", "{HEADING}" }

            if let Some(message) = success_message {
                p { class: "success-message", "{message}" }
            }

            ProductForm { state, manager }

            ProductTable { state, manager }
        }
    }
}
