//! # Product Form
//!
//! Create/edit form. Pre-filled while a row is being edited; the submit
//! button label follows the form mode.

use dioxus::prelude::*;

use crate::components::inputs::{Button, TextInput};
use crate::manager::ProductManager;
use crate::state::{FormField, ManagerState};

/// Fields in the order they are rendered
pub const FORM_FIELDS: [FormField; 3] = [FormField::Name, FormField::Price, FormField::Description];

/// Create/edit form bound to the manager state
#[component]
pub fn ProductForm(state: Signal<ManagerState>, manager: Signal<ProductManager>) -> Element {
    let mut state = state;
    let current = state.read();
    let form = current.form.clone();
    let label = current.mode().submit_label();
    drop(current);

    // Validation (and its alert) runs inside the handler; the remote call
    // is spawned afterwards.
    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let manager = manager.read().clone();
        if let Some(submission) = manager.prepare_submit(&state) {
            spawn(async move {
                manager.send_submission(submission, &state).await;
            });
        }
    };

    rsx! {
        form {
            class: "product-form",
            onsubmit: handle_submit,

            for field in FORM_FIELDS {
                TextInput {
                    key: "{field}",
                    value: form.get(field).to_string(),
                    placeholder: field.placeholder().to_string(),
                    input_type: field.input_type().to_string(),
                    required: true,
                    on_change: move |value: String| {
                        state.write().form.set(field, value);
                    },
                }
            }

            Button {
                label: label.to_string(),
                submit: true,
            }
        }
    }
}
