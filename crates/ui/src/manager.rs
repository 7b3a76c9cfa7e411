//! Product manager orchestration
//!
//! Ties the view-model state to the remote store. Remote failures are
//! logged and never surfaced in the view; validation failures raise a
//! blocking alert through the [`Notifier`].

use std::sync::Arc;

use pm_core::{Product, ProductId, ProductStore};

use crate::state::{StateCell, Submission};

// ============================================================================
// Notifier
// ============================================================================

/// Synchronous, blocking user alert
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Native message box
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn alert(&self, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(crate::NAME)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

// ============================================================================
// Product Manager
// ============================================================================

/// Drives list / create / update / delete against a [`ProductStore`].
///
/// Calls are not queued or de-duplicated: invoking an action twice issues
/// two independent requests.
#[derive(Clone)]
pub struct ProductManager {
    store: Arc<dyn ProductStore>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for ProductManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductManager").finish_non_exhaustive()
    }
}

impl ProductManager {
    /// Create a manager over a store and an alert sink
    pub fn new(store: Arc<dyn ProductStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Fetch the list and replace the local snapshot.
    ///
    /// On failure the previous list stays visible.
    pub async fn load_products<C: StateCell>(&self, state: &C) {
        match self.store.list_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Loaded products");
                state.apply(|s| s.replace_products(products));
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
            }
        }
    }

    /// Synchronous half of submit: validate, alert on failure.
    ///
    /// Returns the remote call to make, or `None` when the form is
    /// incomplete. Nothing in `state` changes.
    pub fn prepare_submit<C: StateCell>(&self, state: &C) -> Option<Submission> {
        match state.inspect(|s| s.submission()) {
            Ok(submission) => Some(submission),
            Err(e) => {
                tracing::warn!(error = %e, "Submit blocked");
                self.notifier.alert(&e.to_string());
                None
            }
        }
    }

    /// Asynchronous half of submit: issue the call, then reset and reload.
    ///
    /// On failure the form is left as-is.
    pub async fn send_submission<C: StateCell>(&self, submission: Submission, state: &C) {
        let result = match &submission {
            Submission::Create(draft) => self.store.create_product(draft).await,
            Submission::Update(id, draft) => self.store.update_product(id, draft).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    name = %submission.draft().name,
                    "{}",
                    submission.success_message()
                );
                state.apply(|s| s.complete_submission(&submission));
                self.load_products(state).await;
            }
            Err(e) => match &submission {
                Submission::Create(_) => {
                    tracing::error!(error = %e, "Error adding product");
                }
                Submission::Update(id, _) => {
                    tracing::error!(%id, error = %e, "Error updating product");
                }
            },
        }
    }

    /// Validate the form, then create or update depending on the mode
    pub async fn submit<C: StateCell>(&self, state: &C) {
        if let Some(submission) = self.prepare_submit(state) {
            self.send_submission(submission, state).await;
        }
    }

    /// Delete a record, then reload whether or not the delete succeeded
    pub async fn delete_product<C: StateCell>(&self, id: &ProductId, state: &C) {
        match self.store.delete_product(id).await {
            Ok(()) => tracing::info!(%id, "Deleted product"),
            Err(e) => tracing::error!(%id, error = %e, "Error deleting product"),
        }
        self.load_products(state).await;
    }

    /// Copy a rendered row into the form and switch to editing it.
    ///
    /// Uses the row's values as shown; the record is not re-fetched.
    pub fn begin_edit<C: StateCell>(&self, state: &C, product: &Product) {
        tracing::debug!(id = %product.id, "Editing product");
        state.apply(|s| {
            s.begin_edit(
                product.id.clone(),
                &product.name,
                &product.price,
                &product.description,
            )
        });
    }
}

// ============================================================================
// Tests
// ============================================================================
