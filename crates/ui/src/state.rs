//! View-model state for the product manager
//!
//! Holds the last-fetched product list, the in-progress form values, the
//! id of the record being edited, and the last success message. All
//! transitions are plain methods on [`ManagerState`]; the Dioxus layer
//! keeps one instance in a `Signal` and re-renders when it changes.

use dioxus::prelude::*;
use pm_core::{Product, ProductDraft, ProductError, ProductId, ProductResult, Validatable};

/// Alert shown when a required field is empty
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Success message after a create
pub const PRODUCT_ADDED_MESSAGE: &str = "Product added successfully!";

/// Success message after an update
pub const PRODUCT_UPDATED_MESSAGE: &str = "Product updated successfully!";

// ============================================================================
// Form State
// ============================================================================

/// Form input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Description,
}

impl FormField {
    /// Placeholder shown in the empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Price => "Price",
            FormField::Description => "Description",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Price => "number",
            FormField::Name | FormField::Description => "text",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// Transient input buffer mirroring the in-progress create/edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl FormState {
    /// Current value of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = value,
            FormField::Description => self.description = value,
        }
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Request body built from the current values, untouched
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft::new(&self.name, &self.price, &self.description)
    }
}

impl Validatable for FormState {
    /// Presence only: the price is not checked for being numeric.
    fn validate(&self) -> ProductResult<()> {
        if self.name.is_empty() || self.price.is_empty() || self.description.is_empty() {
            return Err(ProductError::validation(MISSING_FIELDS_MESSAGE));
        }
        Ok(())
    }
}

// ============================================================================
// Form Mode
// ============================================================================

/// Whether the next submit creates or updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing,
}

impl FormMode {
    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Creating => "Add Product",
            FormMode::Editing => "Update Product",
        }
    }
}

// ============================================================================
// Submission
// ============================================================================

/// The remote call a valid submit turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
}

impl Submission {
    /// Message shown once the call succeeds
    pub fn success_message(&self) -> &'static str {
        match self {
            Submission::Create(_) => PRODUCT_ADDED_MESSAGE,
            Submission::Update(..) => PRODUCT_UPDATED_MESSAGE,
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        match self {
            Submission::Create(draft) | Submission::Update(_, draft) => draft,
        }
    }
}

// ============================================================================
// Manager State
// ============================================================================

/// Everything the product manager view renders from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagerState {
    /// Last snapshot returned by the server
    pub products: Vec<Product>,
    /// In-progress input
    pub form: FormState,
    /// Record being edited; `None` while composing a new one
    pub editing_id: Option<ProductId>,
    /// Set after a successful create/update and only ever overwritten
    pub success_message: Option<String>,
}

impl ManagerState {
    /// Create an empty state in `Creating` mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Current form mode, derived from `editing_id`
    pub fn mode(&self) -> FormMode {
        if self.editing_id.is_some() {
            FormMode::Editing
        } else {
            FormMode::Creating
        }
    }

    /// Replace the product list wholesale
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Copy a row's values into the form and switch to `Editing`
    pub fn begin_edit(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.form = FormState {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        };
        self.editing_id = Some(id);
    }

    /// Validate the form and decide between create and update
    pub fn submission(&self) -> ProductResult<Submission> {
        self.form.validate()?;
        let draft = self.form.to_draft();

        Ok(match &self.editing_id {
            Some(id) => Submission::Update(id.clone(), draft),
            None => Submission::Create(draft),
        })
    }

    /// Apply a successful create/update: message set, form cleared,
    /// back to `Creating`
    pub fn complete_submission(&mut self, submission: &Submission) {
        self.success_message = Some(submission.success_message().to_string());
        self.form.clear();
        self.editing_id = None;
    }
}

// ============================================================================
// State Cell
// ============================================================================

/// Shared, mutable handle on a [`ManagerState`].
///
/// Closures passed to `inspect`/`apply` must not hold on to the state
/// across an `.await`.
pub trait StateCell {
    /// Read the state
    fn inspect<R>(&self, f: impl FnOnce(&ManagerState) -> R) -> R;

    /// Mutate the state, notifying observers
    fn apply<R>(&self, f: impl FnOnce(&mut ManagerState) -> R) -> R;
}

impl StateCell for Signal<ManagerState> {
    fn inspect<R>(&self, f: impl FnOnce(&ManagerState) -> R) -> R {
        let guard = self.read();
        f(&*guard)
    }

    fn apply<R>(&self, f: impl FnOnce(&mut ManagerState) -> R) -> R {
        let mut signal = *self;
        let mut guard = signal.write();
        f(&mut *guard)
    }
}

// ============================================================================
// Tests
// ============================================================================
