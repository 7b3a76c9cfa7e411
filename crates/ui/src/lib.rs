//! # Product Manager UI
//!
//! Dioxus Desktop UI for Product Manager.
//!
//! A single view lists the products held by a REST backend and lets the
//! user create, edit, and delete them:
//!
//! - **State**: `ManagerState`, the view-model the components render from
//! - **Manager**: `ProductManager`, which turns user actions into store calls
//! - **Components**: the form, the table, and their inputs
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod manager;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use pm_core;

pub use app::App;
pub use components::{ProductForm, ProductTable, TextInput};
pub use manager::{DialogNotifier, Notifier, ProductManager};
pub use state::{FormField, FormMode, FormState, ManagerState, StateCell, Submission};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Product Manager";

/// CSS styles for the application, embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Desktop window settings
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: NAME.to_string(),
            width: 1000.0,
            height: 700.0,
        }
    }
}

/// Launch the Product Manager desktop application
///
/// The manager is handed to the root component through context.
///
/// # Example
///
/// ```rust,ignore
/// let manager = ProductManager::new(Arc::new(store), Arc::new(DialogNotifier));
/// pm_ui::launch(manager, WindowOptions::default());
/// ```
pub fn launch(manager: ProductManager, window: WindowOptions) {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(window.title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(480.0, 360.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(manager)
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================
