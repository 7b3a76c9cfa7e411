//! Product Manager
//!
//! Desktop form-and-table client for a products REST API.
//!
//! This is the main entry point for the Dioxus Desktop application.

mod config;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use pm_client::HttpProductStore;
use pm_ui::{DialogNotifier, ProductManager};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize logging
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log filter '{}'", config.log_level))?;
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    let store = HttpProductStore::new(&config.api_url).context("invalid --api-url")?;
    tracing::info!(api_url = store.base_url(), "Using products API");

    let manager = ProductManager::new(Arc::new(store), Arc::new(DialogNotifier));

    // Launch the Dioxus desktop application
    pm_ui::launch(manager, config.window_options());
    Ok(())
}
