//! Command-line and environment configuration.
//!
//! The backend base URL is read once at startup; nothing else is
//! environment-driven apart from the log filter.

use clap::Parser;
use pm_ui::WindowOptions;

/// Product Manager - desktop client for a products REST API
#[derive(Debug, Clone, Parser)]
#[command(name = "product-manager", version, about)]
pub struct Config {
    /// Base URL of the products API (requests go to <URL>/products)
    #[arg(long, env = "PRODUCT_API_URL")]
    pub api_url: String,

    /// Window title
    #[arg(long, default_value = pm_ui::NAME)]
    pub title: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1000.0)]
    pub width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 700.0)]
    pub height: f64,

    /// Log filter directive (e.g. `info`, `pm_client=debug`)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn window_options(&self) -> WindowOptions {
        WindowOptions {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
        }
    }
}
