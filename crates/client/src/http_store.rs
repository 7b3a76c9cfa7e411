//! reqwest implementation of the product store.
//!
//! One shared `reqwest::Client` per store. No timeout, retry, or
//! authentication is configured: a hung request simply never resolves.

use async_trait::async_trait;
use pm_core::{Product, ProductDraft, ProductId, ProductResult, ProductStore};
use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Path of the products collection, relative to the base URL
pub const PRODUCTS_PATH: &str = "/products";

// ============================================================================
// HttpProductStore
// ============================================================================

/// HTTP client for the products REST API.
#[derive(Debug, Clone)]
pub struct HttpProductStore {
    /// The underlying reqwest HTTP client.
    client: Client,
    /// Base URL without a trailing slash (e.g. `http://127.0.0.1:5000`).
    base_url: String,
}

impl HttpProductStore {
    /// Create a store for the given base URL.
    ///
    /// The URL must be absolute and use `http` or `https`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url.as_ref())?;
        let client = Client::builder()
            .user_agent(concat!("product-manager/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// The normalized base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn item_path(id: &ProductId) -> String {
        format!("{}/{}", PRODUCTS_PATH, id)
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        tracing::debug!(method = "GET", %url, "sending request");

        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let url = self.url(path);
        tracing::debug!(method = "POST", %url, "sending request");

        let response = self.client.post(&url).json(body).send().await?;
        check_status(response).await.map(drop)
    }

    async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let url = self.url(path);
        tracing::debug!(method = "PUT", %url, "sending request");

        let response = self.client.put(&url).json(body).send().await?;
        check_status(response).await.map(drop)
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.url(path);
        tracing::debug!(method = "DELETE", %url, "sending request");

        let response = self.client.delete(&url).send().await?;
        check_status(response).await.map(drop)
    }
}

#[async_trait]
impl ProductStore for HttpProductStore {
    async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.get(PRODUCTS_PATH)
            .await
            .map_err(|e| e.into_product_error("Fetching products"))
    }

    async fn create_product(&self, draft: &ProductDraft) -> ProductResult<()> {
        self.post(PRODUCTS_PATH, draft)
            .await
            .map_err(|e| e.into_product_error("Adding product"))
    }

    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> ProductResult<()> {
        self.put(&Self::item_path(id), draft)
            .await
            .map_err(|e| e.into_product_error("Updating product"))
    }

    async fn delete_product(&self, id: &ProductId) -> ProductResult<()> {
        self.delete(&Self::item_path(id))
            .await
            .map_err(|e| e.into_product_error("Deleting product"))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Turn a non-success response into `ClientError::Api`.
async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(status = status.as_u16(), error = %e, "could not read error body");
            String::new()
        }
    };
    let message = if body.trim().is_empty() {
        format!("Server returned status {}", status.as_u16())
    } else {
        body
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let invalid = |reason: String| ClientError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }

    Ok(raw.trim().trim_end_matches('/').to_string())
}

// ============================================================================
// Tests
// ============================================================================
