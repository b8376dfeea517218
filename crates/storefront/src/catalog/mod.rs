//! Catalog backend client.
//!
//! # Architecture
//!
//! - The managed backend is the source of truth for products - NO local
//!   sync, direct REST calls against its PostgREST surface
//! - The core never mutates the catalog; this client is read-only
//! - In-memory caching via `moka` for listings (5 minute TTL)
//!
//! A failed fetch is surfaced as [`CatalogError`]; route handlers treat it
//! as "empty catalog" and leave error display to the presentation layer.

mod types;

pub use types::{Product, ProductRow};

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use secrecy::ExposeSecret;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;

/// Errors that can occur when talking to the catalog backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    #[error("Catalog backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

const CACHE_KEY_PRODUCTS: &str = "products:list";

// =============================================================================
// CatalogClient
// =============================================================================

/// Read-only client for the catalog backend.
///
/// Listings are cached for 5 minutes; the storefront tolerates slightly
/// stale products.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    cache: Cache<String, Arc<Vec<Product>>>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        let endpoint = format!("{}/rest/v1/products", config.base_url.trim_end_matches('/'));

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                endpoint,
                api_key: config.api_key.expose_secret().to_string(),
                cache,
            }),
        }
    }

    /// Fetch the ordered product list (newest first, matching the backend's
    /// `created_at` ordering).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the backend is unreachable, responds
    /// with a non-success status, or returns a malformed body.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        if let Some(cached) = self.inner.cache.get(CACHE_KEY_PRODUCTS).await {
            debug!("catalog cache hit");
            return Ok(cached.as_ref().clone());
        }

        let response = self
            .inner
            .client
            .get(&self.inner.endpoint)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .header("apikey", &self.inner.api_key)
            .header(
                "Authorization",
                format!("Bearer {}", &self.inner.api_key),
            )
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CatalogError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        let rows: Vec<ProductRow> = serde_json::from_str(&body)?;
        let products: Vec<Product> = rows.into_iter().map(Product::from).collect();

        self.inner
            .cache
            .insert(CACHE_KEY_PRODUCTS.to_string(), Arc::new(products.clone()))
            .await;

        Ok(products)
    }
}
