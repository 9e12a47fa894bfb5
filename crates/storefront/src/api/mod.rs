//! Ordering API client.
//!
//! # Architecture
//!
//! - [`OrdersApi`] is the request/response contract the ordering core
//!   depends on; [`HttpClient`] is the production implementation over
//!   `reqwest`
//! - The server is the source of truth - no local sync, direct API calls
//! - The catalog is cached in-memory via `moka` (5 minute TTL) and replaced
//!   wholesale whenever it is refetched
//!
//! # Endpoints
//!
//! - `GET {base}/products` - full catalog
//! - `POST {base}/orders` - place an order
//! - `GET {base}/orders/{id}` - order status lookup
//!
//! # Example
//!
//! ```rust,ignore
//! use breadbox_storefront::api::{HttpClient, OrdersApi};
//! use breadbox_storefront::config::StorefrontConfig;
//!
//! let client = HttpClient::new(&StorefrontConfig::from_env()?)?;
//! let products = client.fetch_products().await?;
//! ```

pub mod types;

use std::sync::Arc;
use std::time::Duration;

use breadbox_core::OrderId;
use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::StorefrontConfig;

pub use types::{
    ApiErrorBody, CatalogResponse, OrderItemInput, OrderLine, OrderRecord, OrderRequest,
    PlacedOrder, Product,
};

/// Fallback text when the server gives no usable error body.
const GENERIC_SUBMISSION_ERROR: &str = "Failed to place order";
const GENERIC_LOOKUP_ERROR: &str = "Failed to get order status";

const CATALOG_CACHE_KEY: &str = "catalog";
const CATALOG_CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur when talking to the ordering API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog fetch returned a non-success status.
    #[error("Failed to fetch products")]
    FetchFailure,

    /// Order submission was rejected by the server.
    #[error("Order submission failed: {0}")]
    SubmissionFailure(String),

    /// Order status lookup failed (unknown ID or server error).
    #[error("Order lookup failed: {0}")]
    LookupFailure(String),
}

/// The request/response contract the ordering core consumes.
///
/// `HttpClient` implements this for production; tests substitute an
/// in-memory fake.
#[allow(async_fn_in_trait)]
pub trait OrdersApi {
    /// Fetch the full product catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Submit an order, returning the server-assigned confirmation.
    async fn place_order(&self, request: &OrderRequest) -> Result<PlacedOrder, ApiError>;

    /// Fetch an order by ID.
    async fn fetch_order(&self, order_id: OrderId) -> Result<OrderRecord, ApiError>;
}

// =============================================================================
// HttpClient
// =============================================================================

/// HTTP client for the ordering API.
///
/// Cheaply cloneable; the catalog is cached for 5 minutes.
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<HttpClientInner>,
}

struct HttpClientInner {
    client: reqwest::Client,
    base_url: String,
    catalog_cache: Cache<&'static str, Arc<Vec<Product>>>,
}

impl HttpClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let catalog_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(CATALOG_CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(HttpClientInner {
                client,
                base_url: config.api_base_url.as_str().trim_end_matches('/').to_string(),
                catalog_cache,
            }),
        })
    }

    /// Drop the cached catalog so the next fetch hits the server.
    pub fn invalidate_catalog(&self) {
        self.inner.catalog_cache.invalidate_all();
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }
}

impl OrdersApi for HttpClient {
    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns `FetchFailure` on a non-success status, or a transport/parse
    /// error if the request itself fails.
    #[instrument(skip(self))]
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(products) = self.inner.catalog_cache.get(CATALOG_CACHE_KEY).await {
            debug!("Cache hit for catalog");
            return Ok(products.as_ref().clone());
        }

        let response = self.inner.client.get(self.url("/products")).send().await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Catalog fetch returned non-success");
            return Err(ApiError::FetchFailure);
        }

        let products = response.json::<CatalogResponse>().await?.into_products();
        debug!(count = products.len(), "Catalog fetched");

        self.inner
            .catalog_cache
            .insert(CATALOG_CACHE_KEY, Arc::new(products.clone()))
            .await;

        Ok(products)
    }

    /// Submit an order.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionFailure` with the server's error text (or a
    /// generic fallback) on a non-success status.
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    async fn place_order(&self, request: &OrderRequest) -> Result<PlacedOrder, ApiError> {
        let response = self
            .inner
            .client
            .post(self.url("/orders"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = read_error_body(response).await.unwrap_or_else(|| {
                GENERIC_SUBMISSION_ERROR.to_string()
            });
            tracing::warn!(status = %status, message = %message, "Order submission rejected");
            return Err(ApiError::SubmissionFailure(message));
        }

        let placed = response.json::<PlacedOrder>().await?;
        debug!(order_id = %placed.order_id, "Order placed");
        Ok(placed)
    }

    /// Fetch an order by ID.
    ///
    /// # Errors
    ///
    /// Returns `LookupFailure` with the server's error text (or a generic
    /// fallback) on a non-success status.
    #[instrument(skip(self), fields(order_id = %order_id))]
    async fn fetch_order(&self, order_id: OrderId) -> Result<OrderRecord, ApiError> {
        let response = self
            .inner
            .client
            .get(self.url(&format!("/orders/{order_id}")))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = read_error_body(response)
                .await
                .unwrap_or_else(|| GENERIC_LOOKUP_ERROR.to_string());
            tracing::warn!(status = %status, message = %message, "Order lookup failed");
            return Err(ApiError::LookupFailure(message));
        }

        Ok(response.json::<OrderRecord>().await?)
    }
}

/// Extract the server's `{"error": ...}` text from a failed response, if
/// the body actually has that shape.
async fn read_error_body(response: reqwest::Response) -> Option<String> {
    let body = response.text().await.ok()?;
    serde_json::from_str::<ApiErrorBody>(&body)
        .ok()
        .map(|b| b.error)
}
