//! Backend API client implementation.

use std::sync::Arc;

use cartx_core::{ErrorDetail, OrderCreated, OrderRequest, Product, ProductList};
use tracing::{debug, instrument};

use crate::backend::ApiError;
use crate::config::BackendConfig;

/// Client for the backend REST API.
///
/// Cheaply cloneable; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new backend API client.
    #[must_use]
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Fetch the product catalog.
    ///
    /// Returns the items in the order the backend provided them.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// malformed body.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/api/products"))
            .send()
            .await?;

        let status = response.status();
        // Read the body as text first for better error diagnostics
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                body = %truncate(&text),
                "Product listing returned non-success status"
            );
            return Err(rejection(status, &text));
        }

        let list: ProductList = serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(
                error = %e,
                body = %truncate(&text),
                "Failed to parse product listing"
            );
            ApiError::Parse(e)
        })?;

        debug!(count = list.items.len(), "Fetched product catalog");
        Ok(list.items)
    }

    /// Fire the demo-data seed hook.
    ///
    /// The response body is ignored entirely; only transport and status
    /// failures are reported, and callers are expected to ignore those too.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/api/seed"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected {
                status,
                detail: None,
            });
        }
        Ok(())
    }

    /// Submit an order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the server-provided detail (when
    /// present) on a non-success status, `ApiError::Http` on transport
    /// failure, and `ApiError::Parse` if a success body lacks the order ID.
    #[instrument(skip(self, order), fields(items = order.items.len()))]
    pub async fn create_order(&self, order: &OrderRequest) -> Result<OrderCreated, ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/api/orders"))
            .json(order)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                body = %truncate(&text),
                "Order submission rejected"
            );
            return Err(rejection(status, &text));
        }

        let created: OrderCreated = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %truncate(&text),
                "Order accepted but response lacked an order ID"
            );
            ApiError::Parse(e)
        })?;

        debug!(order_id = %created.id, "Order created");
        Ok(created)
    }
}

/// Build a `Rejected` error, salvaging the `detail` field if the failure
/// body carried one.
fn rejection(status: reqwest::StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .and_then(|e| e.detail);
    ApiError::Rejected { status, detail }
}

/// Truncate a response body for log output.
fn truncate(body: &str) -> String {
    body.chars().take(500).collect()
}
