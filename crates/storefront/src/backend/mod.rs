//! Backend REST API client.
//!
//! # Architecture
//!
//! - The backend is the source of truth for the catalog and orders - NO
//!   local sync, direct API calls per request
//! - Plain JSON over REST via `reqwest`
//!
//! # Endpoints
//!
//! - `GET /api/products` - product catalog, server order preserved
//! - `POST /api/seed` - best-effort demo data seeding, response ignored
//! - `POST /api/orders` - order submission
//!
//! # Example
//!
//! ```rust,ignore
//! use cartx_storefront::backend::ApiClient;
//!
//! let api = ApiClient::new(&config.backend);
//!
//! let products = api.list_products().await?;
//! let order = OrderRequest::new("Guest", "guest@example.com", "N/A", lines);
//! let created = api.create_order(&order).await?;
//! ```

mod client;

pub use client::ApiClient;

use thiserror::Error;

/// Errors that can occur when interacting with the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connect, timeout, or body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Backend answered with a non-success status.
    #[error("Backend rejected request (HTTP {status}): {}", detail.as_deref().unwrap_or("no detail provided"))]
    Rejected {
        /// HTTP status returned by the backend.
        status: reqwest::StatusCode,
        /// Server-provided error detail, if the body carried one.
        detail: Option<String>,
    },
}

impl ApiError {
    /// Server-provided error detail, if any.
    ///
    /// Only `Rejected` errors can carry one; transport and parse failures
    /// have nothing user-presentable.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_error_display_with_detail() {
        let err = ApiError::Rejected {
            status: reqwest::StatusCode::UNPROCESSABLE_ENTITY,
            detail: Some("out of stock".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Backend rejected request (HTTP 422 Unprocessable Entity): out of stock"
        );
        assert_eq!(err.detail(), Some("out of stock"));
    }

    #[test]
    fn test_rejected_error_display_without_detail() {
        let err = ApiError::Rejected {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            detail: None,
        };
        assert_eq!(
            err.to_string(),
            "Backend rejected request (HTTP 500 Internal Server Error): no detail provided"
        );
        assert_eq!(err.detail(), None);
    }
}
