//! Wire types for the backend product catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A purchasable product as returned by `GET /api/products`.
///
/// The storefront holds a read-only copy fetched at page load; products are
/// created and owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend document ID.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Short description shown on the product card.
    #[serde(default)]
    pub description: String,
    /// Unit price in USD. A JSON number on the wire.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Optional image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Response body of `GET /api/products`.
///
/// A missing `items` field is treated the same as an empty catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub items: Vec<Product>,
}
