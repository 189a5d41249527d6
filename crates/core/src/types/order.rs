//! Wire types for cart lines and order submission.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::{OrderId, ProductId};
use crate::types::product::Product;

/// One added-to-cart product instance.
///
/// Adding the same product twice yields two separate lines; lines are never
/// merged and quantity is fixed at 1 per add. The same shape is sent as an
/// order entry in `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// ID of the product this line was created from.
    pub product_id: ProductId,
    /// Title copied from the product at add time.
    pub title: String,
    /// Unit price copied from the product at add time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Always 1 in this design.
    pub quantity: u32,
    /// Image URL copied from the product at add time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLine {
    /// Create a line for one unit of `product`.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            quantity: 1,
            image: product.image.clone(),
        }
    }

    /// Price of this line (`price * quantity`), exact.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Exact sum of `price * quantity` over `lines`.
#[must_use]
pub fn subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

/// Body of `POST /api/orders`.
///
/// Constructed transiently at checkout time, sent once, not retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub address: String,
    /// Cart lines in the order they were added.
    pub items: Vec<CartLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Always zero in this design.
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping: Decimal,
    /// Equal to `subtotal`; shipping is zero.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl OrderRequest {
    /// Build an order for `items`, deriving the money fields.
    ///
    /// Upholds `total == subtotal == Σ(price * quantity)` by construction;
    /// shipping is always zero.
    #[must_use]
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        address: impl Into<String>,
        items: Vec<CartLine>,
    ) -> Self {
        let subtotal = subtotal(&items);
        Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            address: address.into(),
            items,
            subtotal,
            shipping: Decimal::ZERO,
            total: subtotal,
        }
    }
}

/// Success body of `POST /api/orders`. The backend must return `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    #[serde(rename = "_id")]
    pub id: OrderId,
}

/// Failure body of `POST /api/orders`; `detail` may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}
