//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the visitor's session; every fragment here is a
//! pure function of that state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Response},
};
use cartx_core::{CartLine, ProductId, format_usd};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::models::{Cart, session_keys};

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, falling back to an empty cart.
pub(crate) async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the cart in the session.
pub(crate) async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

/// Add to cart form data, posted by the product card "Add" button.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub title: String,
    pub price: Decimal,
    pub image: Option<String>,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Floating checkout bar fragment template (for HTMX).
///
/// Renders nothing when the cart is empty, so the checkout control is
/// absent exactly when checkout must not be triggerable.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_bar.html")]
pub struct CheckoutBarTemplate {
    pub count: usize,
    pub total: String,
}

impl CheckoutBarTemplate {
    /// Build the bar fragment for the current cart state.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        Self {
            count: cart.count(),
            total: format_usd(cart.subtotal()),
        }
    }
}

/// Add one line to the cart (HTMX).
///
/// Appends a new line for the posted product; lines are never merged.
/// Returns the refreshed count badge plus a `cart-updated` trigger that the
/// checkout bar listens for. A session write failure means the line was
/// not kept, so it surfaces as an error instead of a stale badge.
#[instrument(skip(session, form), fields(product_id = %form.product_id))]
pub async fn add(
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let mut cart = load_cart(&session).await;
    cart.add(CartLine {
        product_id: ProductId::new(form.product_id),
        title: form.title,
        price: form.price,
        quantity: 1,
        // HTML forms post missing images as an empty string
        image: form.image.filter(|url| !url.is_empty()),
    });

    save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count: cart.count() },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartCountTemplate { count: cart.count() }
}

/// Get the floating checkout bar (HTMX).
#[instrument(skip(session))]
pub async fn summary(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CheckoutBarTemplate::for_cart(&cart)
}
