//! Checkout route handler.
//!
//! Checkout is a single atomic request from the storefront's perspective:
//! the session cart becomes one `OrderRequest`, sent once, with no retry
//! logic and no idempotency key. The cart is only cleared when the backend
//! confirms the order.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use cartx_core::{OrderRequest, format_usd};
use tower_sessions::Session;
use tracing::instrument;

use crate::backend::ApiError;
use crate::models::Cart;
use crate::routes::cart::{CheckoutBarTemplate, load_cart, save_cart};
use crate::state::AppState;

// No capture form exists; every order is placed with this fixed identity.
const GUEST_NAME: &str = "Guest";
const GUEST_EMAIL: &str = "guest@example.com";
const GUEST_ADDRESS: &str = "N/A";

/// Checkout outcome fragment template, swapped into the checkout bar
/// region.
///
/// On success the bar is replaced by the confirmation. On failure the bar
/// is re-rendered with the error message so the user may retry with the
/// cart intact.
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_result.html")]
pub struct CheckoutResultTemplate {
    pub success: bool,
    pub message: String,
    pub count: usize,
    pub total: String,
}

impl CheckoutResultTemplate {
    fn placed(order_id: &str) -> Self {
        Self {
            success: true,
            message: format!("Order placed! ID: {order_id}"),
            count: 0,
            total: format_usd(rust_decimal::Decimal::ZERO),
        }
    }

    fn failed(message: String, cart: &Cart) -> Self {
        Self {
            success: false,
            message,
            count: cart.count(),
            total: format_usd(cart.subtotal()),
        }
    }
}

/// Submit the order (HTMX).
///
/// The triggering control is absent whenever the cart is empty; an
/// empty-cart post just re-renders the (empty) bar.
#[instrument(skip(state, session))]
pub async fn submit(State(state): State<AppState>, session: Session) -> Response {
    let mut cart = load_cart(&session).await;
    if cart.is_empty() {
        return CheckoutBarTemplate::for_cart(&cart).into_response();
    }

    let order = OrderRequest::new(
        GUEST_NAME,
        GUEST_EMAIL,
        GUEST_ADDRESS,
        cart.lines().to_vec(),
    );

    match state.api().create_order(&order).await {
        Ok(created) => {
            cart.clear();
            if let Err(e) = save_cart(&session, &cart).await {
                tracing::error!("Failed to clear cart in session: {e}");
            }

            // order-placed refreshes the nav count badge
            (
                AppendHeaders([("HX-Trigger", "order-placed")]),
                CheckoutResultTemplate::placed(created.id.as_str()),
            )
                .into_response()
        }
        Err(e @ ApiError::Rejected { .. }) => {
            tracing::warn!("Checkout rejected by backend: {e}");
            let detail = e.detail().unwrap_or("Unknown error");
            CheckoutResultTemplate::failed(format!("Checkout failed: {detail}"), &cart)
                .into_response()
        }
        Err(e) => {
            tracing::error!("Checkout request failed: {e}");
            CheckoutResultTemplate::failed("Checkout error".to_string(), &cart).into_response()
        }
    }
}
