//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - The storefront page
//! GET  /health                 - Health check
//!
//! # Products (HTMX fragments)
//! GET  /products/grid          - Product grid (replaces the skeleton tiles)
//!
//! # Cart (HTMX fragments)
//! POST /cart/add               - Add a line (returns count badge, triggers cart-updated)
//! GET  /cart/count             - Cart count badge (fragment)
//! GET  /cart/summary           - Floating checkout bar (empty when cart is empty)
//!
//! # Checkout
//! POST /checkout               - Submit the order (returns checkout bar region)
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
        .route("/summary", get(cart::summary))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // The single storefront page
        .route("/", get(home::home))
        // Product grid fragment
        .route("/products/grid", get(products::grid))
        // Cart fragments
        .nest("/cart", cart_routes())
        // Checkout submission
        .route("/checkout", post(checkout::submit))
}
