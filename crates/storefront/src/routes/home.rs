//! Storefront page route handler.
//!
//! Renders the whole single-page composition: navigation with the live
//! cart count, the static hero, the product section (skeleton tiles that
//! HTMX swaps for the real grid), the floating checkout bar region, and
//! the footer. Rendering also fires the best-effort demo-data seed.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Number of skeleton tiles shown while the catalog loads.
const SKELETON_TILES: usize = 8;

/// The storefront page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Current cart line count for the nav badge.
    pub cart_count: usize,
    /// One entry per skeleton tile.
    pub skeleton_tiles: Vec<u8>,
}

/// Display the storefront page.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    // Attempt seed for demo convenience. Fire-and-forget: the outcome has
    // no bearing on anything that follows.
    let api = state.api().clone();
    tokio::spawn(async move {
        if let Err(e) = api.seed().await {
            tracing::debug!("Seed request failed: {e}");
        }
    });

    let cart = load_cart(&session).await;

    HomeTemplate {
        cart_count: cart.count(),
        skeleton_tiles: vec![0; SKELETON_TILES],
    }
}
