//! Product grid route handler.
//!
//! The storefront page renders skeleton tiles and swaps in this fragment
//! once it loads. A catalog failure degrades to an empty grid; there is no
//! retry and no user-visible error.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use cartx_core::{Product, format_usd};
use tracing::instrument;

use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Formatted price for display, e.g. `$19.99`.
    pub price: String,
    /// Raw decimal price carried through the "Add" form, e.g. `19.99`.
    pub price_value: String,
    pub image: Option<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: format_usd(product.price),
            price_value: product.price.to_string(),
            image: product.image.clone(),
        }
    }
}

/// Product grid fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductCardView>,
}

/// Display the product grid fragment (HTMX).
#[instrument(skip(state))]
pub async fn grid(State(state): State<AppState>) -> impl IntoResponse {
    let products = state.api().list_products().await.map_or_else(
        |e| {
            tracing::warn!("Failed to load catalog: {e}");
            Vec::new()
        },
        |items| items.iter().map(ProductCardView::from).collect(),
    );

    ProductGridTemplate { products }
}
