//! End-to-end flows through the storefront router.
//!
//! Each test spins up a throwaway axum server playing the backend API and
//! drives the storefront router directly with `tower::ServiceExt::oneshot`,
//! carrying the session cookie between requests by hand.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tower::ServiceExt;

use cartx_storefront::config::{BackendConfig, StorefrontConfig};
use cartx_storefront::state::AppState;

// =============================================================================
// Test Harness
// =============================================================================

/// Serve `router` on an ephemeral port, returning its base URL.
async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A stub backend with a fixed catalog and a fixed order outcome.
fn stub_backend(products: Value, order_status: StatusCode, order_body: Value) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(move || {
                let body = products.clone();
                async move { Json(body) }
            }),
        )
        .route("/api/seed", post(|| async { StatusCode::OK }))
        .route(
            "/api/orders",
            post(move || {
                let body = order_body.clone();
                async move { (order_status, Json(body)) }
            }),
        )
}

fn lamp_catalog() -> Value {
    json!({
        "items": [
            { "_id": "1", "title": "Lamp", "description": "A glowing lamp", "price": 19.99 }
        ]
    })
}

/// Build the storefront app pointed at `backend_url`.
fn storefront(backend_url: String) -> Router {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        backend: BackendConfig {
            base_url: backend_url,
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    };
    cartx_storefront::app(AppState::new(config))
}

struct Reply {
    status: StatusCode,
    cookie: Option<String>,
    hx_trigger: Option<String>,
    body: String,
}

async fn send(app: &Router, request: Request<Body>) -> Reply {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(';').next())
        .map(ToString::to_string);
    let hx_trigger = response
        .headers()
        .get("hx-trigger")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    Reply {
        status,
        cookie,
        hx_trigger,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

const ADD_LAMP: &str = "product_id=1&title=Lamp&price=19.99";

// =============================================================================
// Page Shell
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let backend = spawn_backend(stub_backend(lamp_catalog(), StatusCode::OK, json!({}))).await;
    let app = storefront(backend);

    let reply = send(&app, get_request("/health", None)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body, "ok");
}

#[tokio::test]
async fn storefront_page_renders_shell_with_skeleton_tiles() {
    let backend = spawn_backend(stub_backend(lamp_catalog(), StatusCode::OK, json!({}))).await;
    let app = storefront(backend);

    let reply = send(&app, get_request("/", None)).await;
    assert_eq!(reply.status, StatusCode::OK);

    // Nav, hero, grid placeholder, footer
    assert!(reply.body.contains("CART"));
    assert!(reply.body.contains("Featured Products"));
    assert!(reply.body.contains("id=\"cart-count\""));
    assert_eq!(reply.body.matches("product-card skeleton").count(), 8);
}

// =============================================================================
// Product Grid
// =============================================================================

#[tokio::test]
async fn grid_renders_catalog_in_server_order() {
    let catalog = json!({
        "items": [
            { "_id": "b", "title": "Desk", "description": "Walnut desk", "price": 249.5 },
            { "_id": "a", "title": "Lamp", "description": "A glowing lamp", "price": 19.99 }
        ]
    });
    let backend = spawn_backend(stub_backend(catalog, StatusCode::OK, json!({}))).await;
    let app = storefront(backend);

    let reply = send(&app, get_request("/products/grid", None)).await;
    assert_eq!(reply.status, StatusCode::OK);

    // One card per item, in the order the backend returned them
    assert_eq!(reply.body.matches("class=\"product-card\"").count(), 2);
    assert!(reply.body.contains("$249.50"));
    assert!(reply.body.contains("$19.99"));
    let desk = reply.body.find("Desk").unwrap();
    let lamp = reply.body.find("Lamp").unwrap();
    assert!(desk < lamp);
}

#[tokio::test]
async fn grid_degrades_to_empty_on_backend_error() {
    let failing = Router::new().route(
        "/api/products",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let backend = spawn_backend(failing).await;
    let app = storefront(backend);

    let reply = send(&app, get_request("/products/grid", None)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body.matches("class=\"product-card\"").count(), 0);
}

#[tokio::test]
async fn grid_degrades_to_empty_on_malformed_body() {
    let garbled = Router::new().route("/api/products", get(|| async { "not json at all" }));
    let backend = spawn_backend(garbled).await;
    let app = storefront(backend);

    let reply = send(&app, get_request("/products/grid", None)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body.matches("class=\"product-card\"").count(), 0);
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn adding_same_product_twice_yields_two_lines() {
    let backend = spawn_backend(stub_backend(lamp_catalog(), StatusCode::OK, json!({}))).await;
    let app = storefront(backend);

    let first = send(&app, post_form("/cart/add", ADD_LAMP, None)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.hx_trigger.as_deref(), Some("cart-updated"));
    assert!(first.body.contains(">1</span>"));
    let cookie = first.cookie.expect("add must establish a session");

    let second = send(&app, post_form("/cart/add", ADD_LAMP, Some(&cookie))).await;
    assert!(second.body.contains(">2</span>"));

    // Two independently priced lines: exact sum, no merge
    let summary = send(&app, get_request("/cart/summary", Some(&cookie))).await;
    assert!(summary.body.contains("2 item(s)"));
    assert!(summary.body.contains("$39.98"));
    assert!(summary.body.contains("Checkout"));
}

#[tokio::test]
async fn empty_cart_summary_exposes_no_checkout_control() {
    let backend = spawn_backend(stub_backend(lamp_catalog(), StatusCode::OK, json!({}))).await;
    let app = storefront(backend);

    let reply = send(&app, get_request("/cart/summary", None)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(!reply.body.contains("Checkout"));

    let count = send(&app, get_request("/cart/count", None)).await;
    assert!(count.body.contains(">0</span>"));
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn checkout_success_reports_order_id_and_clears_cart() {
    let backend = spawn_backend(stub_backend(
        lamp_catalog(),
        StatusCode::OK,
        json!({ "_id": "ord-42" }),
    ))
    .await;
    let app = storefront(backend);

    let added = send(&app, post_form("/cart/add", ADD_LAMP, None)).await;
    let cookie = added.cookie.expect("add must establish a session");

    let reply = send(&app, post_form("/checkout", "", Some(&cookie))).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("Order placed! ID: ord-42"));
    assert_eq!(reply.hx_trigger.as_deref(), Some("order-placed"));

    // Cart count resets to 0 and the total display is gone
    let count = send(&app, get_request("/cart/count", Some(&cookie))).await;
    assert!(count.body.contains(">0</span>"));
    let summary = send(&app, get_request("/cart/summary", Some(&cookie))).await;
    assert!(!summary.body.contains("Checkout"));
    assert!(!summary.body.contains('$'));
}

#[tokio::test]
async fn checkout_failure_shows_detail_and_preserves_cart() {
    let backend = spawn_backend(stub_backend(
        lamp_catalog(),
        StatusCode::UNPROCESSABLE_ENTITY,
        json!({ "detail": "out of stock" }),
    ))
    .await;
    let app = storefront(backend);

    let added = send(&app, post_form("/cart/add", ADD_LAMP, None)).await;
    let cookie = added.cookie.expect("add must establish a session");

    let reply = send(&app, post_form("/checkout", "", Some(&cookie))).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("Checkout failed: out of stock"));
    assert_eq!(reply.hx_trigger, None);

    // Cart untouched so the user may retry
    let summary = send(&app, get_request("/cart/summary", Some(&cookie))).await;
    assert!(summary.body.contains("1 item(s)"));
    assert!(summary.body.contains("$19.99"));
    assert!(summary.body.contains("Checkout"));
}

#[tokio::test]
async fn checkout_transport_failure_shows_generic_error() {
    // Nothing listens on port 1; the order request fails at connect time
    let app = storefront("http://127.0.0.1:1".to_string());

    let added = send(&app, post_form("/cart/add", ADD_LAMP, None)).await;
    let cookie = added.cookie.expect("add must establish a session");

    let reply = send(&app, post_form("/checkout", "", Some(&cookie))).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.body.contains("Checkout error"));

    let summary = send(&app, get_request("/cart/summary", Some(&cookie))).await;
    assert!(summary.body.contains("1 item(s)"));
}

#[tokio::test]
async fn checkout_with_empty_cart_is_a_noop() {
    let backend = spawn_backend(stub_backend(lamp_catalog(), StatusCode::OK, json!({}))).await;
    let app = storefront(backend);

    let reply = send(&app, post_form("/checkout", "", None)).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(!reply.body.contains("Order placed"));
    assert!(!reply.body.contains("Checkout failed"));
}
