#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;

use qr_redirect::api::handlers::{health_handler, resolve_handler};
use qr_redirect::api::middleware::auth;
use qr_redirect::api::routes::protected_routes;
use qr_redirect::infrastructure::kv::MemoryStore;
use qr_redirect::infrastructure::persistence::KvRegistry;
use qr_redirect::state::AppState;

/// Admin token wired into every test state.
pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Builds an application state over a fresh in-memory store.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let registry = Arc::new(KvRegistry::new(store.clone()));
    let state = AppState::new(registry, ADMIN_TOKEN.to_string());
    (state, store)
}

/// Builds a test server with the full route surface: public resolution and
/// health plus the token-protected management routes.
pub fn make_server(state: AppState) -> TestServer {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .route("/resolve/{slug}", get(resolve_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Bearer header value for authorized requests.
pub fn bearer() -> String {
    format!("Bearer {}", ADMIN_TOKEN)
}

/// A valid creation payload with the given identity and creation time.
pub fn code_payload(id: &str, slug: &str, target_url: &str, created_at: i64) -> Value {
    json!({
        "id": id,
        "title": format!("Code {}", id),
        "slug": slug,
        "targetUrl": target_url,
        "createdAt": created_at,
        "scanCount": 0,
        "style": {
            "fgColor": "#000000",
            "bgColor": "#ffffff",
            "level": "M",
            "includeMargin": true,
            "size": 256
        }
    })
}

/// Creates a record through the API, asserting success.
pub async fn create_code(server: &TestServer, payload: &Value) {
    let response = server
        .post("/codes")
        .add_header("Authorization", bearer())
        .json(payload)
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
}
