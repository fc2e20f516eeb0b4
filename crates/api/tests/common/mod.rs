//! Shared harness for integration tests.
//!
//! Builds the full application router (same middleware stack as
//! production) over a lazily-connected pool aimed at a port nothing
//! listens on. Static routes and routing behavior need no database;
//! API routes exercise the store-unavailable path.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgConnectOptions;
use tower::ServiceExt;

use reelstats_api::config::ServerConfig;
use reelstats_api::router::build_app_router;
use reelstats_api::state::AppState;

/// Build a test `ServerConfig` pointing at the workspace `static/` tree.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: workspace_static_dir(),
    }
}

/// Path to the real `static/` directory at the workspace root.
pub fn workspace_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static")
}

/// A pool whose connections are never established: port 1 on localhost is
/// unassigned, so the first acquire fails within the 1-second timeout.
pub fn dead_pool() -> reelstats_db::DbPool {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("reelstats")
        .database("reelstats_test");
    reelstats_db::create_lazy_pool(options, Duration::from_secs(1))
}

/// Build the full application router with all middleware layers over the
/// given pool, mirroring `main.rs`.
pub fn build_test_app(pool: reelstats_db::DbPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

/// Like [`build_test_app`] but with a custom config (e.g. a bogus static
/// root to simulate missing asset files).
pub fn build_test_app_with_config(pool: reelstats_db::DbPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request build"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert the standard 500 `{error, code}` payload with the given code.
pub async fn assert_error_code(response: Response<Body>, code: &str) {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(json["error"].is_string());
}
