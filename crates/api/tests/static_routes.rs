//! Integration tests for static asset serving and general routing.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{build_test_app, build_test_app_with_config, dead_pool, get, test_config};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: / serves the index document
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_serves_index_html() {
    let app = build_test_app(dead_pool());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));
}

// ---------------------------------------------------------------------------
// Test: manifest assets are served with their MIME types
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let app = build_test_app(dead_pool());
    let response = get(app, "/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/css"));
}

#[tokio::test]
async fn chart_scripts_are_served() {
    for route in [
        "/ChartConfig.js",
        "/statsLoader.js",
        "/MoviesByReleaseYearChart.js",
        "/mostRewatchedMovies.js",
    ] {
        let app = build_test_app(dead_pool());
        let response = get(app, route).await;
        assert_eq!(response.status(), StatusCode::OK, "route {route}");
    }
}

// ---------------------------------------------------------------------------
// Test: non-GET methods on static routes return 405
// ---------------------------------------------------------------------------

#[tokio::test]
async fn post_to_static_route_returns_405() {
    let app = build_test_app(dead_pool());
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: a manifest entry whose file is absent on disk returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_asset_file_returns_404() {
    let mut config = test_config();
    config.static_dir = "/nonexistent-static-root".into();
    let app = build_test_app_with_config(dead_pool(), config);

    let response = get(app, "/style.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(dead_pool());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = build_test_app(dead_pool());
    let response = get(app, "/").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
