use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the film store answers, `"degraded"` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the film store is reachable.
    pub db_healthy: bool,
}

/// GET /health -- service liveness plus a store probe.
///
/// Always answers 200: an unreachable store degrades the status field
/// rather than failing the check, so a dashboard in front of a down
/// database still distinguishes "API dead" from "store dead".
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = reelstats_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount health check routes at root level, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
