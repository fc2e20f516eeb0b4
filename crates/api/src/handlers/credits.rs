//! Handlers for the top-N credit listings.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use reelstats_db::repositories::CreditsRepo;

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::state::AppState;

/// GET /api/top-directors?limit=
///
/// Top directors by film count. A bad `limit` silently falls back to 25.
pub async fn top_directors(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let entries = CreditsRepo::top_directors(&state.pool, params.resolve()).await?;

    Ok(Json(entries))
}

/// GET /api/top-actors?limit=
///
/// Top actors by film count, same limit handling as directors.
pub async fn top_actors(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let entries = CreditsRepo::top_actors(&state.pool, params.resolve()).await?;

    Ok(Json(entries))
}
