//! Handler for the most-rewatched films listing.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use reelstats_db::repositories::DiaryRepo;

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::state::AppState;

/// GET /api/most-rewatched-movies?limit=
///
/// Films ordered by rewatch count descending, title ascending on ties.
pub async fn most_rewatched_movies(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let films = DiaryRepo::most_rewatched(&state.pool, params.resolve()).await?;

    Ok(Json(films))
}
