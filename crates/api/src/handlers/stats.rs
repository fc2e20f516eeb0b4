//! Handlers for the scalar summary statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use reelstats_db::repositories::{DiaryRepo, FilmStatsRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats/total-watched -- `{count}` of all films in the log.
pub async fn total_watched(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stat = FilmStatsRepo::total_films_watched(&state.pool).await?;

    Ok(Json(stat))
}

/// GET /api/stats/total-rated -- `{count}` of rating entries with a rating.
pub async fn total_rated(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stat = FilmStatsRepo::total_films_rated(&state.pool).await?;

    Ok(Json(stat))
}

/// GET /api/stats/total-hours -- `{total_hours}` summed over known runtimes.
pub async fn total_hours(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stat = FilmStatsRepo::total_hours_watched(&state.pool).await?;

    Ok(Json(stat))
}

/// GET /api/stats/rewatches -- `{rewatches, new_watches}` diary split.
pub async fn rewatches(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stat = DiaryRepo::rewatch_stats(&state.pool).await?;

    Ok(Json(stat))
}
