//! Handlers for the chart-shaped reports.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use reelstats_db::models::chart::ChartData;
use reelstats_db::repositories::{DiaryRepo, FilmStatsRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/film-count-by-release-year
///
/// Film counts per release year, ascending. Films without a release year
/// never appear.
pub async fn film_count_by_release_year(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = FilmStatsRepo::counts_by_release_year(&state.pool).await?;

    Ok(Json(ChartData::release_year_chart(rows)))
}

/// GET /api/film-count-by-genre
///
/// Film counts per genre, count-descending. A film with N genres counts
/// once in each of its N groups.
pub async fn film_count_by_genre(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = FilmStatsRepo::counts_by_genre(&state.pool).await?;

    Ok(Json(ChartData::genre_chart(rows)))
}

/// GET /api/film-count-by-watch-month
///
/// Diary-entry counts per calendar month, chronological, with the year
/// attached to a label only when it changes.
pub async fn film_count_by_watch_month(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = DiaryRepo::counts_by_watch_month(&state.pool).await?;

    Ok(Json(ChartData::watch_month_chart(rows)))
}
