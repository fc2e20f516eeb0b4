pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /film-count-by-release-year       release-year chart
/// /film-count-by-genre              genre chart
/// /film-count-by-watch-month        watched-over-time chart
///
/// /top-directors                    top directors (?limit=, default 25)
/// /top-actors                       top actors (?limit=, default 25)
///
/// /stats/total-watched              total films watched
/// /stats/total-rated                total films rated
/// /stats/total-hours                total hours watched
/// /stats/rewatches                  rewatch vs first-watch split
///
/// /most-rewatched-movies            most rewatched films (?limit=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/film-count-by-release-year",
            get(handlers::charts::film_count_by_release_year),
        )
        .route(
            "/film-count-by-genre",
            get(handlers::charts::film_count_by_genre),
        )
        .route(
            "/film-count-by-watch-month",
            get(handlers::charts::film_count_by_watch_month),
        )
        .route("/top-directors", get(handlers::credits::top_directors))
        .route("/top-actors", get(handlers::credits::top_actors))
        .route("/stats/total-watched", get(handlers::stats::total_watched))
        .route("/stats/total-rated", get(handlers::stats::total_rated))
        .route("/stats/total-hours", get(handlers::stats::total_hours))
        .route("/stats/rewatches", get(handlers::stats::rewatches))
        .route(
            "/most-rewatched-movies",
            get(handlers::rewatched::most_rewatched_movies),
        )
}
