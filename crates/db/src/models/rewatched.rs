//! Most-rewatched film listing.

use serde::Serialize;
use sqlx::FromRow;

/// One film in the most-rewatched listing.
///
/// `poster_path` is coalesced to the empty string in SQL when the film has
/// no poster, so the client never sees a null.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RewatchedFilm {
    pub film_id: i32,
    pub title: String,
    pub poster_path: String,
    pub letterboxd_uri: String,
    pub rewatch_count: i64,
}
