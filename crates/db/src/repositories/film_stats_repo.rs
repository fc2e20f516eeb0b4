//! Aggregate queries over the `films` table: grouped counts and totals.

use sqlx::PgPool;

use crate::models::chart::{GenreCount, YearCount};
use crate::models::stats::{HoursWatchedStat, StatCount};

/// Read-only reporting queries over the film log itself.
pub struct FilmStatsRepo;

impl FilmStatsRepo {
    /// Film counts grouped by release year, ascending. Films without a
    /// release year are excluded entirely.
    pub async fn counts_by_release_year(pool: &PgPool) -> Result<Vec<YearCount>, sqlx::Error> {
        sqlx::query_as::<_, YearCount>(
            "SELECT year, COUNT(*) AS movie_count \
             FROM films \
             WHERE year IS NOT NULL \
             GROUP BY year \
             ORDER BY year ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Film counts grouped by genre, count-descending.
    ///
    /// `genres` is a `TEXT[]` column; a film with N genres contributes to N
    /// groups. NULL and empty-string elements are filtered out before
    /// grouping.
    pub async fn counts_by_genre(pool: &PgPool) -> Result<Vec<GenreCount>, sqlx::Error> {
        sqlx::query_as::<_, GenreCount>(
            "SELECT g.genre AS genre, COUNT(*) AS movie_count \
             FROM films, UNNEST(genres) AS g(genre) \
             WHERE g.genre IS NOT NULL AND g.genre <> '' \
             GROUP BY g.genre \
             ORDER BY movie_count DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Total number of films in the log.
    pub async fn total_films_watched(pool: &PgPool) -> Result<StatCount, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM films")
            .fetch_one(pool)
            .await?;
        Ok(StatCount { count })
    }

    /// Total number of rating entries with a non-null rating.
    pub async fn total_films_rated(pool: &PgPool) -> Result<StatCount, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ratings_entries WHERE rating IS NOT NULL",
        )
        .fetch_one(pool)
        .await?;
        Ok(StatCount { count })
    }

    /// Summed runtime across all films, in hours. Zero when no film has a
    /// known runtime.
    pub async fn total_hours_watched(pool: &PgPool) -> Result<HoursWatchedStat, sqlx::Error> {
        let total_minutes = sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(runtime), 0) FROM films WHERE runtime IS NOT NULL",
        )
        .fetch_one(pool)
        .await?;
        Ok(HoursWatchedStat {
            total_hours: total_minutes as f64 / 60.0,
        })
    }
}
