//! Aggregate queries over the `diary_entries` watch log.

use sqlx::PgPool;

use crate::models::chart::WatchMonthCount;
use crate::models::rewatched::RewatchedFilm;
use crate::models::stats::RewatchStats;

/// Read-only reporting queries over diary (watch event) rows.
pub struct DiaryRepo;

impl DiaryRepo {
    /// Split of diary entries into rewatches and first watches. A NULL
    /// rewatch flag counts as a first watch.
    pub async fn rewatch_stats(pool: &PgPool) -> Result<RewatchStats, sqlx::Error> {
        sqlx::query_as::<_, RewatchStats>(
            "SELECT \
                COALESCE(SUM(CASE WHEN rewatch = TRUE THEN 1 ELSE 0 END), 0) AS rewatches, \
                COALESCE(SUM(CASE WHEN rewatch = FALSE OR rewatch IS NULL THEN 1 ELSE 0 END), 0) AS new_watches \
             FROM diary_entries",
        )
        .fetch_one(pool)
        .await
    }

    /// Films with the most rewatch diary entries, count-descending with
    /// ties broken by title ascending.
    pub async fn most_rewatched(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<RewatchedFilm>, sqlx::Error> {
        sqlx::query_as::<_, RewatchedFilm>(
            "SELECT f.id AS film_id, f.title, \
                    COALESCE(f.poster_path, '') AS poster_path, \
                    f.letterboxd_uri, \
                    COUNT(de.id) AS rewatch_count \
             FROM films f \
             JOIN diary_entries de ON f.id = de.film_id \
             WHERE de.rewatch = TRUE \
             GROUP BY f.id, f.title, f.poster_path, f.letterboxd_uri \
             ORDER BY rewatch_count DESC, f.title ASC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Diary-entry counts grouped by (year, calendar month) of the watched
    /// date, ordered chronologically: year ascending, then month number
    /// ascending (not alphabetical month name).
    ///
    /// `TO_CHAR(date, 'Month')` blank-pads the month name, hence the TRIM;
    /// casing is normalized later when labels are shaped.
    pub async fn counts_by_watch_month(pool: &PgPool) -> Result<Vec<WatchMonthCount>, sqlx::Error> {
        sqlx::query_as::<_, WatchMonthCount>(
            "SELECT EXTRACT(YEAR FROM watched_date)::BIGINT AS watch_year, \
                    TRIM(TO_CHAR(watched_date, 'Month')) AS month_name, \
                    COUNT(*) AS movies_watched \
             FROM diary_entries \
             WHERE watched_date IS NOT NULL \
             GROUP BY watch_year, month_name, EXTRACT(MONTH FROM watched_date) \
             ORDER BY watch_year ASC, EXTRACT(MONTH FROM watched_date) ASC",
        )
        .fetch_all(pool)
        .await
    }
}
