//! Top-N credit queries: directors and actors by film count.

use sqlx::PgPool;

use crate::models::credit::CreditEntry;

/// Read-only top-N listings over the array-valued credit columns.
///
/// The name array and its profile-path array are assumed positionally
/// aligned per film; multi-argument `UNNEST` expands one row per position,
/// NULL-padding the shorter array. A length mismatch in the store silently
/// misattributes images, which matches the ingestion contract.
pub struct CreditsRepo;

impl CreditsRepo {
    /// Top directors by number of films directed.
    pub async fn top_directors(pool: &PgPool, limit: i64) -> Result<Vec<CreditEntry>, sqlx::Error> {
        Self::top_credits(pool, "directors", "director_profile_paths", limit).await
    }

    /// Top actors by number of films appeared in.
    pub async fn top_actors(pool: &PgPool, limit: i64) -> Result<Vec<CreditEntry>, sqlx::Error> {
        Self::top_credits(pool, "actors", "actor_profile_paths", limit).await
    }

    /// Shared grouped count over a (name array, profile-path array) column
    /// pair. The profile path for a name is the first non-empty path
    /// aggregated across its films. Empty and NULL names are discarded
    /// before grouping.
    ///
    /// Column names are compile-time constants, never user input; `limit`
    /// is a bound parameter.
    async fn top_credits(
        pool: &PgPool,
        name_column: &str,
        path_column: &str,
        limit: i64,
    ) -> Result<Vec<CreditEntry>, sqlx::Error> {
        let query = format!(
            "SELECT c.name, COUNT(*) AS film_count, \
                    (ARRAY_REMOVE(ARRAY_AGG(NULLIF(c.profile_path, '')), NULL))[1] AS profile_path \
             FROM films, UNNEST({name_column}, {path_column}) AS c(name, profile_path) \
             WHERE c.name IS NOT NULL AND c.name <> '' \
             GROUP BY c.name \
             ORDER BY film_count DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, CreditEntry>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
