//! Scalar and paired summary statistics.

use serde::Serialize;
use sqlx::FromRow;

/// A single row count, e.g. total films watched or rated.
#[derive(Debug, Clone, Serialize)]
pub struct StatCount {
    pub count: i64,
}

/// Total hours watched, derived from summed runtime minutes.
#[derive(Debug, Clone, Serialize)]
pub struct HoursWatchedStat {
    pub total_hours: f64,
}

/// Diary split between rewatches and first watches.
///
/// A NULL rewatch flag counts as a new watch.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RewatchStats {
    pub rewatches: i64,
    pub new_watches: i64,
}
