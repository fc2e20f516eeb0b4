//! Chart.js payload shapes and the grouped-count rows that feed them.

use reelstats_core::charts::{suppress_year_labels, MonthLabel};
use serde::Serialize;
use sqlx::FromRow;

/// Series name for the release-year chart.
pub const SERIES_MOVIES_WATCHED: &str = "Movies Watched";
/// Series name for the genre chart.
pub const SERIES_MOVIES_BY_GENRE: &str = "Movies by Genre";
/// Series name for the watched-over-time chart.
pub const SERIES_MOVIES_PER_MONTH: &str = "Movies Watched per Month";

/// A film count grouped by release year.
#[derive(Debug, Clone, FromRow)]
pub struct YearCount {
    pub year: i32,
    pub movie_count: i64,
}

/// A film count grouped by genre.
#[derive(Debug, Clone, FromRow)]
pub struct GenreCount {
    pub genre: String,
    pub movie_count: i64,
}

/// A diary-entry count grouped by (year, calendar month), chronologically
/// ordered by the query.
#[derive(Debug, Clone, FromRow)]
pub struct WatchMonthCount {
    pub watch_year: i64,
    pub month_name: String,
    pub movies_watched: i64,
}

/// The `{labels, datasets}` payload Chart.js consumes.
///
/// Generic over the label type: most charts label with plain strings, the
/// watch-month chart uses [`MonthLabel`] to stack the year under the month
/// on year boundaries.
#[derive(Debug, Serialize)]
pub struct ChartData<L = String> {
    pub labels: Vec<L>,
    pub datasets: Vec<Dataset>,
}

/// One named series within a [`ChartData`] payload.
#[derive(Debug, Serialize)]
pub struct Dataset {
    pub label: &'static str,
    pub data: Vec<i64>,
}

impl ChartData<String> {
    /// Shape release-year counts: one label per distinct year, ascending.
    pub fn release_year_chart(rows: Vec<YearCount>) -> Self {
        let (labels, data) = rows
            .into_iter()
            .map(|row| (row.year.to_string(), row.movie_count))
            .unzip();
        Self::single_series(SERIES_MOVIES_WATCHED, labels, data)
    }

    /// Shape genre counts: one label per genre, count-descending.
    pub fn genre_chart(rows: Vec<GenreCount>) -> Self {
        let (labels, data) = rows
            .into_iter()
            .map(|row| (row.genre, row.movie_count))
            .unzip();
        Self::single_series(SERIES_MOVIES_BY_GENRE, labels, data)
    }
}

impl ChartData<MonthLabel> {
    /// Shape chronological watch-month counts, attaching the year to a label
    /// only when it changes from the previous group.
    pub fn watch_month_chart(rows: Vec<WatchMonthCount>) -> Self {
        let labels = suppress_year_labels(
            rows.iter()
                .map(|row| (row.watch_year, row.month_name.as_str())),
        );
        let data = rows.into_iter().map(|row| row.movies_watched).collect();
        Self::single_series(SERIES_MOVIES_PER_MONTH, labels, data)
    }
}

impl<L> ChartData<L> {
    fn single_series(label: &'static str, labels: Vec<L>, data: Vec<i64>) -> Self {
        Self {
            labels,
            datasets: vec![Dataset { label, data }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_chart_stringifies_years_in_order() {
        let chart = ChartData::release_year_chart(vec![
            YearCount { year: 1999, movie_count: 3 },
            YearCount { year: 2004, movie_count: 1 },
        ]);
        assert_eq!(chart.labels, vec!["1999", "2004"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].label, SERIES_MOVIES_WATCHED);
        assert_eq!(chart.datasets[0].data, vec![3, 1]);
    }

    #[test]
    fn genre_chart_keeps_label_data_alignment() {
        let chart = ChartData::genre_chart(vec![
            GenreCount { genre: "Drama".into(), movie_count: 12 },
            GenreCount { genre: "Noir".into(), movie_count: 4 },
        ]);
        assert_eq!(chart.labels, vec!["Drama", "Noir"]);
        assert_eq!(chart.datasets[0].data, vec![12, 4]);
    }

    #[test]
    fn watch_month_chart_attaches_year_on_change_only() {
        let chart = ChartData::watch_month_chart(vec![
            WatchMonthCount { watch_year: 2023, month_name: "January  ".into(), movies_watched: 2 },
            WatchMonthCount { watch_year: 2023, month_name: "FEBRUARY".into(), movies_watched: 5 },
            WatchMonthCount { watch_year: 2024, month_name: "January".into(), movies_watched: 1 },
        ]);

        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(
            json["labels"],
            serde_json::json!([["January", "2023"], "February", ["January", "2024"]])
        );
        assert_eq!(json["datasets"][0]["label"], SERIES_MOVIES_PER_MONTH);
        assert_eq!(json["datasets"][0]["data"], serde_json::json!([2, 5, 1]));
    }

    #[test]
    fn empty_rows_serialize_to_empty_arrays() {
        let chart = ChartData::genre_chart(Vec::new());
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["labels"], serde_json::json!([]));
        assert_eq!(json["datasets"][0]["data"], serde_json::json!([]));
    }
}
