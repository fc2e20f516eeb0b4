//! Chart label shaping for the watched-over-time report.
//!
//! The watch-month chart labels its chronological axis with month names and
//! attaches the year only when it changes, so a run of months inside the
//! same year reads "January 2023, February, March, ... January 2024".

use serde::Serialize;

/// A single x-axis label for the watch-month chart.
///
/// Serializes untagged: a plain month is a JSON string, a year boundary is a
/// two-element `[month, year]` array. Chart.js renders the array form as a
/// stacked two-line tick label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MonthLabel {
    /// Month within the previously labeled year, e.g. `"February"`.
    Month(String),
    /// First month of a new year, e.g. `["January", "2023"]`.
    MonthWithYear([String; 2]),
}

/// Normalize a month name to title case, e.g. `"OCTOBER  "` -> `"October"`.
///
/// Postgres `TO_CHAR(date, 'Month')` blank-pads to nine characters and the
/// casing depends on the format template, so both are normalized here.
pub fn title_case_month(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Fold chronologically ordered `(year, month name)` pairs into axis labels,
/// attaching the year only when it differs from the last one emitted.
///
/// The input must already be sorted year-ascending, calendar-month-ascending;
/// this function preserves order and only decides label shape.
pub fn suppress_year_labels<'a, I>(groups: I) -> Vec<MonthLabel>
where
    I: IntoIterator<Item = (i64, &'a str)>,
{
    let mut labels = Vec::new();
    let mut previous_year: Option<i64> = None;

    for (year, month_name) in groups {
        let month = title_case_month(month_name);
        if previous_year != Some(year) {
            labels.push(MonthLabel::MonthWithYear([month, year.to_string()]));
            previous_year = Some(year);
        } else {
            labels.push(MonthLabel::Month(month));
        }
    }

    labels
}
