//! Lenient parsing for the `limit` query parameter of top-N reports.

/// Default number of entries for top-N and most-rewatched reports.
pub const DEFAULT_LIMIT: i64 = 25;

/// Resolve a raw `limit` query value to a usable row limit.
///
/// An absent, empty, non-numeric, or non-positive value silently falls back
/// to [`DEFAULT_LIMIT`]; a bad limit is never a client error.
pub fn resolve_limit(raw: Option<&str>) -> i64 {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => match s.parse::<i64>() {
            Ok(n) if n > 0 => n,
            _ => DEFAULT_LIMIT,
        },
        _ => DEFAULT_LIMIT,
    }
}
