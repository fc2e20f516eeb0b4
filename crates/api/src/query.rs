//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for top-N reports (`?limit=`).
///
/// `limit` is kept as a raw string so a non-numeric value can never fail
/// extraction with a 400; handlers resolve it leniently via
/// [`reelstats_core::limit::resolve_limit`].
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

impl LimitParams {
    /// Resolve to a usable row limit, clamping anything unusable to the
    /// default of 25.
    pub fn resolve(&self) -> i64 {
        reelstats_core::limit::resolve_limit(self.limit.as_deref())
    }
}
