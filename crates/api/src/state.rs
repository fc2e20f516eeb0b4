use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable; the pool is internally reference-counted and
/// safe for concurrent use across in-flight requests. No other shared
/// mutable state exists.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only queries only).
    pub pool: reelstats_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
