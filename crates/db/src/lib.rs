//! Database access layer: connection pool construction and the read-only
//! reporting repositories.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool and establish at least one connection.
///
/// Fails fast when the store is unreachable, which is the desired boot
/// behavior: the server must not start without a working database.
pub async fn create_pool(options: PgConnectOptions) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

/// Create a pool without connecting.
///
/// Connections are only attempted on first acquire, with the given timeout.
/// Used by integration tests that exercise store-unavailable handling.
pub fn create_lazy_pool(options: PgConnectOptions, acquire_timeout: Duration) -> DbPool {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(acquire_timeout)
        .connect_lazy_with(options)
}

/// Cheap liveness probe (`SELECT 1`).
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
