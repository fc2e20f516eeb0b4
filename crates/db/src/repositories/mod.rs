//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read-only
//! aggregate queries that accept `&PgPool` as the first argument. Every
//! query is parameterized; a row-level decode failure aborts the whole
//! operation with no partial result.

pub mod credits_repo;
pub mod diary_repo;
pub mod film_stats_repo;

pub use credits_repo::CreditsRepo;
pub use diary_repo::DiaryRepo;
pub use film_stats_repo::FilmStatsRepo;
