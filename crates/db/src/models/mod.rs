//! Row models and response shapes for the reporting queries.
//!
//! Each submodule pairs the `FromRow` structs a repository decodes into with
//! the `Serialize` shapes the API returns. Nothing here is persisted; every
//! value is built fresh per request and discarded after serialization.

pub mod chart;
pub mod credit;
pub mod rewatched;
pub mod stats;
