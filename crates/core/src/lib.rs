//! Pure domain logic for the reelstats reporting layer.
//!
//! No I/O lives here: chart label shaping and query-parameter clamping are
//! plain functions so the db and api crates can share them and the unit
//! tests need no running server or database.

pub mod charts;
pub mod limit;
