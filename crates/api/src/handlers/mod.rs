//! Request handlers, one per report.
//!
//! Every handler follows the same template: invoke exactly one repository
//! operation, propagate store errors to [`crate::error::AppError`], and
//! serialize the shaped result as JSON.

pub mod charts;
pub mod credits;
pub mod rewatched;
pub mod stats;
