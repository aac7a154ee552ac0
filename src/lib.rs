//! Run batches of hypothesis tests described in JSON and report the results.
//!
//! The statistics live in the `stats` crate; this crate reads requests,
//! evaluates them in parallel and renders reports.

pub mod batch;
pub mod error;
pub mod report;
pub mod request;
