//! Data models for smoke testing
//!
//! This module contains the probe registry and result types.

mod probe;
mod test_result;

pub use probe::{ProbeKind, PLACEHOLDER_PATH, WEBPACK_CHUNK_PATH};
pub use test_result::{RunSummary, TestResult};
