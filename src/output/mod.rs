//! Output formatting module
//!
//! Provides console text and JSON output for probe results.

mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
