//! Shared utilities
//!
//! Logger setup and timing helpers.

pub mod logger;
mod timer;

pub use timer::Timer;
