//! HTTP client module for smoke probes
//!
//! Provides the GET client and the probe execution error type.

mod client;

pub use client::{HttpClient, ProbeError};
