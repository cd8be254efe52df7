//! Probe result models
//!
//! Defines per-probe results and the run summary folded from them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Result of a single probe execution
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
    pub duration_ms: u64,
}

impl TestResult {
    pub fn new(name: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
            duration_ms: 0,
        }
    }

    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, false, detail)
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn status_label(&self) -> &'static str {
        if self.passed {
            "PASSED"
        } else {
            "FAILED"
        }
    }

    pub fn symbol(&self) -> &'static str {
        if self.passed {
            "✅"
        } else {
            "❌"
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {}",
            self.symbol(),
            self.name,
            self.status_label(),
            self.detail
        )
    }
}

/// Summary of a full probe run
#[derive(Clone, Debug, Serialize)]
pub struct RunSummary {
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_seconds: f64,
    pub failures: Vec<String>,
    pub results: Vec<TestResult>,
}

impl RunSummary {
    pub fn new(
        base_url: impl Into<String>,
        started_at: DateTime<Utc>,
        elapsed: Duration,
        results: Vec<TestResult>,
    ) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failures = results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| format!("{}: {}", r.name, r.detail))
            .collect();

        Self {
            base_url: base_url.into(),
            started_at,
            total,
            passed,
            failed: total - passed,
            duration_seconds: elapsed.as_secs_f64(),
            failures,
            results,
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn is_all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> u8 {
        if self.is_all_passed() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
impl TestResult {
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(name, true, detail)
    }
}
