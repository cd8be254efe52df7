//! Output formatters for probe results
//!
//! Provides the console text report and JSON output.

use crate::models::{ProbeKind, RunSummary, TestResult};

/// Width of the `=` rules around the banner and summary
const RULE_WIDTH: usize = 60;

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    JsonPretty,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Banner and per-probe lines are only printed in text mode
    pub fn shows_progress(&self) -> bool {
        self.format == OutputFormat::Text
    }

    fn rule() -> String {
        "=".repeat(RULE_WIDTH)
    }

    pub fn format_banner(&self, base_url: &str) -> String {
        format!(
            "🚀 Starting Facebook Marketplace Clone Backend Tests\nTarget: {}\n{}",
            base_url,
            Self::rule()
        )
    }

    /// Format a single progress line
    ///
    /// Progress lines are only printed in text mode; JSON output carries the
    /// results inside the summary.
    pub fn format_result(&self, result: &TestResult) -> String {
        let status_str = match (self.colorize, result.passed) {
            (true, true) => "\x1b[32mPASSED\x1b[0m",
            (true, false) => "\x1b[31mFAILED\x1b[0m",
            (false, _) => result.status_label(),
        };

        format!(
            "{} {}: {} {}",
            result.symbol(),
            result.name,
            status_str,
            result.detail
        )
    }

    /// Format the end-of-run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Text => self.format_summary_text(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
        }
    }

    fn format_summary_text(&self, summary: &RunSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", Self::rule()));
        output.push_str("📊 Test Results Summary\n");
        output.push_str(&format!("Tests Run: {}\n", summary.total));
        output.push_str(&format!("Tests Passed: {}\n", summary.passed));

        let failed_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };
        output.push_str(&format!("Tests Failed: {failed_str}\n"));
        output.push_str(&format!("Success Rate: {:.1}%\n", summary.success_rate()));
        output.push_str(&format!("Duration: {:.2}s\n", summary.duration_seconds));

        if !summary.failures.is_empty() {
            output.push_str("\n❌ Failed Tests:\n");
            for (i, failure) in summary.failures.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, failure));
            }
        }

        if summary.is_all_passed() {
            output.push_str(
                "\n🎉 All backend tests passed! Application is ready for frontend testing.",
            );
        } else {
            output.push_str("\n⚠️  Some backend tests failed. Check the errors above.");
        }

        output
    }

    /// Format the probe listing for the `list` command
    pub fn format_probe_list(detailed: bool) -> String {
        let mut output = String::new();
        let probes = ProbeKind::all();

        output.push_str(&format!("\nRegistered Probes ({} total)\n", probes.len()));
        output.push_str(&format!("{}\n", Self::rule()));

        for probe in probes {
            if detailed {
                let statuses: Vec<String> = probe
                    .accepted_statuses()
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                output.push_str(&format!(
                    "  {}. {:26} {:>3}s  accepts [{}]\n",
                    probe.number(),
                    probe.name(),
                    probe.timeout().as_secs(),
                    statuses.join(", ")
                ));
                for path in probe.paths() {
                    output.push_str(&format!("       GET {path}\n"));
                }
            } else {
                output.push_str(&format!("  {}. {}\n", probe.number(), probe.name()));
            }
        }

        output.push_str(&Self::rule());
        output
    }
}
