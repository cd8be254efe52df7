//! Probe execution runner
//!
//! Runs every registered probe in order against one base URL and folds the
//! results into a [`RunSummary`].

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::http::HttpClient;
use crate::models::{ProbeKind, RunSummary, TestResult};
use crate::output::ResultFormatter;
use crate::probes::{self, ProbeOutcome};
use crate::utils::Timer;

/// Sequential runner for the smoke probes
pub struct ProbeRunner {
    client: HttpClient,
    formatter: ResultFormatter,
}

impl ProbeRunner {
    /// Create a new probe runner
    pub fn new(base_url: impl Into<String>, formatter: ResultFormatter) -> Result<Self> {
        let client = HttpClient::new(base_url)?;
        Ok(Self { client, formatter })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn formatter(&self) -> &ResultFormatter {
        &self.formatter
    }

    /// Run a single probe, printing its result lines as soon as it completes
    pub async fn run_probe(&self, kind: ProbeKind) -> ProbeOutcome {
        info!("Running {}", kind);

        let outcome = probes::run_probe(kind, &self.client).await;

        if self.formatter.shows_progress() {
            for result in &outcome.results {
                println!("{}", self.formatter.format_result(result));
            }
        }

        if !outcome.passed() {
            warn!("{} failed", outcome.kind);
        }

        outcome
    }

    /// Run all probes sequentially
    ///
    /// Probe failures, including an unreachable server, are recorded as
    /// failed results; the run always completes.
    pub async fn run_all(&self) -> RunSummary {
        info!("Starting probe run against {}", self.base_url());

        if self.formatter.shows_progress() {
            println!("{}", self.formatter.format_banner(self.base_url()));
        }

        let started_at = Utc::now();
        let timer = Timer::start("probe run");
        let mut results: Vec<TestResult> = Vec::new();

        for kind in ProbeKind::all() {
            let outcome = self.run_probe(kind).await;
            results.extend(outcome.results);
        }

        let summary = RunSummary::new(self.base_url(), started_at, timer.stop(), results);

        info!(
            "Probe run completed in {:.2}s - Pass: {}/{} ({:.1}%)",
            summary.duration_seconds,
            summary.passed,
            summary.total,
            summary.success_rate()
        );

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use crate::probes::mock::MockServer;

    fn quiet_runner(base_url: &str) -> ProbeRunner {
        ProbeRunner::new(base_url, ResultFormatter::new(OutputFormat::Json)).unwrap()
    }

    #[tokio::test]
    async fn test_healthy_server_passes_everything() {
        let server = MockServer::healthy().start().await;
        let runner = quiet_runner(server.base_url());

        let summary = runner.run_all().await;
        assert_eq!(summary.total, 10);
        assert_eq!(summary.passed, 10);
        assert_eq!(summary.failed, 0);
        assert!(summary.failures.is_empty());
        assert_eq!(summary.exit_code(), 0);
    }

    #[tokio::test]
    async fn test_results_follow_probe_order() {
        let server = MockServer::healthy().start().await;
        let runner = quiet_runner(server.base_url());

        let names: Vec<String> = runner
            .run_all()
            .await
            .results
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Application Health Check",
                "Homepage Content Load",
                "Photos Page Access",
                "Profile Page Access",
                "Notifications Page Access",
                "Auth Page /auth/login",
                "Auth Page /auth/register",
                "Static Assets Loading",
                "API Routes Check",
                "Socket.io Endpoint",
            ]
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_completes_run() {
        let runner = quiet_runner(&MockServer::unreachable_base_url());

        let summary = runner.run_all().await;
        assert_eq!(summary.total, 10);
        assert_eq!(summary.failed, 10);
        assert_eq!(summary.total, summary.passed + summary.failed);
        assert_eq!(summary.exit_code(), 1);

        let health = &summary.results[0];
        assert_eq!(health.name, "Application Health Check");
        assert!(health.detail.starts_with("Error: Connection failed to "));
        assert!(summary.failures[0].starts_with("Application Health Check: Error:"));
    }

    #[tokio::test]
    async fn test_partial_failures_are_counted() {
        let server = MockServer::new()
            .route("/", 200, "<nav>marketplace</nav>")
            .route("/photos", 200, "photos")
            .route("/profile", 404, "")
            .route("/notifications", 302, "")
            .route("/auth/login", 200, "login")
            .route("/auth/register", 200, "register")
            .route("/placeholder.svg", 200, "<svg/>")
            .route("/socket.io/", 400, "")
            .start()
            .await;
        let runner = quiet_runner(server.base_url());

        let summary = runner.run_all().await;
        assert_eq!(summary.total, 10);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.passed, 8);
        assert_eq!(
            summary.failures,
            vec![
                "Homepage Content Load: Marketplace: true, Navigation: true, Next.js: false",
                "Profile Page Access: Status: 404",
            ]
        );
        assert_eq!(summary.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_repeated_runs_match() {
        let server = MockServer::new()
            .route("/", 200, "home")
            .route("/photos", 200, "photos")
            .start()
            .await;
        let runner = quiet_runner(server.base_url());

        let first = runner.run_all().await;
        let second = runner.run_all().await;
        assert_eq!(first.total, second.total);
        assert_eq!(first.passed, second.passed);
        assert_eq!(first.failures, second.failures);
    }

    #[tokio::test]
    async fn test_text_mode_run() {
        let server = MockServer::healthy().start().await;
        let runner = ProbeRunner::new(
            format!("{}/", server.base_url()),
            ResultFormatter::new(OutputFormat::Text).no_color(),
        )
        .unwrap();

        assert_eq!(runner.base_url(), server.base_url());
        let summary = runner.run_all().await;
        assert!(summary.is_all_passed());
    }
}
