//! Page probes
//!
//! Status-code checks for application pages, plus the homepage content check.

use tracing::{debug, info};

use super::markers::BodyMarkers;
use crate::http::HttpClient;
use crate::models::{ProbeKind, TestResult};
use crate::utils::Timer;

/// GET `path` and pass iff the status is in `kind`'s accepted set
pub async fn check_status(
    client: &HttpClient,
    kind: ProbeKind,
    name: &str,
    path: &str,
) -> TestResult {
    debug!("Checking {} ({})", name, path);
    let timer = Timer::start(name);

    let result = match client.get(path, kind.timeout()).await {
        Ok(resp) => {
            debug!("{} answered {} in {}ms", path, resp.status_code, resp.duration_ms);
            TestResult::new(
                name,
                kind.accepts(resp.status_code),
                format!("Status: {}", resp.status_code),
            )
        }
        Err(e) => TestResult::fail(name, format!("Error: {e}")),
    };

    result.with_duration(timer.elapsed_ms())
}

/// Single-path status probe named after its kind
pub async fn page_access(client: &HttpClient, kind: ProbeKind) -> TestResult {
    let path = kind.paths().first().copied().unwrap_or("/");
    check_status(client, kind, kind.name(), path).await
}

/// Homepage returns 200 and carries the marketplace, navigation and Next.js markers
pub async fn homepage_content(client: &HttpClient) -> TestResult {
    let kind = ProbeKind::HomepageContent;
    let name = kind.name();
    let timer = Timer::start(name);

    let result = match client.get("/", kind.timeout()).await {
        Ok(resp) if resp.is_ok() => {
            let markers = BodyMarkers::scan(&resp.body);
            debug!("Homepage markers: {}", markers);
            TestResult::new(name, markers.all_present(), markers.to_string())
        }
        Ok(resp) => TestResult::fail(name, format!("Status: {}", resp.status_code)),
        Err(e) => TestResult::fail(name, format!("Error: {e}")),
    };

    result.with_duration(timer.elapsed_ms())
}

/// One result per auth page; the probe as a whole passes only if every page does
pub async fn auth_pages(client: &HttpClient) -> Vec<TestResult> {
    let kind = ProbeKind::AuthPages;
    let mut results = Vec::new();

    for path in kind.paths() {
        let name = format!("Auth Page {path}");
        results.push(check_status(client, kind, &name, path).await);
    }

    info!(
        "Auth pages: {}/{} reachable",
        results.iter().filter(|r| r.passed).count(),
        results.len()
    );

    results
}
