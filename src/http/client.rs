//! HTTP client for smoke probes
//!
//! Wraps reqwest with per-request timeouts and maps transport failures
//! onto [`ProbeError`].

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Probe execution errors
///
/// The `Display` text is what ends up in a failed result's detail.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection failed to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to read response body: {0}")]
    BodyRead(String),
}

impl ProbeError {
    fn from_reqwest(e: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if e.is_timeout() {
            ProbeError::Timeout(timeout.as_secs())
        } else if e.is_connect() {
            ProbeError::ConnectionFailed {
                url: url.to_string(),
                reason: error_chain(&e),
            }
        } else {
            ProbeError::RequestFailed(error_chain(&e))
        }
    }
}

/// Error text followed by each underlying cause, joined with ": "
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// HTTP client bound to the application's base URL
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client for the given base URL
    ///
    /// Requests go straight to the application; system proxy settings are ignored.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .no_proxy()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Plain GET with no headers or body, bounded by `timeout`
    pub async fn get(&self, path: &str, timeout: Duration) -> Result<HttpResponse, ProbeError> {
        let url = self.build_url(path);
        debug!("Sending GET request to {}", url);

        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(e, &url, timeout))?;

        let status = response.status();

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProbeError::Timeout(timeout.as_secs())
            } else {
                ProbeError::BodyRead(error_chain(&e))
            }
        })?;

        let duration_ms = start.elapsed().as_millis() as u64;

        debug!(
            "Response: {} {} in {}ms",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            duration_ms
        );

        Ok(HttpResponse {
            status_code: status.as_u16(),
            body,
            duration_ms,
        })
    }
}

/// HTTP response
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
    pub duration_ms: u64,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probes::mock::MockServer;

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = HttpClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.build_url("/photos"), "http://localhost:3000/photos");
    }

    #[tokio::test]
    async fn test_get_reads_status_and_body() {
        let server = MockServer::new()
            .route("/photos", 200, "<main>photos</main>")
            .start()
            .await;
        let client = HttpClient::new(server.base_url()).unwrap();

        let resp = client.get("/photos", Duration::from_secs(5)).await.unwrap();
        assert!(resp.is_ok());
        assert_eq!(resp.body, "<main>photos</main>");

        let resp = client.get("/missing", Duration::from_secs(5)).await.unwrap();
        assert_eq!(resp.status_code, 404);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let base_url = MockServer::unreachable_base_url();
        let client = HttpClient::new(&base_url).unwrap();

        let err = client.get("/", Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, ProbeError::ConnectionFailed { .. }));
        let text = err.to_string();
        assert!(text.starts_with(&format!("Connection failed to {base_url}/: ")));
        assert!(text.to_lowercase().contains("refused"), "{text}");
    }

    #[tokio::test]
    async fn test_unresolvable_host_keeps_cause() {
        let client = HttpClient::new("http://no-such-host.invalid").unwrap();

        let err = client.get("/", Duration::from_secs(5)).await.unwrap_err();
        let text = err.to_string();
        assert!(!text.to_lowercase().contains("refused"), "{text}");
        match err {
            ProbeError::ConnectionFailed { url, reason } => {
                assert_eq!(url, "http://no-such-host.invalid/");
                assert!(reason.contains("dns error"), "{reason}");
            }
            ProbeError::RequestFailed(reason) => assert!(reason.contains("dns error"), "{reason}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[derive(Error, Debug)]
    #[error("client error (Connect)")]
    struct Wrapped(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_causes() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        assert_eq!(
            error_chain(&Wrapped(inner)),
            "client error (Connect): reset by peer"
        );
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::new()
            .slow_route("/slow", Duration::from_secs(3))
            .start()
            .await;
        let client = HttpClient::new(server.base_url()).unwrap();

        let err = client
            .get("/slow", Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, ProbeError::Timeout(_)));
    }
}
