//! Static asset probe
//!
//! Passes when either the Next.js webpack chunk or the public placeholder
//! image is served.

use tracing::{debug, warn};

use crate::http::{HttpClient, ProbeError};
use crate::models::{ProbeKind, TestResult, PLACEHOLDER_PATH, WEBPACK_CHUNK_PATH};
use crate::utils::Timer;

/// True if the asset answers 200
async fn fetch_asset(client: &HttpClient, path: &str) -> Result<bool, ProbeError> {
    let resp = client.get(path, ProbeKind::StaticAssets.timeout()).await?;
    debug!("Asset {} returned {}", path, resp.status_code);
    Ok(resp.is_ok())
}

/// Webpack chunk and placeholder served flags; the first transport error aborts
async fn fetch_assets(client: &HttpClient) -> Result<(bool, bool), ProbeError> {
    let webpack = fetch_asset(client, WEBPACK_CHUNK_PATH).await?;
    let placeholder = fetch_asset(client, PLACEHOLDER_PATH).await?;
    Ok((webpack, placeholder))
}

/// At least one of the two assets must return 200
pub async fn static_assets(client: &HttpClient) -> TestResult {
    let name = ProbeKind::StaticAssets.name();
    let timer = Timer::start(name);

    let result = match fetch_assets(client).await {
        Ok((webpack, placeholder)) => TestResult::new(
            name,
            webpack || placeholder,
            format!("Webpack: {webpack}, Placeholder: {placeholder}"),
        ),
        Err(e) => {
            warn!("Static assets unreachable: {}", e);
            TestResult::fail(name, format!("Error: {e}"))
        }
    };

    result.with_duration(timer.elapsed_ms())
}
