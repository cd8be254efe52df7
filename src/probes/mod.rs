//! Smoke probe implementations
//!
//! ## Probes, in execution order
//!
//! 1. Application Health Check - `GET /` returns 200
//! 2. Homepage Content Load - `GET /` returns 200 with marketplace, nav and `_next` markers
//! 3. Photos Page Access - `/photos` returns 200
//! 4. Profile Page Access - `/profile` returns 200, 302 or 307
//! 5. Notifications Page Access - `/notifications` returns 200, 302 or 307
//! 6. Auth Pages - `/auth/login` and `/auth/register` each return 200
//! 7. Static Assets Loading - webpack chunk or placeholder image returns 200
//! 8. API Routes Check - `/api/health` returns 200 or 404
//! 9. Socket.io Endpoint - `/socket.io/` returns 200 or 400
//!
//! Every probe turns transport errors into failed results; none return `Err`.

mod assets;
mod markers;
mod pages;

#[cfg(test)]
pub mod mock;

pub use assets::static_assets;
pub use pages::{auth_pages, homepage_content, page_access};

use crate::http::HttpClient;
use crate::models::{ProbeKind, TestResult};

/// Results of one probe; most probes record a single result
#[derive(Clone, Debug)]
pub struct ProbeOutcome {
    pub kind: ProbeKind,
    pub results: Vec<TestResult>,
}

impl ProbeOutcome {
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}

/// Run a specific probe
pub async fn run_probe(kind: ProbeKind, client: &HttpClient) -> ProbeOutcome {
    let results = match kind {
        ProbeKind::HomepageContent => vec![homepage_content(client).await],
        ProbeKind::AuthPages => auth_pages(client).await,
        ProbeKind::StaticAssets => vec![static_assets(client).await],
        ProbeKind::ApplicationHealth
        | ProbeKind::PhotosPage
        | ProbeKind::ProfilePage
        | ProbeKind::NotificationsPage
        | ProbeKind::ApiRoutes
        | ProbeKind::SocketIoEndpoint => vec![page_access(client, kind).await],
    };

    ProbeOutcome { kind, results }
}
