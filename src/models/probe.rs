//! Probe registry
//!
//! Defines the nine probes run against the application, in execution order.

use std::fmt;
use std::time::Duration;

/// Timeout for page requests
const PAGE_TIMEOUT_SECS: u64 = 10;

/// Timeout for asset, API and socket requests
const LIGHT_TIMEOUT_SECS: u64 = 5;

/// Next.js webpack runtime chunk
pub const WEBPACK_CHUNK_PATH: &str = "/_next/static/chunks/webpack.js";

/// Public placeholder image
pub const PLACEHOLDER_PATH: &str = "/placeholder.svg";

/// All registered probes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    ApplicationHealth,
    HomepageContent,
    PhotosPage,
    ProfilePage,
    NotificationsPage,
    AuthPages,
    StaticAssets,
    ApiRoutes,
    SocketIoEndpoint,
}

impl ProbeKind {
    /// Get probe number (1-9)
    pub fn number(&self) -> u8 {
        match self {
            ProbeKind::ApplicationHealth => 1,
            ProbeKind::HomepageContent => 2,
            ProbeKind::PhotosPage => 3,
            ProbeKind::ProfilePage => 4,
            ProbeKind::NotificationsPage => 5,
            ProbeKind::AuthPages => 6,
            ProbeKind::StaticAssets => 7,
            ProbeKind::ApiRoutes => 8,
            ProbeKind::SocketIoEndpoint => 9,
        }
    }

    /// Display name, also used as the result name for single-result probes
    pub fn name(&self) -> &'static str {
        match self {
            ProbeKind::ApplicationHealth => "Application Health Check",
            ProbeKind::HomepageContent => "Homepage Content Load",
            ProbeKind::PhotosPage => "Photos Page Access",
            ProbeKind::ProfilePage => "Profile Page Access",
            ProbeKind::NotificationsPage => "Notifications Page Access",
            ProbeKind::AuthPages => "Auth Pages",
            ProbeKind::StaticAssets => "Static Assets Loading",
            ProbeKind::ApiRoutes => "API Routes Check",
            ProbeKind::SocketIoEndpoint => "Socket.io Endpoint",
        }
    }

    /// Request paths, relative to the base URL
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            ProbeKind::ApplicationHealth | ProbeKind::HomepageContent => &["/"],
            ProbeKind::PhotosPage => &["/photos"],
            ProbeKind::ProfilePage => &["/profile"],
            ProbeKind::NotificationsPage => &["/notifications"],
            ProbeKind::AuthPages => &["/auth/login", "/auth/register"],
            ProbeKind::StaticAssets => &[WEBPACK_CHUNK_PATH, PLACEHOLDER_PATH],
            ProbeKind::ApiRoutes => &["/api/health"],
            ProbeKind::SocketIoEndpoint => &["/socket.io/"],
        }
    }

    /// Status codes that count as a pass for a single request.
    ///
    /// Multi-path probes apply this per path; how the per-path outcomes
    /// combine is up to the probe (AND for auth pages, OR for static assets).
    pub fn accepted_statuses(&self) -> &'static [u16] {
        match self {
            ProbeKind::ProfilePage | ProbeKind::NotificationsPage => &[200, 302, 307],
            ProbeKind::ApiRoutes => &[200, 404],
            ProbeKind::SocketIoEndpoint => &[200, 400],
            _ => &[200],
        }
    }

    pub fn accepts(&self, status: u16) -> bool {
        self.accepted_statuses().contains(&status)
    }

    pub fn timeout(&self) -> Duration {
        match self {
            ProbeKind::StaticAssets | ProbeKind::ApiRoutes | ProbeKind::SocketIoEndpoint => {
                Duration::from_secs(LIGHT_TIMEOUT_SECS)
            }
            _ => Duration::from_secs(PAGE_TIMEOUT_SECS),
        }
    }

    /// Get all probes in execution order
    pub fn all() -> Vec<ProbeKind> {
        vec![
            ProbeKind::ApplicationHealth,
            ProbeKind::HomepageContent,
            ProbeKind::PhotosPage,
            ProbeKind::ProfilePage,
            ProbeKind::NotificationsPage,
            ProbeKind::AuthPages,
            ProbeKind::StaticAssets,
            ProbeKind::ApiRoutes,
            ProbeKind::SocketIoEndpoint,
        ]
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probe {}: {}", self.number(), self.name())
    }
}
