//! In-process stand-in for the application under test

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Builder for a loopback server answering fixed responses per path.
///
/// Unrouted paths answer 404.
pub struct MockServer {
    router: Router,
}

impl MockServer {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    pub fn route(mut self, path: &'static str, status: u16, body: &'static str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.router = self
            .router
            .route(path, get(move || async move { (status, body) }));
        self
    }

    pub fn redirect(mut self, path: &'static str, status: u16, location: &'static str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.router = self.router.route(
            path,
            get(move || async move { (status, [(header::LOCATION, location)]) }),
        );
        self
    }

    pub fn slow_route(mut self, path: &'static str, delay: Duration) -> Self {
        self.router = self.router.route(
            path,
            get(move || async move {
                tokio::time::sleep(delay).await;
                "late"
            }),
        );
        self
    }

    /// A server that passes every probe
    pub fn healthy() -> Self {
        Self::new()
            .route(
                "/",
                200,
                "<html><nav>Marketplace</nav><script src=\"/_next/static/chunks/main.js\"></script></html>",
            )
            .route("/photos", 200, "photos")
            .route("/profile", 200, "profile")
            .route("/notifications", 200, "notifications")
            .route("/auth/login", 200, "login")
            .route("/auth/register", 200, "register")
            .route("/_next/static/chunks/webpack.js", 200, "webpack")
            .route("/api/health", 200, "{\"status\":\"ok\"}")
            .route("/socket.io/", 400, "{\"code\":0,\"message\":\"Transport unknown\"}")
    }

    pub async fn start(self) -> RunningServer {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, self.router)
                .await
                .expect("mock server");
        });

        RunningServer {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// Base URL of a loopback port with nothing listening on it
    pub fn unreachable_base_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let port = listener.local_addr().expect("listener address").port();
        drop(listener);
        format!("http://127.0.0.1:{port}")
    }
}

pub struct RunningServer {
    base_url: String,
    handle: JoinHandle<()>,
}

impl RunningServer {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
