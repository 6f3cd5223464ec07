//! Shared utilities for gateway integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::http::{header, HeaderMap, StatusCode};
use axum::Router;
use tokio::net::TcpListener;

use skygate::config::GatewayConfig;
use skygate::observability::Metrics;
use skygate::{HttpServer, Shutdown};

/// A mock upstream provider bound to an ephemeral port.
pub struct MockUpstream {
    pub addr: SocketAddr,
    pub calls: Arc<AtomicU32>,
}

impl MockUpstream {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Start a programmable mock upstream: the closure decides status and JSON
/// body per request, with access to the request headers.
pub async fn start_mock_upstream<F>(respond: F) -> MockUpstream
where
    F: Fn(&HeaderMap) -> (u16, String) + Clone + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let calls = Arc::new(AtomicU32::new(0));
    let calls_handle = calls.clone();

    let app = Router::new().fallback(move |headers: HeaderMap| {
        let calls = calls_handle.clone();
        let respond = respond.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            let (status, body) = respond(&headers);
            (
                StatusCode::from_u16(status).unwrap(),
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
        }
    });

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream { addr, calls }
}

/// Start a mock upstream that always answers with a fixed status and body.
#[allow(dead_code)]
pub async fn start_canned_upstream(status: u16, body: &'static str) -> MockUpstream {
    start_mock_upstream(move |_headers: &HeaderMap| (status, body.to_string())).await
}

/// A running gateway instance under test.
pub struct TestGateway {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestGateway {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Gateway config suitable for tests: ephemeral bind, heartbeat off.
pub fn test_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.heartbeat.enabled = false;
    config
}

/// Spawn a gateway on an ephemeral port.
pub async fn start_gateway(config: GatewayConfig) -> TestGateway {
    let metrics = Metrics::install();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, metrics).unwrap();
    let server_shutdown = shutdown.clone();

    tokio::spawn(async move {
        server.run(listener, &server_shutdown).await.unwrap();
    });

    TestGateway { addr, shutdown }
}

/// Non-pooled, proxy-free client for driving the gateway.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
