//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method, endpoint, status
//! - `gateway_request_duration_seconds` (histogram): latency by endpoint
//! - `gateway_request_failures_total` (counter): non-2xx outcomes by endpoint
//! - `gateway_heartbeat_total` (counter): heartbeat ticks
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Endpoint labels use the matched route template, not the raw path,
//!   to keep cardinality bounded
//! - Histogram buckets tuned for typical web latencies

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

pub const REQUESTS_TOTAL: &str = "gateway_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "gateway_request_duration_seconds";
pub const REQUEST_FAILURES_TOTAL: &str = "gateway_request_failures_total";
pub const HEARTBEAT_TOTAL: &str = "gateway_heartbeat_total";

const DURATION_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

/// Process-wide metrics registry handle.
///
/// Constructed once at startup and injected into the app state and the
/// heartbeat task; `/metrics` renders it on demand.
#[derive(Clone)]
pub struct Metrics {
    handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder (once per process) and return a
    /// handle to it. Later calls reuse the installed recorder, so test
    /// binaries can construct several servers.
    pub fn install() -> Arc<Self> {
        let handle = RECORDER.get_or_init(install_recorder).clone();
        Arc::new(Self { handle })
    }

    /// Record the outcome of one request: count, latency, and a failure
    /// count when the status is not 2xx.
    pub fn record_request(&self, method: &str, endpoint: &str, status: u16, started: Instant) {
        counter!(
            REQUESTS_TOTAL,
            "method" => method.to_string(),
            "endpoint" => endpoint.to_string(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(REQUEST_DURATION_SECONDS, "endpoint" => endpoint.to_string())
            .record(started.elapsed().as_secs_f64());

        if !(200..300).contains(&status) {
            counter!(REQUEST_FAILURES_TOTAL, "endpoint" => endpoint.to_string()).increment(1);
        }
    }

    /// Record one heartbeat tick.
    pub fn heartbeat(&self) {
        counter!(HEARTBEAT_TOTAL).increment(1);
    }

    /// Render the current registry contents in Prometheus text format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

fn install_recorder() -> PrometheusHandle {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(REQUEST_DURATION_SECONDS.to_string()),
            DURATION_BUCKETS,
        )
        .expect("duration bucket list is non-empty")
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    describe_counter!(
        REQUESTS_TOTAL,
        "Total requests by method, endpoint and status code"
    );
    describe_histogram!(
        REQUEST_DURATION_SECONDS,
        "Request latency distribution by endpoint"
    );
    describe_counter!(
        REQUEST_FAILURES_TOTAL,
        "Requests that ended with a non-2xx status, by endpoint"
    );
    describe_counter!(HEARTBEAT_TOTAL, "Heartbeat ticks since process start");

    handle
}

/// Per-request instrumentation middleware.
///
/// Runs the inner handler to completion and records the outcome exactly
/// once; every handler error has already been converted to a `Response`
/// by this point, so no exit path can bypass the recording.
pub async fn track_requests(
    State(metrics): State<Arc<Metrics>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    metrics.record_request(&method, &endpoint, response.status().as_u16(), started);

    response
}
