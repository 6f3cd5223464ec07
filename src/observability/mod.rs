//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every app request:
//!     → metrics.rs track_requests middleware (timer at entry)
//!     → inner handler runs to a final Response
//!     → one request count + one latency observation, failure count on non-2xx
//!
//! Independent of traffic:
//!     → heartbeat.rs periodic task (log line + counter per tick)
//!
//! Consumers:
//!     → GET /metrics (Prometheus text exposition of the recorder)
//!     → Log aggregation (stdout via tracing)
//! ```
//!
//! # Design Decisions
//! - Metrics are cheap (atomic increments, no locks)
//! - Recording happens after the handler produced its final response, so
//!   it runs exactly once on every exit path
//! - The recorder is installed once per process; the handle is injected
//!   into the app state rather than reached for globally at render time

pub mod heartbeat;
pub mod metrics;

pub use heartbeat::Heartbeat;
pub use metrics::{track_requests, Metrics};
