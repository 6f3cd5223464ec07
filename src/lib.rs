//! skygate — a small JSON gateway.
//!
//! Exposes a weather lookup that chains a geocoding call and a
//! current-conditions call, a quote-of-the-day proxy, and a Prometheus
//! metrics endpoint, with a periodic heartbeat task.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod providers;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
