//! Upstream provider clients.
//!
//! # Data Flow
//! ```text
//! /weather request
//!     → weather.rs: geocode (free-text → lat/lon, limit 1)
//!     → weather.rs: current conditions (lat/lon, metric units)
//!     → WeatherReport
//!
//! /quote request
//!     → quotes.rs: resolve credential (plain or base64)
//!     → quotes.rs: single GET, X-Api-Key header
//!     → Quote (first array element)
//! ```
//!
//! # Design Decisions
//! - One shared reqwest client (connect + per-call timeouts from config);
//!   upstream calls are never retried, a single failure fails the request
//! - Provider payloads are parsed into private structs per service;
//!   handlers only see the domain types
//! - Missing credentials fail the request, never the process

pub mod quotes;
pub mod weather;

pub use quotes::{Quote, QuoteService};
pub use weather::{GeoResult, WeatherQuery, WeatherReport, WeatherService};

use crate::config::TimeoutConfig;
use std::time::Duration;

/// Build the shared upstream HTTP client with bounded timeouts.
pub fn upstream_client(timeouts: &TimeoutConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .timeout(Duration::from_secs(timeouts.upstream_secs))
        .build()
}
