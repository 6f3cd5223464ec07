//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream provider endpoints.
    pub upstream: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Upstream API credentials.
    pub credentials: CredentialsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Heartbeat task settings.
    pub heartbeat: HeartbeatConfig,
}

impl GatewayConfig {
    /// Overlay environment-provided values onto the loaded config.
    ///
    /// Credentials are expected from the environment in deployments; the
    /// config file is for endpoints and tunables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(addr) = lookup("GATEWAY_BIND_ADDRESS") {
            self.listener.bind_address = addr;
        }
        if let Some(key) = lookup("OPENWEATHER_API_KEY") {
            self.credentials.weather_api_key = Some(key);
        }
        if let Some(key) = lookup("QUOTES_API_KEY") {
            self.credentials.quotes_api_key = Some(key);
        }
        if let Some(key) = lookup("QUOTES_API_KEY_B64") {
            self.credentials.quotes_api_key_b64 = Some(key);
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream provider endpoints.
///
/// Overridable so tests and staging can point at mock providers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Geocoding endpoint (free-text query → coordinate list).
    pub geocoding_url: String,

    /// Current-conditions endpoint (lat/lon → weather payload).
    pub weather_url: String,

    /// Quotes endpoint (API-key header → quote list).
    pub quotes_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            geocoding_url: "http://api.openweathermap.org/geo/1.0/direct".to_string(),
            weather_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            quotes_url: "https://api.api-ninjas.com/v1/quotes".to_string(),
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout for upstream calls, in seconds.
    pub connect_secs: u64,

    /// Total per-call timeout for upstream calls, in seconds.
    pub upstream_secs: u64,

    /// Inbound request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            upstream_secs: 10,
            request_secs: 30,
        }
    }
}

/// Upstream API credentials.
///
/// All optional: absence is reported per request, not at startup.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Weather/geocoding provider API key.
    pub weather_api_key: Option<String>,

    /// Quotes provider API key (plain).
    pub quotes_api_key: Option<String>,

    /// Quotes provider API key, base64-encoded. Used only when the plain
    /// key is absent.
    pub quotes_api_key_b64: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Heartbeat task configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeartbeatConfig {
    /// Enable the periodic heartbeat task.
    pub enabled: bool,

    /// Interval between heartbeat ticks in seconds.
    pub interval_secs: u64,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 10,
        }
    }
}
