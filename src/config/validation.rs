//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate endpoint URLs and value ranges (timeouts > 0, intervals > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidUpstreamUrl { field: &'static str, value: String },
    ZeroTimeout(&'static str),
    ZeroHeartbeatInterval,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::InvalidUpstreamUrl { field, value } => {
                write!(f, "upstream.{} must be an http(s) URL, got '{}'", field, value)
            }
            ValidationError::ZeroTimeout(field) => {
                write!(f, "timeouts.{} must be greater than zero", field)
            }
            ValidationError::ZeroHeartbeatInterval => {
                write!(f, "heartbeat.interval_secs must be greater than zero")
            }
        }
    }
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    for (field, value) in [
        ("geocoding_url", &config.upstream.geocoding_url),
        ("weather_url", &config.upstream.weather_url),
        ("quotes_url", &config.upstream.quotes_url),
    ] {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            errors.push(ValidationError::InvalidUpstreamUrl {
                field,
                value: value.clone(),
            });
        }
    }

    for (field, value) in [
        ("connect_secs", config.timeouts.connect_secs),
        ("upstream_secs", config.timeouts.upstream_secs),
        ("request_secs", config.timeouts.request_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroTimeout(field));
        }
    }

    if config.heartbeat.enabled && config.heartbeat.interval_secs == 0 {
        errors.push(ValidationError::ZeroHeartbeatInterval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
