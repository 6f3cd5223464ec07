//! Gateway error taxonomy and HTTP mapping.
//!
//! # Responsibilities
//! - Classify every failure a request can hit (config, not-found, upstream, anything else)
//! - Convert errors to JSON bodies with a `status: "error"` marker at the axum boundary
//! - Mirror upstream status codes where the upstream answered with a non-success status
//!
//! # Design Decisions
//! - Services return `Result<_, GatewayError>` and propagate with `?`;
//!   status-code mapping happens only in the `IntoResponse` impl
//! - Transport and parse failures collapse into `Unexpected` so no error
//!   can escape the JSON envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while serving a gateway request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A required credential is missing or cannot be decoded.
    #[error("{0}")]
    Configuration(String),

    /// An upstream reported or implied that no matching resource exists.
    #[error("{0}")]
    NotFound(String),

    /// An upstream was reachable but answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Anything else: transport failure, malformed payload, missing field.
    #[error("{0}")]
    Unexpected(String),
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// HTTP status this error maps to at the handler boundary.
    ///
    /// `Upstream` mirrors the upstream's status verbatim; a status that is
    /// not a valid HTTP response code falls back to 502.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Configuration(_) | GatewayError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Unexpected(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
            "status": "error",
        }));
        (status, body).into_response()
    }
}
