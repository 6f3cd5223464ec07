//! Request ID generation.
//!
//! # Design Decisions
//! - Request ID added as early as possible so it appears in every log line
//! - UUID v4 via tower-http's `SetRequestIdLayer`, echoed back on the
//!   response by `PropagateRequestIdLayer`

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// `x-request-id` value factory: a fresh UUID v4 per request.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
