// ABOUTME: Request ID middleware for correlating logs and error responses
// ABOUTME: Generates req_<uuid> IDs, keeps client-supplied ones, and opens a span per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tracing::{info_span, Span};
use uuid::Uuid;

/// Header carrying the request ID in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates `req_<uuid>` request IDs
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestIdPrefixed;

impl MakeRequestId for MakeRequestIdPrefixed {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&format!("req_{}", Uuid::new_v4().simple()))
            .ok()
            .map(RequestId::new)
    }
}

/// Layer assigning a request ID when the client did not send one
#[must_use]
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestIdPrefixed> {
    SetRequestIdLayer::new(
        HeaderName::from_static(REQUEST_ID_HEADER),
        MakeRequestIdPrefixed,
    )
}

/// Layer copying the request ID onto the response
#[must_use]
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER))
}

/// Request ID of an incoming request, if any
#[must_use]
pub fn request_id_of<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Span for one HTTP request, used by the `TraceLayer`
pub fn request_span<B>(request: &Request<B>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = request_id_of(request).unwrap_or("-"),
    )
}
