// ABOUTME: HTTP middleware configuration for the risk API
// ABOUTME: CORS setup and request ID header handling

/// CORS layer built from `CorsConfig`
pub mod cors;

/// Request ID generation and propagation
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{propagate_request_id_layer, set_request_id_layer, REQUEST_ID_HEADER};
