// ABOUTME: Shared server resources, HTTP router assembly and the serve loop
// ABOUTME: Layers request IDs, tracing, timeouts, body limits and CORS over the route modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server
//!
//! [`ServerResources`] is built once at startup and shared by every handler
//! through an `Arc`. The engine is immutable after construction, so no
//! locking is involved on the request path.

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::middleware::request_id::request_span;
use crate::middleware::{propagate_request_id_layer, set_request_id_layer, setup_cors};
use crate::routes::{HealthRoutes, RiskRoutes};
use crate::validation::AnswerValidator;
use axum::body::Body;
use axum::Router;
use carebridge_intelligence::RiskEngine;
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Centralized resource container shared by all route handlers
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Risk engine with its active thresholds
    pub engine: RiskEngine,
    /// Boundary validation policy
    pub validator: AnswerValidator,
}

impl ServerResources {
    /// Assemble resources from an already-built engine
    #[must_use]
    pub fn new(config: ServerConfig, engine: RiskEngine) -> Self {
        let validator = AnswerValidator::from_strict_flag(config.risk.strict_validation);
        Self {
            config,
            engine,
            validator,
        }
    }

    /// Load the engine configuration named by `config` and build resources
    ///
    /// # Errors
    ///
    /// Returns an error when the engine configuration file cannot be read or is invalid
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let engine = RiskEngine::new(config.load_engine_config()?);
        Ok(Self::new(config, engine))
    }
}

/// Build the full HTTP router with middleware applied
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let http = &resources.config.http;

    // Outermost first: the request ID must exist before the trace span reads it
    let observability = ServiceBuilder::new()
        .layer(set_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(request_span::<Body>))
        .layer(propagate_request_id_layer());

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(RiskRoutes::routes(Arc::clone(&resources)))
        .layer(RequestBodyLimitLayer::new(http.max_request_body_bytes))
        .layer(TimeoutLayer::new(http.request_timeout()))
        .layer(setup_cors(&resources.config.cors))
        .layer(observability)
}

/// Bind the configured address and serve until Ctrl+C
///
/// # Errors
///
/// Returns an error when the listener cannot bind or the server fails
pub async fn serve(resources: ServerResources) -> AppResult<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        AppError::internal(format!("Failed to bind {address}")).with_source(e)
    })?;

    info!(address = %address, "CareBridge risk service listening");

    axum::serve(listener, build_router(Arc::new(resources)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal("HTTP server error").with_source(e))?;

    info!("CareBridge risk service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal, serving until killed");
        future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
