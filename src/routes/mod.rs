// ABOUTME: Route module organization for the risk service HTTP endpoints
// ABOUTME: Health checks and risk assessment routes, each returning an axum Router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module holds route definitions and thin handlers that
//! delegate to the engine held in [`ServerResources`](crate::server::ServerResources).

/// Health check and readiness routes
pub mod health;
/// Risk assessment routes
pub mod risk;

pub use health::HealthRoutes;
pub use risk::{AssessmentReport, RiskRoutes, ThresholdsResponse};
