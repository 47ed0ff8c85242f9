// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for service identity, network defaults, routes and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Service identity used in logs and health responses
pub mod service_names {
    /// Risk service name
    pub const CAREBRIDGE_SERVER: &str = "carebridge-server";
    /// Offline CLI name
    pub const CAREBRIDGE_CLI: &str = "carebridge-cli";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// API routes
pub mod routes {
    /// Liveness route
    pub const HEALTH: &str = "/health";
    /// Readiness route
    pub const READY: &str = "/ready";
    /// Risk assessment creation
    pub const RISK_ASSESSMENTS: &str = "/api/risk/assessments";
    /// Specialist referral suggestions
    pub const RISK_SPECIALISTS: &str = "/api/risk/specialists";
    /// Active classification thresholds
    pub const RISK_THRESHOLDS: &str = "/api/risk/thresholds";
}

/// Default limits
pub mod limits {
    /// Default request body limit (answer records are small)
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
    /// Default request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
}

/// Plausibility bounds applied by the boundary validator
pub mod answer_bounds {
    /// Minimum plausible age in years
    pub const MIN_AGE_YEARS: f64 = 0.0;
    /// Maximum plausible age in years
    pub const MAX_AGE_YEARS: f64 = 120.0;
    /// Minimum plausible BMI (kg/m²)
    pub const MIN_BMI: f64 = 10.0;
    /// Maximum plausible BMI (kg/m²)
    pub const MAX_BMI: f64 = 80.0;
    /// Minimum plausible waist circumference (cm)
    pub const MIN_WAIST_CM: f64 = 40.0;
    /// Maximum plausible waist circumference (cm)
    pub const MAX_WAIST_CM: f64 = 200.0;
    /// Minimum plausible height (cm)
    pub const MIN_HEIGHT_CM: f64 = 50.0;
    /// Maximum plausible height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    /// Minimum plausible weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 2.0;
    /// Maximum plausible weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 400.0;
}
