// ABOUTME: Main library entry point for the CareBridge health risk service
// ABOUTME: Wires configuration, logging, validation and the HTTP surface around the risk engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # CareBridge Server
//!
//! HTTP and command-line shell around the questionnaire risk engine of a
//! patient/provider healthcare portal. The portal front end posts a flat
//! answer record; the service replies with per-condition scores, risk levels,
//! confidence, recommendations and specialist suggestions used to pre-filter
//! provider search.
//!
//! ## Architecture
//!
//! - **`carebridge-core`**: answer record, risk vocabulary, error codes, constants
//! - **`carebridge-intelligence`**: pure scoring engine and its configuration
//! - **This crate**: environment config, logging, boundary validation, routes,
//!   server assembly and binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use carebridge_server::config::environment::ServerConfig;
//! use carebridge_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("CareBridge risk service configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Error types re-exported from the core crate
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware configuration
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Boundary validation of answer records
pub mod validation;

/// Core domain types
pub use carebridge_core::models;

/// Shared constants
pub use carebridge_core::constants;

/// Risk engine
pub use carebridge_intelligence as intelligence;
