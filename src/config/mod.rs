// ABOUTME: Configuration module for the risk service
// ABOUTME: Environment-driven server settings plus loading of risk engine overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the CareBridge risk service
//!
//! - **Environment**: server configuration from environment variables
//! - **Engine**: the risk engine's own tunables live in
//!   [`carebridge_intelligence::RiskEngineConfig`]; `environment` only decides
//!   where an override is read from

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, HttpConfig, LogLevel, RiskConfig, ServerConfig};
