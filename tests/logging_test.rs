// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment handling, CLI defaults and filter construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use carebridge_server::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

fn clear_env() {
    for var in [
        "RUST_LOG",
        "LOG_FORMAT",
        "ENVIRONMENT",
        "SERVICE_NAME",
        "LOG_INCLUDE_LOCATION",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "risk-test");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "risk-test");
    assert!(config.include_location);
    assert!(config.include_spans);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "carebridge-server");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_cli_logging_is_quiet_and_compact() {
    clear_env();

    let config = LoggingConfig::for_cli();

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_name, "carebridge-cli");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default(" compact "), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_env_filter_pins_own_crate_level() {
    clear_env();
    let config = LoggingConfig {
        level: "debug".into(),
        ..LoggingConfig::default()
    };

    let rendered = config.env_filter().to_string();

    assert!(rendered.contains("carebridge_server=debug"), "{rendered}");
    assert!(rendered.contains("hyper=warn"), "{rendered}");
}
