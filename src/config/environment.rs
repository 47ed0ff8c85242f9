// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, limits, CORS, validation mode and engine override path from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! | Variable | Default |
//! |---|---|
//! | `HTTP_PORT` | `8081` |
//! | `HOST` | `0.0.0.0` |
//! | `ENVIRONMENT` | `development` |
//! | `RUST_LOG` | `info` |
//! | `RISK_STRICT_VALIDATION` | `false` |
//! | `RISK_CONFIG_PATH` | unset (built-in rules) |
//! | `REQUEST_TIMEOUT_SECS` | `10` |
//! | `MAX_REQUEST_BODY_BYTES` | `65536` |
//! | `CORS_ALLOWED_ORIGINS` | `*` |

use crate::constants::{limits, ports};
use crate::errors::{from_config_error, AppError, AppResult, ErrorCode};
use carebridge_intelligence::RiskEngineConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, Level};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to a `tracing` level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Live deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Request handling limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Requests running longer than this are answered with 408
    pub request_timeout_secs: u64,
    /// Bodies larger than this are answered with 413
    pub max_request_body_bytes: usize,
}

impl HttpConfig {
    /// Timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: limits::DEFAULT_REQUEST_TIMEOUT_SECS,
            max_request_body_bytes: limits::DEFAULT_MAX_REQUEST_BODY_BYTES,
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Risk engine settings owned by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Reject implausible numeric answers instead of dropping them
    pub strict_validation: bool,
    /// JSON file overriding the built-in engine configuration
    pub config_path: Option<PathBuf>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Request limits
    pub http: HttpConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Risk engine settings
    pub risk: RiskConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            host: "0.0.0.0".to_owned(),
            environment: Environment::default(),
            log_level: LogLevel::default(),
            http: HttpConfig::default(),
            cors: CorsConfig::default(),
            risk: RiskConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but cannot be parsed, or
    /// when the resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_parse_or("HTTP_PORT", ports::DEFAULT_HTTP_PORT)?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_owned()),
            environment: env::var("ENVIRONMENT")
                .map_or_else(|_| Environment::default(), |v| Environment::from_str_or_default(&v)),
            log_level: env::var("RUST_LOG")
                .map_or_else(|_| LogLevel::default(), |v| LogLevel::from_str_or_default(&v)),
            http: HttpConfig {
                request_timeout_secs: env_parse_or(
                    "REQUEST_TIMEOUT_SECS",
                    limits::DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
                max_request_body_bytes: env_parse_or(
                    "MAX_REQUEST_BODY_BYTES",
                    limits::DEFAULT_MAX_REQUEST_BODY_BYTES,
                )?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_owned()),
            },
            risk: RiskConfig {
                strict_validation: env_flag("RISK_STRICT_VALIDATION")?,
                config_path: env::var("RISK_CONFIG_PATH")
                    .ok()
                    .filter(|path| !path.trim().is_empty())
                    .map(PathBuf::from),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a zero timeout or body limit
    pub fn validate(&self) -> AppResult<()> {
        if self.http.request_timeout_secs == 0 {
            return Err(AppError::config_invalid(
                "REQUEST_TIMEOUT_SECS must be greater than zero",
            ));
        }
        if self.http.max_request_body_bytes == 0 {
            return Err(AppError::config_invalid(
                "MAX_REQUEST_BODY_BYTES must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Engine configuration: the override file when configured, otherwise the built-in rules
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the file cannot be read, or the mapped
    /// `ConfigError` when it does not parse or validate
    pub fn load_engine_config(&self) -> AppResult<RiskEngineConfig> {
        let Some(path) = &self.risk.config_path else {
            return Ok(RiskEngineConfig::default());
        };

        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCode::ConfigMissing,
                format!("Cannot read RISK_CONFIG_PATH {}: {e}", path.display()),
            )
        })?;
        let config = RiskEngineConfig::from_json_str(&contents).map_err(from_config_error)?;

        info!(path = %path.display(), "Loaded risk engine configuration override");
        Ok(config)
    }

    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "CareBridge Risk Service Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Request Timeout: {}s\n\
             - Max Body: {} bytes\n\
             - CORS Origins: {}\n\
             - Validation: {}\n\
             - Engine Rules: {}",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.http.request_timeout_secs,
            self.http.max_request_body_bytes,
            self.cors.allowed_origins,
            if self.risk.strict_validation {
                "strict"
            } else {
                "lenient"
            },
            self.risk
                .config_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
        )
    }
}

/// Parse an environment variable, using `default` when it is unset
fn env_parse_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config_invalid(format!("Invalid {key} value: {raw}"))),
        Err(_) => Ok(default),
    }
}

/// Parse a boolean flag; unset means `false`
fn env_flag(key: &str) -> AppResult<bool> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(AppError::config_invalid(format!(
                "Invalid {key} value: {raw}"
            ))),
        },
        Err(_) => Ok(false),
    }
}
