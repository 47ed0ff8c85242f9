// ABOUTME: Error handling surface of the service crate
// ABOUTME: Re-exports the core error types and adds conversions for engine configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Handlers, the validator and configuration loading all report
//! [`AppError`]; its `ErrorCode` decides the HTTP status and the JSON body is
//! an [`ErrorResponse`].

pub use carebridge_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};

use carebridge_intelligence::ConfigError;

/// Convert an engine configuration error into an `AppError`
#[must_use]
pub fn from_config_error(error: ConfigError) -> AppError {
    let code = match error {
        ConfigError::Parse(_) => ErrorCode::InvalidFormat,
        ConfigError::InvalidCutoffs { .. } | ConfigError::InvalidRange(_) => {
            ErrorCode::ConfigInvalid
        }
    };
    AppError::new(code, format!("Risk engine configuration rejected: {error}")).with_source(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebridge_intelligence::RiskEngineConfig;

    #[test]
    fn test_invalid_override_maps_to_config_invalid() {
        let error = RiskEngineConfig::from_json_str(r#"{"referral": {"specialist_cutoff": 2.0}}"#)
            .unwrap_err();
        let app_error = from_config_error(error);

        assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
        assert_eq!(app_error.http_status(), 500);
    }

    #[test]
    fn test_parse_failure_maps_to_invalid_format() {
        let error = RiskEngineConfig::from_json_str("[").unwrap_err();
        assert_eq!(from_config_error(error).code, ErrorCode::InvalidFormat);
    }
}
