// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Threshold listing command for carebridge-cli
// ABOUTME: Prints the engine configuration in effect after overrides

use crate::helpers::io::print_json;
use carebridge_server::errors::AppResult;
use carebridge_server::routes::ThresholdsResponse;
use carebridge_server::server::ServerResources;

/// Print the active thresholds
pub fn run(resources: &ServerResources) -> AppResult<()> {
    print_json(&ThresholdsResponse::from_config(resources.engine.config()))
}
