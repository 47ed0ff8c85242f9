// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Specialist suggestion command for carebridge-cli
// ABOUTME: Reads a score record and prints merged specialist referrals

use crate::helpers::io::{print_json, read_json};
use carebridge_server::errors::AppResult;
use carebridge_server::models::ScoreRecord;
use carebridge_server::server::ServerResources;

/// Print referrals for the score record found in `input`
pub fn run(resources: &ServerResources, input: &str) -> AppResult<()> {
    let scores: ScoreRecord = read_json(input)?;
    print_json(&resources.engine.recommend_specialists(&scores))
}
