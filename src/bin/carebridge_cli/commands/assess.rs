// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Assessment command for carebridge-cli
// ABOUTME: Validates one or many answer records and prints assessment reports

use crate::helpers::io::{print_json, read_json};
use carebridge_server::errors::{AppError, AppResult};
use carebridge_server::models::AnswerRecord;
use carebridge_server::routes::AssessmentReport;
use carebridge_server::server::ServerResources;
use serde_json::Value;
use tracing::info;

/// Assess the record (or array of records) found in `input`
pub fn run(resources: &ServerResources, input: &str) -> AppResult<()> {
    match read_json::<Value>(input)? {
        Value::Array(items) => {
            let records = items
                .into_iter()
                .enumerate()
                .map(|(index, item)| decode(item).map_err(|e| e.with_field(format!("[{index}]"))))
                .collect::<AppResult<Vec<_>>>()?;
            let records = records
                .into_iter()
                .map(|record| resources.validator.validate(record))
                .collect::<AppResult<Vec<_>>>()?;

            info!(count = records.len(), "Assessing batch");
            let reports: Vec<AssessmentReport> = resources
                .engine
                .assess_batch(&records)
                .into_iter()
                .map(AssessmentReport::new)
                .collect();
            print_json(&reports)
        }
        single => {
            let record = resources.validator.validate(decode(single)?)?;
            print_json(&AssessmentReport::new(resources.engine.assess(&record)))
        }
    }
}

fn decode(value: Value) -> AppResult<AnswerRecord> {
    serde_json::from_value(value)
        .map_err(|e| AppError::invalid_format(format!("Not a valid answer record: {e}")))
}
