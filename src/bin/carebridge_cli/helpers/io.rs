// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: JSON input and output helpers for carebridge-cli
// ABOUTME: Reads a file or stdin into serde_json and prints pretty JSON to stdout

use carebridge_server::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};

/// Read and decode JSON from a path, or stdin when the path is `-`
pub fn read_json<T: DeserializeOwned>(input: &str) -> AppResult<T> {
    let raw = if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| AppError::invalid_input("Failed to read stdin").with_source(e))?;
        buffer
    } else {
        fs::read_to_string(input).map_err(|e| {
            AppError::not_found(format!("Input file {input}")).with_source(e)
        })?
    };

    serde_json::from_str(&raw)
        .map_err(|e| AppError::invalid_format(format!("{input} is not valid JSON: {e}")))
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal("Failed to serialize output").with_source(e))?;
    println!("{rendered}");
    Ok(())
}
