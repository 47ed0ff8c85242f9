// ABOUTME: CareBridge CLI - run the risk engine against JSON files or stdin
// ABOUTME: Assesses answer records, suggests specialists and prints active thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Assess one answer record (or an array of them)
//! carebridge-cli assess answers.json
//!
//! # Read the record from stdin with strict validation
//! cat answers.json | carebridge-cli --strict assess -
//!
//! # Specialist suggestions for an existing score record
//! carebridge-cli specialists scores.json
//!
//! # Print thresholds from a custom engine configuration
//! carebridge-cli --config global.json thresholds
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use carebridge_server::{config::ServerConfig, logging::LoggingConfig, server::ServerResources};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "carebridge-cli",
    about = "CareBridge risk engine CLI",
    long_about = "Run the questionnaire risk engine locally against JSON answer records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Engine configuration file (overrides `RISK_CONFIG_PATH`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject implausible numeric answers instead of ignoring them
    #[arg(long, global = true)]
    strict: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Assess an answer record, or an array of records
    Assess {
        /// JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Suggest specialists for a score record
    Specialists {
        /// JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Print the active classification, population and referral thresholds
    Thresholds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli().init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(path) = cli.config {
        config.risk.config_path = Some(path);
    }
    config.risk.strict_validation |= cli.strict;
    debug!("{}", config.summary());

    let resources = ServerResources::from_config(config)?;

    match cli.command {
        Command::Assess { input } => commands::assess::run(&resources, &input)?,
        Command::Specialists { input } => commands::specialists::run(&resources, &input)?,
        Command::Thresholds => commands::thresholds::run(&resources)?,
    }

    Ok(())
}
