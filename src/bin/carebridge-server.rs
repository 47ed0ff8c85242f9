// ABOUTME: HTTP server binary for the CareBridge risk service
// ABOUTME: Loads environment config, initializes logging and serves the risk API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # CareBridge Risk Service Binary
//!
//! Starts the HTTP API the portal front end calls after a questionnaire is
//! submitted.

use anyhow::Result;
use carebridge_server::{config::ServerConfig, logging, server::{self, ServerResources}};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "carebridge-server")]
#[command(about = "CareBridge risk service - questionnaire-driven chronic disease risk scoring")]
pub struct Args {
    /// Engine configuration file (overrides `RISK_CONFIG_PATH`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(path) = args.config {
        config.risk.config_path = Some(path);
    }

    logging::init_from_env()?;

    info!("Starting CareBridge risk service");
    info!("{}", config.summary());

    let resources = ServerResources::from_config(config)?;

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
