// ABOUTME: Binary entry point for the workout plan web service
// ABOUTME: Loads configuration, connects the assistant client, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Workout Plan Server Binary
//!
//! Starts the HTTP server that serves the plan request form and generates
//! workout plans through the configured OpenAI assistant.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use workout_plan_server::{
    assistant::AssistantClient, config::ServerConfig, logging, resources::ServerResources,
    server::HttpServer,
};

#[derive(Parser)]
#[command(name = "workout-plan-server")]
#[command(about = "Workout plan generator backed by a hosted OpenAI assistant")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Workout Plan Server");
    info!("{}", config.summary());

    let config = Arc::new(config);
    let assistant = Arc::new(AssistantClient::new(config.assistant.clone())?);
    let resources = Arc::new(ServerResources::new(config, assistant));

    HttpServer::new(resources).run().await?;

    info!("Workout Plan Server stopped");
    Ok(())
}
