// ABOUTME: Main library entry point for the workout plan web service
// ABOUTME: Wires configuration, assistant client, plan pipeline, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Workout Plan Server
//!
//! A web service that generates personalized workout plans through a hosted
//! OpenAI assistant. Visitors fill in a program length, a fitness goal, a
//! training location, and (for weight loss) a target weight; the service
//! turns that into a prompt, runs it through an assistant conversation
//! thread, and renders the reply as a structured plan page.
//!
//! ## Architecture
//!
//! - **Models**: goal enumeration, validated plan parameters, tagged lines
//! - **Assistant**: Assistants API client and bounded run polling
//! - **Plan**: prompt building, response formatting, caching, orchestration
//! - **Routes**: the HTML form, plan submission, and health endpoints
//! - **Config**: environment-driven settings with a `.env` convenience path
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use workout_plan_server::assistant::AssistantClient;
//! use workout_plan_server::config::ServerConfig;
//! use workout_plan_server::errors::AppResult;
//! use workout_plan_server::resources::ServerResources;
//! use workout_plan_server::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let assistant = Arc::new(AssistantClient::new(config.assistant.clone())?);
//!     let resources = Arc::new(ServerResources::new(config, assistant));
//!     HttpServer::new(resources).run().await
//! }
//! ```

/// Assistant API client and run polling
pub mod assistant;
/// Configuration management
pub mod config;
/// Error types and codes
pub mod errors;
/// Logging and tracing setup
pub mod logging;
/// Core data models
pub mod models;
/// Plan generation pipeline
pub mod plan;
/// Shared server resources
pub mod resources;
/// HTTP route handlers
pub mod routes;
/// HTTP server assembly
pub mod server;
/// HTML page rendering
pub mod templates;
