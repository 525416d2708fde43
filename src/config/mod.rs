// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-driven configuration for HTTP, assistant API, and polling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the workout plan server
//!
//! Centralized configuration loaded from environment variables:
//!
//! - **Environment**: server port, log level, assistant credentials,
//!   and run polling cadence

/// Environment and server configuration
pub mod environment;

pub use environment::{AssistantConfig, LogLevel, PollConfig, ServerConfig};
