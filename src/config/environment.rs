// ABOUTME: Environment-based configuration loading for all runtime settings
// ABOUTME: Reads assistant credentials, server port, and polling cadence from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management

use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};

const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
const DEFAULT_MAX_WAIT_SECS: u64 = 300;

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error level logging
    Error,
    /// Warning level logging
    Warn,
    /// Info level logging
    Info,
    /// Debug level logging
    Debug,
    /// Trace level logging
    Trace,
}

impl LogLevel {
    /// Parse a level name, falling back to `Info` for anything unrecognized
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Credentials and endpoints for the hosted assistant API
#[derive(Clone)]
pub struct AssistantConfig {
    /// API key presented as a bearer token
    pub api_key: String,
    /// Identifier of the assistant that generates plans
    pub assistant_id: String,
    /// Identifier of the conversation thread all requests append to
    pub thread_id: String,
    /// Base URL of the Assistants API
    pub base_url: String,
}

/// Keeps the API key out of debug output and logs
impl fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &"[redacted]")
            .field("assistant_id", &self.assistant_id)
            .field("thread_id", &self.thread_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Cadence and budget for waiting on assistant runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Pause between consecutive run status checks
    pub interval: Duration,
    /// Total wait budget before a pending run times out
    pub max_wait: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            max_wait: Duration::from_secs(DEFAULT_MAX_WAIT_SECS),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Assistant API settings
    pub assistant: AssistantConfig,
    /// Run polling settings
    pub poll: PollConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file first when one exists, matching local development
    /// workflows.
    ///
    /// # Errors
    ///
    /// Returns `config_missing` when a required variable is absent and
    /// `config` when a numeric variable fails to parse.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let assistant = AssistantConfig {
            api_key: require_env("OPENAI_API_KEY")?,
            assistant_id: require_env("ASSISTANT_ID")?,
            thread_id: require_env("THREAD_ID")?,
            base_url: env_var_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
        };

        let poll = PollConfig {
            interval: Duration::from_secs(parse_env(
                "RUN_POLL_INTERVAL_SECS",
                DEFAULT_POLL_INTERVAL_SECS,
            )?),
            max_wait: Duration::from_secs(parse_env("RUN_MAX_WAIT_SECS", DEFAULT_MAX_WAIT_SECS)?),
        };

        Ok(Self {
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            assistant,
            poll,
        })
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Workout Plan Server Configuration:\n\
             - HTTP Port: {}\n\
             - Log Level: {}\n\
             - Assistants API: {}\n\
             - Assistant ID: {}\n\
             - Thread ID: {}\n\
             - Run Poll Interval: {}s\n\
             - Run Max Wait: {}s\n\
             - API Key: {}",
            self.http_port,
            self.log_level,
            self.assistant.base_url,
            self.assistant.assistant_id,
            self.assistant.thread_id,
            self.poll.interval.as_secs(),
            self.poll.max_wait.as_secs(),
            if self.assistant.api_key.is_empty() {
                "missing"
            } else {
                "configured"
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get a required environment variable, rejecting blank values
fn require_env(key: &str) -> AppResult<String> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::config_missing(key))
}

/// Parse an environment variable into `T`, using `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_poll_defaults() {
        let poll = PollConfig::default();
        assert_eq!(poll.interval, Duration::from_secs(5));
        assert_eq!(poll.max_wait, Duration::from_secs(300));
    }

    #[test]
    fn test_assistant_config_debug_redacts_key() {
        let config = AssistantConfig {
            api_key: "sk-secret".into(),
            assistant_id: "asst_1".into(),
            thread_id: "thread_1".into(),
            base_url: "https://api.openai.com/v1".into(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
