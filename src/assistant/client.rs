// ABOUTME: HTTP client for the OpenAI Assistants API thread operations
// ABOUTME: Appends messages, starts runs, checks run status, and reads thread messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Assistants API Client
//!
//! Thin client over the v2 Assistants HTTP API. All requests target the
//! single conversation thread named in [`AssistantConfig`], authenticated
//! with a bearer token and the `OpenAI-Beta: assistants=v2` header.
//!
//! Failures map onto application error codes: connection and 5xx problems
//! become external service errors, a 401 becomes an external auth failure,
//! and rate limiting surfaces with the service's own message.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{AssistantApi, RunState, SERVICE_NAME};
use crate::config::AssistantConfig;
use crate::errors::{AppError, AppResult};

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Beta opt-in header required by the v2 Assistants API
const BETA_HEADER: (&str, &str) = ("OpenAI-Beta", "assistants=v2");

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Body for appending a message to a thread
#[derive(Debug, Serialize)]
struct CreateMessageRequest<'a> {
    role: &'a str,
    content: &'a str,
}

/// Body for starting a run on a thread
#[derive(Debug, Serialize)]
struct CreateRunRequest<'a> {
    assistant_id: &'a str,
    instructions: &'a str,
}

/// Run object returned on creation and retrieval
#[derive(Debug, Deserialize)]
struct RunResponse {
    id: String,
    status: String,
    #[serde(default)]
    completed_at: Option<i64>,
    #[serde(default)]
    last_error: Option<RunError>,
}

/// Failure detail attached to a terminal run
#[derive(Debug, Deserialize)]
struct RunError {
    message: String,
}

/// Page of thread messages, newest first
#[derive(Debug, Deserialize)]
struct MessageListResponse {
    data: Vec<MessageItem>,
}

/// One message on the thread
#[derive(Debug, Deserialize)]
struct MessageItem {
    role: String,
    content: Vec<MessageContent>,
}

/// One content block inside a message
#[derive(Debug, Deserialize)]
struct MessageContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<MessageText>,
}

/// Text payload of a content block
#[derive(Debug, Deserialize)]
struct MessageText {
    value: String,
}

/// Assistants API error response
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Client for the hosted Assistants API
///
/// Holds a pooled HTTP client with request and connection timeouts, plus
/// the credentials and thread identity from configuration.
pub struct AssistantClient {
    client: Client,
    config: AssistantConfig,
}

impl AssistantClient {
    /// Create a client with default timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: AssistantConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build the URL for a thread-scoped endpoint
    fn thread_url(&self, endpoint: &str) -> String {
        format!(
            "{}/threads/{}/{endpoint}",
            self.config.base_url.trim_end_matches('/'),
            self.config.thread_id
        )
    }

    /// Parse an error response from the Assistants API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(body) {
            let error_type = error_response
                .error
                .error_type
                .unwrap_or_else(|| "unknown".to_owned());

            match status.as_u16() {
                401 => AppError::external_auth(
                    SERVICE_NAME,
                    format!("authentication failed: {}", error_response.error.message),
                ),
                429 => AppError::external_service(
                    SERVICE_NAME,
                    format!("Rate limit exceeded: {}", error_response.error.message),
                ),
                _ => AppError::external_service(
                    SERVICE_NAME,
                    format!("{} - {}", error_type, error_response.error.message),
                ),
            }
        } else {
            AppError::external_service(
                SERVICE_NAME,
                format!(
                    "API error ({}): {}",
                    status,
                    body.chars().take(200).collect::<String>()
                ),
            )
        }
    }
}

#[async_trait]
impl AssistantApi for AssistantClient {
    #[instrument(skip(self, text))]
    async fn append_user_message(&self, text: &str) -> AppResult<()> {
        debug!("Appending user message to thread");

        let request = CreateMessageRequest {
            role: "user",
            content: text,
        };

        let response = self
            .client
            .post(self.thread_url("messages"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header(BETA_HEADER.0, BETA_HEADER.1)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send message to Assistants API: {}", e);
                AppError::external_service(SERVICE_NAME, format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Assistants API response: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        debug!("User message appended");
        Ok(())
    }

    #[instrument(skip(self, instructions))]
    async fn create_run(&self, instructions: &str) -> AppResult<String> {
        debug!("Starting assistant run");

        let request = CreateRunRequest {
            assistant_id: &self.config.assistant_id,
            instructions,
        };

        let response = self
            .client
            .post(self.thread_url("runs"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header(BETA_HEADER.0, BETA_HEADER.1)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to start run via Assistants API: {}", e);
                AppError::external_service(SERVICE_NAME, format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Assistants API response: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let run: RunResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse run response: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to parse response: {e}"))
        })?;

        debug!(run_id = %run.id, status = %run.status, "Assistant run started");
        Ok(run.id)
    }

    #[instrument(skip(self))]
    async fn run_state(&self, run_id: &str) -> AppResult<RunState> {
        let response = self
            .client
            .get(self.thread_url(&format!("runs/{run_id}")))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header(BETA_HEADER.0, BETA_HEADER.1)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to fetch run status: {}", e);
                AppError::external_service(SERVICE_NAME, format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Assistants API response: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let run: RunResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse run response: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to parse response: {e}"))
        })?;

        let state = RunState::classify(
            &run.status,
            run.completed_at,
            run.last_error.as_ref().map(|e| e.message.as_str()),
        );
        debug!(run_id = %run.id, status = %run.status, state = ?state, "Fetched run status");
        Ok(state)
    }

    #[instrument(skip(self))]
    async fn latest_message_text(&self) -> AppResult<String> {
        let response = self
            .client
            .get(self.thread_url("messages"))
            .query(&[("order", "desc")])
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header(BETA_HEADER.0, BETA_HEADER.1)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to list thread messages: {}", e);
                AppError::external_service(SERVICE_NAME, format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Assistants API response: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let list: MessageListResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse message list: {}", e);
            AppError::external_service(SERVICE_NAME, format!("Failed to parse response: {e}"))
        })?;

        let newest = list
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE_NAME, "Thread has no messages"))?;

        debug!(role = %newest.role, "Fetched newest thread message");

        newest
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .map(|text| text.value)
            .ok_or_else(|| {
                AppError::external_service(SERVICE_NAME, "Newest message has no text content")
            })
    }
}
