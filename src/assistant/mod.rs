// ABOUTME: Hosted assistant API integration for plan generation
// ABOUTME: Defines the provider trait, run state classification, and client/poller modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Assistant API Integration
//!
//! Everything that talks to the hosted OpenAI Assistants API lives here.
//! The [`AssistantApi`] trait is the seam between the plan pipeline and the
//! wire client, so tests can script assistant behavior without a network.
//!
//! A plan request drives four operations against one pre-provisioned
//! conversation thread: append the user prompt, start a run, watch the run
//! until it leaves the pending state, then fetch the newest message.

use async_trait::async_trait;

use crate::errors::AppResult;

/// HTTP client for the Assistants API
pub mod client;
/// Bounded waiting on assistant runs
pub mod poller;

pub use client::AssistantClient;
pub use poller::RunPoller;

/// Service label used in error messages and logs
pub(crate) const SERVICE_NAME: &str = "OpenAI Assistants";

/// Progress of one assistant run
///
/// Every status the API reports collapses into one of three states, so
/// callers never branch on raw status strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    /// Run is queued or in progress
    Pending,
    /// Run finished and its output message is available
    Completed,
    /// Run ended without producing output
    Failed {
        /// Reason reported by the service, or the terminal status name
        reason: String,
    },
}

impl RunState {
    /// Collapse a reported run status into a tri-state outcome
    ///
    /// Terminal failure statuses win over a completion timestamp; anything
    /// unrecognized counts as pending and stays subject to the wait budget.
    #[must_use]
    pub fn classify(status: &str, completed_at: Option<i64>, failure_message: Option<&str>) -> Self {
        match status {
            "failed" | "cancelled" | "expired" | "incomplete" => Self::Failed {
                reason: failure_message.map_or_else(
                    || format!("run ended with status '{status}'"),
                    str::to_owned,
                ),
            },
            "completed" => Self::Completed,
            _ if completed_at.is_some() => Self::Completed,
            _ => Self::Pending,
        }
    }

    /// Whether polling can stop at this state
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Operations the plan pipeline needs from the Assistants API
///
/// [`AssistantClient`] implements this against the real service; tests
/// substitute scripted implementations.
#[async_trait]
pub trait AssistantApi: Send + Sync {
    /// Append a user message to the conversation thread
    async fn append_user_message(&self, text: &str) -> AppResult<()>;

    /// Start a run on the thread and return its identifier
    async fn create_run(&self, instructions: &str) -> AppResult<String>;

    /// Fetch the current state of a run
    async fn run_state(&self, run_id: &str) -> AppResult<RunState>;

    /// Fetch the text of the newest message on the thread
    async fn latest_message_text(&self) -> AppResult<String>;
}
