// ABOUTME: Bounded polling loop that waits for assistant runs to finish
// ABOUTME: Checks run state at a fixed interval and enforces a total wait budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Run Poller
//!
//! Watches one assistant run until it reaches a terminal state. The state
//! is checked first and the pause comes after, so a run that is already
//! complete costs a single status fetch and no sleep.
//!
//! The wait budget is enforced before each pause: once another interval
//! would push the elapsed time past the budget, the poller gives up with a
//! timeout error instead of waiting indefinitely on a stuck run.

use std::time::Instant;
use tokio::time::sleep;
use tracing::{debug, warn};

use super::{AssistantApi, RunState, SERVICE_NAME};
use crate::config::PollConfig;
use crate::errors::{AppError, AppResult};

/// Waits on assistant runs with a fixed poll cadence and a total budget
#[derive(Debug, Clone, Copy)]
pub struct RunPoller {
    config: PollConfig,
}

impl RunPoller {
    /// Create a poller with the given cadence and budget
    #[must_use]
    pub const fn new(config: PollConfig) -> Self {
        Self { config }
    }

    /// Poll until the run completes, fails, or exhausts the wait budget
    ///
    /// # Errors
    ///
    /// Returns `external_service` when the run reaches a terminal failure
    /// state, `external_timeout` when the budget runs out while the run is
    /// still pending, and propagates any status fetch error as-is.
    pub async fn await_completion(&self, api: &dyn AssistantApi, run_id: &str) -> AppResult<()> {
        let started = Instant::now();
        debug!(run_id = %run_id, "Waiting for assistant run to complete");

        loop {
            match api.run_state(run_id).await? {
                RunState::Completed => {
                    debug!(
                        run_id = %run_id,
                        elapsed_ms = %started.elapsed().as_millis(),
                        "Assistant run completed"
                    );
                    return Ok(());
                }
                RunState::Failed { reason } => {
                    warn!(run_id = %run_id, "Assistant run failed: {reason}");
                    return Err(AppError::external_service(
                        SERVICE_NAME,
                        format!("Run {run_id} failed: {reason}"),
                    ));
                }
                RunState::Pending => {}
            }

            if started.elapsed() + self.config.interval > self.config.max_wait {
                warn!(run_id = %run_id, "Assistant run exceeded wait budget");
                return Err(AppError::external_timeout(format!(
                    "Run {run_id} still pending after {}s",
                    started.elapsed().as_secs()
                )));
            }

            sleep(self.config.interval).await;
        }
    }
}
