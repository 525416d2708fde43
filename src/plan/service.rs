// ABOUTME: Orchestrates plan generation end to end against the assistant API
// ABOUTME: Builds the prompt, runs the assistant, polls completion, formats the reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Plan Service
//!
//! The one entry point request handlers call. For each parameter set it
//! consults the cache first; on a miss it appends the prompt to the
//! conversation thread, starts an assistant run, waits for it to finish,
//! and formats the newest thread message into a plan.

use std::sync::Arc;
use tracing::{info, instrument};

use super::{cache::PlanCache, formatter, prompt};
use crate::assistant::{AssistantApi, RunPoller};
use crate::config::PollConfig;
use crate::errors::AppResult;
use crate::models::{PlanParameters, WorkoutPlan};

/// Instructions attached to every assistant run
const RUN_INSTRUCTIONS: &str = "Please generate a workout plan";

/// Generates workout plans through the assistant API with caching
pub struct PlanService {
    assistant: Arc<dyn AssistantApi>,
    poller: RunPoller,
    cache: PlanCache,
}

impl PlanService {
    /// Create a service over the given assistant with the given poll cadence
    #[must_use]
    pub fn new(assistant: Arc<dyn AssistantApi>, poll: PollConfig) -> Self {
        Self {
            assistant,
            poller: RunPoller::new(poll),
            cache: PlanCache::new(),
        }
    }

    /// Return the plan for `parameters`, generating it on a cache miss
    ///
    /// # Errors
    ///
    /// Propagates assistant API, polling, and formatting errors from the
    /// generation pipeline.
    #[instrument(skip(self, parameters), fields(weeks = parameters.weeks, goal = %parameters.goal))]
    pub async fn plan_for(&self, parameters: &PlanParameters) -> AppResult<WorkoutPlan> {
        self.cache
            .get_or_compute(parameters, || self.generate(parameters))
            .await
    }

    /// Run the full generation pipeline once
    async fn generate(&self, parameters: &PlanParameters) -> AppResult<WorkoutPlan> {
        info!(
            weeks = parameters.weeks,
            goal = %parameters.goal,
            "Generating workout plan"
        );

        let instruction = prompt::build_instruction(parameters);
        self.assistant.append_user_message(&instruction).await?;

        let run_id = self.assistant.create_run(RUN_INSTRUCTIONS).await?;
        self.poller
            .await_completion(self.assistant.as_ref(), &run_id)
            .await?;

        let raw = self.assistant.latest_message_text().await?;
        let plan = formatter::format_plan(&raw);

        info!(lines = plan.lines.len(), "Workout plan generated");
        Ok(plan)
    }
}
