// ABOUTME: Single-slot cache holding the most recently generated workout plan
// ABOUTME: Serializes plan generation so identical repeat requests skip the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Plan Cache
//!
//! Remembers exactly one plan, keyed by the full parameter set that
//! produced it. A request whose parameters match the stored entry gets the
//! cached plan back; any other parameter set regenerates and replaces the
//! slot. Failed generations leave the previous entry in place.
//!
//! The slot lock is held across the compute future, so concurrent requests
//! line up instead of racing duplicate generations against the assistant.

use std::future::Future;
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::AppResult;
use crate::models::{PlanParameters, WorkoutPlan};

/// Most recent plan together with the parameters that produced it
#[derive(Debug, Clone)]
struct CacheEntry {
    parameters: PlanParameters,
    plan: WorkoutPlan,
}

/// Single-slot cache for the most recently generated plan
#[derive(Debug, Default)]
pub struct PlanCache {
    slot: Mutex<Option<CacheEntry>>,
}

impl PlanCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached plan for `parameters`, or compute and store one
    ///
    /// # Errors
    ///
    /// Propagates the compute error unchanged; the slot keeps its previous
    /// entry in that case.
    pub async fn get_or_compute<C, Fut>(
        &self,
        parameters: &PlanParameters,
        compute: C,
    ) -> AppResult<WorkoutPlan>
    where
        C: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<WorkoutPlan>> + Send,
    {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            if entry.parameters == *parameters {
                debug!("Plan cache hit");
                return Ok(entry.plan.clone());
            }
        }

        debug!("Plan cache miss; generating plan");
        let plan = compute().await?;
        *slot = Some(CacheEntry {
            parameters: parameters.clone(),
            plan: plan.clone(),
        });
        Ok(plan)
    }
}
