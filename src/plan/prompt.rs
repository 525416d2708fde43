// ABOUTME: Builds the user-facing instruction text sent to the assistant
// ABOUTME: Selects phrasing per goal and embeds duration, weight, and location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Instruction text for plan generation.
//!
//! The instruction always carries the program duration and training
//! location verbatim; the weight to lose is included for the weight-loss
//! goal. Validation upstream guarantees the weight is present for that
//! goal, but the builder still degrades to a generic weight-loss phrasing
//! rather than failing if it is not.

use crate::models::{Goal, PlanParameters};

/// Render the instruction the assistant receives as the user message
#[must_use]
pub fn build_instruction(parameters: &PlanParameters) -> String {
    let weeks = parameters.weeks;
    let location = &parameters.location;

    match (parameters.goal, parameters.weight_to_lose_kg) {
        (Goal::WeightLoss, Some(weight)) => format!(
            "I would like to lose {weight} kilograms over {weeks} weeks. \
             Please write me a workout plan. Training location: {location}"
        ),
        (Goal::WeightLoss, None) => format!(
            "I would like to lose weight over {weeks} weeks. \
             Please write me a workout plan. Training location: {location}"
        ),
        (Goal::MuscleGain, _) => format!(
            "I would like to build muscle over {weeks} weeks. \
             Please write me a workout plan. Training location: {location}"
        ),
    }
}
