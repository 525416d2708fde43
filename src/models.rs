// ABOUTME: Domain types for workout plan requests and formatted results
// ABOUTME: Closed goal enumeration, validated plan parameters, and tagged plan lines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Core data models shared across the plan generation pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{AppError, AppResult};

/// Fitness goal selected on the request form
///
/// The set is closed: any label outside it is rejected at parse time rather
/// than flowing through the pipeline as an unclassified string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Lose a target number of kilograms
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
}

impl Goal {
    /// Form label for the weight-loss goal
    pub const WEIGHT_LOSS_LABEL: &'static str = "weight_loss";
    /// Form label for the muscle-gain goal
    pub const MUSCLE_GAIN_LABEL: &'static str = "muscle_gain";

    /// Parse a form label into a goal
    ///
    /// # Errors
    ///
    /// Returns an `invalid_input` error naming the offending label when it
    /// matches neither recognized value.
    pub fn parse(label: &str) -> AppResult<Self> {
        match label {
            Self::WEIGHT_LOSS_LABEL => Ok(Self::WeightLoss),
            Self::MUSCLE_GAIN_LABEL => Ok(Self::MuscleGain),
            other => Err(AppError::invalid_input(format!(
                "Unrecognized goal '{other}': expected '{}' or '{}'",
                Self::WEIGHT_LOSS_LABEL,
                Self::MUSCLE_GAIN_LABEL,
            ))),
        }
    }

    /// Stable label used in forms and serialized parameters
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::WeightLoss => Self::WEIGHT_LOSS_LABEL,
            Self::MuscleGain => Self::MUSCLE_GAIN_LABEL,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightLoss => write!(f, "weight loss"),
            Self::MuscleGain => write!(f, "muscle gain"),
        }
    }
}

/// Validated parameters for one plan request
///
/// Two requests with identical fields describe the same job: the cache
/// compares parameter sets structurally to decide whether the generation
/// pipeline can be skipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanParameters {
    /// Program length in weeks
    pub weeks: u32,
    /// Selected fitness goal
    pub goal: Goal,
    /// Free-text training location, kept exactly as submitted
    pub location: String,
    /// Kilograms to lose; required for the weight-loss goal
    pub weight_to_lose_kg: Option<u32>,
}

impl PlanParameters {
    /// Validate raw form values into plan parameters
    ///
    /// # Errors
    ///
    /// Returns `invalid_input` for a zero-week duration or blank location,
    /// and `missing_field` when the weight-loss goal arrives without a
    /// weight to lose.
    pub fn new(
        weeks: u32,
        goal: Goal,
        location: impl Into<String>,
        weight_to_lose_kg: Option<u32>,
    ) -> AppResult<Self> {
        let location = location.into();
        if weeks == 0 {
            return Err(AppError::invalid_input(
                "Plan duration must be at least one week",
            ));
        }
        if location.trim().is_empty() {
            return Err(AppError::invalid_input(
                "Training location must not be empty",
            ));
        }
        if goal == Goal::WeightLoss && weight_to_lose_kg.is_none() {
            return Err(AppError::missing_field("weight"));
        }
        Ok(Self {
            weeks,
            goal,
            location,
            weight_to_lose_kg,
        })
    }
}

/// One line of a formatted plan, tagged for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum PlanLine {
    /// Dash-prefixed line rendered as a task item
    Task(String),
    /// Any other line rendered as a paragraph
    Paragraph(String),
}

impl PlanLine {
    /// Line text without the presentation tag
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Task(text) | Self::Paragraph(text) => text,
        }
    }
}

/// A formatted workout plan: presentation-tagged lines in assistant order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Plan lines, blank lines already dropped
    pub lines: Vec<PlanLine>,
}
