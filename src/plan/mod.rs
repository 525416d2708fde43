// ABOUTME: Workout plan generation pipeline from validated parameters to tagged lines
// ABOUTME: Prompt building, response formatting, result caching, and orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Plan Generation Pipeline
//!
//! Turns validated [`PlanParameters`](crate::models::PlanParameters) into a
//! formatted [`WorkoutPlan`](crate::models::WorkoutPlan):
//!
//! - **prompt**: renders the user-facing instruction sent to the assistant
//! - **formatter**: normalizes raw assistant text into tagged plan lines
//! - **cache**: remembers the most recent plan keyed by its parameters
//! - **service**: drives message, run, poll, and fetch against the API

/// Single-slot plan cache
pub mod cache;
/// Raw assistant text to tagged plan lines
pub mod formatter;
/// Instruction text for the assistant
pub mod prompt;
/// End-to-end plan generation
pub mod service;

pub use cache::PlanCache;
pub use service::PlanService;
