// ABOUTME: HTTP route handlers for the workout plan web interface
// ABOUTME: Exposes the plan form, plan submission, and health endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP routes for the workout plan server
//!
//! - **plans**: the HTML form and plan submission on `/`
//! - **health**: liveness and readiness endpoints for monitoring

/// Health check endpoints
pub mod health;
/// Plan form and submission endpoints
pub mod plans;

pub use health::HealthRoutes;
pub use plans::PlanRoutes;
