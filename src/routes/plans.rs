// ABOUTME: Route handlers for the plan request form and plan generation
// ABOUTME: Parses form submissions, validates parameters, and renders plan pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Plan Routes
//!
//! `GET /` serves the request form; `POST /` validates the submission,
//! asks the plan service for a plan, and renders it. Validation failures
//! and pipeline errors surface as rendered error pages through
//! [`AppError`]'s response conversion.

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Goal, PlanParameters};
use crate::resources::ServerResources;
use crate::templates::TemplateRenderer;

/// Raw form submission for a plan request
///
/// The weight field arrives as an empty string when the browser submits
/// the form without it, so it deserializes through a helper that maps
/// blank to absent.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Program length in weeks
    pub weeks: u32,
    /// Goal label, parsed against the closed goal set
    pub goal: String,
    /// Free-text training location
    pub location: String,
    /// Kilograms to lose, blank when not applicable
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub weight: Option<u32>,
}

/// Treat a missing or blank form value as `None`
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Plan form and submission routes
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the plan routes with shared state
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::show_form).post(Self::request_plan))
            .with_state(resources)
    }

    /// Serve the plan request form
    async fn show_form() -> Html<&'static str> {
        Html(TemplateRenderer::render_index())
    }

    /// Validate a submission, generate (or reuse) the plan, render it
    async fn request_plan(
        State(resources): State<Arc<ServerResources>>,
        Form(request): Form<PlanRequest>,
    ) -> Result<Html<String>, AppError> {
        let goal = Goal::parse(&request.goal)?;
        let parameters =
            PlanParameters::new(request.weeks, goal, request.location, request.weight)?;

        let plan = resources.plans.plan_for(&parameters).await?;

        Ok(Html(TemplateRenderer::render_result(&parameters, &plan)))
    }
}
