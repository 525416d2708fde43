// ABOUTME: HTML page rendering for the form, result, and error views
// ABOUTME: Fills include_str templates and escapes all user and assistant text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Page Templates
//!
//! Server-rendered HTML for the three views the service serves. Templates
//! ship inside the binary via `include_str!` and use `{{PLACEHOLDER}}`
//! markers. Every dynamic value that originates from a user or from the
//! assistant is HTML-escaped before substitution.

use html_escape::encode_text;

use crate::errors::AppError;
use crate::models::{Goal, PlanLine, PlanParameters, WorkoutPlan};

/// Renderer for the service's HTML pages
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Render the plan request form
    #[must_use]
    pub const fn render_index() -> &'static str {
        include_str!("../templates/index.html")
    }

    /// Render a generated plan
    #[must_use]
    pub fn render_result(parameters: &PlanParameters, plan: &WorkoutPlan) -> String {
        const TEMPLATE: &str = include_str!("../templates/result.html");

        let location = encode_text(&parameters.location);
        let summary = match (parameters.goal, parameters.weight_to_lose_kg) {
            (Goal::WeightLoss, Some(weight)) => format!(
                "{}-week weight loss plan for {location} (target: lose {weight} kg)",
                parameters.weeks
            ),
            _ => format!(
                "{}-week {} plan for {location}",
                parameters.weeks, parameters.goal
            ),
        };

        let lines: Vec<String> = plan
            .lines
            .iter()
            .map(|line| match line {
                PlanLine::Task(text) => {
                    format!("<span class=\"task\">{}</span>", encode_text(text))
                }
                PlanLine::Paragraph(text) => format!("<p>{}</p>", encode_text(text)),
            })
            .collect();

        TEMPLATE
            .replace("{{SUMMARY}}", &summary)
            .replace("{{PLAN_LINES}}", &lines.join("\n"))
    }

    /// Render the error page for a failed request
    #[must_use]
    pub fn render_error(error: &AppError) -> String {
        const TEMPLATE: &str = include_str!("../templates/error.html");

        TEMPLATE
            .replace("{{STATUS}}", &error.http_status().to_string())
            .replace("{{TITLE}}", error.code.description())
            .replace("{{DETAIL}}", &encode_text(&error.message))
    }
}
