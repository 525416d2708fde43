// ABOUTME: Shared server resources container for dependency injection
// ABOUTME: Bundles configuration and the plan service behind Arc for handler state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Centralized resource management for the HTTP server.
//!
//! All route handlers share one [`ServerResources`] instance through axum
//! state. Constructing it wires the plan service to whichever
//! [`AssistantApi`] implementation the caller provides, which is the real
//! client in the binary and a scripted one in tests.

use std::sync::Arc;

use crate::assistant::AssistantApi;
use crate::config::ServerConfig;
use crate::plan::PlanService;

/// Shared resources for all request handlers
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Plan generation service with its cache
    pub plans: Arc<PlanService>,
}

impl ServerResources {
    /// Create resources over the given assistant implementation
    #[must_use]
    pub fn new(config: Arc<ServerConfig>, assistant: Arc<dyn AssistantApi>) -> Self {
        let plans = Arc::new(PlanService::new(assistant, config.poll));
        Self { config, plans }
    }
}
