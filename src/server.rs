// ABOUTME: HTTP server assembly and lifecycle for the workout plan service
// ABOUTME: Builds the router with tracing, binds the listener, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # HTTP Server
//!
//! Assembles the plan and health routes into one router behind a request
//! trace layer, then serves it on the configured port until the process
//! receives a shutdown signal.

use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, PlanRoutes};

/// HTTP server for the workout plan service
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server over the given resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router
    ///
    /// Separate from [`run`](Self::run) so tests can drive the router
    /// without binding a socket.
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(PlanRoutes::routes(self.resources.clone()))
            .merge(HealthRoutes::routes())
            .layer(TraceLayer::new_for_http())
    }

    /// Bind the configured port and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    /// while running.
    pub async fn run(self) -> AppResult<()> {
        let addr = SocketAddr::from(([127, 0, 0, 1], self.resources.config.http_port));
        let app = self.router();

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        info!("HTTP server listening on http://{addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))
    }
}

/// Resolve when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received, stopping HTTP server");
}
