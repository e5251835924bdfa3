// ABOUTME: Health check route handler for liveness probes
// ABOUTME: Reports service status without touching the upstream recipe API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check route for load balancers and uptime monitors

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "service": crate::logging::SERVICE_NAME,
                "version": env!("CARGO_PKG_VERSION"),
            }))
        }

        Router::new().route("/health", get(health_handler))
    }
}
