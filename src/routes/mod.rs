// ABOUTME: Route module organization for the recipe dashboard HTTP endpoints
// ABOUTME: Assembles dashboard, recipe detail, and health routes behind request tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the recipe dashboard
//!
//! Each domain module holds its route definitions and thin handlers that
//! delegate to the state reducers and view models.

/// Dashboard page and JSON routes
pub mod dashboard;
/// Health check route
pub mod health;
/// Recipe detail page and JSON routes
pub mod recipe;

pub use dashboard::{DashboardQuery, DashboardRoutes};
pub use health::HealthRoutes;
pub use recipe::RecipeRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Full application router with HTTP request tracing
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(DashboardRoutes::routes(Arc::clone(&resources)))
        .merge(RecipeRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
}
