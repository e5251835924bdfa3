// ABOUTME: Recipe detail route handlers for the HTML page and its JSON twin
// ABOUTME: Every failed detail fetch is logged before the fixed message is shown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use crate::state::detail::reduce;
use crate::state::{DetailEvent, DetailPhase, DetailState};
use crate::views::html::render_detail;
use crate::views::RecipeDetailView;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use recipe_core::errors::{AppError, FetchError};
use std::sync::Arc;
use tracing::error;

/// Recipe detail routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the detail page and JSON routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/recipe/:id", get(Self::handle_recipe_page))
            .route("/api/recipes/:id", get(Self::handle_recipe_json))
            .with_state(resources)
    }

    fn log_failure(id: &str, failure: &FetchError) {
        error!(recipe_id = %id, error = %failure, "Error fetching recipe");
    }

    /// Fetch the recipe for `id` and fold the outcome into a fresh detail state
    pub async fn load(resources: &ServerResources, id: String) -> DetailState {
        let state = DetailState::new(id.clone());
        let outcome = match resources.recipe_source.fetch_recipe_detail(&id).await {
            Ok(recipe) => DetailEvent::RecipeLoaded { id, recipe },
            Err(failure) => {
                Self::log_failure(&id, &failure);
                DetailEvent::FetchFailed { id, error: failure }
            }
        };
        reduce(state, outcome)
    }

    async fn handle_recipe_page(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Response {
        let state = Self::load(&resources, id).await;
        let status = match state.phase() {
            DetailPhase::Loaded(_) | DetailPhase::Loading => StatusCode::OK,
            DetailPhase::NotFound => StatusCode::NOT_FOUND,
            DetailPhase::Failed(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Html(render_detail(&state))).into_response()
    }

    async fn handle_recipe_json(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Json<RecipeDetailView>, AppError> {
        let recipe = resources
            .recipe_source
            .fetch_recipe_detail(&id)
            .await
            .map_err(|failure| {
                Self::log_failure(&id, &failure);
                AppError::from(failure)
            })?;
        Ok(Json(RecipeDetailView::from_recipe(&recipe)))
    }
}
