// ABOUTME: Dashboard route handlers for the HTML page and its JSON twin
// ABOUTME: Translates query parameters into dashboard events and renders the derived view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard routes
//!
//! Each request replays the dashboard's life in one go: a fetch is started,
//! its outcome is applied, and the filter controls encoded in the query
//! string are applied as user events on top.

use crate::resources::ServerResources;
use crate::state::dashboard::reduce;
use crate::state::{ChartType, DashboardEvent, DashboardState};
use crate::views::html::{render_dashboard, render_status_page};
use crate::views::DashboardView;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use recipe_analytics::MinutesRange;
use recipe_core::errors::{AppError, AppResult};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Filter controls as submitted by the dashboard form
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Title search text
    #[serde(default)]
    pub search: Option<String>,
    /// Diet select value
    #[serde(default)]
    pub diet: Option<String>,
    /// Cuisine select value
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Lower calorie slider position
    #[serde(default)]
    pub min_calories: Option<String>,
    /// Upper calorie slider position
    #[serde(default)]
    pub max_calories: Option<String>,
    /// Cooking-time select value (`min-max`)
    #[serde(default)]
    pub cooking_time: Option<String>,
    /// Selected chart
    #[serde(default)]
    pub chart: Option<String>,
}

impl DashboardQuery {
    /// The user events this query stands for, in control order
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a non-numeric slider position or an
    /// unparseable cooking time or chart
    pub fn events(&self) -> AppResult<Vec<DashboardEvent>> {
        let mut events = Vec::new();

        if let Some(search) = &self.search {
            events.push(DashboardEvent::SearchChanged(search.clone()));
        }
        if let Some(diet) = &self.diet {
            events.push(DashboardEvent::DietSelected(Some(diet.clone())));
        }
        if let Some(cuisine) = &self.cuisine {
            events.push(DashboardEvent::CuisineSelected(Some(cuisine.clone())));
        }
        if let Some(min) = slider_position("min_calories", self.min_calories.as_deref())? {
            events.push(DashboardEvent::CalorieMinChanged(min));
        }
        if let Some(max) = slider_position("max_calories", self.max_calories.as_deref())? {
            events.push(DashboardEvent::CalorieMaxChanged(max));
        }
        if let Some(cooking_time) = self.cooking_time.as_deref().filter(|v| !v.is_empty()) {
            let range = cooking_time
                .parse::<MinutesRange>()
                .map_err(|e| AppError::invalid_input(e.to_string()).with_source(e))?;
            events.push(DashboardEvent::CookingTimeSelected(Some(range)));
        }
        if let Some(chart) = self.chart.as_deref().filter(|v| !v.is_empty()) {
            let chart = chart.parse::<ChartType>().map_err(AppError::invalid_input)?;
            events.push(DashboardEvent::ChartSelected(chart));
        }

        Ok(events)
    }
}

/// Parse a slider position, rounding fractions
///
/// Float-to-integer casts saturate, so huge values reach the reducer as
/// `i64::MIN`/`i64::MAX` and are clamped there like any other position.
fn slider_position(name: &str, raw: Option<&str>) -> AppResult<Option<i64>> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(Some(value.round() as i64)),
        _ => Err(AppError::invalid_input(format!(
            "{name} must be a number, got '{raw}'"
        ))),
    }
}

fn query_error(rejection: &QueryRejection) -> AppError {
    AppError::invalid_input(rejection.body_text())
}

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create the dashboard page and JSON routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_dashboard_page))
            .route("/api/dashboard", get(Self::handle_dashboard_json))
            .with_state(resources)
    }

    /// Fetch the recipe list and derive the view for `query`
    ///
    /// # Errors
    ///
    /// Returns an error for malformed query values or a recipe without calories
    pub async fn load(
        resources: &ServerResources,
        query: &DashboardQuery,
    ) -> AppResult<DashboardView> {
        let controls = query.events()?;

        let state = reduce(DashboardState::default(), DashboardEvent::FetchStarted);
        let generation = state.generation();
        let outcome = match resources.recipe_source.fetch_recipes().await {
            Ok(recipes) => DashboardEvent::RecipesLoaded {
                generation,
                recipes,
            },
            Err(error) => {
                warn!(error = %error, "Recipe list fetch failed");
                DashboardEvent::FetchFailed {
                    generation,
                    message: error.list_message().to_owned(),
                }
            }
        };

        let state = controls.into_iter().fold(reduce(state, outcome), reduce);
        Ok(DashboardView::derive(&state)?)
    }

    async fn handle_dashboard_page(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<DashboardQuery>, QueryRejection>,
    ) -> Response {
        let loaded = match query {
            Ok(Query(query)) => Self::load(&resources, &query).await,
            Err(rejection) => Err(query_error(&rejection)),
        };
        match loaded {
            Ok(view) => Html(render_dashboard(&view)).into_response(),
            Err(error) => {
                warn!(error = %error, "Dashboard could not be rendered");
                let status = StatusCode::from_u16(error.http_status())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let page = render_status_page(
                    "Spoonacular Recipe Dashboard",
                    "error-message",
                    &format!("Error: {}", error.message),
                );
                (status, Html(page)).into_response()
            }
        }
    }

    async fn handle_dashboard_json(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<DashboardQuery>, QueryRejection>,
    ) -> Result<Json<DashboardView>, AppError> {
        let Query(query) = query.map_err(|rejection| query_error(&rejection))?;
        Ok(Json(Self::load(&resources, &query).await?))
    }
}
