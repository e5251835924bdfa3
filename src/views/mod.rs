// ABOUTME: View models derived from view state, plus their HTML rendering
// ABOUTME: Dashboard and recipe detail pages share one set of status templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! View models are plain serializable records computed from the state
//! reducers' output. The JSON routes return them as-is; the HTML routes hand
//! them to [`html`] for rendering.

/// Dashboard view model
pub mod dashboard;
/// Recipe detail view model
pub mod detail;
/// HTML rendering of the view models
pub mod html;

pub use dashboard::{DashboardView, RecipeRow, SelectOption, SummaryView};
pub use detail::RecipeDetailView;

/// Two-decimal rendering used for every displayed number
#[must_use]
pub fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}
