// ABOUTME: Dashboard view model re-derived from the dashboard state on every change
// ABOUTME: Summary, both histograms, the active chart, insights, select options, and table rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::two_decimals;
use crate::state::{ChartType, DashboardState};
use recipe_analytics::{
    calorie_histogram, cooking_time_histogram, filter_recipes, FilterCriteria, Histogram,
    SummaryStats,
};
use recipe_core::constants::{messages, options};
use recipe_core::errors::LookupError;
use recipe_core::models::Recipe;
use serde::Serialize;

/// One entry of a select control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Submitted value
    pub value: &'static str,
    /// Displayed label
    pub label: &'static str,
    /// Whether this option is the current selection
    pub selected: bool,
}

impl SelectOption {
    fn list(choices: &[(&'static str, &'static str)], current: Option<&str>) -> Vec<Self> {
        choices
            .iter()
            .map(|&(value, label)| Self {
                value,
                label,
                selected: current == Some(value),
            })
            .collect()
    }
}

/// Summary statistics formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// Number of filtered recipes
    pub total_recipes: usize,
    /// Mean calories, two decimals
    pub average_calories: String,
    /// Median calories, two decimals
    pub median_calories: String,
    /// Most frequent diet, or `N/A`
    pub most_common_diet: String,
    /// Mean cooking time, two decimals
    pub average_cooking_time: String,
}

impl From<&SummaryStats> for SummaryView {
    fn from(stats: &SummaryStats) -> Self {
        Self {
            total_recipes: stats.count,
            average_calories: two_decimals(stats.mean_calories),
            median_calories: two_decimals(stats.median_calories),
            most_common_diet: stats
                .mode_diet
                .clone()
                .unwrap_or_else(|| messages::NOT_AVAILABLE.to_owned()),
            average_cooking_time: two_decimals(stats.mean_cooking_time),
        }
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeRow {
    /// Recipe id
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// "N minutes"
    pub cooking_time: String,
    /// Calories to two decimals followed by " kcal"
    pub calories: String,
    /// Link to the detail page
    pub link: String,
}

impl RecipeRow {
    fn from_recipe(recipe: &Recipe) -> Result<Self, LookupError> {
        Ok(Self {
            id: recipe.id,
            title: recipe.title.clone(),
            cooking_time: format!("{} minutes", recipe.ready_in_minutes),
            calories: format!("{} kcal", two_decimals(recipe.calories()?)),
            link: recipe.detail_path(),
        })
    }
}

/// Everything the dashboard page displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// List fetch still pending
    pub loading: bool,
    /// User-facing fetch failure
    pub error: Option<String>,
    /// Criteria the view was derived with
    pub criteria: FilterCriteria,
    /// Raw statistics over the filtered recipes
    pub stats: SummaryStats,
    /// Display-formatted statistics
    pub summary: SummaryView,
    /// Chart currently selected
    pub chart: ChartType,
    /// Heading of the selected chart
    pub chart_title: &'static str,
    /// Calorie histogram over every fetched recipe
    pub calorie_histogram: Histogram,
    /// Cooking-time histogram over every fetched recipe
    pub cooking_time_histogram: Histogram,
    /// Insight sentences quoting the statistics
    pub insights: Vec<String>,
    /// Diet select options
    pub diet_options: Vec<SelectOption>,
    /// Cuisine select options
    pub cuisine_options: Vec<SelectOption>,
    /// Cooking-time select options
    pub cooking_time_options: Vec<SelectOption>,
    /// Filtered recipes, in fetch order
    pub rows: Vec<RecipeRow>,
}

impl DashboardView {
    /// Derive the full view from the current state.
    ///
    /// Filtering and statistics cover the filtered subset; the histograms
    /// cover the whole fetched list.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` if any fetched recipe lacks a calorie entry
    pub fn derive(state: &DashboardState) -> Result<Self, LookupError> {
        let recipes = state.recipes();
        let criteria = state.criteria();
        let filtered = filter_recipes(recipes, criteria)?;

        let stats = SummaryStats::compute(filtered.iter().copied())?;
        let summary = SummaryView::from(&stats);
        let rows = filtered
            .iter()
            .map(|recipe| RecipeRow::from_recipe(recipe))
            .collect::<Result<Vec<_>, _>>()?;

        let cooking_time = criteria.cooking_time.as_ref().map(ToString::to_string);

        Ok(Self {
            loading: state.is_loading(),
            error: state.error().map(ToOwned::to_owned),
            criteria: criteria.clone(),
            insights: insights(&summary),
            stats,
            summary,
            chart: state.chart(),
            chart_title: state.chart().title(),
            calorie_histogram: calorie_histogram(recipes)?,
            cooking_time_histogram: cooking_time_histogram(recipes),
            diet_options: SelectOption::list(options::DIETS, criteria.diet.as_deref()),
            cuisine_options: SelectOption::list(options::CUISINES, criteria.cuisine.as_deref()),
            cooking_time_options: SelectOption::list(
                options::COOKING_TIMES,
                cooking_time.as_deref(),
            ),
            rows,
        })
    }

    /// Histogram backing the selected chart
    #[must_use]
    pub const fn active_histogram(&self) -> &Histogram {
        match self.chart {
            ChartType::Calories => &self.calorie_histogram,
            ChartType::CookingTime => &self.cooking_time_histogram,
        }
    }
}

fn insights(summary: &SummaryView) -> Vec<String> {
    vec![
        "Most recipes fall within the 200-400 calorie range, ideal for health-conscious individuals.".to_owned(),
        "There's a good mix of quick (0-15 minutes) and medium (16-30 minutes) preparation time recipes, perfect for busy lifestyles.".to_owned(),
        format!(
            "The most common diet type is {}, reflecting current dietary preferences.",
            summary.most_common_diet
        ),
        format!(
            "With an average cooking time of {} minutes, these recipes strike a balance between convenience and home-cooked meals.",
            summary.average_cooking_time
        ),
    ]
}
