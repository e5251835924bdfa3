// ABOUTME: Dashboard view state record and its reducer
// ABOUTME: Tracks the recipe fetch, filter criteria, and selected chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_analytics::{CalorieRange, FilterCriteria, MinutesRange};
use recipe_core::models::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Histogram currently shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    /// Calorie distribution
    #[default]
    Calories,
    /// Cooking-time distribution
    CookingTime,
}

impl ChartType {
    /// The other chart
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Calories => Self::CookingTime,
            Self::CookingTime => Self::Calories,
        }
    }

    /// Chart heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Calories => "Calorie Distribution of Recipes",
            Self::CookingTime => "Cooking Time Distribution of Recipes",
        }
    }

    /// Toggle button label
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Calories => "Calorie Distribution",
            Self::CookingTime => "Cooking Time Distribution",
        }
    }

    /// Query-string value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::CookingTime => "cookingTime",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calories" => Ok(Self::Calories),
            "cookingTime" | "cooking_time" => Ok(Self::CookingTime),
            other => Err(format!("Unknown chart type '{other}'")),
        }
    }
}

/// Progress of the dashboard's list fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    /// Fetch pending
    Loading,
    /// Fetch succeeded
    Loaded(Vec<Recipe>),
    /// Fetch failed with a user-facing message
    Failed(String),
}

/// Dashboard view state
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    phase: LoadPhase,
    criteria: FilterCriteria,
    chart: ChartType,
    generation: u64,
    mounted: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            criteria: FilterCriteria::default(),
            chart: ChartType::default(),
            generation: 0,
            mounted: true,
        }
    }
}

impl DashboardState {
    /// Progress of the list fetch
    #[must_use]
    pub const fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Active filter criteria
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Selected chart
    #[must_use]
    pub const fn chart(&self) -> ChartType {
        self.chart
    }

    /// Generation of the most recent fetch; results must carry it to be applied
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the view still accepts events
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the list fetch is pending
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    /// User-facing error message, if the fetch failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fetched recipes; empty unless the fetch succeeded
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        match &self.phase {
            LoadPhase::Loaded(recipes) => recipes,
            _ => &[],
        }
    }
}

/// Everything that can change the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// A list fetch was issued
    FetchStarted,
    /// A list fetch succeeded
    RecipesLoaded {
        /// Generation the fetch was issued under
        generation: u64,
        /// Fetched recipes
        recipes: Vec<Recipe>,
    },
    /// A list fetch failed
    FetchFailed {
        /// Generation the fetch was issued under
        generation: u64,
        /// User-facing message
        message: String,
    },
    /// Search text edited
    SearchChanged(String),
    /// Diet select changed; `None` or empty means all diets
    DietSelected(Option<String>),
    /// Cuisine select changed; `None` or empty means all cuisines
    CuisineSelected(Option<String>),
    /// Lower calorie slider handle moved
    CalorieMinChanged(i64),
    /// Upper calorie slider handle moved
    CalorieMaxChanged(i64),
    /// Cooking-time select changed
    CookingTimeSelected(Option<MinutesRange>),
    /// A chart button was pressed
    ChartSelected(ChartType),
    /// Switch to the other chart
    ChartToggled,
    /// The view went away; later results must not be applied
    Unmounted,
}

/// An empty select value means "no selection"
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Apply one event to the dashboard state
#[must_use]
pub fn reduce(state: DashboardState, event: DashboardEvent) -> DashboardState {
    if !state.mounted {
        debug!(?event, "Dashboard unmounted; ignoring event");
        return state;
    }

    match event {
        DashboardEvent::FetchStarted => DashboardState {
            phase: LoadPhase::Loading,
            generation: state.generation + 1,
            ..state
        },
        DashboardEvent::RecipesLoaded {
            generation,
            recipes,
        } => {
            if generation != state.generation {
                debug!(
                    generation,
                    current = state.generation,
                    "Discarding stale recipe list"
                );
                return state;
            }
            DashboardState {
                phase: LoadPhase::Loaded(recipes),
                ..state
            }
        }
        DashboardEvent::FetchFailed {
            generation,
            message,
        } => {
            if generation != state.generation {
                debug!(
                    generation,
                    current = state.generation,
                    "Discarding stale fetch failure"
                );
                return state;
            }
            DashboardState {
                phase: LoadPhase::Failed(message),
                ..state
            }
        }
        DashboardEvent::SearchChanged(search) => with_criteria(state, |c| c.search = search),
        DashboardEvent::DietSelected(diet) => with_criteria(state, |c| c.diet = non_empty(diet)),
        DashboardEvent::CuisineSelected(cuisine) => {
            with_criteria(state, |c| c.cuisine = non_empty(cuisine))
        }
        DashboardEvent::CalorieMinChanged(value) => with_criteria(state, |c| {
            c.calories.min = f64::from(CalorieRange::clamp_handle(value));
        }),
        DashboardEvent::CalorieMaxChanged(value) => with_criteria(state, |c| {
            c.calories.max = f64::from(CalorieRange::clamp_handle(value));
        }),
        DashboardEvent::CookingTimeSelected(range) => {
            with_criteria(state, |c| c.cooking_time = range)
        }
        DashboardEvent::ChartSelected(chart) => DashboardState { chart, ..state },
        DashboardEvent::ChartToggled => DashboardState {
            chart: state.chart.toggle(),
            ..state
        },
        DashboardEvent::Unmounted => DashboardState {
            mounted: false,
            ..state
        },
    }
}

fn with_criteria(
    mut state: DashboardState,
    update: impl FnOnce(&mut FilterCriteria),
) -> DashboardState {
    update(&mut state.criteria);
    state
}
