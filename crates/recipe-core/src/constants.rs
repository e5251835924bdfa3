// ABOUTME: Constants for the recipe dashboard organized by domain
// ABOUTME: API defaults, nutrient names, slider bounds, select options, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants grouped by domain.

/// Spoonacular API defaults
pub mod api {
    /// Default base URL of the Spoonacular API
    pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
    /// Path of the complex-search (list) endpoint
    pub const COMPLEX_SEARCH_PATH: &str = "/recipes/complexSearch";
    /// Maximum number of recipes requested in one list fetch
    pub const MAX_RESULT_COUNT: u32 = 100;
    /// Service name used in logs and error messages
    pub const SERVICE_NAME: &str = "Spoonacular API";
}

/// Nutrient names as reported by the API
pub mod nutrients {
    /// Energy entry used for every calorie computation
    pub const CALORIES: &str = "Calories";
}

/// Calorie range slider bounds
pub mod calories {
    /// Lowest value either slider handle accepts
    pub const SLIDER_MIN: u32 = 0;
    /// Highest value either slider handle accepts
    pub const SLIDER_MAX: u32 = 1000;
}

/// Options offered by the dashboard's select controls as `(value, label)`
pub mod options {
    /// Diet select
    pub const DIETS: &[(&str, &str)] = &[
        ("gluten free", "Gluten Free"),
        ("ketogenic", "Ketogenic"),
        ("vegetarian", "Vegetarian"),
        ("vegan", "Vegan"),
    ];

    /// Cuisine select
    pub const CUISINES: &[(&str, &str)] = &[
        ("Italian", "Italian"),
        ("Mexican", "Mexican"),
        ("Asian", "Asian"),
        ("American", "American"),
    ];

    /// Cooking-time select; values are inclusive `min-max` minute ranges
    pub const COOKING_TIMES: &[(&str, &str)] = &[
        ("0-15", "Quick (0-15 minutes)"),
        ("16-30", "Medium (16-30 minutes)"),
        ("31-60", "Long (31-60 minutes)"),
        ("61-1000", "Very Long (60+ minutes)"),
    ];
}

/// Fixed user-facing messages
pub mod messages {
    /// Dashboard list fetch failed
    pub const LIST_FETCH_FAILED: &str = "Failed to fetch recipes. Please try again later.";
    /// Detail fetch failed
    pub const DETAIL_FETCH_FAILED: &str = "Failed to fetch recipe details. Please try again later.";
    /// Detail fetch returned nothing usable
    pub const RECIPE_NOT_FOUND: &str = "Recipe not found";
    /// Dashboard while the list fetch is pending
    pub const LOADING_RECIPES: &str = "Loading recipes...";
    /// Detail page while the detail fetch is pending
    pub const LOADING_DETAILS: &str = "Loading recipe details...";
    /// Placeholder for an absent value
    pub const NOT_AVAILABLE: &str = "N/A";
    /// Placeholder for an empty diet or cuisine list
    pub const NONE: &str = "None";
    /// Placeholder when a recipe has no instruction group
    pub const NO_INSTRUCTIONS: &str = "No instructions available.";
}
