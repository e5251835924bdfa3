// ABOUTME: Recipe detail view model with display fallbacks for absent fields
// ABOUTME: Calories, diets, cuisines, and instructions degrade to placeholders instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::two_decimals;
use recipe_core::constants::messages;
use recipe_core::models::Recipe;
use serde::Serialize;

/// Link back to the dashboard
pub const BACK_LINK: &str = "/";

/// Everything the detail page displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetailView {
    /// Recipe id
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Image URL, when the recipe has one
    pub image: Option<String>,
    /// Calories to two decimals, or `N/A`
    pub calories: String,
    /// "N minutes"
    pub cooking_time: String,
    /// Diets joined with ", ", or `None`
    pub diets: String,
    /// Cuisines joined with ", ", or `None`
    pub cuisines: String,
    /// Original ingredient lines
    pub ingredients: Vec<String>,
    /// Steps of the first instruction group, in order
    pub instructions: Vec<String>,
    /// Shown instead of the steps when the recipe has no instruction group
    pub instructions_placeholder: Option<&'static str>,
    /// Dashboard link
    pub back_link: &'static str,
}

impl RecipeDetailView {
    /// Build the view, never failing on missing nested data
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let steps = recipe.first_instruction_steps();

        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            calories: recipe
                .calories()
                .map_or_else(|_| messages::NOT_AVAILABLE.to_owned(), two_decimals),
            cooking_time: format!("{} minutes", recipe.ready_in_minutes),
            diets: join_or_none(&recipe.diets),
            cuisines: join_or_none(&recipe.cuisines),
            ingredients: recipe
                .extended_ingredients
                .iter()
                .map(|ingredient| ingredient.original.clone())
                .collect(),
            instructions: steps
                .unwrap_or_default()
                .iter()
                .map(|step| step.step.clone())
                .collect(),
            instructions_placeholder: steps
                .is_none()
                .then_some(messages::NO_INSTRUCTIONS),
            back_link: BACK_LINK,
        }
    }
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        messages::NONE.to_owned()
    } else {
        values.join(", ")
    }
}
