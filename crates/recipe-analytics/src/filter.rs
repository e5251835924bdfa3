// ABOUTME: Applies filter criteria to a recipe list
// ABOUTME: Five independent predicates ANDed together, input order preserved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::criteria::FilterCriteria;
use recipe_core::errors::LookupError;
use recipe_core::models::Recipe;
use tracing::debug;

/// Whether a single recipe satisfies every predicate in `criteria`
///
/// The calorie amount is resolved before any predicate runs, so a recipe
/// without a "Calories" entry is rejected with an error regardless of which
/// other predicates it would fail.
///
/// # Errors
///
/// Returns `LookupError::MissingNutrient` if the recipe has no calorie entry
pub fn matches(recipe: &Recipe, criteria: &FilterCriteria) -> Result<bool, LookupError> {
    let calories = recipe.calories()?;

    Ok(title_matches(recipe, &criteria.search)
        && criteria
            .diet
            .as_deref()
            .is_none_or(|diet| recipe.diets.iter().any(|d| d == diet))
        && criteria
            .cuisine
            .as_deref()
            .is_none_or(|cuisine| recipe.cuisines.iter().any(|c| c == cuisine))
        && criteria.calories.contains(calories)
        && criteria
            .cooking_time
            .is_none_or(|range| range.contains(recipe.ready_in_minutes)))
}

fn title_matches(recipe: &Recipe, search: &str) -> bool {
    search.is_empty() || recipe.title.to_lowercase().contains(&search.to_lowercase())
}

/// Recipes satisfying `criteria`, in their original order
///
/// # Errors
///
/// Returns `LookupError::MissingNutrient` for the first recipe lacking a
/// calorie entry
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    criteria: &FilterCriteria,
) -> Result<Vec<&'a Recipe>, LookupError> {
    let mut filtered = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        if matches(recipe, criteria)? {
            filtered.push(recipe);
        }
    }

    debug!(
        total = recipes.len(),
        matched = filtered.len(),
        "Filtered recipe list"
    );
    Ok(filtered)
}
