// ABOUTME: Lookup error for nutrient data that a computation requires
// ABOUTME: Raised instead of faulting when a recipe carries no "Calories" entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// A nutrient required by filtering or statistics is absent from a recipe
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The recipe has no nutrition block or no entry with this name
    #[error("Recipe {recipe_id} has no '{nutrient}' nutrient")]
    MissingNutrient {
        /// Identifier of the offending recipe
        recipe_id: u64,
        /// Nutrient name that was looked up
        nutrient: String,
    },
}
