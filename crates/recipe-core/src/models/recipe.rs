// ABOUTME: Recipe record with nutrition, ingredients, and analyzed instructions
// ABOUTME: Provides the typed calorie accessor that every aggregate depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrients;
use crate::errors::LookupError;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single dish record returned by the recipe API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Spoonacular recipe identifier
    pub id: u64,
    /// Display title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Total preparation and cooking time
    #[serde(default, deserialize_with = "null_as_default")]
    pub ready_in_minutes: u32,
    /// Diet tags (e.g. "vegan", "gluten free")
    #[serde(default, deserialize_with = "null_as_default")]
    pub diets: Vec<String>,
    /// Cuisine tags (e.g. "Italian")
    #[serde(default, deserialize_with = "null_as_default")]
    pub cuisines: Vec<String>,
    /// Embedded nutrition facts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    /// Ingredients, present on detail responses
    #[serde(default, deserialize_with = "null_as_default")]
    pub extended_ingredients: Vec<Ingredient>,
    /// Instruction groups, present on detail responses
    #[serde(default, deserialize_with = "null_as_default")]
    pub analyzed_instructions: Vec<InstructionGroup>,
}

/// Nutrition block of a recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    /// Ordered nutrient entries
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrients: Vec<Nutrient>,
}

/// One nutrient amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    /// Nutrient name (e.g. "Calories", "Protein")
    pub name: String,
    /// Amount per serving, absent when the API omits or nulls it
    #[serde(default)]
    pub amount: Option<f64>,
    /// Unit of `amount` (e.g. "kcal", "g")
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
}

/// Ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Spoonacular ingredient identifier
    #[serde(default)]
    pub id: Option<u64>,
    /// Original free-text line (e.g. "2 cups flour")
    #[serde(default, deserialize_with = "null_as_default")]
    pub original: String,
}

/// A named group of numbered steps
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstructionGroup {
    /// Group name, usually empty for the main group
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Steps in order
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<InstructionStep>,
}

/// One numbered instruction step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    /// 1-based step number, 0 when the API omits it
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: u32,
    /// Step text
    #[serde(default, deserialize_with = "null_as_default")]
    pub step: String,
}

impl Recipe {
    /// Create a recipe with only an identifier and title
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: None,
            ready_in_minutes: 0,
            diets: Vec::new(),
            cuisines: Vec::new(),
            nutrition: None,
            extended_ingredients: Vec::new(),
            analyzed_instructions: Vec::new(),
        }
    }

    /// Set the cooking time
    #[must_use]
    pub const fn with_ready_in_minutes(mut self, minutes: u32) -> Self {
        self.ready_in_minutes = minutes;
        self
    }

    /// Add or replace the "Calories" nutrient
    #[must_use]
    pub fn with_calories(mut self, amount: f64) -> Self {
        let nutrition = self.nutrition.get_or_insert_with(Nutrition::default);
        nutrition
            .nutrients
            .retain(|nutrient| nutrient.name != nutrients::CALORIES);
        nutrition.nutrients.push(Nutrient {
            name: nutrients::CALORIES.to_owned(),
            amount: Some(amount),
            unit: "kcal".to_owned(),
        });
        self
    }

    /// Set the diet tags
    #[must_use]
    pub fn with_diets<I, S>(mut self, diets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diets = diets.into_iter().map(Into::into).collect();
        self
    }

    /// Set the cuisine tags
    #[must_use]
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Find a nutrient by exact name
    #[must_use]
    pub fn nutrient(&self, name: &str) -> Option<&Nutrient> {
        self.nutrition
            .as_ref()?
            .nutrients
            .iter()
            .find(|nutrient| nutrient.name == name)
    }

    /// Calorie amount of this recipe
    ///
    /// Filtering and every calorie aggregate require this entry.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::MissingNutrient` if the recipe has no nutrition
    /// block, no "Calories" entry, or a "Calories" entry without an amount
    pub fn calories(&self) -> Result<f64, LookupError> {
        self.nutrient(nutrients::CALORIES)
            .and_then(|nutrient| nutrient.amount)
            .ok_or_else(|| LookupError::MissingNutrient {
                recipe_id: self.id,
                nutrient: nutrients::CALORIES.to_owned(),
            })
    }

    /// Steps of the first instruction group, if there is one
    #[must_use]
    pub fn first_instruction_steps(&self) -> Option<&[InstructionStep]> {
        self.analyzed_instructions
            .first()
            .map(|group| group.steps.as_slice())
    }

    /// Path of this recipe's detail page
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/recipe/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_complex_search_result() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 716_429,
            "title": "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs",
            "image": "https://img.spoonacular.com/recipes/716429-312x231.jpg",
            "readyInMinutes": 45,
            "diets": ["dairy free"],
            "cuisines": [],
            "nutrition": {
                "nutrients": [
                    {"name": "Calories", "amount": 584.46, "unit": "kcal"},
                    {"name": "Fat", "amount": 19.25, "unit": "g"}
                ]
            }
        }))
        .unwrap();

        assert_eq!(recipe.id, 716_429);
        assert_eq!(recipe.ready_in_minutes, 45);
        assert_eq!(recipe.diets, vec!["dairy free"]);
        assert!((recipe.calories().unwrap() - 584.46).abs() < f64::EPSILON);
        assert!(recipe.extended_ingredients.is_empty());
    }

    #[test]
    fn test_null_collections_become_empty() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 1,
            "title": "Sparse",
            "diets": null,
            "cuisines": null,
            "extendedIngredients": null,
            "analyzedInstructions": null
        }))
        .unwrap();

        assert!(recipe.diets.is_empty());
        assert!(recipe.cuisines.is_empty());
        assert!(recipe.nutrition.is_none());
        assert!(recipe.first_instruction_steps().is_none());
    }

    #[test]
    fn test_missing_calories_is_lookup_error() {
        let recipe = Recipe::new(42, "No nutrition");
        assert_eq!(
            recipe.calories(),
            Err(LookupError::MissingNutrient {
                recipe_id: 42,
                nutrient: "Calories".to_owned(),
            })
        );

        let recipe: Recipe = serde_json::from_value(json!({
            "id": 43,
            "title": "Protein only",
            "nutrition": {"nutrients": [{"name": "Protein", "amount": 12.0, "unit": "g"}]}
        }))
        .unwrap();
        assert!(recipe.calories().is_err());
        assert!(recipe.nutrient("Protein").is_some());
    }

    #[test]
    fn test_sparse_nutrient_and_step_fields_still_parse() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 44,
            "title": "Sparse detail",
            "nutrition": {"nutrients": [
                {"name": "Calories", "amount": null, "unit": "kcal"},
                {"name": "Fat", "unit": "g"}
            ]},
            "analyzedInstructions": [
                {"name": "", "steps": [{"step": "Mix."}, {"number": null, "step": "Bake."}]}
            ]
        }))
        .unwrap();

        assert_eq!(recipe.nutrient("Fat").unwrap().amount, None);
        assert!(recipe.calories().is_err());
        let steps = recipe.first_instruction_steps().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].number, 0);
        assert_eq!(steps[1].step, "Bake.");
    }

    #[test]
    fn test_with_calories_replaces_existing_entry() {
        let recipe = Recipe::new(7, "Soup").with_calories(100.0).with_calories(250.0);
        assert!((recipe.calories().unwrap() - 250.0).abs() < f64::EPSILON);
        assert_eq!(recipe.nutrition.unwrap().nutrients.len(), 1);
    }
}
