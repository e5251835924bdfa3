// ABOUTME: Summary statistics over a filtered recipe set
// ABOUTME: Count, mean and median calories, mode diet, and mean cooking time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::errors::LookupError;
use recipe_core::models::Recipe;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregates shown above the dashboard table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of recipes in the set
    pub count: usize,
    /// Mean calorie amount, 0 for an empty set
    pub mean_calories: f64,
    /// Median calorie amount, 0 for an empty set
    pub median_calories: f64,
    /// Most frequent diet tag across all recipes' diet lists
    pub mode_diet: Option<String>,
    /// Mean cooking time in minutes, 0 for an empty set
    pub mean_cooking_time: f64,
}

impl SummaryStats {
    /// Compute every aggregate over `recipes`
    ///
    /// # Errors
    ///
    /// Returns `LookupError::MissingNutrient` if any recipe lacks a calorie entry
    pub fn compute<'a, I>(recipes: I) -> Result<Self, LookupError>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let mut calories = Vec::new();
        let mut minutes = Vec::new();
        let mut diets = Vec::new();

        for recipe in recipes {
            calories.push(recipe.calories()?);
            minutes.push(f64::from(recipe.ready_in_minutes));
            diets.extend(recipe.diets.iter().map(String::as_str));
        }

        Ok(Self {
            count: calories.len(),
            mean_calories: mean(&calories),
            median_calories: median(&calories),
            mode_diet: mode(diets).map(ToOwned::to_owned),
            mean_cooking_time: mean(&minutes),
        })
    }
}

/// Arithmetic mean, 0 for no values
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of `values`, averaging the two middle values on an even count
///
/// Returns 0 for no values.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}

/// Most frequent item; ties go to the lexicographically smallest item
#[must_use]
pub fn mode<'a, I>(items: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    // BTreeMap iterates in ascending key order, so keeping only strictly
    // larger counts leaves the smallest key among equal maxima.
    let mut best: Option<(&str, usize)> = None;
    for (item, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((item, count));
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert!((median(&[500.0, 100.0, 300.0]) - 300.0).abs() < f64::EPSILON);
        assert!((median(&[300.0, 100.0]) - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_aggregates_are_zero() {
        let stats = SummaryStats::compute(std::iter::empty()).unwrap();
        assert_eq!(stats.count, 0);
        assert!(stats.mean_calories.abs() < f64::EPSILON);
        assert!(stats.median_calories.abs() < f64::EPSILON);
        assert!(stats.mean_cooking_time.abs() < f64::EPSILON);
        assert!(!stats.mean_calories.is_nan());
        assert_eq!(stats.mode_diet, None);
    }

    #[test]
    fn test_mode_diet_most_frequent() {
        let recipes = [
            Recipe::new(1, "A").with_calories(100.0).with_diets(["vegan"]),
            Recipe::new(2, "B").with_calories(100.0).with_diets(["vegan"]),
            Recipe::new(3, "C").with_calories(100.0).with_diets(["keto"]),
        ];
        let stats = SummaryStats::compute(&recipes).unwrap();
        assert_eq!(stats.mode_diet.as_deref(), Some("vegan"));
    }

    #[test]
    fn test_mode_tie_breaks_to_smallest() {
        assert_eq!(mode(["vegan", "keto", "paleo", "keto", "vegan"]), Some("keto"));
        assert_eq!(mode(["vegan"]), Some("vegan"));
        assert_eq!(mode(Vec::<&str>::new()), None);
    }

    #[test]
    fn test_mean_cooking_time() {
        let recipes = [
            Recipe::new(1, "A").with_calories(150.0).with_ready_in_minutes(10),
            Recipe::new(2, "B").with_calories(650.0).with_ready_in_minutes(70),
        ];
        let stats = SummaryStats::compute(&recipes).unwrap();
        assert_eq!(stats.count, 2);
        assert!((stats.mean_calories - 400.0).abs() < f64::EPSILON);
        assert!((stats.median_calories - 400.0).abs() < f64::EPSILON);
        assert!((stats.mean_cooking_time - 40.0).abs() < f64::EPSILON);
    }
}
