// ABOUTME: Filter criteria for the recipe dashboard
// ABOUTME: Search text, diet, cuisine, inclusive calorie range, and optional cooking-time range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::calories;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Inclusive calorie bounds
///
/// No ordering is enforced between `min` and `max`; an inverted range simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl CalorieRange {
    /// Range that accepts every calorie amount
    pub const UNBOUNDED: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Create a range from raw bounds
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Full extent of the dashboard's calorie slider
    #[must_use]
    pub fn slider_default() -> Self {
        Self::new(
            f64::from(calories::SLIDER_MIN),
            f64::from(calories::SLIDER_MAX),
        )
    }

    /// Clamp a raw slider handle position into the slider's bounds
    #[must_use]
    pub fn clamp_handle(value: i64) -> u32 {
        value.clamp(
            i64::from(calories::SLIDER_MIN),
            i64::from(calories::SLIDER_MAX),
        ) as u32
    }

    /// Whether `amount` lies within the bounds
    #[must_use]
    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

/// Inclusive cooking-time bounds in minutes, written as `min-max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinutesRange {
    /// Lower bound (inclusive)
    pub min: u32,
    /// Upper bound (inclusive)
    pub max: u32,
}

impl MinutesRange {
    /// Create a range from raw bounds
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `minutes` lies within the bounds
    #[must_use]
    pub const fn contains(&self, minutes: u32) -> bool {
        minutes >= self.min && minutes <= self.max
    }
}

impl fmt::Display for MinutesRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// A cooking-time range string could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid cooking time range '{input}': expected 'min-max' in whole minutes")]
pub struct ParseRangeError {
    /// Text that failed to parse
    pub input: String,
}

impl FromStr for MinutesRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRangeError {
            input: s.to_owned(),
        };
        let (min, max) = s.trim().split_once('-').ok_or_else(invalid)?;
        let min = min.trim().parse().map_err(|_| invalid())?;
        let max = max.trim().parse().map_err(|_| invalid())?;
        Ok(Self { min, max })
    }
}

/// The combined set of active filter predicates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterCriteria {
    /// Case-insensitive title substring; empty matches every title
    pub search: String,
    /// Exact diet tag, or any diet when `None`
    pub diet: Option<String>,
    /// Exact cuisine tag, or any cuisine when `None`
    pub cuisine: Option<String>,
    /// Inclusive calorie bounds
    pub calories: CalorieRange,
    /// Inclusive cooking-time bounds, or any time when `None`
    pub cooking_time: Option<MinutesRange>,
}

impl FilterCriteria {
    /// Criteria that accept every recipe
    #[must_use]
    pub fn empty() -> Self {
        Self {
            search: String::new(),
            diet: None,
            cuisine: None,
            calories: CalorieRange::UNBOUNDED,
            cooking_time: None,
        }
    }
}

impl Default for FilterCriteria {
    /// The dashboard's initial criteria: no text, no selections, full slider range
    fn default() -> Self {
        Self {
            calories: CalorieRange::slider_default(),
            ..Self::empty()
        }
    }
}
