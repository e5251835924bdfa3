// ABOUTME: Filter and aggregate engine over an in-memory recipe collection
// ABOUTME: Criteria, filtering, summary statistics, and fixed-bucket histograms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Analytics
//!
//! Pure, synchronous, deterministic computations over a fetched recipe list:
//!
//! - **criteria**: the five independent filter predicates chosen by the user
//! - **filter**: applies the predicates, preserving input order
//! - **stats**: count, mean/median calories, mode diet, mean cooking time
//! - **histogram**: calorie and cooking-time bucket counts
//!
//! Every calorie computation requires a "Calories" nutrient on each recipe
//! and reports its absence as `LookupError` rather than panicking.

/// Filter criteria and the ranges they are built from
pub mod criteria;
/// Predicate evaluation over recipe lists
pub mod filter;
/// Fixed-bucket histograms for charting
pub mod histogram;
/// Summary statistics over filtered recipes
pub mod stats;

pub use criteria::{CalorieRange, FilterCriteria, MinutesRange, ParseRangeError};
pub use filter::{filter_recipes, matches};
pub use histogram::{
    calorie_histogram, cooking_time_histogram, CalorieBucket, CookingTimeBucket, Histogram,
};
pub use stats::{mean, median, mode, SummaryStats};
