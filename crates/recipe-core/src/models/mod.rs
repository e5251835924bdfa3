// ABOUTME: Data models for recipes delivered by the recipe API
// ABOUTME: Re-exports Recipe, Nutrition, Ingredient, and instruction types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Recipe records mirror the camelCase JSON of the Spoonacular API. Every
//! nested collection tolerates being absent or `null`, so a sparse upstream
//! record still deserializes and the views substitute placeholders.

mod recipe;

pub use recipe::{Ingredient, InstructionGroup, InstructionStep, Nutrient, Nutrition, Recipe};
