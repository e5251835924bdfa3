// ABOUTME: External API client modules (Spoonacular recipe API)
// ABOUTME: Provides the recipe list and detail fetchers behind a mockable trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! This module contains clients for external APIs used by the dashboard.

/// Spoonacular recipe API client and the source trait
pub mod spoonacular_client;

// Re-export commonly used types
pub use spoonacular_client::{
    MockRecipeClient, RecipeSource, SpoonacularClient, SpoonacularClientConfig,
};
