// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, recipe fixtures, and mock-backed server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `recipe_dashboard`

use recipe_dashboard::config::{RecipeApiConfig, ServerConfig};
use recipe_dashboard::external::{MockRecipeClient, RecipeSource};
use recipe_dashboard::models::{Ingredient, InstructionGroup, InstructionStep, Recipe};
use recipe_dashboard::resources::ServerResources;
use serde_json::{json, Value};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Recipe with the fields the dashboard reads
pub fn recipe(id: u64, title: &str, calories: f64, minutes: u32) -> Recipe {
    Recipe::new(id, title)
        .with_calories(calories)
        .with_ready_in_minutes(minutes)
}

/// The two-recipe collection used by the end-to-end scenarios
pub fn scenario_recipes() -> Vec<Recipe> {
    vec![recipe(1, "A", 150.0, 10), recipe(2, "B", 650.0, 70)]
}

/// A varied collection covering every filter dimension
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        recipe(101, "Vegan Lentil Soup", 320.0, 25)
            .with_diets(["vegan", "gluten free"])
            .with_cuisines(["American"]),
        recipe(102, "Spaghetti Carbonara", 780.0, 30).with_cuisines(["Italian"]),
        recipe(103, "Keto Avocado Salad", 410.5, 10)
            .with_diets(["ketogenic", "gluten free"])
            .with_cuisines(["Mexican"]),
        recipe(104, "Slow Braised Beef", 1240.0, 180).with_cuisines(["American"]),
        recipe(105, "Vegan Pad Thai", 540.0, 45)
            .with_diets(["vegan"])
            .with_cuisines(["Asian"]),
    ]
}

/// Detail record with ingredients and one instruction group
pub fn detailed_recipe() -> Recipe {
    let mut recipe = recipe(101, "Vegan Lentil Soup", 320.0, 25)
        .with_diets(["vegan", "gluten free"])
        .with_cuisines(["American"]);
    recipe.image = Some("https://img.spoonacular.com/recipes/101-556x370.jpg".to_owned());
    recipe.extended_ingredients = vec![
        Ingredient {
            id: Some(10_016_069),
            original: "1 cup red lentils".to_owned(),
        },
        Ingredient {
            id: Some(11_282),
            original: "1 onion, diced".to_owned(),
        },
    ];
    recipe.analyzed_instructions = vec![InstructionGroup {
        name: String::new(),
        steps: vec![
            InstructionStep {
                number: 1,
                step: "Saute the onion.".to_owned(),
            },
            InstructionStep {
                number: 2,
                step: "Add lentils and simmer for 20 minutes.".to_owned(),
            },
        ],
    }];
    recipe
}

/// Upstream JSON for one list entry, shaped like a complex-search result
pub fn recipe_json(id: u64, title: &str, calories: f64, minutes: u32) -> Value {
    json!({
        "id": id,
        "title": title,
        "image": format!("https://img.spoonacular.com/recipes/{id}-312x231.jpg"),
        "readyInMinutes": minutes,
        "diets": [],
        "cuisines": [],
        "nutrition": {
            "nutrients": [
                { "name": "Calories", "amount": calories, "unit": "kcal" },
                { "name": "Fat", "amount": 12.5, "unit": "g" }
            ]
        }
    })
}

/// Server configuration pointing at `base_url`
pub fn test_config(base_url: &str) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        recipe_api: RecipeApiConfig {
            api_key: "test-api-key".to_owned(),
            base_url: base_url.to_owned(),
            result_count: 100,
        },
    }
}

/// Resources backed by an in-memory recipe source
pub fn mock_resources(source: Arc<MockRecipeClient>) -> Arc<ServerResources> {
    init_test_logging();
    let source: Arc<dyn RecipeSource> = source;
    Arc::new(ServerResources::new(
        source,
        test_config("http://localhost:0"),
    ))
}
