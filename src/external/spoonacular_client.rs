// ABOUTME: Spoonacular recipe API client for the list and detail fetches
// ABOUTME: Implements complex search with embedded nutrition and per-recipe information lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Spoonacular API Client
//!
//! Two calls are made against the Spoonacular API:
//! - `GET /recipes/complexSearch` for up to 100 recipes with nutrition embedded
//! - `GET /recipes/{id}/information` for one recipe's ingredients and steps
//!
//! Every request carries the static API key from configuration. There is no
//! retry and no timeout: a failure is reported once as `FetchError` and the
//! caller shows its fixed message.
//!
//! # API Reference
//! Spoonacular API: <https://spoonacular.com/food-api/docs>
//!
//! # Example
//! ```rust,no_run
//! use recipe_dashboard::external::{RecipeSource, SpoonacularClient, SpoonacularClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SpoonacularClientConfig {
//!     api_key: "your_api_key".to_owned(),
//!     ..SpoonacularClientConfig::default()
//! };
//!
//! let client = SpoonacularClient::new(config);
//! let recipes = client.fetch_recipes().await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use recipe_core::constants::api;
use recipe_core::errors::FetchError;
use recipe_core::models::Recipe;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Spoonacular client configuration
#[derive(Debug, Clone)]
pub struct SpoonacularClientConfig {
    /// Spoonacular API key
    pub api_key: String,
    /// Base URL for the API (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Number of recipes requested by the list fetch (default: 100)
    pub result_count: u32,
}

impl Default for SpoonacularClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: api::DEFAULT_BASE_URL.to_owned(),
            result_count: api::MAX_RESULT_COUNT,
        }
    }
}

/// Source of recipe data for the dashboard and detail views
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch the dashboard's recipe batch with nutrition embedded
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NetworkOrHttp` on any transport, status, or body failure
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError>;

    /// Fetch one recipe with ingredients and instructions
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NetworkOrHttp` on any transport, status, or body
    /// failure and `FetchError::NotFound` if the response holds no recipe
    async fn fetch_recipe_detail(&self, id: &str) -> Result<Recipe, FetchError>;
}

/// Complex search response
#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    results: Vec<Recipe>,
    // offset/number/totalResults are part of the API contract but unused
}

/// Spoonacular API client
pub struct SpoonacularClient {
    config: SpoonacularClientConfig,
    http_client: reqwest::Client,
}

impl SpoonacularClient {
    /// Create a new Spoonacular API client
    #[must_use]
    pub fn new(config: SpoonacularClientConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// Turn a non-success status into `FetchError`, keeping the body for diagnostics
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(FetchError::network(format!(
            "{} answered HTTP {status}: {body}",
            api::SERVICE_NAME
        )))
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        let url = format!("{}{}", self.base_url(), api::COMPLEX_SEARCH_PATH);
        debug!(url = %url, number = self.config.result_count, "Fetching recipe list");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("number", &self.config.result_count.to_string()),
                ("addRecipeNutrition", "true"),
            ])
            .send()
            .await?;

        let search: ComplexSearchResponse = Self::check_status(response).await?.json().await?;

        debug!(count = search.results.len(), "Fetched recipe list");
        Ok(search.results)
    }

    async fn fetch_recipe_detail(&self, id: &str) -> Result<Recipe, FetchError> {
        let url = format!(
            "{}/recipes/{}/information",
            self.base_url(),
            urlencoding::encode(id)
        );
        debug!(url = %url, "Fetching recipe detail");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("includeNutrition", "true"),
            ])
            .send()
            .await?;

        let recipe: Option<Recipe> = Self::check_status(response).await?.json().await?;
        recipe.ok_or_else(|| {
            warn!(recipe_id = %id, "Recipe API returned an empty detail body");
            FetchError::not_found(id)
        })
    }
}

/// In-memory recipe source for tests and offline demos (no API calls)
pub struct MockRecipeClient {
    recipes: Vec<Recipe>,
    details: HashMap<String, Recipe>,
    failing: AtomicBool,
}

impl MockRecipeClient {
    /// Create a mock serving `recipes` for both the list and detail fetches
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let details = recipes
            .iter()
            .map(|recipe| (recipe.id.to_string(), recipe.clone()))
            .collect();
        Self {
            recipes,
            details,
            failing: AtomicBool::new(false),
        }
    }

    /// Serve a richer record for one detail fetch than the list carries
    #[must_use]
    pub fn with_detail(mut self, recipe: Recipe) -> Self {
        self.details.insert(recipe.id.to_string(), recipe);
        self
    }

    /// Make every subsequent fetch fail as if the API were down
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), FetchError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::network("HTTP 503 Service Unavailable: mock outage"));
        }
        Ok(())
    }
}

#[async_trait]
impl RecipeSource for MockRecipeClient {
    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, FetchError> {
        self.check_available()?;
        Ok(self.recipes.clone())
    }

    async fn fetch_recipe_detail(&self, id: &str) -> Result<Recipe, FetchError> {
        self.check_available()?;
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::not_found(id))
    }
}
