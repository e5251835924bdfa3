// ABOUTME: Shared resource container handed to every route
// ABOUTME: Holds the recipe source and the server configuration behind Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::external::{RecipeSource, SpoonacularClient};
use std::sync::Arc;

/// Resources shared by all request handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Upstream the dashboard and detail pages fetch from
    pub recipe_source: Arc<dyn RecipeSource>,
    /// Validated server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle an explicit recipe source with the configuration
    #[must_use]
    pub fn new(recipe_source: Arc<dyn RecipeSource>, config: ServerConfig) -> Self {
        Self {
            recipe_source,
            config: Arc::new(config),
        }
    }

    /// Build resources backed by the live Spoonacular API
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let client = SpoonacularClient::new(config.recipe_api.client_config());
        Self::new(Arc::new(client), config)
    }
}
