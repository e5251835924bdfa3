// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses the API key, upstream URL, result count, port, and deployment environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::external::SpoonacularClientConfig;
use anyhow::{Context, Result};
use recipe_core::constants::api;
use recipe_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Default HTTP port of the dashboard server
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Read `ENVIRONMENT`, falling back to development
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_str_or_default(&env_var_or("ENVIRONMENT", "development"))
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Recipe API settings
#[derive(Clone, PartialEq, Eq)]
pub struct RecipeApiConfig {
    /// Static API key sent with every request
    pub api_key: String,
    /// Base URL of the recipe API
    pub base_url: String,
    /// Recipes requested by the list fetch (1..=100)
    pub result_count: u32,
}

impl fmt::Debug for RecipeApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("result_count", &self.result_count)
            .finish()
    }
}

impl RecipeApiConfig {
    /// Client configuration for `SpoonacularClient`
    #[must_use]
    pub fn client_config(&self) -> SpoonacularClientConfig {
        SpoonacularClientConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            result_count: self.result_count,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port
    pub http_port: u16,
    /// Recipe API settings
    pub recipe_api: RecipeApiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SPOONACULAR_API_KEY` is missing or empty, or if a
    /// numeric variable cannot be parsed or is out of range
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let api_key = env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::config_missing("SPOONACULAR_API_KEY"))?;

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            recipe_api: RecipeApiConfig {
                api_key,
                base_url: env_var_or("SPOONACULAR_BASE_URL", api::DEFAULT_BASE_URL),
                result_count: env_var_or(
                    "RECIPE_RESULT_COUNT",
                    &api::MAX_RESULT_COUNT.to_string(),
                )
                .parse()
                .context("Invalid RECIPE_RESULT_COUNT value")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the result count is outside 1..=100 or the base
    /// URL is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        let count = self.recipe_api.result_count;
        if count == 0 || count > api::MAX_RESULT_COUNT {
            return Err(AppError::config_invalid(format!(
                "RECIPE_RESULT_COUNT must be between 1 and {}, got {count}",
                api::MAX_RESULT_COUNT
            ))
            .into());
        }

        let base_url = &self.recipe_api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::config_invalid(format!(
                "SPOONACULAR_BASE_URL must be an http(s) URL, got '{base_url}'"
            ))
            .into());
        }

        Ok(())
    }

    /// Human-readable configuration summary with the API key masked
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Dashboard Configuration:\n\
             - HTTP Port: {}\n\
             - Recipe API: {}\n\
             - Result Count: {}\n\
             - API Key: {}",
            self.http_port,
            self.recipe_api.base_url,
            self.recipe_api.result_count,
            mask_secret(&self.recipe_api.api_key),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Show only the last four characters of a secret
fn mask_secret(secret: &str) -> String {
    let visible: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{visible}")
}
