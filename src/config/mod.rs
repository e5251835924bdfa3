// ABOUTME: Configuration module for the recipe dashboard server
// ABOUTME: Environment-driven settings for the recipe API, HTTP port, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration management
//!
//! All configuration comes from environment variables; there is no config
//! file. The API key is injected here and handed to the client at
//! construction, never read from a global.

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, RecipeApiConfig, ServerConfig};
