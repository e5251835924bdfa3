// ABOUTME: Main library entry point for the recipe dashboard service
// ABOUTME: Fetches recipes from Spoonacular and serves a filterable dashboard plus detail pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Dashboard
//!
//! A small axum service that retrieves a batch of recipes from the
//! Spoonacular API, lets the user filter and inspect them, and renders
//! summary statistics, two histograms, and a recipe table. A detail page
//! shows one recipe's ingredients and instructions.
//!
//! ## Architecture
//!
//! - **External**: the `RecipeSource` trait and its Spoonacular and mock implementations
//! - **State**: immutable view records and pure reducers for both pages
//! - **Views**: view models derived from state, and their HTML rendering
//! - **Routes**: axum handlers that replay fetch and filter events into the reducers
//! - **Config / Logging**: environment-driven configuration and `tracing` setup
//!
//! Filtering, statistics and histograms live in the `recipe-analytics` crate;
//! the data model and error types live in `recipe-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_dashboard::config::ServerConfig;
//! use recipe_dashboard::resources::ServerResources;
//! use recipe_dashboard::routes::router;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let port = config.http_port;
//!     let app = router(Arc::new(ServerResources::from_config(config)));
//!
//!     let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Upstream recipe API clients
pub mod external;

/// Structured logging setup
pub mod logging;

/// Shared resources handed to route handlers
pub mod resources;

/// HTTP routes
pub mod routes;

/// View state records and reducers
pub mod state;

/// View models and HTML rendering
pub mod views;

pub use recipe_analytics as analytics;
pub use recipe_core::{constants, errors, models};
