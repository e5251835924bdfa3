// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Validates required key handling, defaults, range checks, and summary masking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_dashboard::config::{Environment, ServerConfig};
use recipe_dashboard::logging::{LogFormat, LoggingConfig};
use recipe_dashboard::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "SPOONACULAR_API_KEY",
    "SPOONACULAR_BASE_URL",
    "RECIPE_RESULT_COUNT",
    "HTTP_PORT",
    "ENVIRONMENT",
    "RUST_LOG",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

fn error_code(error: &anyhow::Error) -> Option<ErrorCode> {
    error.downcast_ref::<AppError>().map(|e| e.code)
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
}

#[test]
#[serial]
fn test_missing_api_key_is_config_error() {
    clear_env();

    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error_code(&error), Some(ErrorCode::ConfigMissing));
    assert!(error.to_string().contains("SPOONACULAR_API_KEY"));

    env::set_var("SPOONACULAR_API_KEY", "   ");
    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error_code(&error), Some(ErrorCode::ConfigMissing));

    clear_env();
}

#[test]
#[serial]
fn test_defaults_apply_when_only_key_is_set() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "0c2f0c74f9744aa5");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.recipe_api.base_url, "https://api.spoonacular.com");
    assert_eq!(config.recipe_api.result_count, 100);

    let client_config = config.recipe_api.client_config();
    assert_eq!(client_config.api_key, "0c2f0c74f9744aa5");

    clear_env();
}

#[test]
#[serial]
fn test_overrides_are_read() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "key");
    env::set_var("SPOONACULAR_BASE_URL", "http://localhost:9999");
    env::set_var("RECIPE_RESULT_COUNT", "25");
    env::set_var("HTTP_PORT", "3000");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 3000);
    assert_eq!(config.recipe_api.base_url, "http://localhost:9999");
    assert_eq!(config.recipe_api.result_count, 25);

    clear_env();
}

#[test]
#[serial]
fn test_result_count_must_be_within_api_limit() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "key");

    for bad in ["0", "101"] {
        env::set_var("RECIPE_RESULT_COUNT", bad);
        let error = ServerConfig::from_env().unwrap_err();
        assert_eq!(error_code(&error), Some(ErrorCode::ConfigInvalid), "count {bad}");
    }

    env::set_var("RECIPE_RESULT_COUNT", "many");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_base_url_must_be_http() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "key");
    env::set_var("SPOONACULAR_BASE_URL", "ftp://api.spoonacular.com");

    let error = ServerConfig::from_env().unwrap_err();
    assert_eq!(error_code(&error), Some(ErrorCode::ConfigInvalid));

    clear_env();
}

#[test]
#[serial]
fn test_summary_masks_api_key() {
    clear_env();
    env::set_var("SPOONACULAR_API_KEY", "0c2f0c74f9744aa58188f63dbe761746");

    let summary = ServerConfig::from_env().unwrap().summary();

    assert!(summary.contains("****1746"));
    assert!(!summary.contains("0c2f0c74f9744aa58188f63dbe761746"));

    clear_env();
}

#[test]
#[serial]
fn test_logging_follows_environment_variables() {
    clear_env();

    let config = LoggingConfig::from_env();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);

    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "recipe_dashboard=debug");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.level, "recipe_dashboard=debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_spans);

    clear_env();
}
