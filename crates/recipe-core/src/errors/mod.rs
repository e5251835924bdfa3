// ABOUTME: Unified error handling with standard error codes and HTTP status mapping
// ABOUTME: Defines AppError, ErrorCode, and the fetch and lookup error kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Centralized error types for the recipe dashboard:
//! - `AppError` / `ErrorCode` - application-level errors with HTTP status mapping
//! - `FetchError` - the two failure kinds of the upstream recipe API
//! - `LookupError` - missing nutrient data on a recipe

/// Upstream recipe API failures
pub mod fetch;
/// Nutrient lookup failures
pub mod lookup;

pub use fetch::FetchError;
pub use lookup::LookupError;

use serde::{Deserialize, Serialize};
use std::error::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    /// Request input could not be interpreted
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    /// Requested resource does not exist
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    /// The recipe API failed or answered with a non-success status
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_MISSING")]
    /// Required configuration is missing
    ConfigMissing = 6001,
    #[serde(rename = "CONFIG_INVALID")]
    /// Configuration value could not be used
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    #[serde(rename = "DATA_INTEGRITY_ERROR")]
    /// Upstream data violates a precondition (e.g. no calorie entry)
    DataIntegrityError = 9004,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceError | Self::DataIntegrityError => 502,
            Self::ConfigMissing | Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::DataIntegrityError => "Upstream data is incomplete",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, thiserror::Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required configuration is missing
    #[must_use]
    pub fn config_missing(key: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("{} is not set", key.into()),
        )
    }

    /// Configuration value is unusable
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload of an HTTP error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

impl From<FetchError> for AppError {
    fn from(error: FetchError) -> Self {
        let code = match error {
            FetchError::NotFound { .. } => ErrorCode::ResourceNotFound,
            FetchError::NetworkOrHttp { .. } => ErrorCode::ExternalServiceError,
        };
        // Upstream detail stays in `source`; clients only see the fixed message
        Self::new(code, error.detail_message()).with_source(error)
    }
}

impl From<LookupError> for AppError {
    fn from(error: LookupError) -> Self {
        Self::new(ErrorCode::DataIntegrityError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.http_status())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::ExternalServiceError.http_status(), 502);
        assert_eq!(ErrorCode::ConfigMissing.http_status(), 500);
    }

    #[test]
    fn test_fetch_error_conversion() {
        let error = AppError::from(FetchError::not_found("716429"));
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Recipe not found");
        assert!(error.source.is_some());

        let error = AppError::from(FetchError::network(
            "HTTP 402 Payment Required: daily points limit reached",
        ));
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
        assert_eq!(
            error.message,
            "Failed to fetch recipe details. Please try again later."
        );
        assert!(!error.message.contains("402"));
        assert!(error.source.is_some_and(|source| source.to_string().contains("402")));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::invalid_input("min_calories must be a number");
        let json = serde_json::to_string(&ErrorResponse::from(error)).unwrap();
        assert!(json.contains("INVALID_INPUT"));
        assert!(json.contains("min_calories"));
    }
}
