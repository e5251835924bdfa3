// ABOUTME: Error kinds for the upstream recipe API fetches
// ABOUTME: Network/HTTP failures and missing recipes, each with a fixed user-facing message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages;

/// Failure of a list or detail fetch against the recipe API.
///
/// The dashboard never distinguishes an unreachable API from a rejected key or
/// a rate limit: every transport problem, non-success status or malformed body
/// collapses into `NetworkOrHttp`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Non-2xx response, transport failure, or unparseable body
    #[error("Recipe API request failed: {reason}")]
    NetworkOrHttp {
        /// Diagnostic detail, never shown to the user
        reason: String,
    },
    /// The detail request succeeded but carried no usable recipe
    #[error("Recipe {id} not found")]
    NotFound {
        /// Route identifier that was requested
        id: String,
    },
}

impl FetchError {
    /// Create a network/HTTP error
    #[must_use]
    pub fn network(reason: impl Into<String>) -> Self {
        Self::NetworkOrHttp {
            reason: reason.into(),
        }
    }

    /// Create a not-found error
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Fixed message shown on the dashboard when the list fetch fails
    #[must_use]
    pub const fn list_message(&self) -> &'static str {
        messages::LIST_FETCH_FAILED
    }

    /// Fixed message shown on the detail page
    #[must_use]
    pub const fn detail_message(&self) -> &'static str {
        match self {
            Self::NetworkOrHttp { .. } => messages::DETAIL_FETCH_FAILED,
            Self::NotFound { .. } => messages::RECIPE_NOT_FOUND,
        }
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for FetchError {
    /// The request URL carries the API key, so it is stripped before formatting
    fn from(error: reqwest::Error) -> Self {
        let error = error.without_url();
        if error.is_decode() {
            Self::network(format!("JSON parse error: {error}"))
        } else {
            Self::network(error.to_string())
        }
    }
}
