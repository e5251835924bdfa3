// ABOUTME: Recipe detail view state record and its reducer
// ABOUTME: Results for a route other than the current one, or after unmount, are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::errors::FetchError;
use recipe_core::models::Recipe;
use tracing::debug;

/// Progress of the detail fetch for the current route
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    /// Fetch pending
    Loading,
    /// Fetch returned a recipe
    Loaded(Box<Recipe>),
    /// Fetch succeeded but returned nothing usable
    NotFound,
    /// Fetch failed with a user-facing message
    Failed(String),
}

/// Detail view state
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    route_id: String,
    phase: DetailPhase,
    mounted: bool,
}

impl DetailState {
    /// Fresh state for a route, waiting on its fetch
    #[must_use]
    pub fn new(route_id: impl Into<String>) -> Self {
        Self {
            route_id: route_id.into(),
            phase: DetailPhase::Loading,
            mounted: true,
        }
    }

    /// Id taken from the current route
    #[must_use]
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    /// Progress of the detail fetch
    #[must_use]
    pub const fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    /// Whether the view still accepts results
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Loaded recipe, if any
    #[must_use]
    pub fn recipe(&self) -> Option<&Recipe> {
        match &self.phase {
            DetailPhase::Loaded(recipe) => Some(recipe),
            _ => None,
        }
    }
}

/// Everything that can change the detail view
#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    /// Navigated to another recipe id; restarts loading
    RouteChanged(String),
    /// Detail fetch for `id` succeeded
    RecipeLoaded {
        /// Route id the fetch was issued for
        id: String,
        /// Fetched recipe
        recipe: Recipe,
    },
    /// Detail fetch for `id` failed
    FetchFailed {
        /// Route id the fetch was issued for
        id: String,
        /// Why it failed
        error: FetchError,
    },
    /// The view went away
    Unmounted,
}

impl DetailEvent {
    /// Route id a fetch result belongs to
    fn result_id(&self) -> Option<&str> {
        match self {
            Self::RecipeLoaded { id, .. } | Self::FetchFailed { id, .. } => Some(id),
            Self::RouteChanged(_) | Self::Unmounted => None,
        }
    }
}

/// Apply one event to the detail state
#[must_use]
pub fn reduce(state: DetailState, event: DetailEvent) -> DetailState {
    if !state.mounted {
        debug!(?event, "Detail view unmounted; ignoring event");
        return state;
    }
    if let Some(id) = event.result_id() {
        if id != state.route_id {
            debug!(id, route_id = %state.route_id, "Discarding result for another route");
            return state;
        }
    }

    match event {
        DetailEvent::RouteChanged(route_id) => DetailState::new(route_id),
        DetailEvent::RecipeLoaded { recipe, .. } => DetailState {
            phase: DetailPhase::Loaded(Box::new(recipe)),
            ..state
        },
        DetailEvent::FetchFailed { error, .. } => {
            let phase = match error {
                FetchError::NotFound { .. } => DetailPhase::NotFound,
                FetchError::NetworkOrHttp { .. } => {
                    DetailPhase::Failed(error.detail_message().to_owned())
                }
            };
            DetailState { phase, ..state }
        }
        DetailEvent::Unmounted => DetailState {
            mounted: false,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_change_resets_to_loading() {
        let state = reduce(
            DetailState::new("1"),
            DetailEvent::RecipeLoaded {
                id: "1".to_owned(),
                recipe: Recipe::new(1, "Soup"),
            },
        );
        assert!(state.recipe().is_some());

        let state = reduce(state, DetailEvent::RouteChanged("2".to_owned()));
        assert_eq!(state.route_id(), "2");
        assert_eq!(state.phase(), &DetailPhase::Loading);
    }

    #[test]
    fn test_not_found_error_maps_to_not_found_phase() {
        let state = reduce(
            DetailState::new("9"),
            DetailEvent::FetchFailed {
                id: "9".to_owned(),
                error: FetchError::not_found("9"),
            },
        );
        assert_eq!(state.phase(), &DetailPhase::NotFound);
    }
}
