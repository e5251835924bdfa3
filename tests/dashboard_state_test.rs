// ABOUTME: Integration tests for the dashboard reducer and derived dashboard view
// ABOUTME: Covers fetch outcomes, stale results, slider clamping, and chart switching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use recipe_dashboard::analytics::MinutesRange;
use recipe_dashboard::constants::messages;
use recipe_dashboard::models::Recipe;
use recipe_dashboard::state::dashboard::reduce;
use recipe_dashboard::state::{ChartType, DashboardEvent, DashboardState, LoadPhase};
use recipe_dashboard::views::DashboardView;

fn apply(state: DashboardState, events: Vec<DashboardEvent>) -> DashboardState {
    events.into_iter().fold(state, reduce)
}

fn loaded_with(recipes: Vec<Recipe>) -> DashboardState {
    let state = reduce(DashboardState::default(), DashboardEvent::FetchStarted);
    let generation = state.generation();
    reduce(
        state,
        DashboardEvent::RecipesLoaded {
            generation,
            recipes,
        },
    )
}

#[test]
fn test_initial_state_is_loading_with_slider_defaults() {
    let state = DashboardState::default();

    assert!(state.is_loading());
    assert!(state.is_mounted());
    assert_eq!(state.chart(), ChartType::Calories);
    assert_eq!(state.criteria().calories.min, 0.0);
    assert_eq!(state.criteria().calories.max, 1000.0);
    assert!(state.recipes().is_empty());
}

#[test]
fn test_successful_fetch_clears_loading() {
    let state = loaded_with(common::scenario_recipes());

    assert!(!state.is_loading());
    assert_eq!(state.error(), None);
    assert_eq!(state.recipes().len(), 2);
}

#[test]
fn test_failed_fetch_sets_error_without_data() {
    let state = reduce(DashboardState::default(), DashboardEvent::FetchStarted);
    let generation = state.generation();
    let state = reduce(
        state,
        DashboardEvent::FetchFailed {
            generation,
            message: messages::LIST_FETCH_FAILED.to_owned(),
        },
    );

    assert!(!state.is_loading());
    assert_eq!(state.error(), Some(messages::LIST_FETCH_FAILED));
    assert!(state.recipes().is_empty());

    let view = DashboardView::derive(&state).unwrap();
    assert!(!view.loading);
    assert_eq!(view.error.as_deref(), Some(messages::LIST_FETCH_FAILED));
    assert!(view.rows.is_empty());
}

#[test]
fn test_stale_generation_results_are_discarded() {
    let first = reduce(DashboardState::default(), DashboardEvent::FetchStarted);
    let stale_generation = first.generation();
    let second = reduce(first, DashboardEvent::FetchStarted);
    assert_eq!(second.generation(), stale_generation + 1);

    let state = reduce(
        second,
        DashboardEvent::RecipesLoaded {
            generation: stale_generation,
            recipes: common::scenario_recipes(),
        },
    );
    assert!(state.is_loading());
    assert!(state.recipes().is_empty());

    let state = reduce(
        state,
        DashboardEvent::FetchFailed {
            generation: stale_generation,
            message: messages::LIST_FETCH_FAILED.to_owned(),
        },
    );
    assert!(state.is_loading());
    assert_eq!(state.error(), None);
}

#[test]
fn test_results_after_unmount_are_discarded() {
    let state = reduce(DashboardState::default(), DashboardEvent::FetchStarted);
    let generation = state.generation();
    let state = reduce(state, DashboardEvent::Unmounted);

    let state = reduce(
        state,
        DashboardEvent::RecipesLoaded {
            generation,
            recipes: common::scenario_recipes(),
        },
    );

    assert!(!state.is_mounted());
    assert_eq!(state.phase(), &LoadPhase::Loading);
}

#[test]
fn test_slider_handles_are_clamped_independently() {
    let state = apply(
        DashboardState::default(),
        vec![
            DashboardEvent::CalorieMinChanged(-250),
            DashboardEvent::CalorieMaxChanged(5000),
        ],
    );
    assert_eq!(state.criteria().calories.min, 0.0);
    assert_eq!(state.criteria().calories.max, 1000.0);

    let state = apply(
        state,
        vec![
            DashboardEvent::CalorieMinChanged(700),
            DashboardEvent::CalorieMaxChanged(300),
        ],
    );
    assert_eq!(state.criteria().calories.min, 700.0);
    assert_eq!(state.criteria().calories.max, 300.0);
}

#[test]
fn test_inverted_calorie_range_yields_empty_set() {
    let state = apply(
        loaded_with(common::sample_recipes()),
        vec![
            DashboardEvent::CalorieMinChanged(600),
            DashboardEvent::CalorieMaxChanged(400),
        ],
    );

    let view = DashboardView::derive(&state).unwrap();
    assert_eq!(view.summary.total_recipes, 0);
    assert!(view.rows.is_empty());
    assert_eq!(view.summary.average_calories, "0.00");
    assert_eq!(view.summary.most_common_diet, "N/A");
}

#[test]
fn test_filters_combine() {
    let state = apply(
        loaded_with(common::sample_recipes()),
        vec![
            DashboardEvent::SearchChanged("VEGAN".to_owned()),
            DashboardEvent::DietSelected(Some("vegan".to_owned())),
            DashboardEvent::CookingTimeSelected(Some(MinutesRange::new(16, 30))),
        ],
    );

    let view = DashboardView::derive(&state).unwrap();
    let titles: Vec<_> = view.rows.iter().map(|row| row.title.as_str()).collect();
    assert_eq!(titles, vec!["Vegan Lentil Soup"]);

    let state = reduce(state, DashboardEvent::CookingTimeSelected(None));
    let view = DashboardView::derive(&state).unwrap();
    assert_eq!(view.rows.len(), 2);
}

#[test]
fn test_histograms_ignore_filters() {
    let state = reduce(
        loaded_with(common::scenario_recipes()),
        DashboardEvent::SearchChanged("A".to_owned()),
    );

    let view = DashboardView::derive(&state).unwrap();
    assert_eq!(view.summary.total_recipes, 1);
    assert_eq!(view.calorie_histogram.counts, vec![1, 0, 0, 0, 1]);
    assert_eq!(view.cooking_time_histogram.counts, vec![1, 0, 0, 1]);
}

#[test]
fn test_chart_toggle_and_selection() {
    let state = loaded_with(common::scenario_recipes());
    let view = DashboardView::derive(&state).unwrap();
    assert_eq!(view.chart_title, "Calorie Distribution of Recipes");
    assert_eq!(view.active_histogram().labels.len(), 5);

    let state = reduce(state, DashboardEvent::ChartToggled);
    let view = DashboardView::derive(&state).unwrap();
    assert_eq!(view.chart, ChartType::CookingTime);
    assert_eq!(view.chart_title, "Cooking Time Distribution of Recipes");
    assert_eq!(view.active_histogram().labels, vec!["0-15", "16-30", "31-60", "60+"]);

    let state = reduce(state, DashboardEvent::ChartSelected(ChartType::Calories));
    assert_eq!(state.chart(), ChartType::Calories);
}

#[test]
fn test_recipe_without_calories_fails_derivation() {
    let state = loaded_with(vec![Recipe::new(9, "Mystery Stew")]);

    let error = DashboardView::derive(&state).unwrap_err();
    assert!(error.to_string().contains("Calories"));
}
