// ABOUTME: View state records and pure reducers for the dashboard and detail views
// ABOUTME: Every state change is an event applied by a reducer; stale fetch results are discarded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # View State
//!
//! Each view owns an immutable state record. A pure reducer maps
//! `(state, event)` to the next state, so the whole interaction model is
//! testable without a rendering surface.
//!
//! Fetch results are guarded: the dashboard tags each fetch with a
//! generation, the detail view with its route id, and both stop accepting
//! results once unmounted.

/// Dashboard state and reducer
pub mod dashboard;
/// Recipe detail state and reducer
pub mod detail;

pub use dashboard::{ChartType, DashboardEvent, DashboardState, LoadPhase};
pub use detail::{DetailEvent, DetailPhase, DetailState};
