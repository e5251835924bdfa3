// ABOUTME: Core types and constants for the recipe dashboard
// ABOUTME: Foundation crate with the recipe model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! dashboard. It changes rarely so the analytics crate and the server can
//! compile against it independently.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, `FetchError`, and `LookupError`
//! - **constants**: API defaults, slider bounds, select options, messages
//! - **models**: `Recipe` and its nested nutrition, ingredient, and instruction types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe data model as delivered by the recipe API
pub mod models;
