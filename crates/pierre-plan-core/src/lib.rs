// ABOUTME: Core types and constants for the Pierre training plan engine
// ABOUTME: Foundation crate with error handling, domain models, and planning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Plan Core
//!
//! Foundation crate providing shared types and constants for training plan
//! generation. It changes infrequently, which keeps incremental builds of the
//! engine and the service crate fast.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `AppResult` alias
//! - **constants**: Planning constants organized by engine stage
//! - **models**: Goals, athlete snapshots, plan skeletons, and workouts

/// Unified error handling with stable error codes
pub mod errors;

/// Planning constants organized by domain
pub mod constants;

/// Domain models for plan generation
pub mod models;
