// ABOUTME: Main library entry point for the Pierre training planner
// ABOUTME: Wires the generation engine to repositories, logging, and environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Training Planner
//!
//! Rule-based training plan generation for running, cycling and swimming goals.
//!
//! ## Architecture
//!
//! - **`pierre_plan_core`**: errors, domain models and constants
//! - **`pierre_plan_engine`**: the pure generation pipeline and versioned generators
//! - **Repositories**: async collaborator traits with in-memory implementations
//! - **Services**: [`PlanningService`] creating plans and materializing weeks
//! - **Logging**: `tracing` subscriber setup driven by the environment
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_training_planner::request_file::RequestFile;
//! use pierre_training_planner::PlannerConfig;
//! use pierre_training_planner::errors::AppResult;
//! use chrono::Utc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = PlannerConfig::from_env()?;
//!     let file = RequestFile::load("request.json".as_ref()).await?;
//!     let today = Utc::now().date_naive();
//!     let seeded = file.seed(config, today)?;
//!
//!     let plan = seeded
//!         .service
//!         .create_plan(seeded.account_id, &seeded.request, today)
//!         .await?;
//!     println!("{} weeks planned", plan.weekly_plans.len());
//!     Ok(())
//! }
//! ```

/// Structured logging configuration
pub mod logging;

/// Collaborator traits and in-memory implementations
pub mod repositories;

/// Self-contained JSON plan requests
pub mod request_file;

/// Plan creation and workout materialization
pub mod services;

pub use pierre_plan_core::{constants, errors, models};
pub use pierre_plan_engine::{GeneratorFactory, PlannerConfig, SessionClock, SessionPolicy};
pub use services::PlanningService;
