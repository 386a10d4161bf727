// ABOUTME: Configuration module for the planning engine
// ABOUTME: Environment-driven planner settings and the per-request session policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Planner settings, session clock, and multi-session policy
pub mod planner;

pub use planner::{MultiSessionConfig, PlannerConfig, SessionClock, SessionPolicy};
