// ABOUTME: Service layer orchestrating repositories and the generation engine
// ABOUTME: Protocol-agnostic entry points reusable by the CLI and any embedding server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service layer
//!
//! Services resolve inputs through the repository traits, call the engine and
//! persist its output. They hold no state of their own beyond shared handles.

/// Plan creation and near-term workout materialization
pub mod planning;

pub use planning::PlanningService;
