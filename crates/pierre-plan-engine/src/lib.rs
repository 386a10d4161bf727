// ABOUTME: Training plan generation engine for the Pierre platform
// ABOUTME: Pure, synchronous pipeline from goals and availability to periodized workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Plan Engine
//!
//! Deterministic, rule-based training plan generation. The pipeline runs:
//!
//! 1. [`workload`]: goals and fitness into weekly session counts
//! 2. [`periodization`]: plan length into Base, Specific and Sharpening phases
//! 3. [`scheduling`]: sports onto the available weekdays
//! 4. [`patterns`]: workout types per sport, phase and fitness
//! 5. [`composition`]: durations and effort blocks per workout
//!
//! [`generators`] wraps the pipeline in versioned strategies selected by
//! [`config::PlannerConfig`]. Nothing in this crate performs I/O or holds state
//! across calls.

/// Planner configuration and session policy
pub mod config;

/// Duration calculation and segment composition
pub mod composition;

/// Versioned plan, workout and materialization generators
pub mod generators;

/// Workout-type pattern selection
pub mod patterns;

/// Phase periodization
pub mod periodization;

/// Day-of-week assignment
pub mod scheduling;

/// Weekly skeleton assembly
pub mod skeleton;

/// Weekly workload estimation
pub mod workload;

pub use composition::{ComposedWorkout, DurationCalculator, DurationTable, SegmentComposer};
pub use config::{PlannerConfig, SessionClock, SessionPolicy};
pub use generators::{
    GeneratorFactory, PlanInput, TrainingPlanGenerator, TrainingWorkoutGenerator,
    WorkoutPlanGenerator,
};
pub use patterns::{PatternCursor, WorkoutTypePatternGenerator};
pub use periodization::{PeriodizationPlanner, PhaseAllocation, PhaseSchedule, WeekContext};
pub use scheduling::{DayAssignmentScheduler, ScheduledSession, WeekAssignment};
pub use workload::{SportCounts, WorkloadEstimator};
