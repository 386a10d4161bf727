// ABOUTME: Workout composition module: duration calculation and segment structure
// ABOUTME: Turns a (sport, workout type, phase, progression, fitness) tuple into blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Duration tables and coefficients
pub mod durations;
/// Block and segment templates per workout type
pub mod segments;

pub use durations::{DurationCalculator, DurationTable};
pub use segments::{ComposedWorkout, RepetitionParams, RepetitionTable, SegmentComposer};
