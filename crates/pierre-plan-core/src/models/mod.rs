// ABOUTME: Domain models for training plan generation
// ABOUTME: Inputs (goals, athlete snapshot, request) and outputs (plan skeleton, workouts)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models
//!
//! Goals and athlete snapshots are read-only inputs. Plans, weekly and daily
//! plans, workouts, blocks and segments are created fresh by every generation
//! call and handed to the persistence collaborator.

mod athlete;
mod goal;
mod intensity;
mod plan;
mod request;
mod sport;
mod workout;

pub use athlete::Athlete;
pub use goal::Goal;
pub use intensity::{IntensityZone, WorkoutType};
pub use plan::{DailyPlan, GeneratorVersion, TrainingPhase, TrainingPlan, WeeklyPlan};
pub use request::{parse_weekdays, PlanRequest};
pub use sport::Sport;
pub use workout::{Block, Segment, Workout};
