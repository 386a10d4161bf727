// ABOUTME: Versioned generator families for plans, single workouts, and weekly materialization
// ABOUTME: Each family is a trait with one implementation per algorithm generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Versioned Generators
//!
//! Three capability families evolve independently:
//!
//! - [`TrainingPlanGenerator`]: goals and availability into a plan skeleton
//! - [`WorkoutPlanGenerator`]: one (sport, workout type) into duration and blocks
//! - [`TrainingWorkoutGenerator`]: one week of a stored plan into dated workouts
//!
//! [`GeneratorFactory`] hands out the implementation matching the configured
//! [`GeneratorVersion`]. Newer versions reuse parts of older ones; V2 plan
//! generation resolves goals exactly like V1.

use chrono::NaiveDate;
use pierre_plan_core::errors::AppResult;
use pierre_plan_core::models::{
    Athlete, GeneratorVersion, Goal, PlanRequest, Sport, TrainingPlan, Workout, WorkoutType,
};
use uuid::Uuid;

use crate::composition::ComposedWorkout;
use crate::config::SessionPolicy;
use crate::periodization::WeekContext;

/// Generator selection by version
pub mod factory;
/// Shared week materialization
pub mod materialize;
/// Flat, non-periodized generation
pub mod v1;
/// Periodized generation with workload estimation
pub mod v2;

pub use factory::GeneratorFactory;
pub use materialize::WeekMaterializer;

/// Everything a plan generator needs for one request
#[derive(Debug, Clone, Copy)]
pub struct PlanInput<'a> {
    /// Owner of the new plan
    pub account_id: Uuid,
    /// The plan request
    pub request: &'a PlanRequest,
    /// Goals resolved from the request's goal ids
    pub goals: &'a [Goal],
    /// Athlete snapshot taken for this request
    pub athlete: &'a Athlete,
    /// Whether weekdays may hold several sessions
    pub policy: SessionPolicy,
    /// Current date, used when the plan starts now
    pub today: NaiveDate,
}

/// Builds a complete plan skeleton
pub trait TrainingPlanGenerator: Send + Sync {
    /// Generate a plan, with the first week's workouts materialized
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for missing goals or weekdays, `OverCapacity`
    /// when the week cannot hold the sessions, and `UnsupportedCombination`
    /// when a workout cannot be composed.
    fn generate(&self, input: &PlanInput<'_>) -> AppResult<TrainingPlan>;

    /// Algorithm generation of this implementation
    fn version(&self) -> GeneratorVersion;
}

/// Builds the duration and structure of one workout
pub trait WorkoutPlanGenerator: Send + Sync {
    /// Compose a workout for the given week
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCombination` when no template exists.
    fn generate(
        &self,
        sport: Sport,
        workout_type: WorkoutType,
        fitness_score: u8,
        week: &WeekContext,
    ) -> AppResult<ComposedWorkout>;

    /// Algorithm generation of this implementation
    fn version(&self) -> GeneratorVersion;
}

/// Materializes the workouts of one plan week
pub trait TrainingWorkoutGenerator: Send + Sync {
    /// Dated workouts of the week containing `date`
    ///
    /// # Errors
    ///
    /// Returns `PlanNotFound` when `date` falls outside the plan's weeks.
    fn generate(
        &self,
        plan: &TrainingPlan,
        athlete: &Athlete,
        date: NaiveDate,
    ) -> AppResult<Vec<Workout>>;

    /// Algorithm generation of this implementation
    fn version(&self) -> GeneratorVersion;
}
