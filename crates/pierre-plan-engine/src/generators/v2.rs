// ABOUTME: Second-generation periodized plan, workout and materialization generators
// ABOUTME: Adds workload estimation, phase periodization and progression scaling on top of V1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pierre_plan_core::errors::AppResult;
use pierre_plan_core::models::{
    Athlete, GeneratorVersion, Sport, TrainingPlan, Workout, WorkoutType,
};
use tracing::debug;

use super::v1::{assemble_plan, assign_week, resolve_goals};
use super::{
    PlanInput, TrainingPlanGenerator, TrainingWorkoutGenerator, WeekMaterializer,
    WorkoutPlanGenerator,
};
use crate::composition::{ComposedWorkout, SegmentComposer};
use crate::config::SessionClock;
use crate::periodization::{PeriodizationPlanner, WeekContext};
use crate::skeleton::build_weekly_plan;
use crate::workload::WorkloadEstimator;

/// Periodized plan with fitness-scaled weekly workload
#[derive(Debug, Clone, Default)]
pub struct PlanGeneratorV2 {
    workouts: TrainingWorkoutGeneratorV2,
}

impl PlanGeneratorV2 {
    /// Generator placing sessions at the given start hours
    #[must_use]
    pub fn new(clock: SessionClock) -> Self {
        Self {
            workouts: TrainingWorkoutGeneratorV2::new(clock),
        }
    }
}

impl TrainingPlanGenerator for PlanGeneratorV2 {
    fn generate(&self, input: &PlanInput<'_>) -> AppResult<TrainingPlan> {
        let resolved = resolve_goals(input.goals)?;
        let fitness_score = input.athlete.fitness_score;

        let counts = WorkloadEstimator::allocate(input.goals, fitness_score)?;
        let assignment = assign_week(input, &counts)?;

        let schedule = PeriodizationPlanner::schedule(resolved.total_weeks);
        debug!(
            total_weeks = resolved.total_weeks,
            allocated_weeks = schedule.allocated_weeks(),
            ?counts,
            "Periodized plan"
        );

        let weekly_plans = (1..=resolved.total_weeks)
            .map(|week| build_weekly_plan(&assignment, &schedule.week_context(week), fitness_score))
            .collect();

        assemble_plan(
            input,
            self.version(),
            resolved.total_weeks,
            weekly_plans,
            &self.workouts,
        )
    }

    fn version(&self) -> GeneratorVersion {
        GeneratorVersion::V2
    }
}

/// Full composer with phase, progression and fitness scaling
#[derive(Debug, Clone, Default)]
pub struct WorkoutGeneratorV2 {
    composer: SegmentComposer,
}

impl WorkoutGeneratorV2 {
    /// Generator over a custom composer
    #[must_use]
    pub const fn new(composer: SegmentComposer) -> Self {
        Self { composer }
    }
}

impl WorkoutPlanGenerator for WorkoutGeneratorV2 {
    fn generate(
        &self,
        sport: Sport,
        workout_type: WorkoutType,
        fitness_score: u8,
        week: &WeekContext,
    ) -> AppResult<ComposedWorkout> {
        self.composer.compose(
            sport,
            workout_type,
            fitness_score,
            week.plan_progression,
            week.phase,
        )
    }

    fn version(&self) -> GeneratorVersion {
        GeneratorVersion::V2
    }
}

/// Materializes a week with the V2 workout generator and that week's progression
#[derive(Debug, Clone, Default)]
pub struct TrainingWorkoutGeneratorV2 {
    materializer: WeekMaterializer,
    workouts: WorkoutGeneratorV2,
}

impl TrainingWorkoutGeneratorV2 {
    /// Generator placing sessions at the given start hours
    #[must_use]
    pub fn new(clock: SessionClock) -> Self {
        Self {
            materializer: WeekMaterializer::new(clock),
            workouts: WorkoutGeneratorV2::default(),
        }
    }
}

impl TrainingWorkoutGenerator for TrainingWorkoutGeneratorV2 {
    fn generate(
        &self,
        plan: &TrainingPlan,
        athlete: &Athlete,
        date: NaiveDate,
    ) -> AppResult<Vec<Workout>> {
        let total_weeks = plan.weekly_plans.len() as u32;
        let schedule = PeriodizationPlanner::schedule(total_weeks);

        self.materializer.materialize(plan, date, |week, daily| {
            // The stored phase is authoritative; progression comes from the week's position
            let context = WeekContext {
                phase: week.phase,
                ..schedule.week_context(week.week_number)
            };
            self.workouts.generate(
                daily.sport,
                daily.workout_type,
                athlete.fitness_score,
                &context,
            )
        })
    }

    fn version(&self) -> GeneratorVersion {
        GeneratorVersion::V2
    }
}
