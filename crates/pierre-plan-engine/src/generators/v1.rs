// ABOUTME: First-generation plan, workout and materialization generators
// ABOUTME: Flat plans from raw goal counts, no periodization or progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::{
    Athlete, GeneratorVersion, Goal, Sport, TrainingPlan, WeeklyPlan, Workout, WorkoutType,
};
use tracing::info;
use uuid::Uuid;

use super::{
    PlanInput, TrainingPlanGenerator, TrainingWorkoutGenerator, WeekMaterializer,
    WorkoutPlanGenerator,
};
use crate::composition::{ComposedWorkout, SegmentComposer};
use crate::config::SessionClock;
use crate::periodization::WeekContext;
use crate::scheduling::{DayAssignmentScheduler, WeekAssignment};
use crate::skeleton::build_weekly_plan;
use crate::workload::{SportCounts, WorkloadEstimator};

/// Plan length and raw weekly counts derived from goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGoals {
    /// Longest goal duration in weeks
    pub total_weeks: u32,
    /// Requested sessions per sport
    pub sport_counts: SportCounts,
}

/// Validate goals and derive plan length and per-sport counts
///
/// # Errors
///
/// Returns `InvalidInput` when `goals` is empty or a goal is malformed.
pub fn resolve_goals(goals: &[Goal]) -> AppResult<ResolvedGoals> {
    if goals.is_empty() {
        return Err(AppError::invalid_input(
            "No goals resolved for the plan request",
        ));
    }
    for goal in goals {
        goal.validate()?;
    }
    Ok(ResolvedGoals {
        total_weeks: TrainingPlan::total_weeks(goals),
        sport_counts: WorkloadEstimator::sport_counts(goals),
    })
}

/// Assemble plan metadata around weekly plans and materialize week one
pub(super) fn assemble_plan(
    input: &PlanInput<'_>,
    version: GeneratorVersion,
    total_weeks: u32,
    weekly_plans: Vec<WeeklyPlan>,
    workouts: &dyn TrainingWorkoutGenerator,
) -> AppResult<TrainingPlan> {
    let (start_date, end_date) = input.request.resolve_dates(total_weeks, input.today);
    let mut plan = TrainingPlan {
        id: Uuid::new_v4(),
        account_id: input.account_id,
        goals: input.goals.to_vec(),
        start_date,
        end_date,
        available_days: input.request.available_weekdays()?,
        weekly_plans,
        workouts: Vec::new(),
        generator_version: version,
    };
    plan.workouts = workouts.generate(&plan, input.athlete, start_date)?;

    info!(
        plan_id = %plan.id,
        account_id = %plan.account_id,
        generator = %version,
        weeks = total_weeks,
        sessions_per_week = plan.weekly_plans.first().map_or(0, |w| w.days.len()),
        %start_date,
        %end_date,
        "Generated training plan"
    );
    Ok(plan)
}

/// Assign the representative week for `counts`
pub(super) fn assign_week(
    input: &PlanInput<'_>,
    counts: &SportCounts,
) -> AppResult<WeekAssignment> {
    let weekdays = input.request.available_weekdays()?;
    DayAssignmentScheduler::assign(counts, &weekdays, input.policy)
}

/// Flat plan: requested counts every week, all weeks in Base
#[derive(Debug, Clone, Default)]
pub struct PlanGeneratorV1 {
    workouts: TrainingWorkoutGeneratorV1,
}

impl PlanGeneratorV1 {
    /// Generator placing sessions at the given start hours
    #[must_use]
    pub fn new(clock: SessionClock) -> Self {
        Self {
            workouts: TrainingWorkoutGeneratorV1::new(clock),
        }
    }
}

impl TrainingPlanGenerator for PlanGeneratorV1 {
    fn generate(&self, input: &PlanInput<'_>) -> AppResult<TrainingPlan> {
        let resolved = resolve_goals(input.goals)?;
        let assignment = assign_week(input, &resolved.sport_counts)?;

        let weekly_plans = (1..=resolved.total_weeks)
            .map(|week| {
                build_weekly_plan(
                    &assignment,
                    &WeekContext::flat(week),
                    input.athlete.fitness_score,
                )
            })
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
        GeneratorVersion::V1
    }
}

/// Fitness-scaled durations with an easy three-block structure
#[derive(Debug, Clone, Default)]
pub struct WorkoutGeneratorV1 {
    composer: SegmentComposer,
}

impl WorkoutGeneratorV1 {
    /// Generator over a custom composer
    #[must_use]
    pub const fn new(composer: SegmentComposer) -> Self {
        Self { composer }
    }
}

impl WorkoutPlanGenerator for WorkoutGeneratorV1 {
    fn generate(
        &self,
        sport: Sport,
        workout_type: WorkoutType,
        fitness_score: u8,
        _week: &WeekContext,
    ) -> AppResult<ComposedWorkout> {
        self.composer.compose_flat(sport, workout_type, fitness_score)
    }

    fn version(&self) -> GeneratorVersion {
        GeneratorVersion::V1
    }
}

/// Materializes a week with the V1 workout generator
#[derive(Debug, Clone, Default)]
pub struct TrainingWorkoutGeneratorV1 {
    materializer: WeekMaterializer,
    workouts: WorkoutGeneratorV1,
}

impl TrainingWorkoutGeneratorV1 {
    /// Generator placing sessions at the given start hours
    #[must_use]
    pub fn new(clock: SessionClock) -> Self {
        Self {
            materializer: WeekMaterializer::new(clock),
            workouts: WorkoutGeneratorV1::default(),
        }
    }
}

impl TrainingWorkoutGenerator for TrainingWorkoutGeneratorV1 {
    fn generate(
        &self,
        plan: &TrainingPlan,
        athlete: &Athlete,
        date: NaiveDate,
    ) -> AppResult<Vec<Workout>> {
        self.materializer.materialize(plan, date, |week, daily| {
            self.workouts.generate(
                daily.sport,
                daily.workout_type,
                athlete.fitness_score,
                &WeekContext::flat(week.week_number),
            )
        })
    }

    fn version(&self) -> GeneratorVersion {
        GeneratorVersion::V1
    }
}
