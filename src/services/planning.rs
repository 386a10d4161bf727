// ABOUTME: Planning service creating training plans and materializing the week around a date
// ABOUTME: Resolves goals and athlete snapshots, derives session policy, persists generated plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use chrono::NaiveDate;
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::{PlanRequest, TrainingPlan, Workout};
use pierre_plan_engine::{GeneratorFactory, PlanInput, PlannerConfig, SessionPolicy};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::repositories::{AthleteRepository, GoalRepository, TrainingPlanRepository};

/// Creates plans and materializes their workouts
#[derive(Clone)]
pub struct PlanningService {
    goals: Arc<dyn GoalRepository>,
    athletes: Arc<dyn AthleteRepository>,
    plans: Arc<dyn TrainingPlanRepository>,
    config: PlannerConfig,
}

impl PlanningService {
    /// Service over the given repositories
    #[must_use]
    pub fn new(
        goals: Arc<dyn GoalRepository>,
        athletes: Arc<dyn AthleteRepository>,
        plans: Arc<dyn TrainingPlanRepository>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            goals,
            athletes,
            plans,
            config,
        }
    }

    /// Configuration this service generates with
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate, persist and return a new plan for `account_id`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when no goals resolve or the request is malformed,
    /// `OverCapacity` when the sessions do not fit the weekdays, and any error
    /// raised by the repositories.
    #[instrument(skip(self, request), fields(goals = request.goal_ids.len()))]
    pub async fn create_plan(
        &self,
        account_id: Uuid,
        request: &PlanRequest,
        today: NaiveDate,
    ) -> AppResult<TrainingPlan> {
        let goals = self.goals.get_by_ids(&request.goal_ids).await?;
        if goals.is_empty() {
            return Err(AppError::invalid_input(
                "No goals resolved for the plan request",
            ));
        }

        let athlete = self.athletes.get_fitness_snapshot(account_id).await?;
        athlete.validate()?;

        let policy =
            SessionPolicy::for_request(&athlete, goals.len(), &self.config.multi_session);
        let generator = GeneratorFactory::from_config(&self.config).training_plan_generator();
        let input = PlanInput {
            account_id,
            request,
            goals: &goals,
            athlete: &athlete,
            policy,
            today,
        };
        let plan = generator.generate(&input)?;

        self.plans.save(&plan).await?;
        info!(
            plan_id = %plan.id,
            weeks = plan.weekly_plans.len(),
            generator = %plan.generator_version,
            "Training plan created"
        );
        Ok(plan)
    }

    /// Workouts of the week of `plan_id` that contains `date`
    ///
    /// Materializes with the generation that produced the plan.
    ///
    /// # Errors
    ///
    /// Returns `PlanNotFound` when the plan does not exist, belongs to another
    /// account, or has no week covering `date`.
    #[instrument(skip(self))]
    pub async fn next_workouts(
        &self,
        account_id: Uuid,
        plan_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<Workout>> {
        let plan = self
            .plans
            .get(plan_id)
            .await?
            .filter(|plan| plan.account_id == account_id)
            .ok_or_else(|| {
                warn!(%plan_id, %account_id, "Plan lookup failed");
                AppError::plan_not_found(format!("Training plan {plan_id} not found"))
                    .with_resource_id(plan_id.to_string())
            })?;

        let athlete = self.athletes.get_fitness_snapshot(account_id).await?;
        let factory = GeneratorFactory::new(plan.generator_version, self.config.session_clock);
        factory
            .training_workout_generator()
            .generate(&plan, &athlete, date)
    }
}
