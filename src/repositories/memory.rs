// ABOUTME: In-memory repository implementations backed by sharded concurrent maps
// ABOUTME: Used by the CLI, the integration tests, and callers embedding the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::{Athlete, Goal, TrainingPlan};
use tracing::debug;
use uuid::Uuid;

use super::{AthleteRepository, GoalRepository, TrainingPlanRepository};

/// Goals keyed by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalRepository {
    goals: Arc<DashMap<Uuid, Goal>>,
}

impl InMemoryGoalRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a goal
    pub fn insert(&self, goal: Goal) {
        self.goals.insert(goal.id, goal);
    }
}

impl FromIterator<Goal> for InMemoryGoalRepository {
    fn from_iter<I: IntoIterator<Item = Goal>>(iter: I) -> Self {
        let repository = Self::new();
        for goal in iter {
            repository.insert(goal);
        }
        repository
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn get_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Goal>> {
        ids.iter()
            .map(|id| {
                self.goals
                    .get(id)
                    .map(|entry| entry.value().clone())
                    .ok_or_else(|| {
                        AppError::invalid_input(format!("Goal {id} does not exist"))
                            .with_resource_id(id.to_string())
                    })
            })
            .collect()
    }
}

/// Athlete snapshots keyed by account
#[derive(Debug, Clone, Default)]
pub struct InMemoryAthleteRepository {
    athletes: Arc<DashMap<Uuid, Athlete>>,
}

impl InMemoryAthleteRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest snapshot of an account
    pub fn insert(&self, athlete: Athlete) {
        self.athletes.insert(athlete.account_id, athlete);
    }
}

#[async_trait]
impl AthleteRepository for InMemoryAthleteRepository {
    async fn get_fitness_snapshot(&self, account_id: Uuid) -> AppResult<Athlete> {
        self.athletes
            .get(&account_id)
            .map(|entry| *entry.value())
            .ok_or_else(|| {
                AppError::invalid_input(format!("No fitness snapshot for account {account_id}"))
                    .with_resource_id(account_id.to_string())
            })
    }
}

/// Plans keyed by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanRepository {
    plans: Arc<DashMap<Uuid, TrainingPlan>>,
}

impl InMemoryPlanRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored plans
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether no plan is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[async_trait]
impl TrainingPlanRepository for InMemoryPlanRepository {
    async fn save(&self, plan: &TrainingPlan) -> AppResult<()> {
        debug!(plan_id = %plan.id, weeks = plan.weekly_plans.len(), "Storing training plan");
        self.plans.insert(plan.id, plan.clone());
        Ok(())
    }

    async fn get(&self, plan_id: Uuid) -> AppResult<Option<TrainingPlan>> {
        Ok(self.plans.get(&plan_id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use pierre_plan_core::errors::ErrorCode;
    use pierre_plan_core::models::Sport;

    use super::*;

    #[tokio::test]
    async fn test_goal_lookup_preserves_request_order() {
        let run = Goal::new(Sport::Running, 3, 8).unwrap();
        let swim = Goal::new(Sport::Swimming, 2, 8).unwrap();
        let repository: InMemoryGoalRepository = [run.clone(), swim.clone()].into_iter().collect();

        let goals = repository.get_by_ids(&[swim.id, run.id]).await.unwrap();
        assert_eq!(goals, vec![swim, run]);
    }

    #[tokio::test]
    async fn test_unknown_goal_is_invalid_input() {
        let repository = InMemoryGoalRepository::new();
        let missing = Uuid::new_v4();
        let err = repository.get_by_ids(&[missing]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.resource_id, Some(missing.to_string()));
    }

    #[tokio::test]
    async fn test_missing_snapshot() {
        let repository = InMemoryAthleteRepository::new();
        assert!(repository.get_fitness_snapshot(Uuid::new_v4()).await.is_err());
    }
}
