// ABOUTME: Collaborator traits the planning service reads goals, athletes and plans through
// ABOUTME: Storage-agnostic async interfaces with in-memory implementations for embedding and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository boundary
//!
//! The engine never touches storage. [`PlanningService`](crate::services::PlanningService)
//! resolves its inputs through these traits and hands the generated plan back
//! through [`TrainingPlanRepository`].

use async_trait::async_trait;
use pierre_plan_core::errors::AppResult;
use pierre_plan_core::models::{Athlete, Goal, TrainingPlan};
use uuid::Uuid;

/// `DashMap`-backed implementations
pub mod memory;

pub use memory::{InMemoryAthleteRepository, InMemoryGoalRepository, InMemoryPlanRepository};

/// Goal lookup
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Goals matching `ids`, in request order
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when an id does not resolve, or `InternalError`
    /// when storage fails.
    async fn get_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Goal>>;
}

/// Athlete fitness snapshots
#[async_trait]
pub trait AthleteRepository: Send + Sync {
    /// Latest fitness score and maximum heart rate of an account
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the account has no snapshot.
    async fn get_fitness_snapshot(&self, account_id: Uuid) -> AppResult<Athlete>;
}

/// Generated plan persistence
#[async_trait]
pub trait TrainingPlanRepository: Send + Sync {
    /// Store a plan, replacing any plan with the same id
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when storage fails.
    async fn save(&self, plan: &TrainingPlan) -> AppResult<()>;

    /// Load a plan by id
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when storage fails.
    async fn get(&self, plan_id: Uuid) -> AppResult<Option<TrainingPlan>>;
}
