// ABOUTME: Self-contained JSON plan request carrying the athlete snapshot and goals inline
// ABOUTME: Seeds in-memory repositories so a plan can be generated without external storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request files
//!
//! ```json
//! {
//!   "athlete": { "fitness_score": 60, "max_heart_rate": 185 },
//!   "goals": [
//!     { "sport": "running", "weekly_workouts": 3, "nb_of_week": 12 },
//!     { "sport": "cycling", "weekly_workouts": 2, "nb_of_week": 12 }
//!   ],
//!   "weekdays": ["monday", "wednesday", "friday", "saturday", "sunday"],
//!   "start_now": true
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::{Athlete, Goal, PlanRequest, Sport};
use pierre_plan_engine::PlannerConfig;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use crate::repositories::{
    InMemoryAthleteRepository, InMemoryGoalRepository, InMemoryPlanRepository,
};
use crate::services::PlanningService;

/// Fitness values of the requesting athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteSnapshot {
    /// Fitness score, 1-100
    pub fitness_score: u8,
    /// Maximum heart rate in bpm
    pub max_heart_rate: u16,
}

/// One goal as written in a request file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSpec {
    /// Sport of the goal
    pub sport: Sport,
    /// Sessions per week
    pub weekly_workouts: u32,
    /// Plan length in weeks
    pub nb_of_week: u32,
    /// Target distance in meters
    #[serde(default)]
    pub target_distance_meters: Option<f64>,
    /// Target elevation gain in meters
    #[serde(default)]
    pub target_elevation_meters: Option<f64>,
}

impl GoalSpec {
    fn to_goal(&self) -> AppResult<Goal> {
        let mut goal = Goal::new(self.sport, self.weekly_workouts, self.nb_of_week)?;
        if let Some(meters) = self.target_distance_meters {
            goal = goal.with_distance(meters);
        }
        if let Some(meters) = self.target_elevation_meters {
            goal = goal.with_elevation(meters);
        }
        Ok(goal)
    }
}

/// Plan request with its inputs inline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestFile {
    /// Requesting account, a fresh id when omitted
    #[serde(default = "Uuid::new_v4")]
    pub account_id: Uuid,
    /// Athlete snapshot for the account
    pub athlete: AthleteSnapshot,
    /// Goals to plan for
    pub goals: Vec<GoalSpec>,
    /// Available weekday names
    pub weekdays: Vec<String>,
    /// Requested end date, required when `start_now` is false
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Start the plan today
    #[serde(default = "default_start_now")]
    pub start_now: bool,
}

const fn default_start_now() -> bool {
    true
}

/// A request file loaded into in-memory repositories
pub struct SeededRequest {
    /// Requesting account
    pub account_id: Uuid,
    /// Request referencing the seeded goals
    pub request: PlanRequest,
    /// Service over the seeded repositories
    pub service: PlanningService,
    /// Plan store the service writes to
    pub plans: InMemoryPlanRepository,
}

impl RequestFile {
    /// Parse a request file from JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the text is not a valid request file.
    pub fn from_json(text: &str) -> AppResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| AppError::invalid_input(format!("Malformed request file: {e}")))
    }

    /// Read and parse a request file
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the file cannot be read or parsed.
    pub async fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).await.map_err(|e| {
            AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), bytes = text.len(), "Loaded request file");
        Self::from_json(&text)
    }

    /// Seed in-memory repositories and build a service over them
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an out-of-range athlete snapshot, a malformed
    /// goal, or a missing end date when the plan does not start now.
    pub fn seed(&self, config: PlannerConfig, today: NaiveDate) -> AppResult<SeededRequest> {
        let athlete = Athlete::new(
            self.account_id,
            self.athlete.fitness_score,
            self.athlete.max_heart_rate,
        )?;
        let goals = self
            .goals
            .iter()
            .map(GoalSpec::to_goal)
            .collect::<AppResult<Vec<_>>>()?;

        let end_date = match (self.end_date, self.start_now) {
            (Some(date), _) => date,
            (None, true) => today,
            (None, false) => {
                return Err(AppError::invalid_input(
                    "end_date is required when start_now is false",
                ))
            }
        };
        let request = PlanRequest {
            end_date,
            weekdays: self.weekdays.clone(),
            goal_ids: goals.iter().map(|goal| goal.id).collect(),
            start_now: self.start_now,
        };

        let athletes = InMemoryAthleteRepository::new();
        athletes.insert(athlete);
        let goal_repository: InMemoryGoalRepository = goals.into_iter().collect();
        let plans = InMemoryPlanRepository::new();

        Ok(SeededRequest {
            account_id: self.account_id,
            request,
            service: PlanningService::new(
                Arc::new(goal_repository),
                Arc::new(athletes),
                Arc::new(plans.clone()),
                config,
            ),
            plans,
        })
    }
}
