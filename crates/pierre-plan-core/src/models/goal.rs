// ABOUTME: Training goal model consumed by plan generation
// ABOUTME: A sport, a weekly session target, a plan length, and optional distance/elevation targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Sport;
use crate::errors::{AppError, AppResult};

/// An athletic goal the plan is built towards
///
/// Goals are read-only inputs: the engine never mutates them.
///
/// # Examples
///
/// ```rust
/// use pierre_plan_core::models::{Goal, Sport};
///
/// let goal = Goal::new(Sport::Running, 3, 12).unwrap().with_distance(21_097.5);
/// assert_eq!(goal.weekly_workouts, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal identifier
    pub id: Uuid,
    /// Sport of the goal
    pub sport: Sport,
    /// Target number of sessions per week
    pub weekly_workouts: u32,
    /// Plan length required by this goal, in weeks
    pub nb_of_week: u32,
    /// Target distance in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_distance_meters: Option<f64>,
    /// Target elevation gain in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_elevation_meters: Option<f64>,
}

impl Goal {
    /// Create a goal with a fresh identifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the weekly target or the week count is zero.
    pub fn new(sport: Sport, weekly_workouts: u32, nb_of_week: u32) -> AppResult<Self> {
        let goal = Self {
            id: Uuid::new_v4(),
            sport,
            weekly_workouts,
            nb_of_week,
            target_distance_meters: None,
            target_elevation_meters: None,
        };
        goal.validate()?;
        Ok(goal)
    }

    /// Set the target distance
    #[must_use]
    pub fn with_distance(mut self, meters: f64) -> Self {
        self.target_distance_meters = Some(meters);
        self
    }

    /// Set the target elevation gain
    #[must_use]
    pub fn with_elevation(mut self, meters: f64) -> Self {
        self.target_elevation_meters = Some(meters);
        self
    }

    /// Check the goal's counts
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the weekly target or the week count is zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.weekly_workouts == 0 {
            return Err(AppError::invalid_input(format!(
                "Goal {} requests zero weekly workouts",
                self.id
            ))
            .with_resource_id(self.id.to_string()));
        }
        if self.nb_of_week == 0 {
            return Err(AppError::invalid_input(format!(
                "Goal {} spans zero weeks",
                self.id
            ))
            .with_resource_id(self.id.to_string()));
        }
        Ok(())
    }
}
