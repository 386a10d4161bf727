// ABOUTME: Training plan skeleton models: phases, weekly plans, daily plans, and the plan itself
// ABOUTME: Also carries the generator version that produced a plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Goal, Sport, Workout, WorkoutType};
use crate::constants::calendar::DAYS_PER_WEEK;
use crate::constants::phases::{BASE_FRACTION, SHARPENING_FRACTION, SPECIFIC_FRACTION};
use crate::errors::AppError;

/// Periodization phase of a training plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Aerobic foundation
    Base,
    /// Race-specific work
    Specific,
    /// Final sharpening before the goal
    Sharpening,
}

impl TrainingPhase {
    /// Phases in plan order
    pub const ORDERED: [Self; 3] = [Self::Base, Self::Specific, Self::Sharpening];

    /// Share of the plan's weeks spent in this phase
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Base => BASE_FRACTION,
            Self::Specific => SPECIFIC_FRACTION,
            Self::Sharpening => SHARPENING_FRACTION,
        }
    }
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Specific => "specific",
            Self::Sharpening => "sharpening",
        };
        f.write_str(name)
    }
}

/// Algorithm generation used to build a plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorVersion {
    /// Flat plan: raw goal counts, no periodization
    V1,
    /// Periodized plan with workload estimation and progression
    #[default]
    V2,
}

impl GeneratorVersion {
    /// Configuration string of this version
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for GeneratorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorVersion {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            other => Err(AppError::config(format!(
                "Unknown generator version: '{other}'. Valid options: v1, v2"
            ))),
        }
    }
}

/// One scheduled session in the weekly skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Day of the session
    pub weekday: Weekday,
    /// Sport of the session
    pub sport: Sport,
    /// Training stimulus of the session
    pub workout_type: WorkoutType,
}

/// One week of the plan skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// 1-based, contiguous week number
    pub week_number: u32,
    /// Phase this week belongs to
    pub phase: TrainingPhase,
    /// Sessions ordered by weekday
    pub days: Vec<DailyPlan>,
}

/// A complete generated training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Owner of the plan
    pub account_id: Uuid,
    /// Goals the plan was built for
    pub goals: Vec<Goal>,
    /// First day of week 1
    pub start_date: NaiveDate,
    /// Day after the last planned week
    pub end_date: NaiveDate,
    /// Weekdays the athlete trains on, Monday first
    pub available_days: Vec<Weekday>,
    /// Weekly skeleton, one entry per week
    pub weekly_plans: Vec<WeeklyPlan>,
    /// Workouts materialized so far
    pub workouts: Vec<Workout>,
    /// Generator that produced this plan
    pub generator_version: GeneratorVersion,
}

impl TrainingPlan {
    /// Plan length required by a set of goals: the longest goal wins
    #[must_use]
    pub fn total_weeks(goals: &[Goal]) -> u32 {
        goals.iter().map(|goal| goal.nb_of_week).max().unwrap_or(0)
    }

    /// Week number (1-based) containing `date`, if the date is not before the start
    #[must_use]
    pub fn week_number_for(&self, date: NaiveDate) -> Option<u32> {
        let offset = (date - self.start_date).num_days();
        if offset < 0 {
            return None;
        }
        u32::try_from(offset / DAYS_PER_WEEK + 1).ok()
    }

    /// First day of the given week
    #[must_use]
    pub fn week_start(&self, week_number: u32) -> NaiveDate {
        self.start_date + Duration::days(i64::from(week_number.saturating_sub(1)) * DAYS_PER_WEEK)
    }

    /// Skeleton for the given week
    #[must_use]
    pub fn weekly_plan(&self, week_number: u32) -> Option<&WeeklyPlan> {
        self.weekly_plans
            .iter()
            .find(|week| week.week_number == week_number)
    }
}
