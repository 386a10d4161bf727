// ABOUTME: Planner configuration loaded from environment variables with typed defaults
// ABOUTME: Selects the generator version, multi-session thresholds, and session start hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export PIERRE_PLAN_GENERATOR_VERSION=v2
//!    export PIERRE_PLAN_MULTI_SESSION_MIN_FITNESS=80
//!    export PIERRE_PLAN_SESSION_START_HOUR=6
//!    ```
//!
//! 2. Default values (if env vars not set)

use std::env;
use std::str::FromStr;

use pierre_plan_core::constants::env_config::{
    DEFAULT_GENERATOR_VERSION, DEFAULT_MULTI_SESSION_MIN_FITNESS,
    DEFAULT_MULTI_SESSION_MIN_GOALS, DEFAULT_SECOND_SESSION_START_HOUR,
    DEFAULT_SESSION_START_HOUR, GENERATOR_VERSION, MULTI_SESSION_MIN_FITNESS,
    MULTI_SESSION_MIN_GOALS, SECOND_SESSION_START_HOUR, SESSION_START_HOUR,
};
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::{Athlete, GeneratorVersion};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Thresholds that unlock more than one session per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSessionConfig {
    /// Minimum athlete fitness score
    pub min_fitness: u8,
    /// Minimum number of goals in the request
    pub min_goals: usize,
}

impl Default for MultiSessionConfig {
    fn default() -> Self {
        Self {
            min_fitness: DEFAULT_MULTI_SESSION_MIN_FITNESS,
            min_goals: DEFAULT_MULTI_SESSION_MIN_GOALS,
        }
    }
}

/// Start hours (UTC) used when materializing workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClock {
    /// Hour the first session of a day starts
    pub first_session_hour: u32,
    /// Hour the second session of a day starts
    pub second_session_hour: u32,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self {
            first_session_hour: DEFAULT_SESSION_START_HOUR,
            second_session_hour: DEFAULT_SECOND_SESSION_START_HOUR,
        }
    }
}

/// Whether one request may stack several sessions on the same weekday
///
/// Derived per request and passed explicitly to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionPolicy {
    /// More than one session per weekday is permitted
    pub allow_multiple_sessions_per_day: bool,
}

impl SessionPolicy {
    /// One session per weekday at most
    pub const SINGLE_SESSION: Self = Self {
        allow_multiple_sessions_per_day: false,
    };

    /// Several sessions per weekday allowed
    pub const MULTI_SESSION: Self = Self {
        allow_multiple_sessions_per_day: true,
    };

    /// Derive the policy from the athlete snapshot and the number of goals
    #[must_use]
    pub fn for_request(athlete: &Athlete, goal_count: usize, config: &MultiSessionConfig) -> Self {
        let allow = athlete.fitness_score >= config.min_fitness && goal_count >= config.min_goals;
        debug!(
            fitness_score = athlete.fitness_score,
            goal_count,
            allow_multiple_sessions_per_day = allow,
            "Derived session policy"
        );
        Self {
            allow_multiple_sessions_per_day: allow,
        }
    }
}

/// Engine-wide planner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Algorithm generation used for every family
    pub generator_version: GeneratorVersion,
    /// Multi-session thresholds
    pub multi_session: MultiSessionConfig,
    /// Session start hours
    pub session_clock: SessionClock,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            generator_version: GeneratorVersion::default(),
            multi_session: MultiSessionConfig::default(),
            session_clock: SessionClock::default(),
        }
    }
}

impl PlannerConfig {
    /// Load the configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` for an unknown generator version, a value
    /// that does not parse, or a start hour outside 0-23.
    pub fn from_env() -> AppResult<Self> {
        let version_string =
            env::var(GENERATOR_VERSION).unwrap_or_else(|_| DEFAULT_GENERATOR_VERSION.to_owned());
        let generator_version = version_string.parse::<GeneratorVersion>()?;

        let config = Self {
            generator_version,
            multi_session: MultiSessionConfig {
                min_fitness: env_or(MULTI_SESSION_MIN_FITNESS, DEFAULT_MULTI_SESSION_MIN_FITNESS)?,
                min_goals: env_or(MULTI_SESSION_MIN_GOALS, DEFAULT_MULTI_SESSION_MIN_GOALS)?,
            },
            session_clock: SessionClock {
                first_session_hour: env_or(SESSION_START_HOUR, DEFAULT_SESSION_START_HOUR)?,
                second_session_hour: env_or(
                    SECOND_SESSION_START_HOUR,
                    DEFAULT_SECOND_SESSION_START_HOUR,
                )?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` when a start hour is outside 0-23.
    pub fn validate(&self) -> AppResult<()> {
        let clock = self.session_clock;
        if clock.first_session_hour > 23 || clock.second_session_hour > 23 {
            return Err(AppError::config(format!(
                "Session start hours must be within 0-23, got {} and {}",
                clock.first_session_hour, clock.second_session_hour
            )));
        }
        Ok(())
    }
}

/// Read an environment variable, falling back to `default` when unset
fn env_or<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!("Environment variable {name} has invalid value '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}
