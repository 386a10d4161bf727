// ABOUTME: Athlete fitness snapshot supplied to the planner by the fitness-tracking collaborator
// ABOUTME: Fitness score (1-100) and maximum heart rate, validated on construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::fitness::{
    MAX_FITNESS_SCORE, MAX_MAX_HEART_RATE, MIN_FITNESS_SCORE, MIN_MAX_HEART_RATE,
};
use crate::errors::{AppError, AppResult};

/// Read-only fitness snapshot of an athlete
///
/// The fitness score is adjusted over time outside the engine; a generation
/// call only ever sees one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    /// Account the snapshot belongs to
    pub account_id: Uuid,
    /// Current fitness score, 1-100
    pub fitness_score: u8,
    /// Maximum heart rate in bpm
    pub max_heart_rate: u16,
}

impl Athlete {
    /// Build a validated snapshot
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the fitness score is outside 1-100 or the
    /// maximum heart rate is physiologically implausible.
    pub fn new(account_id: Uuid, fitness_score: u8, max_heart_rate: u16) -> AppResult<Self> {
        let athlete = Self {
            account_id,
            fitness_score,
            max_heart_rate,
        };
        athlete.validate()?;
        Ok(athlete)
    }

    /// Check snapshot bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an out-of-range score or heart rate.
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_FITNESS_SCORE..=MAX_FITNESS_SCORE).contains(&self.fitness_score) {
            return Err(AppError::invalid_input(format!(
                "Fitness score {} is outside {MIN_FITNESS_SCORE}-{MAX_FITNESS_SCORE}",
                self.fitness_score
            )));
        }
        if !(MIN_MAX_HEART_RATE..=MAX_MAX_HEART_RATE).contains(&self.max_heart_rate) {
            return Err(AppError::invalid_input(format!(
                "Maximum heart rate {} bpm is outside {MIN_MAX_HEART_RATE}-{MAX_MAX_HEART_RATE}",
                self.max_heart_rate
            )));
        }
        Ok(())
    }
}
