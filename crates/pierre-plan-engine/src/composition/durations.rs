// ABOUTME: Workout duration tables and the coefficient-based duration calculator
// ABOUTME: Scales a base duration by fitness level, phase emphasis and plan progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use pierre_plan_core::constants::durations::{
    BASE_EASY_COEFF, BASE_OTHER_COEFF, LEVEL_COEFF_MAX, LEVEL_COEFF_MIN,
    PROGRESSION_COEFF_SPAN, PROGRESSION_COEFF_START, SHARPENING_EASY_COEFF,
    SHARPENING_OTHER_COEFF,
};
use pierre_plan_core::constants::fitness::{MAX_FITNESS_SCORE, MIN_FITNESS_SCORE};
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::{Sport, TrainingPhase, WorkoutType};

/// Base durations in seconds, indexed like [`WorkoutType::ALL`]
const RUNNING_BASE: [u32; 6] = [2700, 3000, 3000, 2700, 1800, 1800];
const CYCLING_BASE: [u32; 6] = [5400, 4500, 4200, 3600, 3000, 2700];
const SWIMMING_BASE: [u32; 6] = [2400, 2400, 2400, 2100, 2100, 1500];

/// Base duration per (sport, workout type) before any coefficient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationTable {
    entries: HashMap<(Sport, WorkoutType), u32>,
}

impl Default for DurationTable {
    fn default() -> Self {
        let mut entries = HashMap::with_capacity(Sport::ALL.len() * WorkoutType::ALL.len());
        for sport in Sport::ALL {
            let row = match sport {
                Sport::Running => RUNNING_BASE,
                Sport::Cycling => CYCLING_BASE,
                Sport::Swimming => SWIMMING_BASE,
            };
            for (workout_type, seconds) in WorkoutType::ALL.into_iter().zip(row) {
                entries.insert((sport, workout_type), seconds);
            }
        }
        Self { entries }
    }
}

impl DurationTable {
    /// Table without entries
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace one entry
    #[must_use]
    pub fn with_entry(mut self, sport: Sport, workout_type: WorkoutType, seconds: u32) -> Self {
        self.entries.insert((sport, workout_type), seconds);
        self
    }

    /// Base duration of a (sport, workout type) pair
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCombination` when the pair has no entry.
    pub fn base_duration(&self, sport: Sport, workout_type: WorkoutType) -> AppResult<u32> {
        self.entries
            .get(&(sport, workout_type))
            .copied()
            .ok_or_else(|| {
                AppError::unsupported_combination(format!(
                    "No base duration defined for {sport} {workout_type}"
                ))
            })
    }
}

/// Computes total workout durations
#[derive(Debug, Clone, Default)]
pub struct DurationCalculator {
    table: DurationTable,
}

impl DurationCalculator {
    /// Calculator over a custom table
    #[must_use]
    pub const fn new(table: DurationTable) -> Self {
        Self { table }
    }

    /// Linear map of fitness 1..=100 onto 0.3..=2.0
    #[must_use]
    pub fn level_coefficient(fitness_score: u8) -> f64 {
        let clamped = fitness_score.clamp(MIN_FITNESS_SCORE, MAX_FITNESS_SCORE);
        let span = f64::from(MAX_FITNESS_SCORE - MIN_FITNESS_SCORE);
        LEVEL_COEFF_MIN
            + f64::from(clamped - MIN_FITNESS_SCORE) * (LEVEL_COEFF_MAX - LEVEL_COEFF_MIN) / span
    }

    /// Phase emphasis: Base favors easy volume, Sharpening favors quality
    #[must_use]
    pub fn phase_coefficient(phase: TrainingPhase, workout_type: WorkoutType) -> f64 {
        let easy = workout_type == WorkoutType::EasyEndurance;
        match (phase, easy) {
            (TrainingPhase::Base, true) => BASE_EASY_COEFF,
            (TrainingPhase::Base, false) => BASE_OTHER_COEFF,
            (TrainingPhase::Specific, _) => 1.0,
            (TrainingPhase::Sharpening, true) => SHARPENING_EASY_COEFF,
            (TrainingPhase::Sharpening, false) => SHARPENING_OTHER_COEFF,
        }
    }

    /// Ramp from 0.8 at the start of the plan to 1.2 at its end
    #[must_use]
    pub fn progression_coefficient(progression: f64) -> f64 {
        progression
            .clamp(0.0, 1.0)
            .mul_add(PROGRESSION_COEFF_SPAN, PROGRESSION_COEFF_START)
    }

    /// Total duration with every coefficient applied, clamped to the sport ceiling
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCombination` when the table has no base duration.
    pub fn duration_seconds(
        &self,
        sport: Sport,
        workout_type: WorkoutType,
        fitness_score: u8,
        phase: TrainingPhase,
        progression: f64,
    ) -> AppResult<u32> {
        let base = f64::from(self.table.base_duration(sport, workout_type)?);
        let seconds = base
            * Self::level_coefficient(fitness_score)
            * Self::phase_coefficient(phase, workout_type)
            * Self::progression_coefficient(progression);
        Ok(clamp_to_sport(sport, seconds))
    }

    /// Base duration scaled by fitness only
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCombination` when the table has no base duration.
    pub fn flat_duration_seconds(
        &self,
        sport: Sport,
        workout_type: WorkoutType,
        fitness_score: u8,
    ) -> AppResult<u32> {
        let base = f64::from(self.table.base_duration(sport, workout_type)?);
        Ok(clamp_to_sport(
            sport,
            base * Self::level_coefficient(fitness_score),
        ))
    }
}

fn clamp_to_sport(sport: Sport, seconds: f64) -> u32 {
    (seconds.round().max(0.0) as u32).min(sport.max_duration_seconds())
}
