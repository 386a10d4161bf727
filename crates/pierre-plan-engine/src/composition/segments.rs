// ABOUTME: Segment composer expanding a workout type into warm-up, main set and cool-down blocks
// ABOUTME: Repetition tables keyed by phase and sport drive interval, threshold and tempo sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Segment composition
//!
//! Structured sessions (intervals, threshold, tempo) are a warm-up at
//! endurance, a repeated effort/recovery block and a cool-down of at least
//! five minutes at recovery. Repetition counts come from a [`RepetitionTable`]
//! and are scaled by fitness; the count shrinks when the set would not leave
//! room for the cool-down.

use std::collections::HashMap;

use pierre_plan_core::constants::segments::{
    EASY_EDGE_FRACTION, EFFORT_SCALE_BASE, INTENSITY_FITNESS_DIVISOR, INTERVAL_WARMUP_FRACTION,
    MIN_COOLDOWN_SECONDS, RECOVERY_SCALE_BASE, REPETITION_SCALE_BASE,
    REPETITION_SCALE_FITNESS_DIVISOR, SWIM_DRILL_BUFFER_FRACTION, SWIM_DRILL_FITNESS_DIVISOR,
    SWIM_MIN_DRILLS, TECHNIQUE_EDGE_FRACTION, TEMPO_EFFORT_BASE, TEMPO_EFFORT_FITNESS_DIVISOR,
    THRESHOLD_WARMUP_FRACTION,
};
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::{Block, IntensityZone, Segment, Sport, TrainingPhase, WorkoutType};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::durations::DurationCalculator;

/// Main-set parameters before fitness scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepetitionParams {
    /// Number of repetitions
    pub repetitions: u32,
    /// Effort duration per repetition (seconds)
    pub effort_seconds: u32,
    /// Recovery duration per repetition (seconds)
    pub recovery_seconds: u32,
}

impl RepetitionParams {
    const fn new(repetitions: u32, effort_seconds: u32, recovery_seconds: u32) -> Self {
        Self {
            repetitions,
            effort_seconds,
            recovery_seconds,
        }
    }
}

/// Main-set parameters keyed by (phase, sport)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepetitionTable {
    entries: HashMap<(TrainingPhase, Sport), RepetitionParams>,
}

impl RepetitionTable {
    /// Table without entries
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace one entry
    #[must_use]
    pub fn with_entry(
        mut self,
        phase: TrainingPhase,
        sport: Sport,
        params: RepetitionParams,
    ) -> Self {
        self.entries.insert((phase, sport), params);
        self
    }

    /// Parameters for a phase and sport
    #[must_use]
    pub fn params(&self, phase: TrainingPhase, sport: Sport) -> Option<RepetitionParams> {
        self.entries.get(&(phase, sport)).copied()
    }

    /// Interval sets: fewer, longer repeats in Base, more, shorter repeats in Sharpening
    #[must_use]
    pub fn intervals() -> Self {
        Self::from_rows(&[
            (Sport::Running, [(4, 240, 120), (6, 180, 90), (8, 120, 60)]),
            (Sport::Cycling, [(4, 360, 180), (5, 300, 150), (8, 180, 90)]),
            (Sport::Swimming, [(4, 180, 60), (6, 120, 45), (8, 90, 30)]),
        ])
    }

    /// Threshold sets
    #[must_use]
    pub fn threshold() -> Self {
        Self::from_rows(&[
            (Sport::Running, [(2, 600, 180), (3, 480, 120), (4, 360, 90)]),
            (Sport::Cycling, [(2, 900, 240), (3, 720, 180), (4, 480, 120)]),
            (Sport::Swimming, [(3, 300, 60), (4, 240, 45), (5, 180, 30)]),
        ])
    }

    /// Tempo sets
    #[must_use]
    pub fn tempo() -> Self {
        Self::from_rows(&[
            (Sport::Running, [(2, 900, 180), (3, 720, 150), (2, 600, 120)]),
            (Sport::Cycling, [(2, 1200, 240), (3, 900, 180), (3, 600, 120)]),
            (Sport::Swimming, [(3, 400, 60), (4, 300, 45), (4, 240, 30)]),
        ])
    }

    /// Rows hold (repetitions, effort, recovery) per phase in plan order
    fn from_rows(rows: &[(Sport, [(u32, u32, u32); 3])]) -> Self {
        let mut table = Self::empty();
        for (sport, by_phase) in rows {
            let phases = TrainingPhase::ORDERED.into_iter().zip(by_phase);
            for (phase, &(reps, effort, recovery)) in phases {
                let params = RepetitionParams::new(reps, effort, recovery);
                table = table.with_entry(phase, *sport, params);
            }
        }
        table
    }
}

/// Total duration and block structure of one workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedWorkout {
    /// Planned duration in seconds
    pub duration_seconds: u32,
    /// Warm-up, main set and cool-down blocks
    pub blocks: Vec<Block>,
}

impl ComposedWorkout {
    /// Workout whose duration is the total of its blocks
    #[must_use]
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        let duration_seconds = blocks.iter().map(Block::total_seconds).sum();
        Self {
            duration_seconds,
            blocks,
        }
    }
}

/// Builds workout structure from a workout type
#[derive(Debug, Clone)]
pub struct SegmentComposer {
    durations: DurationCalculator,
    intervals: RepetitionTable,
    threshold: RepetitionTable,
    tempo: RepetitionTable,
}

impl Default for SegmentComposer {
    fn default() -> Self {
        Self::new(DurationCalculator::default())
    }
}

impl SegmentComposer {
    /// Composer with the default repetition tables
    #[must_use]
    pub fn new(durations: DurationCalculator) -> Self {
        Self {
            durations,
            intervals: RepetitionTable::intervals(),
            threshold: RepetitionTable::threshold(),
            tempo: RepetitionTable::tempo(),
        }
    }

    /// Replace the interval, threshold and tempo tables
    #[must_use]
    pub fn with_repetition_tables(
        mut self,
        intervals: RepetitionTable,
        threshold: RepetitionTable,
        tempo: RepetitionTable,
    ) -> Self {
        self.intervals = intervals;
        self.threshold = threshold;
        self.tempo = tempo;
        self
    }

    /// Duration calculator in use
    #[must_use]
    pub const fn durations(&self) -> &DurationCalculator {
        &self.durations
    }

    /// Periodized duration and full structure of a workout
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCombination` when no duration or repetition
    /// template exists for the sport and workout type.
    pub fn compose(
        &self,
        sport: Sport,
        workout_type: WorkoutType,
        fitness_score: u8,
        progression: f64,
        phase: TrainingPhase,
    ) -> AppResult<ComposedWorkout> {
        let total = self
            .durations
            .duration_seconds(sport, workout_type, fitness_score, phase, progression)?;

        let blocks = match workout_type {
            WorkoutType::EasyEndurance => three_part(
                total,
                EASY_EDGE_FRACTION,
                [IntensityZone::Recovery, IntensityZone::Endurance, IntensityZone::Recovery],
            ),
            WorkoutType::Interval => structured(
                total,
                &self.intervals,
                sport,
                phase,
                fitness_score,
                SetKind::Interval,
            )?,
            WorkoutType::Threshold => structured(
                total,
                &self.threshold,
                sport,
                phase,
                fitness_score,
                SetKind::Threshold,
            )?,
            WorkoutType::ActiveEndurance => structured(
                total,
                &self.tempo,
                sport,
                phase,
                fitness_score,
                SetKind::Tempo,
            )?,
            WorkoutType::Technique if sport == Sport::Swimming => swim_drills(total, fitness_score),
            WorkoutType::Technique => {
                three_part(total, TECHNIQUE_EDGE_FRACTION, [IntensityZone::Recovery; 3])
            }
            WorkoutType::ActiveRecovery => vec![Block::single(total, IntensityZone::Recovery)],
        };

        Ok(ComposedWorkout::from_blocks(blocks))
    }

    /// Fitness-scaled duration with an easy warm-up/main/cool-down shape
    ///
    /// The main block never goes above endurance, or the workout type's
    /// ceiling when that is lower.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedCombination` when the table has no base duration.
    pub fn compose_flat(
        &self,
        sport: Sport,
        workout_type: WorkoutType,
        fitness_score: u8,
    ) -> AppResult<ComposedWorkout> {
        let total = self
            .durations
            .flat_duration_seconds(sport, workout_type, fitness_score)?;
        let main_zone = workout_type.zone_range().1.min(IntensityZone::Endurance);
        Ok(ComposedWorkout::from_blocks(three_part(
            total,
            EASY_EDGE_FRACTION,
            [IntensityZone::Recovery, main_zone, IntensityZone::Recovery],
        )))
    }
}

fn structured(
    total: u32,
    table: &RepetitionTable,
    sport: Sport,
    phase: TrainingPhase,
    fitness_score: u8,
    kind: SetKind,
) -> AppResult<Vec<Block>> {
    let base = table.params(phase, sport).ok_or_else(|| {
        AppError::unsupported_combination(format!(
            "No {} set defined for {sport} in {phase} phase",
            kind.label()
        ))
    })?;

    let fitness = f64::from(fitness_score);
    let warmup = fraction_of(total, kind.warmup_fraction());
    let effort = (f64::from(base.effort_seconds) * kind.effort_scale(fitness)).round() as u32;
    let recovery = (f64::from(base.recovery_seconds)
        * (RECOVERY_SCALE_BASE - fitness / INTENSITY_FITNESS_DIVISOR))
        .round() as u32;
    let scaled_reps = (f64::from(base.repetitions)
        * (REPETITION_SCALE_BASE + fitness / REPETITION_SCALE_FITNESS_DIVISOR))
        .round()
        .max(1.0) as u32;

    let effort_segment = Segment::new(effort, kind.effort_zone());
    let recovery_segment = Segment::new(recovery, IntensityZone::Endurance);
    let rep_seconds = effort_segment.duration_seconds + recovery_segment.duration_seconds;

    let budget = total.saturating_sub(warmup + MIN_COOLDOWN_SECONDS);
    let mut repetitions = scaled_reps;
    while repetitions > 1 && repetitions * rep_seconds > budget {
        repetitions -= 1;
    }
    if repetitions < scaled_reps {
        warn!(
            %sport,
            workout = kind.label(),
            requested = scaled_reps,
            repetitions,
            total,
            "Reduced repetitions to fit the workout duration"
        );
    }

    let main = repetitions * rep_seconds;
    let cooldown = total.saturating_sub(warmup + main).max(MIN_COOLDOWN_SECONDS);

    Ok(vec![
        Block::single(warmup, IntensityZone::Endurance),
        Block::new(repetitions, vec![effort_segment, recovery_segment]),
        Block::single(cooldown, IntensityZone::Recovery),
    ])
}

/// Which structured set is being built
#[derive(Debug, Clone, Copy)]
enum SetKind {
    Interval,
    Threshold,
    Tempo,
}

impl SetKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Interval => "interval",
            Self::Threshold => "threshold",
            Self::Tempo => "tempo",
        }
    }

    const fn warmup_fraction(self) -> f64 {
        match self {
            Self::Interval => INTERVAL_WARMUP_FRACTION,
            Self::Threshold | Self::Tempo => THRESHOLD_WARMUP_FRACTION,
        }
    }

    const fn effort_zone(self) -> IntensityZone {
        match self {
            Self::Interval => IntensityZone::Vo2Max,
            Self::Threshold => IntensityZone::Threshold,
            Self::Tempo => IntensityZone::Tempo,
        }
    }

    fn effort_scale(self, fitness: f64) -> f64 {
        match self {
            Self::Interval | Self::Threshold => {
                EFFORT_SCALE_BASE + fitness / INTENSITY_FITNESS_DIVISOR
            }
            Self::Tempo => TEMPO_EFFORT_BASE + fitness / TEMPO_EFFORT_FITNESS_DIVISOR,
        }
    }
}

fn fraction_of(total: u32, fraction: f64) -> u32 {
    (f64::from(total) * fraction).round() as u32
}

/// Warm-up, main and cool-down with symmetric edges
fn three_part(total: u32, edge_fraction: f64, zones: [IntensityZone; 3]) -> Vec<Block> {
    let edge = fraction_of(total, edge_fraction);
    let main = total.saturating_sub(2 * edge);
    let [warmup_zone, main_zone, cooldown_zone] = zones;
    vec![
        Block::single(edge, warmup_zone),
        Block::single(main, main_zone),
        Block::single(edge, cooldown_zone),
    ]
}

/// Evenly sized drill blocks between two short buffers
fn swim_drills(total: u32, fitness_score: u8) -> Vec<Block> {
    let drills = u32::from(fitness_score / SWIM_DRILL_FITNESS_DIVISOR).max(SWIM_MIN_DRILLS);
    let buffer = fraction_of(total, SWIM_DRILL_BUFFER_FRACTION);
    let drill_time = total.saturating_sub(2 * buffer);
    let drill_seconds = drill_time / drills;
    // Division remainder goes to the closing buffer.
    let closing = buffer + drill_time % drills;

    let mut blocks = Vec::with_capacity(drills as usize + 2);
    blocks.push(Block::single(buffer, IntensityZone::Recovery));
    blocks.extend((0..drills).map(|_| Block::single(drill_seconds, IntensityZone::Recovery)));
    blocks.push(Block::single(closing, IntensityZone::Recovery));
    blocks
}
