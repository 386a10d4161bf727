// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for periodization, workload, durations, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Planning constants grouped by the engine stage that consumes them.

/// Service identity used by logging
pub mod service_names {
    /// Name reported by the planner binary and library logs
    pub const PIERRE_TRAINING_PLANNER: &str = "pierre-training-planner";
}

/// Athlete snapshot bounds
pub mod fitness {
    /// Lowest fitness score an athlete snapshot may carry
    pub const MIN_FITNESS_SCORE: u8 = 1;
    /// Highest fitness score an athlete snapshot may carry
    pub const MAX_FITNESS_SCORE: u8 = 100;
    /// Lowest plausible maximum heart rate (bpm)
    pub const MIN_MAX_HEART_RATE: u16 = 100;
    /// Highest plausible maximum heart rate (bpm)
    pub const MAX_MAX_HEART_RATE: u16 = 230;
}

/// Heart-rate bands as fractions of maximum heart rate
pub mod heart_rate_zones {
    /// Recovery band
    pub const RECOVERY: (f64, f64) = (0.50, 0.60);
    /// Aerobic endurance band
    pub const ENDURANCE: (f64, f64) = (0.60, 0.70);
    /// Tempo band
    pub const TEMPO: (f64, f64) = (0.70, 0.80);
    /// Lactate threshold band
    pub const THRESHOLD: (f64, f64) = (0.80, 0.90);
    /// `VO2max` band
    pub const VO2_MAX: (f64, f64) = (0.90, 0.95);
    /// Anaerobic band
    pub const ANAEROBIC: (f64, f64) = (0.95, 1.00);
}

/// Periodization phase weights (must sum to 1.0)
pub mod phases {
    /// Share of total weeks spent in the Base phase
    pub const BASE_FRACTION: f64 = 0.5;
    /// Share of total weeks spent in the Specific phase
    pub const SPECIFIC_FRACTION: f64 = 0.3;
    /// Share of total weeks spent in the Sharpening phase
    pub const SHARPENING_FRACTION: f64 = 0.2;
}

/// Weekly workload estimation
pub mod workload {
    /// Fitness score divisor of the running/cycling weight ramp
    pub const FITNESS_WEIGHT_DIVISOR: f64 = 200.0;
    /// Constant offset of the running/cycling weight ramp
    pub const FITNESS_WEIGHT_OFFSET: f64 = 0.45;
}

/// Workout-type pattern selection thresholds
pub mod patterns {
    /// Below this fitness score, two-session Sharpening weeks use tempo instead of intervals
    pub const SHARPENING_INTERVAL_MIN_FITNESS: u8 = 40;
    /// Below this fitness score, swimmers get technique sessions in three-session weeks
    pub const SWIM_TECHNIQUE_MAX_FITNESS: u8 = 50;
    /// From this fitness score on, high-volume weeks use the reduced-recovery allocation
    pub const HIGH_VOLUME_FITNESS_THRESHOLD: u8 = 50;
    /// Phase progression after which Base weeks promote one easy session to tempo
    pub const LATE_BASE_PROGRESSION: f64 = 0.7;
    /// Phase progression after which Specific weeks promote one tempo session to threshold
    pub const LATE_SPECIFIC_PROGRESSION: f64 = 0.6;
}

/// Workout duration coefficients and safety ceilings
pub mod durations {
    /// Level coefficient at fitness score 1
    pub const LEVEL_COEFF_MIN: f64 = 0.3;
    /// Level coefficient at fitness score 100
    pub const LEVEL_COEFF_MAX: f64 = 2.0;
    /// Progression coefficient at the start of a plan
    pub const PROGRESSION_COEFF_START: f64 = 0.8;
    /// Progression coefficient growth across the plan
    pub const PROGRESSION_COEFF_SPAN: f64 = 0.4;
    /// Base phase multiplier for easy endurance sessions
    pub const BASE_EASY_COEFF: f64 = 1.2;
    /// Base phase multiplier for every other session type
    pub const BASE_OTHER_COEFF: f64 = 0.8;
    /// Sharpening phase multiplier for easy endurance sessions
    pub const SHARPENING_EASY_COEFF: f64 = 0.7;
    /// Sharpening phase multiplier for every other session type
    pub const SHARPENING_OTHER_COEFF: f64 = 0.9;
    /// Longest swimming workout (seconds)
    pub const MAX_SWIMMING_SECONDS: u32 = 75 * 60;
    /// Longest running workout (seconds)
    pub const MAX_RUNNING_SECONDS: u32 = 120 * 60;
    /// Longest cycling workout (seconds)
    pub const MAX_CYCLING_SECONDS: u32 = 180 * 60;
}

/// Segment composition
pub mod segments {
    /// Shortest segment the composer emits (seconds)
    pub const MIN_SEGMENT_SECONDS: u32 = 30;
    /// Shortest cool-down after a structured main set (seconds)
    pub const MIN_COOLDOWN_SECONDS: u32 = 300;
    /// Warm-up share of interval sessions
    pub const INTERVAL_WARMUP_FRACTION: f64 = 0.25;
    /// Warm-up share of threshold and tempo sessions
    pub const THRESHOLD_WARMUP_FRACTION: f64 = 0.20;
    /// Warm-up and cool-down share of easy endurance sessions
    pub const EASY_EDGE_FRACTION: f64 = 0.10;
    /// Warm-up and cool-down share of non-swimming technique sessions
    pub const TECHNIQUE_EDGE_FRACTION: f64 = 0.15;
    /// Buffer share on either side of swimming drills
    pub const SWIM_DRILL_BUFFER_FRACTION: f64 = 0.10;
    /// Fitness points per swimming drill
    pub const SWIM_DRILL_FITNESS_DIVISOR: u8 = 25;
    /// Minimum swimming drill count
    pub const SWIM_MIN_DRILLS: u32 = 3;
    /// Base multiplier of the repetition count
    pub const REPETITION_SCALE_BASE: f64 = 0.6;
    /// Fitness divisor of the repetition count multiplier
    pub const REPETITION_SCALE_FITNESS_DIVISOR: f64 = 125.0;
    /// Base multiplier of interval and threshold effort duration
    pub const EFFORT_SCALE_BASE: f64 = 0.9;
    /// Base multiplier of recovery duration between repetitions
    pub const RECOVERY_SCALE_BASE: f64 = 1.1;
    /// Fitness divisor of effort and recovery multipliers
    pub const INTENSITY_FITNESS_DIVISOR: f64 = 500.0;
    /// Base multiplier of tempo effort duration
    pub const TEMPO_EFFORT_BASE: f64 = 0.8;
    /// Fitness divisor of tempo effort duration
    pub const TEMPO_EFFORT_FITNESS_DIVISOR: f64 = 500.0;
}

/// Calendar constants
pub mod calendar {
    /// Days in one training week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Environment variable names and their defaults
pub mod env_config {
    /// Global generator version (`v1` or `v2`)
    pub const GENERATOR_VERSION: &str = "PIERRE_PLAN_GENERATOR_VERSION";
    /// Minimum fitness score for multi-session days
    pub const MULTI_SESSION_MIN_FITNESS: &str = "PIERRE_PLAN_MULTI_SESSION_MIN_FITNESS";
    /// Minimum goal count for multi-session days
    pub const MULTI_SESSION_MIN_GOALS: &str = "PIERRE_PLAN_MULTI_SESSION_MIN_GOALS";
    /// Start hour of the first session of a day
    pub const SESSION_START_HOUR: &str = "PIERRE_PLAN_SESSION_START_HOUR";
    /// Start hour of the second session of a day
    pub const SECOND_SESSION_START_HOUR: &str = "PIERRE_PLAN_SECOND_SESSION_START_HOUR";

    /// Default generator version
    pub const DEFAULT_GENERATOR_VERSION: &str = "v2";
    /// Default multi-session fitness threshold
    pub const DEFAULT_MULTI_SESSION_MIN_FITNESS: u8 = 75;
    /// Default multi-session goal threshold
    pub const DEFAULT_MULTI_SESSION_MIN_GOALS: usize = 2;
    /// Default first session hour (UTC)
    pub const DEFAULT_SESSION_START_HOUR: u32 = 7;
    /// Default second session hour (UTC)
    pub const DEFAULT_SECOND_SESSION_START_HOUR: u32 = 17;
}
