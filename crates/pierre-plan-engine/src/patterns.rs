// ABOUTME: Workout-type pattern selection per sport, phase, fitness and progression
// ABOUTME: Patterns are consumed cyclically through a cursor scoped to one generation call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::iter;

use pierre_plan_core::constants::patterns::{
    HIGH_VOLUME_FITNESS_THRESHOLD, LATE_BASE_PROGRESSION, LATE_SPECIFIC_PROGRESSION,
    SHARPENING_INTERVAL_MIN_FITNESS, SWIM_TECHNIQUE_MAX_FITNESS,
};
use pierre_plan_core::models::WorkoutType::{
    ActiveEndurance as Tempo, ActiveRecovery as Recovery, EasyEndurance as Easy, Interval,
    Technique, Threshold,
};
use pierre_plan_core::models::{Sport, TrainingPhase, WorkoutType};

/// Share of the week per workout type for high-volume weeks, easy first
type VolumeShares = &'static [(WorkoutType, f64)];

const BASE_SHARES: VolumeShares = &[
    (Easy, 0.55),
    (Tempo, 0.20),
    (Technique, 0.15),
    (Recovery, 0.10),
];
const BASE_SHARES_FIT: VolumeShares = &[
    (Easy, 0.60),
    (Tempo, 0.20),
    (Technique, 0.15),
    (Recovery, 0.05),
];
const SPECIFIC_SHARES: VolumeShares = &[
    (Easy, 0.40),
    (Tempo, 0.25),
    (Threshold, 0.20),
    (Interval, 0.10),
    (Recovery, 0.05),
];
const SHARPENING_SHARES: VolumeShares = &[
    (Easy, 0.30),
    (Interval, 0.30),
    (Threshold, 0.20),
    (Tempo, 0.15),
    (Recovery, 0.05),
];
const SHARPENING_SHARES_FIT: VolumeShares = &[
    (Easy, 0.30),
    (Interval, 0.30),
    (Threshold, 0.25),
    (Tempo, 0.10),
    (Recovery, 0.05),
];

/// Builds the ordered workout-type cycle for one sport in one week
pub struct WorkoutTypePatternGenerator;

impl WorkoutTypePatternGenerator {
    /// Ordered workout types for `session_count` sessions of `sport`
    ///
    /// `progression` is the week's position within its phase (0.0 to 1.0).
    #[must_use]
    pub fn build_pattern(
        sport: Sport,
        session_count: u32,
        phase: TrainingPhase,
        fitness_score: u8,
        progression: f64,
    ) -> Vec<WorkoutType> {
        let mut pattern = match session_count {
            0 => return Vec::new(),
            1 => vec![Easy],
            2 => two_sessions(phase, fitness_score),
            3 => three_sessions(sport, phase, fitness_score),
            4 => four_sessions(phase),
            _ => high_volume(session_count as usize, phase, fitness_score),
        };

        adjust_for_sport(&mut pattern, sport);
        adjust_for_progression(&mut pattern, phase, progression);
        pattern
    }
}

fn two_sessions(phase: TrainingPhase, fitness_score: u8) -> Vec<WorkoutType> {
    match phase {
        TrainingPhase::Base => vec![Easy, Easy],
        TrainingPhase::Specific => vec![Easy, Tempo],
        TrainingPhase::Sharpening if fitness_score >= SHARPENING_INTERVAL_MIN_FITNESS => {
            vec![Easy, Interval]
        }
        TrainingPhase::Sharpening => vec![Easy, Tempo],
    }
}

fn three_sessions(sport: Sport, phase: TrainingPhase, fitness_score: u8) -> Vec<WorkoutType> {
    let technical_swimmer = sport == Sport::Swimming && fitness_score < SWIM_TECHNIQUE_MAX_FITNESS;
    match (phase, technical_swimmer) {
        (TrainingPhase::Base, false) => vec![Easy, Tempo, Easy],
        (TrainingPhase::Base, true) => vec![Easy, Technique, Tempo],
        (TrainingPhase::Specific, false) => vec![Easy, Threshold, Tempo],
        (TrainingPhase::Specific, true) => vec![Easy, Technique, Threshold],
        (TrainingPhase::Sharpening, false) => vec![Easy, Interval, Threshold],
        (TrainingPhase::Sharpening, true) => vec![Technique, Interval, Easy],
    }
}

fn four_sessions(phase: TrainingPhase) -> Vec<WorkoutType> {
    match phase {
        TrainingPhase::Base => vec![Easy, Tempo, Easy, Recovery],
        TrainingPhase::Specific => vec![Easy, Threshold, Tempo, Recovery],
        TrainingPhase::Sharpening => vec![Easy, Interval, Threshold, Recovery],
    }
}

/// Percentage-based allocation, easy sessions interleaved with the rest
fn high_volume(session_count: usize, phase: TrainingPhase, fitness_score: u8) -> Vec<WorkoutType> {
    let fit = fitness_score >= HIGH_VOLUME_FITNESS_THRESHOLD;
    let shares = match (phase, fit) {
        (TrainingPhase::Base, false) => BASE_SHARES,
        (TrainingPhase::Base, true) => BASE_SHARES_FIT,
        (TrainingPhase::Specific, _) => SPECIFIC_SHARES,
        (TrainingPhase::Sharpening, false) => SHARPENING_SHARES,
        (TrainingPhase::Sharpening, true) => SHARPENING_SHARES_FIT,
    };

    let slots = |share: f64| (session_count as f64 * share).round() as usize;
    let (easy_share, minor_shares) = match shares.split_first() {
        Some(((_, share), rest)) => (*share, rest),
        None => return vec![Easy; session_count],
    };

    let mut easy = slots(easy_share);
    let mut minors: Vec<(WorkoutType, usize)> = minor_shares
        .iter()
        .map(|&(workout_type, share)| (workout_type, slots(share).max(1)))
        .collect();

    let total = |easy: usize, minors: &[(WorkoutType, usize)]| {
        easy + minors.iter().map(|(_, count)| count).sum::<usize>()
    };

    while total(easy, &minors) > session_count && easy > 1 {
        easy -= 1;
    }
    while total(easy, &minors) > session_count {
        match minors.iter_mut().filter(|(_, count)| *count > 1).max_by_key(|(_, count)| *count) {
            Some(largest) => largest.1 -= 1,
            None => {
                minors.pop();
            }
        }
    }
    easy += session_count.saturating_sub(total(easy, &minors));

    let mut rest = minors
        .into_iter()
        .flat_map(|(workout_type, count)| iter::repeat(workout_type).take(count));
    let mut pattern = Vec::with_capacity(session_count);
    let mut easy_left = easy;
    while pattern.len() < session_count {
        if easy_left > 0 {
            pattern.push(Easy);
            easy_left -= 1;
        }
        if let Some(workout_type) = rest.next() {
            pattern.push(workout_type);
        } else if easy_left == 0 {
            break;
        }
    }
    pattern
}

fn adjust_for_sport(pattern: &mut [WorkoutType], sport: Sport) {
    match sport {
        Sport::Swimming => replace_first(pattern, Easy, Technique),
        // Low impact: sustained aerobic work beats pure recovery
        Sport::Cycling => replace_first(pattern, Recovery, Easy),
        _ => {}
    }
}

fn adjust_for_progression(pattern: &mut [WorkoutType], phase: TrainingPhase, progression: f64) {
    match phase {
        TrainingPhase::Base if progression > LATE_BASE_PROGRESSION => {
            replace_first(pattern, Easy, Tempo);
        }
        TrainingPhase::Specific if progression > LATE_SPECIFIC_PROGRESSION => {
            replace_first(pattern, Tempo, Threshold);
        }
        _ => {}
    }
}

fn replace_first(pattern: &mut [WorkoutType], from: WorkoutType, to: WorkoutType) {
    if let Some(slot) = pattern.iter().position(|&t| t == from) {
        pattern[slot] = to;
    }
}

/// Per-sport position in each sport's pattern
///
/// Create one per generation call; a cursor is never shared between requests.
#[derive(Debug, Default)]
pub struct PatternCursor {
    positions: HashMap<Sport, usize>,
}

impl PatternCursor {
    /// Fresh cursor with every sport at the start of its pattern
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next workout type for `sport`, wrapping around the pattern
    pub fn next(&mut self, sport: Sport, pattern: &[WorkoutType]) -> Option<WorkoutType> {
        if pattern.is_empty() {
            return None;
        }
        let position = self.positions.entry(sport).or_insert(0);
        let workout_type = pattern[*position % pattern.len()];
        *position += 1;
        Some(workout_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(sport: Sport, count: u32, phase: TrainingPhase, fitness: u8) -> Vec<WorkoutType> {
        WorkoutTypePatternGenerator::build_pattern(sport, count, phase, fitness, 0.0)
    }

    #[test]
    fn test_single_session_is_easy() {
        for phase in TrainingPhase::ORDERED {
            assert_eq!(pattern(Sport::Running, 1, phase, 60), vec![Easy]);
        }
    }

    #[test]
    fn test_two_session_sharpening_is_fitness_gated() {
        assert_eq!(
            pattern(Sport::Running, 2, TrainingPhase::Sharpening, 60),
            vec![Easy, Interval]
        );
        assert_eq!(
            pattern(Sport::Running, 2, TrainingPhase::Sharpening, 20),
            vec![Easy, Tempo]
        );
    }

    #[test]
    fn test_swimming_gets_technique() {
        let swim = pattern(Sport::Swimming, 2, TrainingPhase::Base, 70);
        assert_eq!(swim, vec![Technique, Easy]);
        assert_eq!(pattern(Sport::Swimming, 1, TrainingPhase::Base, 70), vec![Technique]);
    }

    #[test]
    fn test_high_volume_swim_week_differs_from_running() {
        let run = pattern(Sport::Running, 5, TrainingPhase::Base, 30);
        let swim = pattern(Sport::Swimming, 5, TrainingPhase::Base, 30);
        assert_ne!(swim, run);
        let technique = |p: &[WorkoutType]| p.iter().filter(|&&t| t == Technique).count();
        assert_eq!(technique(&swim), technique(&run) + 1);
        assert_eq!(swim.len(), 5);
    }

    #[test]
    fn test_cycling_drops_recovery() {
        let ride = pattern(Sport::Cycling, 4, TrainingPhase::Base, 60);
        assert!(!ride.contains(&Recovery));
        assert_eq!(ride.len(), 4);
    }

    #[test]
    fn test_high_volume_exact_length() {
        for count in 5..=10 {
            for phase in TrainingPhase::ORDERED {
                for fitness in [20, 80] {
                    let built = pattern(Sport::Running, count, phase, fitness);
                    assert_eq!(built.len(), count as usize);
                }
            }
        }
    }

    #[test]
    fn test_late_phase_nudges() {
        let late_base = WorkoutTypePatternGenerator::build_pattern(
            Sport::Running,
            3,
            TrainingPhase::Base,
            60,
            0.9,
        );
        assert_eq!(late_base, vec![Tempo, Tempo, Easy]);

        let single = WorkoutTypePatternGenerator::build_pattern(
            Sport::Running,
            1,
            TrainingPhase::Base,
            30,
            0.9,
        );
        assert_eq!(single, vec![Tempo]);

        let late_specific = WorkoutTypePatternGenerator::build_pattern(
            Sport::Running,
            3,
            TrainingPhase::Specific,
            60,
            0.8,
        );
        assert_eq!(late_specific, vec![Easy, Threshold, Threshold]);
    }

    #[test]
    fn test_cursor_wraps_and_is_per_sport() {
        let run = vec![Easy, Tempo];
        let mut cursor = PatternCursor::new();
        assert_eq!(cursor.next(Sport::Running, &run), Some(Easy));
        assert_eq!(cursor.next(Sport::Running, &run), Some(Tempo));
        assert_eq!(cursor.next(Sport::Running, &run), Some(Easy));
        assert_eq!(cursor.next(Sport::Cycling, &run), Some(Easy));
        assert_eq!(cursor.next(Sport::Swimming, &[]), None);
    }
}
