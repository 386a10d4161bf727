// ABOUTME: Integration tests for workout-type patterns and weekly skeleton assembly
// ABOUTME: Pattern lengths, phase mixes, and independence of consecutive generation calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_plan_engine::skeleton::build_weekly_plan;
use pierre_plan_engine::{
    DayAssignmentScheduler, PatternCursor, PeriodizationPlanner, SportCounts,
    WorkoutTypePatternGenerator,
};
use pierre_training_planner::models::{parse_weekdays, Sport, TrainingPhase, WorkoutType};
use pierre_training_planner::SessionPolicy;

#[test]
fn test_pattern_length_matches_session_count() {
    common::init_test_logging();
    for sport in Sport::ALL {
        for phase in TrainingPhase::ORDERED {
            for count in 0..=9 {
                let pattern =
                    WorkoutTypePatternGenerator::build_pattern(sport, count, phase, 55, 0.5);
                assert_eq!(pattern.len(), count as usize, "{sport} {phase} x{count}");
            }
        }
    }
}

#[test]
fn test_build_pattern_is_stateless() {
    let first = WorkoutTypePatternGenerator::build_pattern(
        Sport::Running,
        3,
        TrainingPhase::Specific,
        60,
        0.2,
    );
    let second = WorkoutTypePatternGenerator::build_pattern(
        Sport::Running,
        3,
        TrainingPhase::Specific,
        60,
        0.2,
    );
    assert_eq!(first, second);
}

#[test]
fn test_fresh_cursors_restart_patterns() {
    let pattern = WorkoutTypePatternGenerator::build_pattern(
        Sport::Running,
        3,
        TrainingPhase::Sharpening,
        70,
        0.0,
    );

    let mut first = PatternCursor::new();
    let drained: Vec<_> = (0..3).filter_map(|_| first.next(Sport::Running, &pattern)).collect();

    let mut second = PatternCursor::new();
    assert_eq!(second.next(Sport::Running, &pattern), drained.first().copied());
    assert_eq!(drained, pattern);
}

#[test]
fn test_weekly_skeletons_do_not_share_counters() {
    let counts: SportCounts = [(Sport::Running, 3), (Sport::Cycling, 2)].into_iter().collect();
    let weekdays = parse_weekdays(&common::ALL_WEEKDAYS).unwrap();
    let assignment =
        DayAssignmentScheduler::assign(&counts, &weekdays, SessionPolicy::SINGLE_SESSION).unwrap();
    let context = PeriodizationPlanner::schedule(10).week_context(2);

    let first = build_weekly_plan(&assignment, &context, 60);
    let second = build_weekly_plan(&assignment, &context, 60);
    assert_eq!(first, second);
    assert_eq!(first.days.len(), 5);
}

#[test]
fn test_sharpening_includes_quality_for_fit_athletes() {
    let pattern = WorkoutTypePatternGenerator::build_pattern(
        Sport::Running,
        6,
        TrainingPhase::Sharpening,
        80,
        0.5,
    );
    assert!(pattern.contains(&WorkoutType::Interval));
    assert!(pattern.contains(&WorkoutType::Threshold));
    assert!(pattern.contains(&WorkoutType::EasyEndurance));
}

#[test]
fn test_low_fitness_swimmers_favor_technique() {
    let pattern = WorkoutTypePatternGenerator::build_pattern(
        Sport::Swimming,
        3,
        TrainingPhase::Base,
        30,
        0.0,
    );
    assert!(pattern.contains(&WorkoutType::Technique));
}

#[test]
fn test_cycling_weeks_skip_pure_recovery() {
    for count in 4..=8 {
        let pattern = WorkoutTypePatternGenerator::build_pattern(
            Sport::Cycling,
            count,
            TrainingPhase::Base,
            40,
            0.0,
        );
        let recovery = pattern
            .iter()
            .filter(|&&t| t == WorkoutType::ActiveRecovery)
            .count();
        let running = WorkoutTypePatternGenerator::build_pattern(
            Sport::Running,
            count,
            TrainingPhase::Base,
            40,
            0.0,
        );
        let running_recovery = running
            .iter()
            .filter(|&&t| t == WorkoutType::ActiveRecovery)
            .count();
        assert_eq!(recovery + 1, running_recovery, "x{count}");
    }
}
