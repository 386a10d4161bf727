// ABOUTME: Weekly skeleton builder combining the week assignment with workout-type patterns
// ABOUTME: Each week consumes its sport patterns through a fresh cursor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use pierre_plan_core::models::{DailyPlan, Sport, WeeklyPlan, WorkoutType};

use crate::patterns::{PatternCursor, WorkoutTypePatternGenerator};
use crate::periodization::WeekContext;
use crate::scheduling::WeekAssignment;

/// Daily plans of one week, in weekday order
#[must_use]
pub fn build_weekly_plan(
    assignment: &WeekAssignment,
    context: &WeekContext,
    fitness_score: u8,
) -> WeeklyPlan {
    let patterns: BTreeMap<Sport, Vec<WorkoutType>> = Sport::ALL
        .into_iter()
        .filter_map(|sport| {
            let count = assignment.count_for(sport);
            (count > 0).then(|| {
                let pattern = WorkoutTypePatternGenerator::build_pattern(
                    sport,
                    count,
                    context.phase,
                    fitness_score,
                    context.phase_progression,
                );
                (sport, pattern)
            })
        })
        .collect();

    let mut cursor = PatternCursor::new();
    let days = assignment
        .sessions()
        .iter()
        .filter_map(|session| {
            let pattern = patterns.get(&session.sport)?;
            let workout_type = cursor.next(session.sport, pattern)?;
            Some(DailyPlan {
                weekday: session.weekday,
                sport: session.sport,
                workout_type,
            })
        })
        .collect();

    WeeklyPlan {
        week_number: context.week_number,
        phase: context.phase,
        days,
    }
}
