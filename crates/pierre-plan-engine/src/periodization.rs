// ABOUTME: Periodization of a plan into Base, Specific and Sharpening phases
// ABOUTME: Resolves the phase and progression of any week number
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Phase periodization
//!
//! Each phase gets `round(total_weeks * fraction)` weeks. The rounded counts
//! are not reconciled against the plan length, so the allocation may differ
//! from `total_weeks` by one week. Lookups past the last phase boundary clamp
//! to Sharpening.

use pierre_plan_core::models::TrainingPhase;
use serde::{Deserialize, Serialize};

/// Number of weeks allotted to one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseAllocation {
    /// The phase
    pub phase: TrainingPhase,
    /// Weeks spent in it
    pub weeks: u32,
}

/// Where a week sits in the plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekContext {
    /// 1-based week number
    pub week_number: u32,
    /// Phase the week belongs to
    pub phase: TrainingPhase,
    /// Position within the phase, 0.0 at its first week and 1.0 at its last
    pub phase_progression: f64,
    /// Position within the plan, 0.0 at week 1 and 1.0 at the final week
    pub plan_progression: f64,
}

impl WeekContext {
    /// Context used by generators without periodization
    #[must_use]
    pub const fn flat(week_number: u32) -> Self {
        Self {
            week_number,
            phase: TrainingPhase::Base,
            phase_progression: 0.0,
            plan_progression: 0.0,
        }
    }
}

/// Splits plan length into phases
pub struct PeriodizationPlanner;

impl PeriodizationPlanner {
    /// Weeks per phase, in plan order
    #[must_use]
    pub fn plan_phases(total_weeks: u32) -> Vec<PhaseAllocation> {
        TrainingPhase::ORDERED
            .iter()
            .map(|&phase| PhaseAllocation {
                phase,
                weeks: (f64::from(total_weeks) * phase.fraction()).round() as u32,
            })
            .collect()
    }

    /// Phase lookup structure for a plan of `total_weeks`
    #[must_use]
    pub fn schedule(total_weeks: u32) -> PhaseSchedule {
        PhaseSchedule {
            total_weeks,
            allocations: Self::plan_phases(total_weeks),
        }
    }
}

/// Cumulative phase boundaries of one plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSchedule {
    total_weeks: u32,
    allocations: Vec<PhaseAllocation>,
}

impl PhaseSchedule {
    /// Phase allocations in plan order
    #[must_use]
    pub fn allocations(&self) -> &[PhaseAllocation] {
        &self.allocations
    }

    /// Plan length the schedule was built for
    #[must_use]
    pub const fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    /// Sum of the rounded phase lengths, possibly off by one from the plan length
    #[must_use]
    pub fn allocated_weeks(&self) -> u32 {
        self.allocations.iter().map(|a| a.weeks).sum()
    }

    /// Phase containing a 1-based week number
    #[must_use]
    pub fn phase_for_week(&self, week_number: u32) -> TrainingPhase {
        self.locate(week_number).0
    }

    /// Phase and progression values of a 1-based week number
    #[must_use]
    pub fn week_context(&self, week_number: u32) -> WeekContext {
        let (phase, phase_start, phase_weeks) = self.locate(week_number);

        let phase_progression = if phase_weeks > 1 {
            (f64::from(week_number.saturating_sub(phase_start)) / f64::from(phase_weeks - 1))
                .clamp(0.0, 1.0)
        } else {
            0.0
        };
        let plan_progression = if self.total_weeks > 1 {
            (f64::from(week_number.saturating_sub(1)) / f64::from(self.total_weeks - 1))
                .clamp(0.0, 1.0)
        } else {
            0.0
        };

        WeekContext {
            week_number,
            phase,
            phase_progression,
            plan_progression,
        }
    }

    /// (phase, first week of the phase, phase length)
    fn locate(&self, week_number: u32) -> (TrainingPhase, u32, u32) {
        let mut start = 1;
        for allocation in &self.allocations {
            if allocation.weeks > 0 && week_number < start + allocation.weeks {
                return (allocation.phase, start, allocation.weeks);
            }
            start += allocation.weeks;
        }

        // Rounding drift: anything past the last boundary is Sharpening
        let sharpening_weeks = self
            .allocations
            .iter()
            .find(|a| a.phase == TrainingPhase::Sharpening)
            .map_or(0, |a| a.weeks);
        let sharpening_start = start.saturating_sub(sharpening_weeks).max(1);
        (TrainingPhase::Sharpening, sharpening_start, sharpening_weeks.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weeks(total: u32) -> Vec<u32> {
        PeriodizationPlanner::plan_phases(total)
            .iter()
            .map(|a| a.weeks)
            .collect()
    }

    #[test]
    fn test_exact_split() {
        assert_eq!(weeks(10), vec![5, 3, 2]);
    }

    #[test]
    fn test_rounding_drift_preserved() {
        assert_eq!(weeks(3), vec![2, 1, 1]);
        assert_eq!(PeriodizationPlanner::schedule(3).allocated_weeks(), 4);
    }

    #[test]
    fn test_phase_lookup() {
        let schedule = PeriodizationPlanner::schedule(10);
        assert_eq!(schedule.phase_for_week(1), TrainingPhase::Base);
        assert_eq!(schedule.phase_for_week(5), TrainingPhase::Base);
        assert_eq!(schedule.phase_for_week(6), TrainingPhase::Specific);
        assert_eq!(schedule.phase_for_week(9), TrainingPhase::Sharpening);
        assert_eq!(schedule.phase_for_week(12), TrainingPhase::Sharpening);
    }

    #[test]
    fn test_single_week_plan() {
        assert_eq!(weeks(1), vec![1, 0, 0]);
        let schedule = PeriodizationPlanner::schedule(1);
        let context = schedule.week_context(1);
        assert!(context.plan_progression.abs() < f64::EPSILON);
        assert!(context.phase_progression.abs() < f64::EPSILON);
    }

    #[test]
    fn test_progression_within_phase() {
        let schedule = PeriodizationPlanner::schedule(10);
        let last_base = schedule.week_context(5);
        assert_eq!(last_base.phase, TrainingPhase::Base);
        assert!((last_base.phase_progression - 1.0).abs() < 1e-9);
        assert!((schedule.week_context(10).plan_progression - 1.0).abs() < 1e-9);
    }
}
