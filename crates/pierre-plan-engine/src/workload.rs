// ABOUTME: Weekly workload estimation from goals and athlete fitness
// ABOUTME: Scales running/cycling frequency by a fitness ramp while keeping swimming as requested
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly workload estimation
//!
//! Running and cycling load is capped by cardiovascular fitness, so their
//! requested frequency is multiplied by a linear ramp
//! `fitness / 200 + 0.45` (about 0.5 at score 10, 0.95 at score 100).
//! Swimming is bounded by technique rather than aerobic capacity and is
//! counted as requested.

use std::collections::BTreeMap;

use pierre_plan_core::constants::workload::{FITNESS_WEIGHT_DIVISOR, FITNESS_WEIGHT_OFFSET};
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::{Goal, Sport};
use tracing::debug;

/// Weekly session counts per sport, iterated in tie-break order
pub type SportCounts = BTreeMap<Sport, u32>;

/// Converts goals and a fitness score into weekly session targets
pub struct WorkloadEstimator;

impl WorkloadEstimator {
    /// Sum the weekly targets of all goals, per sport
    #[must_use]
    pub fn sport_counts(goals: &[Goal]) -> SportCounts {
        let mut counts = SportCounts::new();
        for goal in goals {
            *counts.entry(goal.sport).or_insert(0) += goal.weekly_workouts;
        }
        counts
    }

    /// Multiplier applied to running and cycling frequency
    #[must_use]
    pub fn fitness_weight(fitness_score: u8) -> f64 {
        f64::from(fitness_score) / FITNESS_WEIGHT_DIVISOR + FITNESS_WEIGHT_OFFSET
    }

    /// Target number of workouts per week
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `goals` is empty.
    pub fn estimate(goals: &[Goal], fitness_score: u8) -> AppResult<u32> {
        if goals.is_empty() {
            return Err(AppError::invalid_input(
                "Cannot estimate workload without goals",
            ));
        }

        let counts = Self::sport_counts(goals);
        let count_of = |sport| f64::from(counts.get(&sport).copied().unwrap_or(0));
        let aerobic = count_of(Sport::Running) + count_of(Sport::Cycling);
        let swimming = count_of(Sport::Swimming);

        let estimate = aerobic
            .mul_add(Self::fitness_weight(fitness_score), swimming)
            .round() as u32;
        debug!(fitness_score, estimate, "Estimated weekly workload");
        Ok(estimate)
    }

    /// Per-sport weekly counts that add up to the workload estimate
    ///
    /// Swimming keeps its requested count. Running and cycling share what is
    /// left of the estimate in proportion to their requests, using
    /// largest-remainder rounding, and each keeps at least one session.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `goals` is empty.
    pub fn allocate(goals: &[Goal], fitness_score: u8) -> AppResult<SportCounts> {
        let target = Self::estimate(goals, fitness_score)?;
        let requested = Self::sport_counts(goals);

        let swimming = requested.get(&Sport::Swimming).copied().unwrap_or(0);
        let aerobic: Vec<(Sport, u32)> = requested
            .iter()
            .filter(|(sport, count)| sport.is_aerobic_load_bound() && **count > 0)
            .map(|(sport, count)| (*sport, *count))
            .collect();

        let mut allocation = SportCounts::new();
        if swimming > 0 {
            allocation.insert(Sport::Swimming, swimming);
        }
        if aerobic.is_empty() {
            return Ok(allocation);
        }

        let requested_total: u32 = aerobic.iter().map(|(_, count)| count).sum();
        let budget = target
            .saturating_sub(swimming)
            .max(aerobic.len() as u32)
            .min(requested_total);

        for (sport, count) in largest_remainder(&aerobic, requested_total, budget) {
            allocation.insert(sport, count);
        }
        debug!(target, budget, ?allocation, "Allocated weekly sessions per sport");
        Ok(allocation)
    }
}

/// Split `budget` across `shares` proportionally, each share at least one
fn largest_remainder(shares: &[(Sport, u32)], total: u32, budget: u32) -> Vec<(Sport, u32)> {
    let mut rows: Vec<(Sport, u32, u32, f64)> = shares
        .iter()
        .map(|&(sport, count)| {
            let exact = f64::from(count) * f64::from(budget) / f64::from(total);
            let floor = exact.floor() as u32;
            (sport, count, floor.max(1), exact - exact.floor())
        })
        .collect();

    let mut assigned: u32 = rows.iter().map(|row| row.2).sum();

    // Larger fractional part first, then the larger request, then tie-break order
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| {
        rows[b]
            .3
            .total_cmp(&rows[a].3)
            .then(rows[b].1.cmp(&rows[a].1))
            .then(rows[a].0.cmp(&rows[b].0))
    });

    let mut cursor = 0;
    while assigned < budget && !order.is_empty() {
        let index = order[cursor % order.len()];
        if rows[index].2 < rows[index].1 {
            rows[index].2 += 1;
            assigned += 1;
        }
        cursor += 1;
    }

    rows.into_iter()
        .map(|(sport, _, count, _)| (sport, count))
        .collect()
}
