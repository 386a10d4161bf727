// ABOUTME: Integration tests for weekly workload estimation and per-sport allocation
// ABOUTME: Covers fitness weighting, swimming passthrough, and empty goal handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::goal;
use pierre_plan_engine::WorkloadEstimator;
use pierre_training_planner::errors::ErrorCode;
use pierre_training_planner::models::Sport;

#[test]
fn test_estimate_running_and_cycling_at_sixty() {
    common::init_test_logging();
    let goals = vec![goal(Sport::Running, 3, 10), goal(Sport::Cycling, 2, 10)];

    // round(5 * (60/200 + 0.45)) = round(3.75)
    assert_eq!(WorkloadEstimator::estimate(&goals, 60).unwrap(), 4);
}

#[test]
fn test_estimate_is_deterministic() {
    let goals = vec![goal(Sport::Running, 4, 10), goal(Sport::Swimming, 2, 10)];
    let first = WorkloadEstimator::estimate(&goals, 73).unwrap();
    for _ in 0..10 {
        assert_eq!(WorkloadEstimator::estimate(&goals, 73).unwrap(), first);
    }
}

#[test]
fn test_swimming_added_unweighted() {
    let goals = vec![goal(Sport::Running, 2, 8), goal(Sport::Swimming, 3, 8)];
    // 2 * 0.5 + 3
    assert_eq!(WorkloadEstimator::estimate(&goals, 10).unwrap(), 4);
    // 2 * 0.95 + 3 = 4.9
    assert_eq!(WorkloadEstimator::estimate(&goals, 100).unwrap(), 5);
}

#[test]
fn test_empty_goals_rejected() {
    let err = WorkloadEstimator::estimate(&[], 50).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = WorkloadEstimator::allocate(&[], 50).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_allocation_sums_to_estimate() {
    let goals = vec![
        goal(Sport::Running, 4, 12),
        goal(Sport::Cycling, 3, 12),
        goal(Sport::Swimming, 1, 12),
    ];
    for fitness in [20, 50, 80, 100] {
        let estimate = WorkloadEstimator::estimate(&goals, fitness).unwrap();
        let allocation = WorkloadEstimator::allocate(&goals, fitness).unwrap();
        assert_eq!(allocation.values().sum::<u32>(), estimate, "fitness {fitness}");
        assert_eq!(allocation.get(&Sport::Swimming), Some(&1));
        assert!(allocation.get(&Sport::Running).copied().unwrap_or(0) >= 1);
        assert!(allocation.get(&Sport::Cycling).copied().unwrap_or(0) >= 1);
    }
}

#[test]
fn test_allocation_never_exceeds_request() {
    let goals = vec![goal(Sport::Running, 2, 6)];
    let allocation = WorkloadEstimator::allocate(&goals, 100).unwrap();
    assert_eq!(allocation.get(&Sport::Running), Some(&2));
}
