// ABOUTME: Tests for planner configuration loaded from environment variables
// ABOUTME: Defaults, overrides, malformed values, and session policy derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;

use pierre_plan_engine::config::MultiSessionConfig;
use pierre_training_planner::constants::env_config::{
    GENERATOR_VERSION, MULTI_SESSION_MIN_FITNESS, MULTI_SESSION_MIN_GOALS,
    SECOND_SESSION_START_HOUR, SESSION_START_HOUR,
};
use pierre_training_planner::errors::ErrorCode;
use pierre_training_planner::models::GeneratorVersion;
use pierre_training_planner::{PlannerConfig, SessionPolicy};
use serial_test::serial;

const ALL_VARS: [&str; 5] = [
    GENERATOR_VERSION,
    MULTI_SESSION_MIN_FITNESS,
    MULTI_SESSION_MIN_GOALS,
    SESSION_START_HOUR,
    SECOND_SESSION_START_HOUR,
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    common::init_test_logging();
    clear_env();

    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.generator_version, GeneratorVersion::V2);
    assert_eq!(config.multi_session.min_fitness, 75);
    assert_eq!(config.multi_session.min_goals, 2);
    assert_eq!(config.session_clock.first_session_hour, 7);
    assert_eq!(config.session_clock.second_session_hour, 17);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(GENERATOR_VERSION, "V1");
    env::set_var(MULTI_SESSION_MIN_FITNESS, "85");
    env::set_var(MULTI_SESSION_MIN_GOALS, "3");
    env::set_var(SESSION_START_HOUR, "6");
    env::set_var(SECOND_SESSION_START_HOUR, "18");

    let config = PlannerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.generator_version, GeneratorVersion::V1);
    assert_eq!(config.multi_session.min_fitness, 85);
    assert_eq!(config.multi_session.min_goals, 3);
    assert_eq!(config.session_clock.first_session_hour, 6);
    assert_eq!(config.session_clock.second_session_hour, 18);
}

#[test]
#[serial]
fn test_unknown_generator_version() {
    clear_env();
    env::set_var(GENERATOR_VERSION, "v7");
    let err = PlannerConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigurationError);
    assert_eq!(err.code.http_status(), 500);
}

#[test]
#[serial]
fn test_malformed_numbers_and_hours() {
    clear_env();
    env::set_var(MULTI_SESSION_MIN_FITNESS, "lots");
    let err = PlannerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigurationError);

    clear_env();
    env::set_var(SESSION_START_HOUR, "25");
    let err = PlannerConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigurationError);
    clear_env();
}

#[test]
fn test_session_policy_thresholds() {
    let config = MultiSessionConfig {
        min_fitness: 60,
        min_goals: 2,
    };

    let at_threshold = common::athlete(60);
    assert!(SessionPolicy::for_request(&at_threshold, 2, &config).allow_multiple_sessions_per_day);
    assert!(!SessionPolicy::for_request(&at_threshold, 1, &config).allow_multiple_sessions_per_day);

    let below = common::athlete(59);
    assert_eq!(
        SessionPolicy::for_request(&below, 4, &config),
        SessionPolicy::SINGLE_SESSION
    );
}
