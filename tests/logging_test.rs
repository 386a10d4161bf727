// ABOUTME: Tests for logging configuration read from the environment
// ABOUTME: Validates defaults, production detail flags, and the command-line preset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use pierre_training_planner::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const LOGGING_VARS: [&str; 6] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_THREAD",
];

fn clear_env() {
    for name in LOGGING_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-planner");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-planner");
    assert!(config.include_location);
    assert!(config.include_thread);
}

#[test]
#[serial]
fn test_development_defaults() {
    clear_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "pierre-training-planner");
    assert!(!config.include_location);
    assert!(!config.include_thread);
}

#[test]
fn test_cli_preset_is_quiet_and_compact() {
    let quiet = LoggingConfig::for_cli(false);
    assert_eq!(quiet.level, "warn");
    assert_eq!(quiet.format, LogFormat::Compact);

    let verbose = LoggingConfig::for_cli(true);
    assert_eq!(verbose.level, "debug");
}

#[test]
#[serial]
fn test_init_installs_global_subscriber_once() {
    clear_env();
    let config = LoggingConfig::for_cli(false);
    assert!(config.init().is_ok());
    assert!(config.init().is_err());
}
