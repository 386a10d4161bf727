// ABOUTME: Generator factory resolving each capability family to the configured version
// ABOUTME: A single global version selects plan, workout, and materialization generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_plan_core::errors::AppResult;
use pierre_plan_core::models::GeneratorVersion;
use tracing::debug;

use super::v1::{PlanGeneratorV1, TrainingWorkoutGeneratorV1, WorkoutGeneratorV1};
use super::v2::{PlanGeneratorV2, TrainingWorkoutGeneratorV2, WorkoutGeneratorV2};
use super::{TrainingPlanGenerator, TrainingWorkoutGenerator, WorkoutPlanGenerator};
use crate::config::{PlannerConfig, SessionClock};

/// Hands out generator implementations for one version
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorFactory {
    version: GeneratorVersion,
    clock: SessionClock,
}

impl GeneratorFactory {
    /// Factory for an explicit version
    #[must_use]
    pub const fn new(version: GeneratorVersion, clock: SessionClock) -> Self {
        Self { version, clock }
    }

    /// Factory for the configured version and session clock
    #[must_use]
    pub const fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.generator_version, config.session_clock)
    }

    /// Factory for a version string such as `"v1"` or `"v2"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` for an unknown version string.
    pub fn from_config_str(version: &str, clock: SessionClock) -> AppResult<Self> {
        let version = version.parse::<GeneratorVersion>()?;
        debug!(%version, "Resolved generator version");
        Ok(Self::new(version, clock))
    }

    /// Version every family resolves to
    #[must_use]
    pub const fn version(&self) -> GeneratorVersion {
        self.version
    }

    /// Plan skeleton generator
    #[must_use]
    pub fn training_plan_generator(&self) -> Box<dyn TrainingPlanGenerator> {
        match self.version {
            GeneratorVersion::V1 => Box::new(PlanGeneratorV1::new(self.clock)),
            GeneratorVersion::V2 => Box::new(PlanGeneratorV2::new(self.clock)),
        }
    }

    /// Week materialization generator
    #[must_use]
    pub fn training_workout_generator(&self) -> Box<dyn TrainingWorkoutGenerator> {
        match self.version {
            GeneratorVersion::V1 => Box::new(TrainingWorkoutGeneratorV1::new(self.clock)),
            GeneratorVersion::V2 => Box::new(TrainingWorkoutGeneratorV2::new(self.clock)),
        }
    }

    /// Single workout generator
    #[must_use]
    pub fn workout_plan_generator(&self) -> Box<dyn WorkoutPlanGenerator> {
        match self.version {
            GeneratorVersion::V1 => Box::new(WorkoutGeneratorV1::default()),
            GeneratorVersion::V2 => Box::new(WorkoutGeneratorV2::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pierre_plan_core::errors::ErrorCode;

    use super::*;

    #[test]
    fn test_families_share_version() {
        for version in [GeneratorVersion::V1, GeneratorVersion::V2] {
            let factory = GeneratorFactory::new(version, SessionClock::default());
            assert_eq!(factory.training_plan_generator().version(), version);
            assert_eq!(factory.training_workout_generator().version(), version);
            assert_eq!(factory.workout_plan_generator().version(), version);
        }
    }

    #[test]
    fn test_unknown_version_string() {
        let err = GeneratorFactory::from_config_str("v9", SessionClock::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigurationError);
    }
}
