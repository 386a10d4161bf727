// ABOUTME: Intensity zones and workout-type categories used to describe training stimulus
// ABOUTME: Zones are contiguous heart-rate bands; workout types bound the zones they may use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::heart_rate_zones;

/// Heart-rate intensity zone
///
/// Zones are ordered by declaration and their heart-rate bands are contiguous
/// and non-overlapping. The numeric label from [`IntensityZone::zone_number`]
/// is cosmetic; compare zones directly when ordering matters.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum IntensityZone {
    /// Very light effort, active recovery
    Recovery,
    /// Conversational aerobic effort
    Endurance,
    /// Comfortably hard, sustained effort
    Tempo,
    /// Around lactate threshold
    Threshold,
    /// Near maximal aerobic power
    Vo2Max,
    /// Above maximal aerobic power
    Anaerobic,
}

impl IntensityZone {
    /// All zones in ascending order
    pub const ALL: [Self; 6] = [
        Self::Recovery,
        Self::Endurance,
        Self::Tempo,
        Self::Threshold,
        Self::Vo2Max,
        Self::Anaerobic,
    ];

    /// Display label, 1-6
    #[must_use]
    pub const fn zone_number(self) -> u8 {
        match self {
            Self::Recovery => 1,
            Self::Endurance => 2,
            Self::Tempo => 3,
            Self::Threshold => 4,
            Self::Vo2Max => 5,
            Self::Anaerobic => 6,
        }
    }

    /// Heart-rate band as fractions of maximum heart rate
    #[must_use]
    pub const fn heart_rate_fraction(self) -> (f64, f64) {
        match self {
            Self::Recovery => heart_rate_zones::RECOVERY,
            Self::Endurance => heart_rate_zones::ENDURANCE,
            Self::Tempo => heart_rate_zones::TEMPO,
            Self::Threshold => heart_rate_zones::THRESHOLD,
            Self::Vo2Max => heart_rate_zones::VO2_MAX,
            Self::Anaerobic => heart_rate_zones::ANAEROBIC,
        }
    }

    /// Heart-rate band in bpm for the given maximum heart rate
    #[must_use]
    pub fn heart_rate_bounds(self, max_heart_rate: u16) -> (u16, u16) {
        let (low, high) = self.heart_rate_fraction();
        let max_hr = f64::from(max_heart_rate);
        ((max_hr * low).round() as u16, (max_hr * high).round() as u16)
    }
}

impl fmt::Display for IntensityZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Recovery => "recovery",
            Self::Endurance => "endurance",
            Self::Tempo => "tempo",
            Self::Threshold => "threshold",
            Self::Vo2Max => "vo2max",
            Self::Anaerobic => "anaerobic",
        };
        write!(f, "Z{} {name}", self.zone_number())
    }
}

/// Training stimulus classification of a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Long, easy aerobic session
    EasyEndurance,
    /// Tempo work
    ActiveEndurance,
    /// Sustained efforts around lactate threshold
    Threshold,
    /// Short, hard repeats with recoveries
    Interval,
    /// Skill and drill work
    Technique,
    /// Very easy recovery session
    ActiveRecovery,
}

impl WorkoutType {
    /// All workout types
    pub const ALL: [Self; 6] = [
        Self::EasyEndurance,
        Self::ActiveEndurance,
        Self::Threshold,
        Self::Interval,
        Self::Technique,
        Self::ActiveRecovery,
    ];

    /// Lowest and highest zone a session of this type may visit
    ///
    /// Warm-ups, recoveries and cool-downs are included, so every structured
    /// session bottoms out in the recovery zone.
    #[must_use]
    pub const fn zone_range(self) -> (IntensityZone, IntensityZone) {
        match self {
            Self::EasyEndurance | Self::Technique => {
                (IntensityZone::Recovery, IntensityZone::Endurance)
            }
            Self::ActiveEndurance => (IntensityZone::Recovery, IntensityZone::Tempo),
            Self::Threshold => (IntensityZone::Recovery, IntensityZone::Threshold),
            Self::Interval => (IntensityZone::Recovery, IntensityZone::Vo2Max),
            Self::ActiveRecovery => (IntensityZone::Recovery, IntensityZone::Recovery),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EasyEndurance => "easy endurance",
            Self::ActiveEndurance => "tempo",
            Self::Threshold => "threshold",
            Self::Interval => "intervals",
            Self::Technique => "technique",
            Self::ActiveRecovery => "recovery",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zones_are_contiguous_and_ascending() {
        for pair in IntensityZone::ALL.windows(2) {
            let (_, upper) = pair[0].heart_rate_fraction();
            let (lower, _) = pair[1].heart_rate_fraction();
            assert!((upper - lower).abs() < f64::EPSILON);
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_heart_rate_bounds() {
        assert_eq!(IntensityZone::Threshold.heart_rate_bounds(190), (152, 171));
    }
}
