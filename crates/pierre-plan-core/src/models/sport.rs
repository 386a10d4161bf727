// ABOUTME: Sport enumeration for plannable training goals
// ABOUTME: Defines running, cycling, and swimming with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::durations::{
    MAX_CYCLING_SECONDS, MAX_RUNNING_SECONDS, MAX_SWIMMING_SECONDS,
};
use crate::errors::AppError;

/// Sports the planner can schedule
///
/// Declaration order is significant: it breaks ties when two sports request
/// the same number of weekly sessions.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Running
    Running,
    /// Cycling (road or trainer)
    Cycling,
    /// Pool or open-water swimming
    Swimming,
}

impl Sport {
    /// All sports in tie-break order
    pub const ALL: [Self; 3] = [Self::Running, Self::Cycling, Self::Swimming];

    /// Safety ceiling for a single workout of this sport, in seconds
    #[must_use]
    pub const fn max_duration_seconds(self) -> u32 {
        match self {
            Self::Running => MAX_RUNNING_SECONDS,
            Self::Cycling => MAX_CYCLING_SECONDS,
            Self::Swimming => MAX_SWIMMING_SECONDS,
        }
    }

    /// Whether the sport's load is bounded by cardiovascular fitness
    ///
    /// Swimming volume is limited by technique rather than aerobic capacity,
    /// so workload estimation does not scale it by fitness.
    #[must_use]
    pub const fn is_aerobic_load_bound(self) -> bool {
        matches!(self, Self::Running | Self::Cycling)
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Sport {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "running" | "run" => Ok(Self::Running),
            "cycling" | "ride" | "bike" => Ok(Self::Cycling),
            "swimming" | "swim" => Ok(Self::Swimming),
            other => Err(AppError::invalid_input(format!(
                "Unknown sport: '{other}'. Valid options: running, cycling, swimming"
            ))),
        }
    }
}
