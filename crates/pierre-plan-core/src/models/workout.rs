// ABOUTME: Materialized workout models: workouts, repeated blocks, and timed segments
// ABOUTME: Segments are floored at the minimum segment duration on construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{IntensityZone, Sport, WorkoutType};
use crate::constants::segments::MIN_SEGMENT_SECONDS;

/// A timed effort at one intensity zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment identifier
    pub id: Uuid,
    /// Duration in seconds, never below [`MIN_SEGMENT_SECONDS`]
    pub duration_seconds: u32,
    /// Target zone
    pub zone: IntensityZone,
}

impl Segment {
    /// Create a segment, clamping the duration to the minimum
    #[must_use]
    pub fn new(duration_seconds: u32, zone: IntensityZone) -> Self {
        Self {
            id: Uuid::new_v4(),
            duration_seconds: duration_seconds.max(MIN_SEGMENT_SECONDS),
            zone,
        }
    }
}

/// A structural unit repeated `repetitions` times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block identifier
    pub id: Uuid,
    /// How many times the segment sequence is performed
    pub repetitions: u32,
    /// Ordered segments of one repetition
    pub segments: Vec<Segment>,
}

impl Block {
    /// Create a block
    #[must_use]
    pub fn new(repetitions: u32, segments: Vec<Segment>) -> Self {
        Self {
            id: Uuid::new_v4(),
            repetitions,
            segments,
        }
    }

    /// Single segment performed once
    #[must_use]
    pub fn single(duration_seconds: u32, zone: IntensityZone) -> Self {
        Self::new(1, vec![Segment::new(duration_seconds, zone)])
    }

    /// Total time of the block including all repetitions
    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        self.repetitions
            * self
                .segments
                .iter()
                .map(|segment| segment.duration_seconds)
                .sum::<u32>()
    }
}

/// A concrete, dated session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Workout identifier
    pub id: Uuid,
    /// Week of the plan this workout belongs to
    pub week_number: u32,
    /// Calendar day of the workout
    pub date: NaiveDate,
    /// Sport of the workout
    pub sport: Sport,
    /// Training stimulus
    pub workout_type: WorkoutType,
    /// Planned start
    pub start: DateTime<Utc>,
    /// Planned end
    pub end: DateTime<Utc>,
    /// Planned duration in seconds
    pub duration_seconds: u32,
    /// Structure of the session
    pub blocks: Vec<Block>,
}

impl Workout {
    /// Every segment of the workout, in block order
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.blocks.iter().flat_map(|block| block.segments.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_floor() {
        assert_eq!(Segment::new(5, IntensityZone::Recovery).duration_seconds, 30);
        assert_eq!(Segment::new(45, IntensityZone::Recovery).duration_seconds, 45);
    }

    #[test]
    fn test_block_total_counts_repetitions() {
        let block = Block::new(
            4,
            vec![
                Segment::new(180, IntensityZone::Vo2Max),
                Segment::new(90, IntensityZone::Endurance),
            ],
        );
        assert_eq!(block.total_seconds(), 1080);
    }
}
