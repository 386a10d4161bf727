// ABOUTME: Training plan request as received from the API layer
// ABOUTME: Parses weekday names and resolves the plan's start and end dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::calendar::DAYS_PER_WEEK;
use crate::errors::{AppError, AppResult};

/// Request to generate a training plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Requested end date; ignored when `start_now` is set
    pub end_date: NaiveDate,
    /// Weekday names the athlete can train on (`"monday"`, `"Tue"`, ...)
    pub weekdays: Vec<String>,
    /// Goals to build the plan for
    pub goal_ids: Vec<Uuid>,
    /// Start the plan today instead of counting back from `end_date`
    #[serde(default = "default_start_now")]
    pub start_now: bool,
}

const fn default_start_now() -> bool {
    true
}

impl PlanRequest {
    /// Parse the weekday names, deduplicated and ordered Monday first
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty list or an unknown weekday name.
    pub fn available_weekdays(&self) -> AppResult<Vec<Weekday>> {
        parse_weekdays(&self.weekdays)
    }

    /// Resolve `(start_date, end_date)` for a plan of `total_weeks` weeks
    ///
    /// The pair always satisfies `end_date - total_weeks == start_date`.
    #[must_use]
    pub fn resolve_dates(&self, total_weeks: u32, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let span = Duration::days(i64::from(total_weeks) * DAYS_PER_WEEK);
        if self.start_now {
            (today, today + span)
        } else {
            (self.end_date - span, self.end_date)
        }
    }
}

/// Parse weekday names into a sorted, deduplicated list
///
/// # Errors
///
/// Returns `InvalidInput` for an empty list or an unknown weekday name.
pub fn parse_weekdays<S: AsRef<str>>(names: &[S]) -> AppResult<Vec<Weekday>> {
    let mut days = names
        .iter()
        .map(|name| {
            let name = name.as_ref().trim();
            name.parse::<Weekday>()
                .map_err(|_| AppError::invalid_input(format!("Unknown weekday: '{name}'")))
        })
        .collect::<AppResult<Vec<_>>>()?;

    days.sort_by_key(Weekday::num_days_from_monday);
    days.dedup();

    if days.is_empty() {
        return Err(AppError::invalid_input(
            "At least one available weekday is required",
        ));
    }
    Ok(days)
}
