// ABOUTME: Turns the daily plans of one stored week into dated, timed workouts
// ABOUTME: Places sessions on the week's calendar days at the configured start hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use pierre_plan_core::constants::calendar::DAYS_PER_WEEK;
use pierre_plan_core::errors::{AppError, AppResult};
use pierre_plan_core::models::{DailyPlan, TrainingPlan, WeeklyPlan, Workout};
use tracing::debug;
use uuid::Uuid;

use crate::composition::ComposedWorkout;
use crate::config::SessionClock;

/// Calendar placement shared by every training workout generator
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekMaterializer {
    clock: SessionClock,
}

impl WeekMaterializer {
    /// Materializer using the given start hours
    #[must_use]
    pub const fn new(clock: SessionClock) -> Self {
        Self { clock }
    }

    /// Stored week containing `date`
    ///
    /// # Errors
    ///
    /// Returns `PlanNotFound` when `date` is before the plan start or past its last week.
    pub fn locate_week<'p>(plan: &'p TrainingPlan, date: NaiveDate) -> AppResult<&'p WeeklyPlan> {
        plan.week_number_for(date)
            .and_then(|week_number| plan.weekly_plan(week_number))
            .ok_or_else(|| {
                AppError::plan_not_found(format!(
                    "No weekly plan covers {date} (plan runs {} to {})",
                    plan.start_date, plan.end_date
                ))
                .with_resource_id(plan.id.to_string())
            })
    }

    /// Workouts of the week containing `date`, composed by `compose`
    ///
    /// # Errors
    ///
    /// Returns `PlanNotFound` for a date outside the plan and any error from `compose`.
    pub fn materialize<F>(
        &self,
        plan: &TrainingPlan,
        date: NaiveDate,
        compose: F,
    ) -> AppResult<Vec<Workout>>
    where
        F: Fn(&WeeklyPlan, &DailyPlan) -> AppResult<ComposedWorkout>,
    {
        let week = Self::locate_week(plan, date)?;
        let week_start = plan.week_start(week.week_number);

        let mut workouts: Vec<Workout> = Vec::with_capacity(week.days.len());
        for daily in &week.days {
            let composed = compose(week, daily)?;
            let day = date_in_week(week_start, daily.weekday);

            let previous_end = workouts
                .last()
                .filter(|previous| previous.date == day)
                .map(|previous| previous.end);
            let start = match previous_end {
                None => at_hour(day, self.clock.first_session_hour)?,
                Some(end) => at_hour(day, self.clock.second_session_hour)?.max(end),
            };

            workouts.push(Workout {
                id: Uuid::new_v4(),
                week_number: week.week_number,
                date: day,
                sport: daily.sport,
                workout_type: daily.workout_type,
                start,
                end: start + Duration::seconds(i64::from(composed.duration_seconds)),
                duration_seconds: composed.duration_seconds,
                blocks: composed.blocks,
            });
        }

        debug!(
            plan_id = %plan.id,
            week_number = week.week_number,
            phase = %week.phase,
            workouts = workouts.len(),
            "Materialized week"
        );
        Ok(workouts)
    }
}

/// Calendar day of `weekday` within the 7-day window opening on `week_start`
fn date_in_week(week_start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let offset = (i64::from(weekday.num_days_from_monday())
        - i64::from(week_start.weekday().num_days_from_monday()))
    .rem_euclid(DAYS_PER_WEEK);
    week_start + Duration::days(offset)
}

fn at_hour(day: NaiveDate, hour: u32) -> AppResult<DateTime<Utc>> {
    day.and_hms_opt(hour, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| AppError::config(format!("Invalid session start hour {hour}")))
}
