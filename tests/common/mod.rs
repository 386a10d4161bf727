// ABOUTME: Shared fixtures for training planner integration tests
// ABOUTME: Logging setup, goal and athlete builders, and in-memory service construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc
)]

use std::env;
use std::sync::{Arc, Once};

use chrono::NaiveDate;
use pierre_plan_engine::PlanInput;
use pierre_training_planner::errors::AppResult;
use pierre_training_planner::models::{Athlete, Goal, PlanRequest, Sport, TrainingPlan};
use pierre_training_planner::repositories::{
    InMemoryAthleteRepository, InMemoryGoalRepository, InMemoryPlanRepository,
};
use pierre_training_planner::{GeneratorFactory, PlannerConfig, PlanningService, SessionPolicy};
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test)
///
/// Set `TEST_LOG` to `TRACE`, `DEBUG`, `INFO` or `WARN` for more output.
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A Monday used as "today" across tests
pub fn monday() -> NaiveDate {
    date(2026, 3, 2)
}

pub fn athlete(fitness_score: u8) -> Athlete {
    Athlete::new(Uuid::new_v4(), fitness_score, 185).unwrap()
}

pub fn goal(sport: Sport, weekly_workouts: u32, weeks: u32) -> Goal {
    Goal::new(sport, weekly_workouts, weeks).unwrap()
}

pub fn request(goals: &[Goal], weekdays: &[&str]) -> PlanRequest {
    PlanRequest {
        end_date: monday(),
        weekdays: weekdays.iter().map(|day| (*day).to_owned()).collect(),
        goal_ids: goals.iter().map(|goal| goal.id).collect(),
        start_now: true,
    }
}

pub const ALL_WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Run a plan generator directly, without repositories
pub fn generate_plan(
    factory: &GeneratorFactory,
    goals: &[Goal],
    athlete: &Athlete,
    weekdays: &[&str],
    policy: SessionPolicy,
) -> AppResult<TrainingPlan> {
    let request = request(goals, weekdays);
    let input = PlanInput {
        account_id: athlete.account_id,
        request: &request,
        goals,
        athlete,
        policy,
        today: monday(),
    };
    factory.training_plan_generator().generate(&input)
}

/// Service over fresh in-memory repositories seeded with `athlete` and `goals`
pub fn seeded_service(
    config: PlannerConfig,
    athlete: Athlete,
    goals: &[Goal],
) -> (PlanningService, InMemoryPlanRepository) {
    let athletes = InMemoryAthleteRepository::new();
    athletes.insert(athlete);
    let goal_repository: InMemoryGoalRepository = goals.iter().cloned().collect();
    let plans = InMemoryPlanRepository::new();

    let service = PlanningService::new(
        Arc::new(goal_repository),
        Arc::new(athletes),
        Arc::new(plans.clone()),
        config,
    );
    (service, plans)
}
