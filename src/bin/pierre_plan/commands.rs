// ABOUTME: Command implementations for pierre-plan
// ABOUTME: Seeds in-memory repositories from a request file and prints results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use pierre_training_planner::request_file::RequestFile;
use pierre_training_planner::PlannerConfig;
use serde::Serialize;
use tracing::info;

/// Generate a plan and print it
pub async fn generate(path: &Path, config: PlannerConfig, today: NaiveDate) -> Result<()> {
    let seeded = RequestFile::load(path).await?.seed(config, today)?;
    let plan = seeded
        .service
        .create_plan(seeded.account_id, &seeded.request, today)
        .await?;

    info!(plan_id = %plan.id, weeks = plan.weekly_plans.len(), "Plan ready");
    print_json(&plan)
}

/// Generate a plan and print the workouts of the week containing `date`
pub async fn week(
    path: &Path,
    config: PlannerConfig,
    today: NaiveDate,
    date: NaiveDate,
) -> Result<()> {
    let seeded = RequestFile::load(path).await?.seed(config, today)?;
    let plan = seeded
        .service
        .create_plan(seeded.account_id, &seeded.request, today)
        .await?;
    let workouts = seeded
        .service
        .next_workouts(seeded.account_id, plan.id, date)
        .await?;

    info!(plan_id = %plan.id, %date, workouts = workouts.len(), "Week materialized");
    print_json(&workouts)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
