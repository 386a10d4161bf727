// ABOUTME: Pierre Plan CLI - generates training plans from self-contained JSON request files
// ABOUTME: Prints the generated plan or the workouts of one week as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate a plan starting today with the configured generator
//! pierre-plan generate --request request.json
//!
//! # Generate with the flat generator as if today were 2026-03-02
//! pierre-plan generate --request request.json --today 2026-03-02 --generator v1
//!
//! # Print the workouts of the week containing a date
//! pierre-plan week --request request.json --date 2026-03-12
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use pierre_training_planner::logging::LoggingConfig;
use pierre_training_planner::models::GeneratorVersion;
use pierre_training_planner::PlannerConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-plan",
    about = "Pierre training plan generator",
    long_about = "Generates periodized training plans and weekly workouts from a JSON request file."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Generator version override (v1 or v2)
    #[arg(long, global = true)]
    generator: Option<GeneratorVersion>,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a full plan and print it
    Generate {
        /// Path to the request file
        #[arg(long)]
        request: PathBuf,
    },

    /// Generate a plan and print the workouts of the week containing a date
    Week {
        /// Path to the request file
        #[arg(long)]
        request: PathBuf,

        /// Any date inside the wanted week (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = PlannerConfig::from_env()?;
    if let Some(version) = cli.generator {
        config.generator_version = version;
    }
    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    debug!(generator = %config.generator_version, %today, "Planner configured");

    match cli.command {
        Command::Generate { request } => {
            commands::generate(&request, config, today).await?;
        }
        Command::Week { request, date } => {
            commands::week(&request, config, today, date).await?;
        }
    }

    Ok(())
}
