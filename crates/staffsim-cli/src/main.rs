//! Staffsim headless driver
//!
//! Builds the three-department company, runs it for a fixed number of days
//! and prints what happened each day followed by the final counters.
//!
//! Usage:
//!   cargo run -p staffsim-cli
//!   cargo run -p staffsim-cli -- --days 30 --seed 7
//!   cargo run -p staffsim-cli -- --config company.json --json

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use staffsim_core::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "staffsim")]
#[command(about = "Simulate a software company staffing projects day by day")]
struct Cli {
    /// Number of days to simulate (overrides the config file)
    #[arg(short, long)]
    days: Option<u32>,

    /// Seed for project generation (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON summary instead of the daily log
    #[arg(long)]
    json: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

/// Full run summary for `--json`
#[derive(Serialize)]
struct RunSummary {
    config: SimulationConfig,
    stats: CompanyStats,
    days: Vec<DayReport>,
}

/// Filter used when `RUST_LOG` is unset
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Logs go to stderr so stdout stays clean for the report
fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(verbose).into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_config(cli: &Cli) -> anyhow::Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if let Some(days) = cli.days {
        config.days = days;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn print_day(report: &DayReport, events: &[CompanyEvent]) {
    println!("Day {}:", report.day);

    for event in events {
        match event {
            CompanyEvent::Status { department, .. } => {
                println!("  --------------------- {} ---------------------", department);
                println!("  {}", event);
            }
            _ => println!("  {}", event),
        }
    }

    println!(
        "End of day {} ({} waiting in backlog)\n",
        report.day, report.backlog
    );
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;
    tracing::info!(
        "Running {} day(s), seed {:?}",
        config.days,
        config.seed
    );

    let mut engine = SimulationEngine::from_config(&config)?;
    let mut reports = Vec::with_capacity(config.days as usize);

    for _ in 0..config.days {
        let report = engine.step()?;
        let events = engine.drain_events();
        if !cli.json {
            print_day(&report, &events);
        }
        reports.push(report);
    }

    let stats = engine.stats();
    if cli.json {
        let summary = RunSummary {
            config,
            stats,
            days: reports,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("projects completed = {}", stats.completed);
        println!("hired = {}", stats.hired);
        println!("dismissed = {}", stats.dismissed);
    }

    Ok(())
}
