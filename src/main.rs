//! grid-robot CLI
//!
//! Reads a mission from a file (or stdin) and prints one line per robot.
//!
//! Binary: grid-robot

use anyhow::Context;
use clap::{Parser, ValueEnum};
use grid_robot::{Mission, SimulationConfig, format_results};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Simulate robots on a bounded grid
#[derive(Parser)]
#[command(name = "grid-robot")]
#[command(about = "Replays robot instructions on a grid and reports where each robot ends up", long_about = None)]
struct Cli {
    /// Mission file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Lost robots leave no scent for the robots after them
    #[arg(long)]
    no_scent: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One "X Y DIR [LOST]" line per robot
    Text,
    /// Results and final scent marks as JSON
    Json,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries results only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grid_robot=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let input = read_input(cli.input.as_ref())?;
    let mission: Mission = input.parse().context("invalid mission")?;
    let config = SimulationConfig {
        leave_scent: !cli.no_scent,
    };

    let report = mission.simulate(config);
    info!(
        robots = report.results.len(),
        lost = report.lost_count(),
        scent = report.scent.len(),
        "simulation complete"
    );

    match cli.format {
        Format::Text => println!("{}", format_results(&report.results)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
