//! Main application entry point

use std::path::PathBuf;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

mod commands;
mod config;

use commands::{CountArgs, FilterArgs, PlotArgs, TimestampArgs};
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Sensor series and earthquake catalog toolkit", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Keep catalog rows inside a time range and a lat/long box
    Filter(FilterArgs),
    /// Count data rows in a delimited file
    Count(CountArgs),
    /// Scatter a sensor column, optionally around an event window
    Plot(PlotArgs),
    /// Convert a calendar date to a UNIX timestamp
    Timestamp(TimestampArgs),
}

fn main() -> Result<()> {
    // Initialize tracing; stdout carries command results
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Command::Filter(args) => {
            let result = commands::run_filter(args, &config)?;
            if result.rows_skipped > 0 {
                warn!("Skipped {} malformed rows", result.rows_skipped);
            }
            println!("{}", result.rows_written);
        }
        Command::Count(args) => {
            println!("{}", commands::run_count(args)?);
        }
        Command::Plot(args) => {
            let plotted = commands::run_plot(args, &config)?;
            println!("{} points -> {}", plotted, args.output.display());
        }
        Command::Timestamp(args) => {
            println!("{}", commands::run_timestamp(args)?);
        }
    }

    Ok(())
}
