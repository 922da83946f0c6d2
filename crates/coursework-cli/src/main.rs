//! Coursework CLI.
//!
//! Runs enrollment queries over a course catalog and walks through calendar
//! arithmetic, printing every result to standard output.
//!
//! # Quick Start
//!
//! ```bash
//! # Query the built-in catalog with the default threshold (100)
//! coursework courses
//!
//! # Use a different threshold
//! coursework courses --threshold 50
//!
//! # Calendar walkthrough as of a fixed day
//! coursework dates --today 2020-10-19
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use coursework_config::CourseworkConfig;

/// Coursework - enrollment queries and calendar walkthroughs over a course catalog.
#[derive(Parser)]
#[command(name = "coursework")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Read configuration from this TOML file instead of the layered sources.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Run every enrollment query over the course catalog.
    Courses {
        /// Only courses with strictly more students than this are selected.
        #[arg(short, long)]
        threshold: Option<u32>,

        /// Let later courses overwrite earlier ones with the same name.
        #[arg(long)]
        keep_last: bool,
    },

    /// Walk through date arithmetic and formatting.
    Dates {
        /// Day to treat as today (YYYY-MM-DD). Defaults to the local date.
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Order sample titles by length and run a closure on a thread.
    Titles,
}

fn main() {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    if let Err(e) = run(cli) {
        style::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Courses {
            threshold,
            keep_last,
        } => {
            let config = load_config(cli.config)?;
            commands::courses::run(&config, threshold, keep_last)
        }
        Commands::Dates { today } => {
            let config = load_config(cli.config)?;
            commands::dates::run(&config, today)
        }
        Commands::Titles => commands::titles::run(),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<CourseworkConfig> {
    match path {
        Some(path) => Ok(CourseworkConfig::from_toml_file(path)?),
        None => CourseworkConfig::load(),
    }
}
