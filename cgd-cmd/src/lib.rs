//! Command implementations for CGD CLI.
//!
//! Provides subcommands for cleaning a raw case file, reporting on its
//! quality, and exporting what the dashboard would draw for a selection.

use cgd_data::pipeline::{DEFAULT_SAMPLE_SIZE, DEFAULT_SEED};
use clap::Subcommand;
use std::path::PathBuf;

pub mod clean;
pub mod inspect;
pub mod snapshot;

#[derive(Subcommand)]
pub enum Command {
    /// Sample, deduplicate and repair coordinates of a raw case CSV
    Clean {
        /// Raw case CSV (`.csv` or `.csv.gz`)
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Output path for the cleaned CSV
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Number of rows to draw before deduplication
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        sample_size: usize,

        /// Seed for the row sample
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Report row count, blank cells per column and duplicates in a raw CSV
    Inspect {
        /// Raw case CSV (`.csv` or `.csv.gz`)
        #[arg(short = 'i', long)]
        input: PathBuf,
    },

    /// Write the map payload for one date and risk filter as JSON
    Snapshot {
        /// Cleaned case CSV produced by `clean`
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Output path for the JSON payload
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Date to show (YYYY-MM-DD); defaults to the earliest date
        #[arg(short = 'd', long)]
        date: Option<String>,

        /// Risk filter: All, Low, Medium or High
        #[arg(short = 'r', long, default_value = "All")]
        risk: String,

        /// Point style: Scatter or Choropleth
        #[arg(long, default_value = "Scatter")]
        view: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Clean {
            input,
            output,
            sample_size,
            seed,
        } => clean::run_clean(&input, &output, sample_size, seed),
        Command::Inspect { input } => inspect::run_inspect(&input),
        Command::Snapshot {
            input,
            output,
            date,
            risk,
            view,
        } => snapshot::run_snapshot(&input, &output, date.as_deref(), &risk, &view),
    }
}
