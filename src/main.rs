mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clarity_core::day_start::DayStart;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clarity")]
#[command(about = "Turn your messy thoughts into a structured, time-blocked plan")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a plan from a brain-dump and export it to your calendar
    Plan {
        /// Brain-dump text (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the brain-dump from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// When the day starts, on a quarter hour (e.g. "08:30")
        #[arg(short, long)]
        start: Option<DayStart>,

        /// Day to plan (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Minutes between tasks
        #[arg(short, long)]
        buffer: Option<i64>,

        /// Directory to write the .ics file to
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Don't write an .ics file
        #[arg(long)]
        no_ics: bool,

        /// Open each Google Calendar link in the browser
        #[arg(long)]
        open: bool,

        /// Print the schedule as JSON instead of task cards
        #[arg(long)]
        json: bool,
    },
    /// Show where the config file lives, or create it
    Config {
        /// Write a commented config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Plan {
            text,
            file,
            start,
            date,
            buffer,
            out,
            no_ics,
            open,
            json,
        } => {
            commands::plan::run(commands::plan::PlanArgs {
                text,
                file,
                start,
                date,
                buffer,
                out,
                no_ics,
                open,
                json,
            })
            .await
        }
        Commands::Config { init } => commands::config::run(init),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
