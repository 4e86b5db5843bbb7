//! bodyfat CLI - Male body fat estimator.

use anyhow::Result;
use bodyfat_lib::UnitSystem;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;
mod settings;

use display::Format;
use settings::Settings;

#[derive(Parser)]
#[command(name = "bodyfat")]
#[command(about = "Estimate male body fat from abdomen, wrist and height", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Settings file. Defaults to $BODYFAT_CONFIG or the platform config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate body fat from measurements
    Estimate {
        /// Unit system (metric or us). Defaults to the configured unit.
        #[arg(short, long)]
        unit: Option<UnitSystem>,

        /// Abdomen circumference (cm or inches)
        #[arg(short, long, allow_negative_numbers = true)]
        abdomen: Option<f64>,

        /// Wrist circumference (cm or inches)
        #[arg(short, long, allow_negative_numbers = true)]
        wrist: Option<f64>,

        /// Height (cm or inches)
        #[arg(short = 'H', long, allow_negative_numbers = true)]
        height: Option<f64>,

        /// Age in years, to show the ideal body fat for the age group
        #[arg(long)]
        age: Option<u32>,

        /// Output format. Defaults to the configured format.
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the reference tables (text format only)
        #[arg(long)]
        tables: bool,
    },

    /// Show the reference tables
    Tables {
        /// Output format. Defaults to the configured format.
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the regression formula
    Formula {
        /// Unit system (metric or us). Defaults to the configured unit.
        #[arg(short, long)]
        unit: Option<UnitSystem>,
    },

    /// Enter measurements interactively, recomputing after every change
    Interactive {
        /// Age in years, to show the ideal body fat for the age group
        #[arg(long)]
        age: Option<u32>,
    },
}

/// Installs the stderr log subscriber.
///
/// `--quiet` forces the `error` level. Otherwise `RUST_LOG` wins if set, and
/// the `-v` count picks the level if not.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = if quiet {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let settings = Settings::load(cli.config.as_deref())?;

    match command {
        Commands::Estimate {
            unit,
            abdomen,
            wrist,
            height,
            age,
            format,
            output,
            tables,
        } => commands::estimate::estimate(
            &settings,
            unit,
            abdomen,
            wrist,
            height,
            age,
            format,
            output,
            tables,
        ),
        Commands::Tables { format, output } => {
            commands::tables::show_tables(&settings, format, output)
        }
        Commands::Formula { unit } => commands::formula::show_formula(&settings, unit),
        Commands::Interactive { age } => commands::interactive::interactive(&settings, age),
    }
}
