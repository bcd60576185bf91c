//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{BisectionArgs, DemoArgs, NewtonArgs, SecantArgs};

/// Rootline - bisection, Newton and secant root-finding
#[derive(Parser)]
#[command(name = "rootline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config file, then `table`)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file (defaults to ./rootline.toml if present)
    #[arg(short, long, global = true, env = "ROOTLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Find a root inside a bracketing interval
    Bisection(BisectionArgs),

    /// Find a root with Newton's method from one initial guess
    Newton(NewtonArgs),

    /// Find a root with the secant method from two initial guesses
    Secant(SecantArgs),

    /// Replay the reference scenarios and compare against expected outcomes
    Demo(DemoArgs),

    /// List the built-in test problems
    Problems,
}

/// Tolerance and iteration budget shared by the solve commands.
#[derive(Args, Debug, Clone, Default)]
pub struct BudgetArgs {
    /// Tolerance in decimal digits; the threshold is 10^-DIGITS
    #[arg(short, long = "tol", value_name = "DIGITS")]
    pub tol: Option<u32>,

    /// Maximum number of iterations
    #[arg(short = 'n', long, value_name = "N", conflicts_with = "unbounded")]
    pub max_iter: Option<usize>,

    /// Iterate without a caller-imposed limit
    #[arg(long)]
    pub unbounded: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
