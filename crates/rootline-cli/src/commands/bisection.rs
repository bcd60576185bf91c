//! Bisection command implementation.
//!
//! Halves a sign-changing interval until its half-width drops below the
//! tolerance.

use anyhow::Result;
use clap::Args;

use crate::cli::{BudgetArgs, OutputFormat};
use crate::commands::{solve_and_print, Inputs};
use crate::config::RootlineConfig;
use crate::problems;

/// Arguments for the bisection command.
#[derive(Args, Debug)]
pub struct BisectionArgs {
    /// Problem name (see `rootline problems`)
    #[arg(short, long)]
    pub problem: String,

    /// Lower end of the bracketing interval
    #[arg(short, long, allow_negative_numbers = true)]
    pub lower: f64,

    /// Upper end of the bracketing interval
    #[arg(short, long, allow_negative_numbers = true)]
    pub upper: f64,

    #[command(flatten)]
    pub budget: BudgetArgs,
}

/// Execute the bisection command.
pub fn execute(args: BisectionArgs, config: &RootlineConfig, format: OutputFormat) -> Result<()> {
    let problem = problems::find(&args.problem)?;
    let solver_config = config.solver_config(&args.budget)?;

    solve_and_print(
        &problem,
        Inputs::Interval(args.lower, args.upper),
        &solver_config,
        format,
    )
}
