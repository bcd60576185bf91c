//! Secant command implementation.
//!
//! Like Newton's method, but the derivative is replaced by the slope through
//! the two most recent iterates.

use anyhow::Result;
use clap::Args;

use crate::cli::{BudgetArgs, OutputFormat};
use crate::commands::{solve_and_print, Inputs};
use crate::config::RootlineConfig;
use crate::problems;

/// Arguments for the secant command.
#[derive(Args, Debug)]
pub struct SecantArgs {
    /// Problem name (see `rootline problems`)
    #[arg(short, long)]
    pub problem: String,

    /// First initial guess (p0)
    #[arg(long, allow_negative_numbers = true)]
    pub guess0: f64,

    /// Second initial guess (p1)
    #[arg(long, allow_negative_numbers = true)]
    pub guess1: f64,

    #[command(flatten)]
    pub budget: BudgetArgs,
}

/// Execute the secant command.
pub fn execute(args: SecantArgs, config: &RootlineConfig, format: OutputFormat) -> Result<()> {
    let problem = problems::find(&args.problem)?;
    let solver_config = config.solver_config(&args.budget)?;

    solve_and_print(
        &problem,
        Inputs::Guesses(args.guess0, args.guess1),
        &solver_config,
        format,
    )
}
