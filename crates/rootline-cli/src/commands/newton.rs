//! Newton-Raphson command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::{BudgetArgs, OutputFormat};
use crate::commands::{solve_and_print, Inputs};
use crate::config::RootlineConfig;
use crate::problems;

/// Arguments for the newton command.
#[derive(Args, Debug)]
pub struct NewtonArgs {
    /// Problem name (see `rootline problems`)
    #[arg(short, long)]
    pub problem: String,

    /// Initial guess
    #[arg(short, long, allow_negative_numbers = true)]
    pub guess: f64,

    #[command(flatten)]
    pub budget: BudgetArgs,
}

/// Execute the newton command.
pub fn execute(args: NewtonArgs, config: &RootlineConfig, format: OutputFormat) -> Result<()> {
    let problem = problems::find(&args.problem)?;
    let solver_config = config.solver_config(&args.budget)?;

    solve_and_print(&problem, Inputs::Guess(args.guess), &solver_config, format)
}
