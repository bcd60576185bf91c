//! Rootline CLI - Command-line driver for the root-finding solvers.
//!
//! # Usage
//!
//! ```bash
//! # Bisection on x^3 - 9x over [-4, -1]
//! rootline bisection --problem cubic-nine --lower -4 --upper -1 --tol 3 --max-iter 20
//!
//! # Newton's method from a single guess
//! rootline newton --problem linear --guess 1000 --tol 4
//!
//! # Secant method from two guesses
//! rootline secant --problem cubic-ten --guess0 1 --guess1 2 --tol 4
//!
//! # Replay the reference scenarios
//! rootline demo
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;
mod problems;

use cli::{Cli, Commands};
use config::RootlineConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = RootlineConfig::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);

    match cli.command {
        Commands::Bisection(args) => commands::bisection::execute(args, &config, format)?,
        Commands::Newton(args) => commands::newton::execute(args, &config, format)?,
        Commands::Secant(args) => commands::secant::execute(args, &config, format)?,
        Commands::Demo(args) => commands::demo::execute(args, format)?,
        Commands::Problems => commands::problems::execute(format)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with machine-readable output.
fn init_logging(verbose: bool, quiet: bool) {
    let default_directives = if verbose {
        "rootline=debug,rootline_math=debug"
    } else if quiet {
        "error"
    } else {
        "rootline=warn,rootline_math=error"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
