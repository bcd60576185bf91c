//! CLI error types.

use std::path::PathBuf;

use rootline_math::MathError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Problem name not in the catalog.
    #[error("Unknown problem: {0}. Run `rootline problems` for the list.")]
    UnknownProblem(String),

    /// The method needs a derivative the problem does not provide.
    #[error("Problem '{problem}' has no derivative, which {method} requires")]
    MissingDerivative {
        /// Problem name.
        problem: String,
        /// Method name.
        method: &'static str,
    },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error in {}: {reason}", path.display())]
    Config {
        /// Path of the offending file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// Solver configuration was rejected.
    #[error("Invalid solver settings: {0}")]
    Solver(#[from] MathError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
