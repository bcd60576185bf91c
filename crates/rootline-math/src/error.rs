//! Error types for root-finding.

use thiserror::Error;

use crate::solvers::SolverResult;

/// A specialized Result type for root-finding.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while searching for a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The interval endpoints do not have opposite signs.
    #[error("No root guaranteed in the interval: f({a}) = {fa:.2e} and f({b}) = {fb:.2e}")]
    NoBracketedRoot {
        /// Lower bound of the interval.
        a: f64,
        /// Upper bound of the interval.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// The iteration budget ran out before the tolerance was met.
    #[error("Max iterations reached without convergence after {iterations} iterations (estimate: {root}, residual: {residual:.2e})")]
    MaxIterationsExceeded {
        /// Iterations performed.
        iterations: usize,
        /// Last computed estimate.
        root: f64,
        /// Estimate preceding `root`, for methods that track one.
        previous: Option<f64>,
        /// Function value at `root`.
        residual: f64,
    },

    /// The digit count does not produce a positive threshold.
    #[error("Invalid tolerance: 10^-{digits} is not a positive number")]
    InvalidTolerance {
        /// Requested number of digits.
        digits: u32,
    },
}

impl MathError {
    /// Creates a max-iterations error carrying the last computed values.
    #[must_use]
    pub fn max_iterations(last: SolverResult) -> Self {
        Self::MaxIterationsExceeded {
            iterations: last.iterations,
            root: last.root,
            previous: last.previous,
            residual: last.residual,
        }
    }

    /// Returns the last computed values of a run that exhausted its budget.
    pub fn last_estimate(&self) -> Option<SolverResult> {
        match *self {
            Self::MaxIterationsExceeded {
                iterations,
                root,
                previous,
                residual,
            } => Some(SolverResult {
                root,
                previous,
                residual,
                iterations,
            }),
            _ => None,
        }
    }

    /// The outcome this error represents.
    pub fn outcome(&self) -> Outcome {
        match self {
            Self::NoBracketedRoot { .. } => Outcome::NoBracketedRoot,
            Self::MaxIterationsExceeded { .. } => Outcome::MaxIterationsExceeded,
            Self::InvalidTolerance { .. } => Outcome::InvalidInput,
        }
    }
}

/// How a solver call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The tolerance was met, or bisection hit an exact zero.
    Converged,
    /// The bisection interval does not bracket a sign change.
    NoBracketedRoot,
    /// The iteration budget was exhausted.
    MaxIterationsExceeded,
    /// The call was rejected before any iteration (bad configuration).
    InvalidInput,
}

impl Outcome {
    /// Classifies the result of a solver call.
    pub fn of(result: &MathResult<SolverResult>) -> Self {
        match result {
            Ok(_) => Self::Converged,
            Err(e) => e.outcome(),
        }
    }

    /// Short label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Converged => "converged",
            Self::NoBracketedRoot => "no bracketed root",
            Self::MaxIterationsExceeded => "max iterations",
            Self::InvalidInput => "invalid input",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
