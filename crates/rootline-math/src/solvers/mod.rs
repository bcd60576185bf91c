//! Root-finding algorithms.
//!
//! This module provides numerical solvers for finding roots of scalar functions:
//!
//! - [`bisection`]: Simple and reliable bracketing method
//! - [`newton_raphson`]: Fast quadratic convergence when the derivative is available
//! - [`secant`]: Derivative-free method using the line through the last two iterates
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Bisection | Slow (linear) | Guaranteed | Sign change on `[a, b]` |
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//! | Secant | Fast (superlinear) | May diverge | Two guesses |
//!
//! # Iteration Counts
//!
//! The reported iteration count is the subscript `n` of the returned iterate
//! `p_n`. Bisection and Newton produce `p_1` first. The secant method starts
//! from the two guesses `p_0` and `p_1`, so its first computed iterate is `p_2`.
//! The budget always limits the number of steps taken, so a secant run with
//! a budget of `N` can report up to `N + 1`.
//!
//! # Example
//!
//! ```rust
//! use rootline_math::solvers::{secant, IterationBudget, SolverConfig};
//!
//! let f = |x: f64| x * x * x + 4.0 * x * x - 10.0;
//! let config = SolverConfig::new(4, IterationBudget::Limited(20)).unwrap();
//!
//! let result = secant(f, 1.0, 2.0, &config).unwrap();
//! assert_eq!(result.iterations, 6);
//! assert!((result.root - 1.365230001).abs() < 1e-8);
//! ```

mod bisection;
mod newton;
mod secant;

pub use bisection::bisection;
pub use newton::newton_raphson;
pub use secant::secant;

use crate::error::{MathError, MathResult};

/// Default tolerance, in decimal digits.
pub const DEFAULT_TOLERANCE_DIGITS: u32 = 10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Convergence threshold expressed as a number of decimal digits.
///
/// The threshold is `10^-digits` and is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    digits: u32,
    threshold: f64,
}

impl Tolerance {
    /// Builds a tolerance of `10^-digits`.
    ///
    /// Fails when the threshold underflows to zero.
    pub fn from_digits(digits: u32) -> MathResult<Self> {
        let threshold = 10f64.powf(-f64::from(digits));
        if threshold <= 0.0 {
            return Err(MathError::InvalidTolerance { digits });
        }
        Ok(Self { digits, threshold })
    }

    /// Number of decimal digits requested.
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Numeric threshold, `10^-digits`.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            digits: DEFAULT_TOLERANCE_DIGITS,
            threshold: 10f64.powf(-f64::from(DEFAULT_TOLERANCE_DIGITS)),
        }
    }
}

/// Upper bound on the number of iterations a solver may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IterationBudget {
    /// At most this many iterations.
    Limited(usize),
    /// No caller-imposed limit; capped at `usize::MAX` so loops still terminate.
    Unbounded,
}

impl IterationBudget {
    /// Largest iteration count the budget allows.
    pub const fn limit(self) -> usize {
        match self {
            Self::Limited(n) => n,
            Self::Unbounded => usize::MAX,
        }
    }

    /// Whether the budget is unbounded.
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self::Limited(DEFAULT_MAX_ITERATIONS)
    }
}

impl From<Option<usize>> for IterationBudget {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::Unbounded, Self::Limited)
    }
}

impl std::fmt::Display for IterationBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: Tolerance,
    /// Maximum number of iterations.
    pub max_iterations: IterationBudget,
}

impl SolverConfig {
    /// Creates a new solver configuration.
    pub fn new(tolerance_digits: u32, max_iterations: IterationBudget) -> MathResult<Self> {
        Ok(Self {
            tolerance: Tolerance::from_digits(tolerance_digits)?,
            max_iterations,
        })
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: IterationBudget) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// The iterate preceding `root`. `None` for bisection.
    pub previous: Option<f64>,
    /// Final residual (function value at root).
    pub residual: f64,
    /// Number of iterations used.
    pub iterations: usize,
}

/// The available root-finding methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// [`bisection`]
    Bisection,
    /// [`newton_raphson`]
    Newton,
    /// [`secant`]
    Secant,
}

impl Method {
    /// All methods, in presentation order.
    pub const ALL: [Method; 3] = [Method::Bisection, Method::Newton, Method::Secant];

    /// Returns the name of the method.
    pub const fn name(self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::Newton => "newton",
            Method::Secant => "secant",
        }
    }

    /// Whether the method needs the derivative of the target function.
    pub const fn requires_derivative(self) -> bool {
        matches!(self, Method::Newton)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
