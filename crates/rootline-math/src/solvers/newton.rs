//! Newton-Raphson root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `p_n = p_{n-1} - f(p_{n-1}) / f'(p_{n-1})`
///
/// The first step from `initial_guess` is always taken. Convergence is
/// declared when two consecutive iterates differ by less than the tolerance;
/// the check runs before each further step, so the iteration count is the
/// index of the iterate that passed it.
///
/// Division by a zero derivative is not guarded: the resulting infinity or
/// NaN is carried into the next iterate like any other value, and such a
/// run ends in [`MathError::MaxIterationsExceeded`].
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root, the iterate before it and iteration statistics, or an error
/// carrying the same values if the budget runs out.
///
/// # Example
///
/// ```rust
/// use rootline_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, D>(
    f: F,
    df: D,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let tolerance = config.tolerance.threshold();
    let limit = config.max_iterations.limit();

    let mut p_prev = initial_guess;
    let mut p = initial_guess - f(initial_guess) / df(initial_guess);
    let mut iteration = 1;

    while iteration < limit {
        trace!("newton: n={iteration} p={p} p_prev={p_prev}");

        if (p - p_prev).abs() < tolerance {
            let residual = f(p);
            debug!("newton converged to {p} in {iteration} iterations");
            return Ok(SolverResult {
                root: p,
                previous: Some(p_prev),
                residual,
                iterations: iteration,
            });
        }

        iteration += 1;
        p_prev = p;
        p -= f(p) / df(p);
    }

    let residual = f(p);
    warn!("newton: budget of {limit} iterations exhausted at p = {p}, f(p) = {residual:e}");
    Err(MathError::max_iterations(SolverResult {
        root: p,
        previous: Some(p_prev),
        residual,
        iterations: iteration,
    }))
}
