//! Secant root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Secant root-finding algorithm.
///
/// Similar to Newton-Raphson but replaces the derivative with the slope of
/// the line through the two most recent iterates:
/// `p_n = p_{n-1} - f(p_{n-1}) (p_{n-1} - p_{n-2}) / (f(p_{n-1}) - f(p_{n-2}))`
///
/// The guesses are `p_0` and `p_1`, so the first computed iterate is `p_2`.
/// A budget of `N` allows `N` steps, which compute iterates up to
/// `p_{N+1}`; the reported count is the index of the returned iterate.
///
/// Convergence rate is superlinear (order ~1.618, the golden ratio).
///
/// A zero denominator (`f(p_{n-1}) == f(p_{n-2})`) is not guarded; the
/// resulting infinity or NaN propagates into the next iterate.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `x0` - First initial guess
/// * `x1` - Second initial guess (should be different from x0)
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error carrying the last
/// computed iterate if the budget runs out.
///
/// # Example
///
/// ```rust
/// use rootline_math::solvers::{secant, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = secant(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn secant<F>(f: F, x0: f64, x1: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let tolerance = config.tolerance.threshold();
    let limit = config.max_iterations.limit();

    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);
    let mut last_index = 1;

    for step in 1..=limit {
        let iteration = step.saturating_add(1);
        let x_next = x_curr - f_curr * (x_curr - x_prev) / (f_curr - f_prev);
        let f_next = f(x_next);
        trace!("secant: n={iteration} p={x_next} f(p)={f_next:e}");

        if (x_next - x_curr).abs() < tolerance {
            debug!("secant converged to {x_next} in {iteration} iterations");
            return Ok(SolverResult {
                root: x_next,
                previous: Some(x_curr),
                residual: f_next,
                iterations: iteration,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
        last_index = iteration;
    }

    warn!("secant: budget of {limit} iterations exhausted at p = {x_curr}, f(p) = {f_curr:e}");
    Err(MathError::max_iterations(SolverResult {
        root: x_curr,
        previous: Some(x_prev),
        residual: f_curr,
        iterations: last_index,
    }))
}
