//! Bisection root-finding algorithm.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// A simple and reliable bracketing method that works by repeatedly
/// halving the interval and keeping the half that contains the sign change.
///
/// Requires: `f(a) * f(b) < 0` (opposite signs at endpoints). Anything else,
/// including an endpoint that is itself a root, is rejected before the first
/// iteration.
///
/// Iteration `n` takes the midpoint `m` of the current bracket. The search
/// stops at `m` when `f(m)` is exactly zero or when half the bracket width is
/// within the tolerance, so a converged result is within the tolerance of
/// the root. Without an exact hit this takes `ceil(log2((b - a) / tol))`
/// iterations.
///
/// Every iteration runs the stopping test, including the last one the
/// budget allows, so an exact hit or a narrow enough bracket on iteration
/// `N` of a `Limited(N)` budget is a success rather than
/// [`MathError::MaxIterationsExceeded`].
///
/// Once the bracket is a single ulp wide, halving no longer shrinks it. A
/// tolerance below that spacing (for example `[1e6, 2e6]` at 20 digits) is
/// never met, and with [`IterationBudget::Unbounded`] the loop runs for
/// `usize::MAX` iterations. Use a limited budget for such tolerances.
///
/// [`IterationBudget::Unbounded`]: crate::solvers::IterationBudget::Unbounded
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `interval` - The bracket `(a, b)`, `a < b` by convention
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error if the bracket is invalid
/// or the iteration budget runs out. In the latter case the error carries
/// the last midpoint, which is not a trusted root.
///
/// # Example
///
/// ```rust
/// use rootline_math::solvers::{bisection, IterationBudget, SolverConfig};
///
/// let f = |x: f64| x * x * x - 9.0 * x;
/// let config = SolverConfig::new(3, IterationBudget::Limited(20)).unwrap();
///
/// let result = bisection(f, (-4.0, -1.0), &config).unwrap();
/// assert_eq!(result.iterations, 12);
/// assert!((result.root + 3.00024).abs() < 1e-5);
/// ```
pub fn bisection<F>(f: F, interval: (f64, f64), config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = interval;

    let fa = f(a);
    let fb = f(b);

    // Check that root is bracketed
    if fa * fb >= 0.0 {
        warn!("bisection: f({a}) = {fa:e} and f({b}) = {fb:e} do not bracket a root");
        return Err(MathError::NoBracketedRoot { a, b, fa, fb });
    }

    let tolerance = config.tolerance.threshold();
    let limit = config.max_iterations.limit();

    let mut f_lo = fa;
    let mut last = None;

    for iteration in 1..=limit {
        let half = (b - a) / 2.0;
        let mid = (a + b) / 2.0;
        let f_mid = f(mid);
        trace!("bisection: n={iteration} [{a}, {b}] p={mid} f(p)={f_mid:e}");

        if f_mid == 0.0 || half <= tolerance {
            debug!("bisection converged to {mid} in {iteration} iterations");
            return Ok(SolverResult {
                root: mid,
                previous: None,
                residual: f_mid,
                iterations: iteration,
            });
        }

        if f_lo * f_mid < 0.0 {
            b = mid;
        } else {
            a = mid;
            f_lo = f_mid;
        }

        last = Some(SolverResult {
            root: mid,
            previous: None,
            residual: f_mid,
            iterations: iteration,
        });
    }

    let last = last.unwrap_or_else(|| {
        let mid = (a + b) / 2.0;
        SolverResult {
            root: mid,
            previous: None,
            residual: f(mid),
            iterations: 0,
        }
    });
    warn!("bisection: budget of {limit} iterations exhausted at p = {}", last.root);
    Err(MathError::max_iterations(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{IterationBudget, Tolerance};
    use approx::assert_relative_eq;

    fn config(digits: u32, max_iterations: IterationBudget) -> SolverConfig {
        SolverConfig::new(digits, max_iterations).unwrap()
    }

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;

        let result = bisection(f, (1.0, 2.0), &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert_eq!(result.previous, None);
    }

    #[test]
    fn test_cubic_reference() {
        let f = |x: f64| x * x * x - 9.0 * x;

        let result = bisection(f, (-4.0, -1.0), &config(3, IterationBudget::Limited(20))).unwrap();

        assert_eq!(result.iterations, 12);
        assert_relative_eq!(result.root, -3.000244140625);
        assert_relative_eq!(result.residual, -0.004395067706354894, epsilon = 1e-12);
    }

    #[test]
    fn test_no_bracket_same_sign() {
        // x^3 - 9x is negative on all of [1, 2]
        let f = |x: f64| x * x * x - 9.0 * x;

        let result = bisection(f, (1.0, 2.0), &config(3, IterationBudget::Unbounded));

        match result {
            Err(MathError::NoBracketedRoot { a, b, fa, fb }) => {
                assert_relative_eq!(a, 1.0);
                assert_relative_eq!(b, 2.0);
                assert_relative_eq!(fa, -8.0);
                assert_relative_eq!(fb, -10.0);
            }
            other => panic!("Expected NoBracketedRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_no_bracket_even_number_of_roots() {
        // Three roots inside, but f(-1) and f(4) are both positive
        let f = |x: f64| x * x * x - 9.0 * x;

        let result = bisection(f, (-1.0, 4.0), &config(3, IterationBudget::Unbounded));

        assert!(matches!(result, Err(MathError::NoBracketedRoot { .. })));
    }

    #[test]
    fn test_root_at_endpoint_is_not_a_bracket() {
        let f = |x: f64| x - 1.0;

        let result = bisection(f, (0.0, 1.0), &SolverConfig::default());

        assert!(matches!(result, Err(MathError::NoBracketedRoot { .. })));
    }

    #[test]
    fn test_exact_midpoint_hit() {
        // Midpoints 3.1, 2.9, then exactly 3.0
        let f = |x: f64| x * x * x - 9.0 * x;

        let result = bisection(f, (2.7, 3.5), &config(3, IterationBudget::Unbounded)).unwrap();

        assert_eq!(result.iterations, 3);
        assert_eq!(result.root, 3.0);
        assert_eq!(result.residual, 0.0);
    }

    #[test]
    fn test_max_iterations() {
        // Needs 11 halvings of [-0.5, 1] to reach 1e-3
        let f = |x: f64| x * x * x - 9.0 * x;

        let result = bisection(f, (-0.5, 1.0), &config(3, IterationBudget::Limited(8)));

        match result {
            Err(err @ MathError::MaxIterationsExceeded { .. }) => {
                let last = err.last_estimate().unwrap();
                assert_eq!(last.iterations, 8);
                assert_relative_eq!(last.root, -0.001953125);
            }
            other => panic!("Expected MaxIterationsExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_converges_on_last_allowed_iteration() {
        let f = |x: f64| x * x * x - 9.0 * x;

        let at_limit = bisection(f, (-4.0, -1.0), &config(3, IterationBudget::Limited(12)));
        let below_limit = bisection(f, (-4.0, -1.0), &config(3, IterationBudget::Limited(11)));

        assert_eq!(at_limit.unwrap().iterations, 12);
        assert!(matches!(
            below_limit,
            Err(MathError::MaxIterationsExceeded { iterations: 11, .. })
        ));
    }

    #[test]
    fn test_exact_hit_on_last_allowed_iteration() {
        let f = |x: f64| x * x * x - 9.0 * x;

        // Midpoints 3.1, 2.9, 3.0: the third is an exact root
        let at_limit = bisection(f, (2.7, 3.5), &config(3, IterationBudget::Limited(3))).unwrap();
        let below_limit = bisection(f, (2.7, 3.5), &config(3, IterationBudget::Limited(2)));

        assert_eq!(at_limit.iterations, 3);
        assert_eq!(at_limit.root, 3.0);
        assert_eq!(at_limit.residual, 0.0);
        assert!(matches!(
            below_limit,
            Err(MathError::MaxIterationsExceeded { iterations: 2, .. })
        ));
    }

    #[test]
    fn test_tolerance_below_ulp_stops_at_budget() {
        // f(m) stays nonzero on every midpoint of this bracket sequence
        let f = |x: f64| x * x - 2e12;

        let result = bisection(f, (1e6, 2e6), &config(20, IterationBudget::Limited(200)));

        match result {
            Err(MathError::MaxIterationsExceeded { iterations, root, .. }) => {
                assert_eq!(iterations, 200);
                assert_relative_eq!(root, 2e12_f64.sqrt(), epsilon = 1e-6);
            }
            other => panic!("expected budget exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_budget() {
        let f = |x: f64| x + 1.0;

        let result = bisection(f, (-2.0, 0.0), &config(3, IterationBudget::Limited(0)));

        match result {
            Err(MathError::MaxIterationsExceeded {
                iterations, root, ..
            }) => {
                assert_eq!(iterations, 0);
                assert_relative_eq!(root, -1.0);
            }
            other => panic!("Expected MaxIterationsExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_wide_tolerance_single_iteration() {
        // Half-width 1.0 is already within a tolerance of 10^0
        let f = |x: f64| x + 0.25;
        let config = SolverConfig::default().with_tolerance(Tolerance::from_digits(0).unwrap());

        let result = bisection(f, (-2.0, 0.0), &config).unwrap();

        assert_eq!(result.iterations, 1);
        assert_relative_eq!(result.root, -1.0);
    }

    #[test]
    fn test_negative_root() {
        let f = |x: f64| x + 1.0;

        let result = bisection(f, (-2.5, 0.0), &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, -1.0, epsilon = 1e-10);
    }
}
