//! Built-in test problems.
//!
//! Each problem owns its function and derivative as closures built in
//! [`catalog`].

use crate::error::{CliError, CliResult};

/// Boxed scalar function.
pub type ScalarFn = Box<dyn Fn(f64) -> f64>;

/// A named scalar function with an optional analytic derivative.
pub struct Problem {
    /// Catalog name used on the command line.
    pub name: &'static str,
    /// Human-readable formula.
    pub formula: &'static str,
    f: ScalarFn,
    df: Option<ScalarFn>,
}

impl Problem {
    fn new(name: &'static str, formula: &'static str, f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self {
            name,
            formula,
            f: Box::new(f),
            df: None,
        }
    }

    fn with_derivative(mut self, df: impl Fn(f64) -> f64 + 'static) -> Self {
        self.df = Some(Box::new(df));
        self
    }

    /// The target function.
    pub fn function(&self) -> &dyn Fn(f64) -> f64 {
        self.f.as_ref()
    }

    /// The derivative, if the problem provides one.
    pub fn derivative(&self) -> Option<&dyn Fn(f64) -> f64> {
        self.df.as_deref()
    }
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("name", &self.name)
            .field("formula", &self.formula)
            .field("has_derivative", &self.df.is_some())
            .finish()
    }
}

/// All built-in problems.
pub fn catalog() -> Vec<Problem> {
    vec![
        Problem::new("cubic-nine", "x^3 - 9x", |x| x.powi(3) - 9.0 * x)
            .with_derivative(|x| 3.0 * x * x - 9.0),
        Problem::new("no-real-root", "x^2 + 1", |x| x.powi(2) + 1.0)
            .with_derivative(|x| 2.0 * x),
        Problem::new("arctan", "atan(x)", f64::atan).with_derivative(|x| 1.0 / (1.0 + x * x)),
        Problem::new("witch", "1/(1 + x^2) - 1/2", |x| 1.0 / (1.0 + x.powi(2)) - 0.5)
            .with_derivative(|x| -2.0 * x / (1.0 + x.powi(2)).powi(2)),
        Problem::new("linear", "5x + 7", |x| 5.0 * x + 7.0).with_derivative(|_| 5.0),
        Problem::new("cubic-ten", "x^3 + 4x^2 - 10", |x| {
            x.powi(3) + 4.0 * x.powi(2) - 10.0
        })
        .with_derivative(|x| 3.0 * x * x + 8.0 * x),
        Problem::new("cos-fixed-point", "cos(x) - x", |x| x.cos() - x)
            .with_derivative(|x| -x.sin() - 1.0),
    ]
}

/// Looks up a problem by name.
pub fn find(name: &str) -> CliResult<Problem> {
    catalog()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CliError::UnknownProblem(name.to_string()))
}
