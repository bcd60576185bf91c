//! CLI command implementations.

pub mod bisection;
pub mod demo;
pub mod newton;
pub mod problems;
pub mod secant;

// Re-export submodules for convenience
pub use bisection::BisectionArgs;
pub use demo::DemoArgs;
pub use newton::NewtonArgs;
pub use secant::SecantArgs;

use rootline_math::solvers::{bisection, newton_raphson, secant, Method, SolverConfig, SolverResult};
use rootline_math::{MathError, MathResult, Outcome};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{format_estimate, format_residual, print_header, KeyValue};
use crate::problems::Problem;

/// Starting data for a solver call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inputs {
    /// Bracketing interval for bisection.
    Interval(f64, f64),
    /// Single initial guess for Newton's method.
    Guess(f64),
    /// Two initial guesses for the secant method.
    Guesses(f64, f64),
}

impl Inputs {
    /// The method these inputs are shaped for.
    pub fn method(self) -> Method {
        match self {
            Inputs::Interval(..) => Method::Bisection,
            Inputs::Guess(_) => Method::Newton,
            Inputs::Guesses(..) => Method::Secant,
        }
    }
}

impl std::fmt::Display for Inputs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inputs::Interval(a, b) => write!(f, "[{a}, {b}]"),
            Inputs::Guess(x0) => write!(f, "x0 = {x0}"),
            Inputs::Guesses(x0, x1) => write!(f, "x0 = {x0}, x1 = {x1}"),
        }
    }
}

/// Runs the solver matching `inputs` against `problem`.
///
/// Only configuration problems are reported as `Err`; numeric failures are
/// part of the returned [`MathResult`].
pub fn run(
    problem: &Problem,
    inputs: Inputs,
    config: &SolverConfig,
) -> CliResult<MathResult<SolverResult>> {
    let f = problem.function();
    tracing::debug!(problem = problem.name, %inputs, "running {}", inputs.method());

    let result = match inputs {
        Inputs::Interval(a, b) => bisection(f, (a, b), config),
        Inputs::Guess(x0) => {
            let df = problem
                .derivative()
                .ok_or_else(|| CliError::MissingDerivative {
                    problem: problem.name.to_string(),
                    method: Method::Newton.name(),
                })?;
            newton_raphson(f, df, x0, config)
        }
        Inputs::Guesses(x0, x1) => secant(f, x0, x1, config),
    };
    Ok(result)
}

/// Serializable outcome of a single solve.
#[derive(Debug, Clone, Serialize)]
pub struct SolveRecord {
    pub method: &'static str,
    pub problem: &'static str,
    pub formula: &'static str,
    pub inputs: String,
    pub tolerance_digits: u32,
    pub max_iterations: String,
    pub outcome: &'static str,
    pub root: Option<f64>,
    pub previous: Option<f64>,
    pub residual: Option<f64>,
    pub iterations: usize,
    pub message: Option<String>,
}

impl SolveRecord {
    /// Builds a record from a solver result.
    pub fn new(
        problem: &Problem,
        inputs: Inputs,
        config: &SolverConfig,
        result: &MathResult<SolverResult>,
    ) -> Self {
        let estimate = match result {
            Ok(found) => Some(*found),
            Err(err) => err.last_estimate(),
        };
        let message = result.as_ref().err().map(MathError::to_string);

        Self {
            method: inputs.method().name(),
            problem: problem.name,
            formula: problem.formula,
            inputs: inputs.to_string(),
            tolerance_digits: config.tolerance.digits(),
            max_iterations: config.max_iterations.to_string(),
            outcome: Outcome::of(result).label(),
            root: estimate.map(|e| e.root),
            previous: estimate.and_then(|e| e.previous),
            residual: estimate.map(|e| e.residual),
            iterations: estimate.map_or(0, |e| e.iterations),
            message,
        }
    }

    fn converged(&self) -> bool {
        self.outcome == Outcome::Converged.label()
    }

    fn rows(&self) -> Vec<KeyValue> {
        let mut rows = vec![
            KeyValue::new("Method", self.method),
            KeyValue::new("Problem", format!("{} ({})", self.problem, self.formula)),
            KeyValue::new("Inputs", self.inputs.clone()),
            KeyValue::new("Tolerance", format!("1e-{}", self.tolerance_digits)),
            KeyValue::new("Max Iterations", self.max_iterations.clone()),
            KeyValue::new("", ""), // Separator
            KeyValue::new("Outcome", self.outcome),
        ];

        if let Some(root) = self.root {
            let label = if self.converged() { "Root" } else { "Last Estimate" };
            rows.push(KeyValue::new(label, format_estimate(root)));
        }
        if let Some(previous) = self.previous {
            rows.push(KeyValue::new("Previous Estimate", format_estimate(previous)));
        }
        if let Some(residual) = self.residual {
            rows.push(KeyValue::new("f(root)", format_residual(residual)));
        }
        rows.push(KeyValue::new("Iterations", self.iterations.to_string()));
        rows
    }
}

/// Solves `problem` and prints the record in the requested format.
pub fn solve_and_print(
    problem: &Problem,
    inputs: Inputs,
    config: &SolverConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let result = run(problem, inputs, config)?;
    let record = SolveRecord::new(problem, inputs, config, &result);

    match format {
        OutputFormat::Table => {
            print_header(&format!("{} Result", capitalize(record.method)));
            crate::output::print_output(&record.rows(), format)?;
            if let Some(message) = &record.message {
                crate::output::print_warning(message);
            }
        }
        OutputFormat::Json => crate::output::print_record_json(&record)?,
        OutputFormat::Csv => crate::output::print_record_csv(&record)?,
        OutputFormat::Minimal => match record.root {
            Some(root) if record.converged() => println!("{}", root),
            _ => println!("{}", record.outcome),
        },
    }

    Ok(())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
