//! Demo command implementation.
//!
//! Replays a fixed set of reference scenarios and checks each outcome and
//! iteration count against what the solvers are known to produce.

use std::f64::consts::FRAC_PI_4;

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use rootline_math::solvers::{IterationBudget, Method, SolverConfig};
use rootline_math::Outcome;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{run, Inputs};
use crate::output::{format_estimate, format_residual, print_header, print_output, print_success};
use crate::problems;

/// Arguments for the demo command.
#[derive(Args, Debug, Default)]
pub struct DemoArgs {
    /// Only replay scenarios for one method
    #[arg(short, long, value_enum)]
    pub method: Option<MethodArg>,
}

/// Method filter accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Bisection,
    Newton,
    Secant,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Bisection => Method::Bisection,
            MethodArg::Newton => Method::Newton,
            MethodArg::Secant => Method::Secant,
        }
    }
}

/// A reference run and its expected result.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub problem: &'static str,
    pub inputs: Inputs,
    pub digits: u32,
    pub budget: IterationBudget,
    pub expected: Outcome,
    pub iterations: usize,
}

const fn scenario(
    problem: &'static str,
    inputs: Inputs,
    digits: u32,
    budget: IterationBudget,
    expected: Outcome,
    iterations: usize,
) -> Scenario {
    Scenario {
        problem,
        inputs,
        digits,
        budget,
        expected,
        iterations,
    }
}

/// The reference scenarios, in replay order.
pub fn scenarios() -> Vec<Scenario> {
    use IterationBudget::{Limited, Unbounded};
    use Outcome::{Converged, MaxIterationsExceeded, NoBracketedRoot};

    vec![
        scenario("cubic-nine", Inputs::Interval(1.0, 2.0), 3, Unbounded, NoBracketedRoot, 0),
        scenario("cubic-nine", Inputs::Interval(-1.0, 4.0), 3, Unbounded, NoBracketedRoot, 0),
        scenario("cubic-nine", Inputs::Interval(-0.5, 1.0), 3, Limited(8), MaxIterationsExceeded, 8),
        scenario("cubic-nine", Inputs::Interval(2.7, 3.5), 3, Unbounded, Converged, 3),
        scenario("cubic-nine", Inputs::Interval(-4.0, -1.0), 3, Limited(20), Converged, 12),
        scenario("no-real-root", Inputs::Guess(0.5), 4, Limited(10), MaxIterationsExceeded, 10),
        scenario("arctan", Inputs::Guess(1.4), 4, Limited(8), MaxIterationsExceeded, 8),
        scenario("witch", Inputs::Guess(2.0), 3, Limited(10), Converged, 8),
        scenario("linear", Inputs::Guess(1000.0), 4, Limited(100), Converged, 2),
        scenario("cubic-ten", Inputs::Guess(1.0), 4, Limited(20), Converged, 4),
        scenario("cubic-ten", Inputs::Guesses(1.0, 2.0), 4, Limited(20), Converged, 6),
        scenario("cos-fixed-point", Inputs::Guesses(0.5, FRAC_PI_4), 4, Limited(20), Converged, 4),
    ]
}

/// Result of replaying one scenario.
#[derive(Debug, Serialize, Tabled)]
pub struct DemoRow {
    #[tabled(rename = "Method")]
    pub method: &'static str,
    #[tabled(rename = "Problem")]
    pub problem: &'static str,
    #[tabled(rename = "Inputs")]
    pub inputs: String,
    #[tabled(rename = "Expected")]
    pub expected: &'static str,
    #[tabled(rename = "Observed")]
    pub observed: &'static str,
    #[tabled(rename = "Iter")]
    pub iterations: usize,
    #[tabled(rename = "Estimate")]
    pub root: String,
    #[tabled(rename = "f(Estimate)")]
    pub residual: String,
    #[tabled(rename = "Status")]
    pub status: &'static str,
}

impl DemoRow {
    fn matched(&self) -> bool {
        self.status == "ok"
    }
}

/// Replays one scenario.
pub fn replay(scenario: &Scenario) -> Result<DemoRow> {
    let problem = problems::find(scenario.problem)?;
    let config = SolverConfig::new(scenario.digits, scenario.budget)?;
    let result = run(&problem, scenario.inputs, &config)?;

    let observed = Outcome::of(&result);
    let estimate = match &result {
        Ok(found) => Some(*found),
        Err(err) => err.last_estimate(),
    };
    let iterations = estimate.map_or(0, |e| e.iterations);
    let matched = observed == scenario.expected && iterations == scenario.iterations;

    if !matched {
        tracing::warn!(
            problem = scenario.problem,
            inputs = %scenario.inputs,
            expected = %scenario.expected,
            observed = %observed,
            "scenario mismatch"
        );
    }

    Ok(DemoRow {
        method: scenario.inputs.method().name(),
        problem: scenario.problem,
        inputs: scenario.inputs.to_string(),
        expected: scenario.expected.label(),
        observed: observed.label(),
        iterations,
        root: estimate.map_or_else(|| "-".to_string(), |e| format_estimate(e.root)),
        residual: estimate.map_or_else(|| "-".to_string(), |e| format_residual(e.residual)),
        status: if matched { "ok" } else { "MISMATCH" },
    })
}

/// Execute the demo command.
pub fn execute(args: DemoArgs, format: OutputFormat) -> Result<()> {
    let filter = args.method.map(Method::from);
    let rows = scenarios()
        .iter()
        .filter(|s| filter.map_or(true, |m| s.inputs.method() == m))
        .map(replay)
        .collect::<Result<Vec<_>>>()?;

    let matched = rows.iter().filter(|r| r.matched()).count();
    let summary = format!("{}/{} scenarios matched", matched, rows.len());

    match format {
        OutputFormat::Table => {
            print_header("Reference Scenarios");
            print_output(&rows, format)?;
            if matched == rows.len() {
                print_success(&summary);
            }
        }
        OutputFormat::Minimal => println!("{}", summary),
        _ => print_output(&rows, format)?,
    }

    if matched != rows.len() {
        bail!(summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_scenarios_match() {
        for scenario in scenarios() {
            let row = replay(&scenario).unwrap();
            assert!(row.matched(), "{:?}", row);
        }
    }

    #[test]
    fn test_scenario_counts_per_method() {
        let count = |method| {
            scenarios()
                .iter()
                .filter(|s| s.inputs.method() == method)
                .count()
        };

        assert_eq!(count(Method::Bisection), 5);
        assert_eq!(count(Method::Newton), 5);
        assert_eq!(count(Method::Secant), 2);
    }

    #[test]
    fn test_no_bracket_row_has_no_estimate() {
        let row = replay(&scenarios()[0]).unwrap();

        assert_eq!(row.observed, "no bracketed root");
        assert_eq!(row.root, "-");
        assert_eq!(row.iterations, 0);
    }
}
