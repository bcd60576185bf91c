//! Problems command implementation.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};
use crate::problems::catalog;

/// One catalog entry.
#[derive(Debug, Serialize, Tabled)]
pub struct ProblemRow {
    #[tabled(rename = "Name")]
    pub name: &'static str,
    #[tabled(rename = "f(x)")]
    pub formula: &'static str,
    #[tabled(rename = "Derivative")]
    #[serde(rename = "has_derivative")]
    pub derivative: bool,
}

/// Execute the problems command.
pub fn execute(format: OutputFormat) -> Result<()> {
    let rows: Vec<ProblemRow> = catalog()
        .iter()
        .map(|p| ProblemRow {
            name: p.name,
            formula: p.formula,
            derivative: p.derivative().is_some(),
        })
        .collect();

    if format == OutputFormat::Table {
        print_header("Built-in Problems");
    }
    print_output(&rows, format)
}
