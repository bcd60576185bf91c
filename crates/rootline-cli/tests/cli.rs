//! End-to-end tests for the `rootline` binary.

use std::io::Write;

use approx::assert_relative_eq;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn rootline() -> (Command, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("rootline").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("ROOTLINE_CONFIG")
        .env_remove("RUST_LOG");
    (cmd, dir)
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_problems_listing() {
    let (mut cmd, _dir) = rootline();
    cmd.args(["problems", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cubic-nine\nno-real-root\n"))
        .stdout(predicate::str::contains("cos-fixed-point"))
        .stdout(predicate::str::contains("x^3").not());
}

#[test]
fn test_csv_record() {
    let (mut cmd, _dir) = rootline();
    let output = cmd
        .args([
            "secant", "-p", "cubic-ten", "--guess0", "1", "--guess1", "2", "-t", "4", "-n", "5",
            "-f", "csv",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let mut lines = text.lines();

    assert!(lines.next().unwrap().starts_with("method,problem,formula,inputs"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("secant,cubic-ten,"));
    assert!(row.contains(",converged,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_bisection_json() {
    let (mut cmd, _dir) = rootline();
    cmd.args([
        "bisection", "--problem", "cubic-nine", "--lower", "-4", "--upper", "-1", "--tol", "3",
        "--max-iter", "20", "--format", "json",
    ]);

    let record = json_output(&mut cmd);

    assert_eq!(record["outcome"], "converged");
    assert_eq!(record["iterations"], 12);
    assert_relative_eq!(record["root"].as_f64().unwrap(), -3.000244140625);
}

#[test]
fn test_bisection_no_bracket() {
    let (mut cmd, _dir) = rootline();
    cmd.args([
        "bisection", "-p", "cubic-nine", "-l", "1", "-u", "2", "--unbounded", "-f", "json",
    ]);

    let record = json_output(&mut cmd);

    assert_eq!(record["outcome"], "no bracketed root");
    assert_eq!(record["root"], Value::Null);
    assert_eq!(record["max_iterations"], "unbounded");
}

#[test]
fn test_newton_linear() {
    let (mut cmd, _dir) = rootline();
    cmd.args([
        "newton", "--problem", "linear", "--guess", "1000", "--tol", "4", "--format", "json",
    ]);

    let record = json_output(&mut cmd);

    assert_eq!(record["iterations"], 2);
    assert_relative_eq!(record["root"].as_f64().unwrap(), -1.4, epsilon = 1e-12);
}

#[test]
fn test_newton_budget_exhausted() {
    let (mut cmd, _dir) = rootline();
    cmd.args([
        "newton", "-p", "no-real-root", "-g", "0.5", "-t", "4", "-n", "10", "-f", "json",
    ]);

    let record = json_output(&mut cmd);

    assert_eq!(record["outcome"], "max iterations");
    assert_eq!(record["iterations"], 10);
    assert!(record["previous"].is_number());
}

#[test]
fn test_secant_json() {
    let (mut cmd, _dir) = rootline();
    cmd.args([
        "secant", "--problem", "cubic-ten", "--guess0", "1", "--guess1", "2", "--tol", "4",
        "--max-iter", "20", "--format", "json",
    ]);

    let record = json_output(&mut cmd);

    assert_eq!(record["iterations"], 6);
    assert_relative_eq!(record["root"].as_f64().unwrap(), 1.3652300011108591);
}

#[test]
fn test_minimal_prints_root() {
    let (mut cmd, _dir) = rootline();
    cmd.args([
        "newton", "-p", "linear", "-g", "1000", "-f", "minimal",
    ])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("-1.4"));
}

#[test]
fn test_table_output() {
    let (mut cmd, _dir) = rootline();
    cmd.args(["secant", "-p", "cubic-ten", "--guess0", "1", "--guess1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Secant Result"))
        .stdout(predicate::str::contains("Iterations"));
}

#[test]
fn test_unknown_problem_fails() {
    let (mut cmd, _dir) = rootline();
    cmd.args(["newton", "--problem", "quartic", "--guess", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quartic"));
}

#[test]
fn test_unbounded_conflicts_with_max_iter() {
    let (mut cmd, _dir) = rootline();
    cmd.args([
        "bisection", "-p", "cubic-nine", "-l", "-4", "-u", "-1", "--unbounded", "--max-iter", "5",
    ])
    .assert()
    .failure();
}

#[test]
fn test_config_file_sets_defaults() {
    let (mut cmd, dir) = rootline();
    let mut file = std::fs::File::create(dir.path().join("rootline.toml")).unwrap();
    writeln!(file, "tolerance_digits = 3\nmax_iterations = 11\nformat = \"json\"").unwrap();

    cmd.args(["bisection", "-p", "cubic-nine", "-l", "-4", "-u", "-1"]);
    let record = json_output(&mut cmd);

    assert_eq!(record["tolerance_digits"], 3);
    assert_eq!(record["outcome"], "max iterations");
    assert_eq!(record["iterations"], 11);
}

#[test]
fn test_missing_explicit_config_fails() {
    let (mut cmd, dir) = rootline();
    cmd.arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("problems")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_demo_all_matched() {
    let (mut cmd, _dir) = rootline();
    cmd.args(["demo", "--format", "json"]);

    let rows = json_output(&mut cmd);
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| r["status"] == "ok"));
}

#[test]
fn test_demo_filtered_minimal() {
    let (mut cmd, _dir) = rootline();
    cmd.args(["demo", "--method", "secant", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2/2 scenarios matched"));
}
