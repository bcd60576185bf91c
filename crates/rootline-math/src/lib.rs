//! # Rootline Math
//!
//! Root-finding for univariate scalar functions.
//!
//! This crate provides:
//!
//! - **Bisection**: bracketing method driven by a sign change on `[a, b]`
//! - **Newton-Raphson**: tangent-line iteration with a caller-supplied derivative
//! - **Secant**: derivative-free iteration from two initial guesses
//!
//! Tolerances are always given as a count of decimal digits and converted to
//! a threshold of `10^-digits`. Iteration budgets are either limited or
//! explicitly unbounded.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every call is independent and idempotent for a deterministic `f`
//! - **Observable failures**: a run that exhausts its budget still reports its last iterate
//! - **No hidden guards**: floating-point infinities and NaNs from the update
//!   formulas propagate as ordinary values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult, Outcome};
    pub use crate::solvers::{
        bisection, newton_raphson, secant, IterationBudget, Method, SolverConfig, SolverResult,
        Tolerance,
    };
}

pub use error::{MathError, MathResult, Outcome};
