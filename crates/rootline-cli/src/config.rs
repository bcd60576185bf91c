//! Configuration file support.
//!
//! Settings are resolved with the precedence command-line flag, then
//! configuration file, then built-in default.
//!
//! ```toml
//! tolerance_digits = 6
//! max_iterations = 50
//! unbounded = false
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use rootline_math::solvers::{IterationBudget, SolverConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::{BudgetArgs, OutputFormat};
use crate::error::{CliError, CliResult};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "rootline.toml";

/// Persistent CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootlineConfig {
    /// Tolerance in decimal digits
    #[serde(default = "default_tolerance_digits")]
    pub tolerance_digits: u32,

    /// Maximum number of iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Ignore `max_iterations` and iterate without a limit
    #[serde(default)]
    pub unbounded: bool,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_tolerance_digits() -> u32 {
    4
}

fn default_max_iterations() -> usize {
    100
}

impl Default for RootlineConfig {
    fn default() -> Self {
        Self {
            tolerance_digits: default_tolerance_digits(),
            max_iterations: default_max_iterations(),
            unbounded: false,
            format: OutputFormat::default(),
        }
    }
}

impl RootlineConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Loads the explicit file, or `rootline.toml` if it exists, or defaults.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let config = match explicit {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    info!("Loading configuration from {}", path.display());
                    Self::from_file(&path)?
                } else {
                    debug!("Using default configuration");
                    Self::default()
                }
            }
        };
        debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// Iteration budget from the file alone.
    pub fn budget(&self) -> IterationBudget {
        if self.unbounded {
            IterationBudget::Unbounded
        } else {
            IterationBudget::Limited(self.max_iterations)
        }
    }

    /// Builds the solver configuration, letting command-line flags win.
    pub fn solver_config(&self, overrides: &BudgetArgs) -> CliResult<SolverConfig> {
        let digits = overrides.tol.unwrap_or(self.tolerance_digits);
        let budget = if overrides.unbounded {
            IterationBudget::Unbounded
        } else {
            overrides
                .max_iter
                .map_or_else(|| self.budget(), IterationBudget::Limited)
        };
        Ok(SolverConfig::new(digits, budget)?)
    }
}
