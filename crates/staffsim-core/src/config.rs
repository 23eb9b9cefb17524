//! Simulation configuration.
//!
//! Everything the driver can tune before a run: how long it lasts, how
//! demand is generated and how patient the company is with idle staff.
//!
//! ```
//! use staffsim_core::config::{validate_config, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     days: 30,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! assert!(validate_config(&config).is_empty());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL;
use crate::error::ConfigError;
use crate::generation::DemandProfile;

/// Upper bound on projects generated per day; keeps runaway configs in check
pub const MAX_PROJECTS_PER_DAY_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of days to simulate
    pub days: u32,
    /// Random seed for project generation (None = random)
    pub seed: Option<u64>,
    /// Each day brings between 0 and this many new projects
    pub max_projects_per_day: u32,
    pub min_complexity: u32,
    pub max_complexity: u32,
    /// Idle days tolerated before an employee may be dismissed
    pub idle_days_before_dismissal: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 10,
            seed: None,
            max_projects_per_day: 4,
            min_complexity: 1,
            max_complexity: 3,
            idle_days_before_dismissal: DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL,
        }
    }
}

impl SimulationConfig {
    /// Parse a JSON config. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Return self if valid, otherwise every problem found
    pub fn validated(self) -> Result<Self, ConfigError> {
        let issues = validate_config(&self);
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(issues))
        }
    }
}

/// A single problem with a [`SimulationConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    #[error("complexity must be at least 1")]
    ZeroComplexity,
    #[error("min_complexity {min} exceeds max_complexity {max}")]
    ComplexityRange { min: u32, max: u32 },
    #[error("max_projects_per_day {0} exceeds the limit of {limit}", limit = MAX_PROJECTS_PER_DAY_LIMIT)]
    TooManyProjects(u32),
}

/// Validate a simulation configuration, returning all issues found
pub fn validate_config(config: &SimulationConfig) -> Vec<ConfigIssue> {
    DemandProfile::from(config).issues()
}
