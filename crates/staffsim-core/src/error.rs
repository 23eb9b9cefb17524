//! Error types for the company simulation

use thiserror::Error;

use crate::components::{DepartmentKind, EmployeeId, ProjectId, ProjectStatus};
use crate::config::ConfigIssue;

/// Errors raised by the company core (registry, ledger and pool operations)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanyError {
    /// A department key string did not name any known department
    #[error("unknown department key '{0}'")]
    UnknownDepartment(String),

    /// A project or employee referenced a department that was never registered
    #[error("department {0} is not registered with the manager")]
    UnregisteredDepartment(DepartmentKind),

    /// `add_departments` was given a kind that is already in the registry
    #[error("department {0} is already registered")]
    DuplicateDepartment(DepartmentKind),

    /// Every project needs at least one day of work
    #[error("{0} project must have a positive complexity")]
    InvalidComplexity(DepartmentKind),

    #[error("project {0} is not tracked by the manager")]
    UnknownProject(ProjectId),

    /// Status may only move one step forward
    #[error("project {project} cannot move from {from} to {to}")]
    InvalidTransition {
        project: ProjectId,
        from: ProjectStatus,
        to: ProjectStatus,
    },

    /// Only employees sitting in the free pool may be dismissed
    #[error("employee {0} is not idle and cannot be dismissed")]
    EmployeeNotIdle(EmployeeId),
}

/// Errors raised while loading or validating a [`crate::config::SimulationConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {}", join_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues.iter().map(|i| i.to_string()).collect::<Vec<_>>().join("; ")
}
