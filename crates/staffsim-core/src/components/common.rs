//! Identifiers and keys shared by projects, employees and departments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompanyError;

/// Department key. The set of departments is fixed at company formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentKind {
    /// Web development
    Web,
    /// Mobile development; staffs a project with one developer per day of complexity
    Mob,
    /// Quality assurance; receives every completed project
    Qa,
}

impl DepartmentKind {
    /// All departments in company registration order
    pub const ALL: [DepartmentKind; 3] = [DepartmentKind::Web, DepartmentKind::Mob, DepartmentKind::Qa];

    /// Kinds that incoming customer projects can target
    pub const DEVELOPMENT: [DepartmentKind; 2] = [DepartmentKind::Mob, DepartmentKind::Web];

    pub fn key(&self) -> &'static str {
        match self {
            DepartmentKind::Web => "web",
            DepartmentKind::Mob => "mob",
            DepartmentKind::Qa => "qa",
        }
    }

    /// Role of every employee this department hires
    pub fn employee_role(&self) -> EmployeeRole {
        match self {
            DepartmentKind::Web | DepartmentKind::Mob => EmployeeRole::Developer,
            DepartmentKind::Qa => EmployeeRole::Tester,
        }
    }

    /// How many employees a single backlog project of `complexity` triggers
    pub fn hires_for(&self, complexity: u32) -> u32 {
        match self {
            DepartmentKind::Mob => complexity,
            DepartmentKind::Web | DepartmentKind::Qa => 1,
        }
    }

    /// Free employees needed before a project can be assigned
    pub fn staff_required(&self, complexity: u32) -> usize {
        match self {
            DepartmentKind::Mob => complexity as usize,
            DepartmentKind::Web | DepartmentKind::Qa => 1,
        }
    }
}

impl fmt::Display for DepartmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DepartmentKind {
    type Err = CompanyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DepartmentKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CompanyError::UnknownDepartment(s.to_string()))
    }
}

/// What kind of work an employee performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRole {
    /// Builds projects until they are Completed
    Developer,
    /// Tests completed projects until they are Tested
    Tester,
}

/// Project ids are handed out by the manager when a project enters the backlog.
/// Id 0 marks a project that has not arrived yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Employee id. Carries the owning department, which is the employee's only
/// link back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId {
    pub department: DepartmentKind,
    pub seq: u32,
}

impl EmployeeId {
    pub fn new(department: DepartmentKind, seq: u32) -> Self {
        Self { department, seq }
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.department, self.seq)
    }
}
