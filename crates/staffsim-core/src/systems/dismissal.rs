//! Dismissal system - picks the one idle employee the company lets go each day

use serde::Serialize;

use crate::components::{Employee, EmployeeId};

/// An idle employee past the idle limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DismissalCandidate {
    pub employee: EmployeeId,
    /// Projects this employee has ever been assigned
    pub assignments: usize,
    pub idle_days: u32,
}

impl From<&Employee> for DismissalCandidate {
    fn from(employee: &Employee) -> Self {
        Self {
            employee: employee.id,
            assignments: employee.projects().len(),
            idle_days: employee.days(),
        }
    }
}

/// Choose the least productive candidate: fewest assignments first.
///
/// The sort is stable, so ties go to whoever was reported first (departments
/// in registration order, free-pool order within a department).
pub fn select_for_dismissal(candidates: &mut [DismissalCandidate]) -> Option<DismissalCandidate> {
    candidates.sort_by_key(|c| c.assignments);
    candidates.first().copied()
}
