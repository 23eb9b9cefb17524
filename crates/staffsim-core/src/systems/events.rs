//! Company events - the observable side effects of a simulated day
//!
//! Systems never print. Every hire, assignment, hand-off and dismissal is
//! pushed onto an event journal owned by the manager; callers drain it and
//! render it however they like. Each event is also sent to the `log` facade.

use std::fmt;

use serde::Serialize;

use crate::components::{DepartmentKind, EmployeeId, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CompanyEvent {
    /// A new customer project entered the backlog
    ProjectAdded {
        project: ProjectId,
        department: DepartmentKind,
        complexity: u32,
    },
    Hired {
        department: DepartmentKind,
        employees: Vec<EmployeeId>,
    },
    Assigned {
        employee: EmployeeId,
        project: ProjectId,
    },
    /// Development finished and the project was queued for QA
    HandedToQa {
        project: ProjectId,
        employee: EmployeeId,
    },
    Tested {
        project: ProjectId,
        employee: EmployeeId,
    },
    /// End-of-day snapshot of one department's pools
    Status {
        department: DepartmentKind,
        free: Vec<EmployeeId>,
        busy: Vec<EmployeeId>,
    },
    Dismissed {
        employee: EmployeeId,
        assignments: usize,
    },
}

impl CompanyEvent {
    fn log(&self) {
        match self {
            CompanyEvent::Hired { .. }
            | CompanyEvent::Tested { .. }
            | CompanyEvent::Dismissed { .. } => log::info!("{}", self),
            _ => log::debug!("{}", self),
        }
    }
}

/// Log `event` and append it to the journal
pub fn record(journal: &mut Vec<CompanyEvent>, event: CompanyEvent) {
    event.log();
    journal.push(event);
}

fn join_ids(ids: &[EmployeeId]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for CompanyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyEvent::ProjectAdded { project, department, complexity } => write!(
                f,
                "Project {} of complexity {} added for department {}",
                project, complexity, department
            ),
            CompanyEvent::Hired { department, employees } => write!(
                f,
                "Department {} hired {} employee(s): [{}]",
                department,
                employees.len(),
                join_ids(employees)
            ),
            CompanyEvent::Assigned { employee, project } => write!(
                f,
                "Employee {}/{} assigned to project {}",
                employee, employee.department, project
            ),
            CompanyEvent::HandedToQa { project, employee } => {
                write!(f, "Project {} completed by {} and sent to testing", project, employee)
            }
            CompanyEvent::Tested { project, employee } => {
                write!(f, "Project {} tested by {}", project, employee)
            }
            CompanyEvent::Status { department, free, busy } => write!(
                f,
                "{} free: [{}] busy: [{}]",
                department,
                join_ids(free),
                join_ids(busy)
            ),
            CompanyEvent::Dismissed { employee, assignments } => write!(
                f,
                "Employee {} dismissed after {} project(s)",
                employee, assignments
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_in_order() {
        let mut journal = Vec::new();
        let employee = EmployeeId::new(DepartmentKind::Web, 1);
        record(
            &mut journal,
            CompanyEvent::Hired {
                department: DepartmentKind::Web,
                employees: vec![employee],
            },
        );
        record(
            &mut journal,
            CompanyEvent::Assigned {
                employee,
                project: ProjectId(1),
            },
        );

        assert_eq!(journal.len(), 2);
        assert!(matches!(journal[1], CompanyEvent::Assigned { .. }));
    }

    #[test]
    fn test_status_display_lists_pools() {
        let event = CompanyEvent::Status {
            department: DepartmentKind::Mob,
            free: vec![EmployeeId::new(DepartmentKind::Mob, 1)],
            busy: vec![
                EmployeeId::new(DepartmentKind::Mob, 2),
                EmployeeId::new(DepartmentKind::Mob, 3),
            ],
        };
        assert_eq!(event.to_string(), "mob free: [mob-1] busy: [mob-2, mob-3]");
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = CompanyEvent::Dismissed {
            employee: EmployeeId::new(DepartmentKind::Qa, 4),
            assignments: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "dismissed");
        assert_eq!(json["employee"]["department"], "qa");
        assert_eq!(json["assignments"], 2);
    }
}
