//! Employees: developers and testers, and their per-day readiness checks.

use serde::{Deserialize, Serialize};

use super::{DepartmentKind, EmployeeId, EmployeeRole, ProjectId, ProjectLedger, ProjectStatus};
use crate::error::CompanyError;

/// Busy-days a tester spends on any project, whatever its complexity
pub const QA_DAYS_PER_PROJECT: u32 = 1;

/// Consecutive idle days an employee may accumulate before becoming a dismissal candidate
pub const DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL: u32 = 3;

/// Result of one day of work for a single employee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkOutcome {
    /// Not assigned to anything today
    Idle,
    /// Still on the current project
    Working,
    /// Finished development; the project is now Completed and waiting for QA
    Developed(ProjectId),
    /// Finished a shared project that a teammate already handed to QA this tick
    Released(ProjectId),
    /// Finished testing; the project is Tested
    Tested(ProjectId),
}

impl WorkOutcome {
    /// True when the employee should move back to the free pool
    pub fn releases(&self) -> bool {
        matches!(
            self,
            WorkOutcome::Developed(_) | WorkOutcome::Released(_) | WorkOutcome::Tested(_)
        )
    }
}

/// A worker owned by a department's free or busy pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub role: EmployeeRole,
    /// Assigned projects, most recent last
    projects: Vec<ProjectId>,
    /// Days on the current project while busy, idle days while free
    days: u32,
}

impl Employee {
    pub fn new(id: EmployeeId, role: EmployeeRole) -> Self {
        Self {
            id,
            role,
            projects: Vec::new(),
            days: 0,
        }
    }

    pub fn department(&self) -> DepartmentKind {
        self.id.department
    }

    pub fn projects(&self) -> &[ProjectId] {
        &self.projects
    }

    pub fn current_project(&self) -> Option<ProjectId> {
        self.projects.last().copied()
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Push a project on top of the stack and restart the day counter
    pub fn add_project(&mut self, project: ProjectId) {
        self.days = 0;
        self.projects.push(project);
    }

    /// Whether the current project is at the stage this role works on
    pub fn is_busy(&self, ledger: &ProjectLedger) -> bool {
        let responsible_for = match self.role {
            EmployeeRole::Developer => ProjectStatus::InProgress,
            EmployeeRole::Tester => ProjectStatus::Completed,
        };
        self.current_project()
            .and_then(|id| ledger.get(id).ok())
            .is_some_and(|project| project.status() == responsible_for)
    }

    /// Advance one day.
    ///
    /// The counter always moves. `on_duty` says whether the employee sits in
    /// the busy pool; only then is the current project checked for readiness.
    pub fn do_daily_work(
        &mut self,
        on_duty: bool,
        ledger: &mut ProjectLedger,
    ) -> Result<WorkOutcome, CompanyError> {
        self.days += 1;
        if !on_duty {
            return Ok(WorkOutcome::Idle);
        }
        let Some(project_id) = self.current_project() else {
            return Ok(WorkOutcome::Idle);
        };
        let project = ledger.get_mut(project_id)?;

        match self.role {
            EmployeeRole::Developer => {
                if self.days != project.complexity() {
                    return Ok(WorkOutcome::Working);
                }
                self.days = 0;
                // Mob teammates share one project; the first to finish hands it over
                if project.status() == ProjectStatus::InProgress {
                    project.hand_off_to_qa()?;
                    Ok(WorkOutcome::Developed(project_id))
                } else {
                    Ok(WorkOutcome::Released(project_id))
                }
            }
            EmployeeRole::Tester => {
                if self.days < QA_DAYS_PER_PROJECT {
                    return Ok(WorkOutcome::Working);
                }
                self.days = 0;
                project.advance(ProjectStatus::Tested)?;
                Ok(WorkOutcome::Tested(project_id))
            }
        }
    }

    /// Idle for more than `idle_limit` days
    pub fn check_dismissal(&self, idle_limit: u32) -> bool {
        self.days > idle_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Project;

    fn developer() -> Employee {
        Employee::new(EmployeeId::new(DepartmentKind::Web, 1), EmployeeRole::Developer)
    }

    fn tester() -> Employee {
        Employee::new(EmployeeId::new(DepartmentKind::Qa, 1), EmployeeRole::Tester)
    }

    #[test]
    fn test_developer_finishes_on_exact_day() {
        let mut ledger = ProjectLedger::new();
        let id = ledger.admit(Project::new(DepartmentKind::Web, 3));
        let mut dev = developer();
        dev.add_project(id);
        assert!(dev.is_busy(&ledger));

        for day in 1..3 {
            assert_eq!(dev.do_daily_work(true, &mut ledger).unwrap(), WorkOutcome::Working);
            assert_eq!(dev.days(), day);
            assert_eq!(ledger.get(id).unwrap().status(), ProjectStatus::InProgress);
        }

        assert_eq!(dev.do_daily_work(true, &mut ledger).unwrap(), WorkOutcome::Developed(id));
        let project = ledger.get(id).unwrap();
        assert_eq!(project.status(), ProjectStatus::Completed);
        assert_eq!(project.kind, DepartmentKind::Qa);
        assert_eq!(dev.days(), 0);
        assert!(!dev.is_busy(&ledger));
    }

    #[test]
    fn test_teammate_is_released_without_second_hand_off() {
        let mut ledger = ProjectLedger::new();
        let id = ledger.admit(Project::new(DepartmentKind::Mob, 1));
        let mut first = developer();
        let mut second = developer();
        first.add_project(id);
        second.add_project(id);

        assert_eq!(first.do_daily_work(true, &mut ledger).unwrap(), WorkOutcome::Developed(id));
        assert_eq!(second.do_daily_work(true, &mut ledger).unwrap(), WorkOutcome::Released(id));
        assert_eq!(ledger.get(id).unwrap().status(), ProjectStatus::Completed);
    }

    #[test]
    fn test_tester_takes_one_day_regardless_of_complexity() {
        let mut ledger = ProjectLedger::new();
        let id = ledger.admit(Project::new(DepartmentKind::Mob, 3));
        ledger.get_mut(id).unwrap().hand_off_to_qa().unwrap();

        let mut qa = tester();
        qa.add_project(id);
        assert!(qa.is_busy(&ledger));

        assert_eq!(qa.do_daily_work(true, &mut ledger).unwrap(), WorkOutcome::Tested(id));
        assert_eq!(ledger.get(id).unwrap().status(), ProjectStatus::Tested);
        assert!(!qa.is_busy(&ledger));
    }

    #[test]
    fn test_idle_days_and_dismissal_threshold() {
        let mut ledger = ProjectLedger::new();
        let mut dev = developer();

        for _ in 0..3 {
            assert_eq!(dev.do_daily_work(false, &mut ledger).unwrap(), WorkOutcome::Idle);
        }
        assert_eq!(dev.days(), 3);
        assert!(!dev.check_dismissal(DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL));

        dev.do_daily_work(false, &mut ledger).unwrap();
        assert!(dev.check_dismissal(DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL));
    }

    #[test]
    fn test_new_assignment_resets_counter() {
        let mut ledger = ProjectLedger::new();
        let mut dev = developer();
        dev.do_daily_work(false, &mut ledger).unwrap();
        dev.do_daily_work(false, &mut ledger).unwrap();

        let id = ledger.admit(Project::new(DepartmentKind::Web, 2));
        dev.add_project(id);
        assert_eq!(dev.days(), 0);
        assert_eq!(dev.projects(), &[id]);
    }

    #[test]
    fn test_missing_project_is_an_error() {
        let mut ledger = ProjectLedger::new();
        let mut dev = developer();
        dev.add_project(ProjectId(42));
        assert_eq!(
            dev.do_daily_work(true, &mut ledger).unwrap_err(),
            CompanyError::UnknownProject(ProjectId(42))
        );
    }
}
