//! Department system - hiring, project assignment and the daily work loop
//!
//! A department owns its employees in two disjoint pools. Every employee is
//! in exactly one of them: `free` (waiting for work) or `busy` (holding a
//! project at the stage its role works on). Policy differences between Mob,
//! Web and QA come from [`DepartmentKind`].

use serde::Serialize;

use super::dismissal::DismissalCandidate;
use super::events::{record, CompanyEvent};
use crate::components::{
    DepartmentKind, Employee, EmployeeId, Project, ProjectId, ProjectLedger, WorkOutcome,
};
use crate::error::CompanyError;

/// What one department produced during a day of work
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentDay {
    /// Projects that finished development and must be re-queued for QA
    pub handed_to_qa: Vec<ProjectId>,
    /// Projects that finished testing
    pub tested: Vec<ProjectId>,
    /// Free employees idle for longer than the limit, in free-pool order
    pub dismissal_candidates: Vec<DismissalCandidate>,
}

/// Snapshot of a department's pools
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentStatus {
    pub department: DepartmentKind,
    pub free: Vec<EmployeeId>,
    pub busy: Vec<EmployeeId>,
}

#[derive(Debug, Clone)]
pub struct Department {
    kind: DepartmentKind,
    free: Vec<Employee>,
    busy: Vec<Employee>,
    /// Sequence number of the last hire, used for employee ids
    last_hire: u32,
}

impl Department {
    pub fn new(kind: DepartmentKind) -> Self {
        Self {
            kind,
            free: Vec::new(),
            busy: Vec::new(),
            last_hire: 0,
        }
    }

    pub fn kind(&self) -> DepartmentKind {
        self.kind
    }

    pub fn free(&self) -> &[Employee] {
        &self.free
    }

    pub fn busy(&self) -> &[Employee] {
        &self.busy
    }

    pub fn headcount(&self) -> usize {
        self.free.len() + self.busy.len()
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.free.iter().chain(self.busy.iter()).find(|e| e.id == id)
    }

    pub fn status(&self) -> DepartmentStatus {
        DepartmentStatus {
            department: self.kind,
            free: self.free.iter().map(|e| e.id).collect(),
            busy: self.busy.iter().map(|e| e.id).collect(),
        }
    }

    /// Hire staff for one backlog project of `complexity`. Returns the number hired.
    pub fn add_employees(&mut self, complexity: u32, events: &mut Vec<CompanyEvent>) -> u32 {
        let count = self.kind.hires_for(complexity);
        let role = self.kind.employee_role();

        let mut hired = Vec::with_capacity(count as usize);
        for _ in 0..count {
            self.last_hire += 1;
            let employee = Employee::new(EmployeeId::new(self.kind, self.last_hire), role);
            hired.push(employee.id);
            self.free.push(employee);
        }

        record(
            events,
            CompanyEvent::Hired {
                department: self.kind,
                employees: hired,
            },
        );
        count
    }

    /// Assign `project` to the longest-waiting free employees.
    ///
    /// Either the full staffing requirement is met or nothing changes and
    /// `false` is returned. A project that needs nobody is never staffed.
    pub fn appoint_employees(&mut self, project: &Project, events: &mut Vec<CompanyEvent>) -> bool {
        let required = self.kind.staff_required(project.complexity());
        if required == 0 || required > self.free.len() {
            return false;
        }

        for mut employee in self.free.drain(..required) {
            employee.add_project(project.id);
            record(
                events,
                CompanyEvent::Assigned {
                    employee: employee.id,
                    project: project.id,
                },
            );
            self.busy.push(employee);
        }
        true
    }

    /// Run one day: busy employees first, then everyone free (including those
    /// just released). Free employees idle for more than `idle_limit` days are
    /// returned as dismissal candidates.
    pub fn start_employees_daily_work(
        &mut self,
        ledger: &mut ProjectLedger,
        idle_limit: u32,
        events: &mut Vec<CompanyEvent>,
    ) -> Result<DepartmentDay, CompanyError> {
        let mut day = DepartmentDay::default();

        let mut idx = 0;
        while idx < self.busy.len() {
            let outcome = self.busy[idx].do_daily_work(true, ledger)?;
            if !outcome.releases() {
                idx += 1;
                continue;
            }

            let employee = self.busy.remove(idx);
            match outcome {
                WorkOutcome::Developed(project) => {
                    day.handed_to_qa.push(project);
                    record(events, CompanyEvent::HandedToQa { project, employee: employee.id });
                }
                WorkOutcome::Tested(project) => {
                    day.tested.push(project);
                    record(events, CompanyEvent::Tested { project, employee: employee.id });
                }
                _ => {}
            }
            self.free.push(employee);
        }

        for employee in &mut self.free {
            employee.do_daily_work(false, ledger)?;
            if employee.check_dismissal(idle_limit) {
                day.dismissal_candidates.push(DismissalCandidate::from(&*employee));
            }
        }

        let status = self.status();
        record(
            events,
            CompanyEvent::Status {
                department: status.department,
                free: status.free,
                busy: status.busy,
            },
        );

        Ok(day)
    }

    /// Permanently remove an idle employee
    pub fn dismiss(
        &mut self,
        id: EmployeeId,
        events: &mut Vec<CompanyEvent>,
    ) -> Result<Employee, CompanyError> {
        let Some(idx) = self.free.iter().position(|e| e.id == id) else {
            return Err(CompanyError::EmployeeNotIdle(id));
        };
        let employee = self.free.remove(idx);
        record(
            events,
            CompanyEvent::Dismissed {
                employee: employee.id,
                assignments: employee.projects().len(),
            },
        );
        Ok(employee)
    }
}
