//! Manager - owns the departments and the backlog, and runs each phase of a day

use serde::{Deserialize, Serialize};

use crate::components::{
    DepartmentKind, EmployeeId, Project, ProjectId, ProjectLedger,
    DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL,
};
use crate::error::CompanyError;
use crate::systems::{record, select_for_dismissal, CompanyEvent, Department};

/// Running company-wide counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyStats {
    pub hired: u32,
    pub completed: u32,
    pub dismissed: u32,
}

/// Combined result of every department's daily work
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyWork {
    pub handed_to_qa: Vec<ProjectId>,
    pub tested: Vec<ProjectId>,
    pub dismissed: Option<EmployeeId>,
}

#[derive(Debug, Clone)]
pub struct Manager {
    /// Registration order is the order departments work in
    departments: Vec<Department>,
    /// Unassigned projects, oldest first
    backlog: Vec<ProjectId>,
    ledger: ProjectLedger,
    stats: CompanyStats,
    idle_limit: u32,
    events: Vec<CompanyEvent>,
}

fn find_department_mut(
    departments: &mut [Department],
    kind: DepartmentKind,
) -> Result<&mut Department, CompanyError> {
    departments
        .iter_mut()
        .find(|d| d.kind() == kind)
        .ok_or(CompanyError::UnregisteredDepartment(kind))
}

impl Manager {
    /// A manager with no departments
    pub fn new() -> Self {
        Self::with_idle_limit(DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL)
    }

    pub fn with_idle_limit(idle_limit: u32) -> Self {
        Self {
            departments: Vec::new(),
            backlog: Vec::new(),
            ledger: ProjectLedger::new(),
            stats: CompanyStats::default(),
            idle_limit,
            events: Vec::new(),
        }
    }

    /// Web, Mob and QA, registered in that order
    pub fn with_standard_departments(idle_limit: u32) -> Self {
        let mut manager = Self::with_idle_limit(idle_limit);
        manager.departments = DepartmentKind::ALL.into_iter().map(Department::new).collect();
        manager
    }

    /// Register departments. Nothing is added if any kind is already present.
    pub fn add_departments(
        &mut self,
        departments: impl IntoIterator<Item = Department>,
    ) -> Result<(), CompanyError> {
        let incoming: Vec<Department> = departments.into_iter().collect();
        for (idx, department) in incoming.iter().enumerate() {
            let kind = department.kind();
            let taken = self.departments.iter().any(|d| d.kind() == kind)
                || incoming[..idx].iter().any(|d| d.kind() == kind);
            if taken {
                return Err(CompanyError::DuplicateDepartment(kind));
            }
        }
        self.departments.extend(incoming);
        Ok(())
    }

    /// Admit new projects to the end of the backlog, in arrival order.
    /// Nothing is admitted if any project has zero complexity.
    pub fn add_projects(
        &mut self,
        projects: impl IntoIterator<Item = Project>,
    ) -> Result<Vec<ProjectId>, CompanyError> {
        let incoming: Vec<Project> = projects.into_iter().collect();
        if let Some(project) = incoming.iter().find(|p| p.complexity() == 0) {
            return Err(CompanyError::InvalidComplexity(project.kind));
        }

        let mut ids = Vec::new();
        for project in incoming {
            let department = project.kind;
            let complexity = project.complexity();
            let id = self.ledger.admit(project);
            record(
                &mut self.events,
                CompanyEvent::ProjectAdded {
                    project: id,
                    department,
                    complexity,
                },
            );
            self.backlog.push(id);
            ids.push(id);
        }
        Ok(ids)
    }

    /// Each backlog entry asks its department to hire for it
    pub fn hire_employees(&mut self) -> Result<u32, CompanyError> {
        let mut hired = 0;
        for id in &self.backlog {
            let project = self.ledger.get(*id)?;
            let department = find_department_mut(&mut self.departments, project.kind)?;
            hired += department.add_employees(project.complexity(), &mut self.events);
        }
        self.stats.hired += hired;
        Ok(hired)
    }

    /// Offer every backlog project to its department, oldest first.
    /// Returns the projects that were staffed; the rest wait for tomorrow.
    pub fn appoint(&mut self) -> Result<Vec<ProjectId>, CompanyError> {
        let mut appointed = Vec::new();
        for id in &self.backlog {
            let project = self.ledger.get(*id)?;
            let department = find_department_mut(&mut self.departments, project.kind)?;
            if department.appoint_employees(project, &mut self.events) {
                appointed.push(*id);
            }
        }
        self.backlog.retain(|id| !appointed.contains(id));
        Ok(appointed)
    }

    /// Run one day in every department, re-queue developed projects for QA,
    /// count tested ones, and dismiss at most one idle employee.
    pub fn start_departments_daily_work(&mut self) -> Result<DailyWork, CompanyError> {
        let mut work = DailyWork::default();
        let mut candidates = Vec::new();

        for department in &mut self.departments {
            let day = department.start_employees_daily_work(
                &mut self.ledger,
                self.idle_limit,
                &mut self.events,
            )?;
            work.handed_to_qa.extend(day.handed_to_qa);
            work.tested.extend(day.tested);
            candidates.extend(day.dismissal_candidates);
        }

        self.backlog.extend(work.handed_to_qa.iter().copied());
        for id in &work.tested {
            self.ledger.remove(*id);
            self.record_completed_project();
        }

        if let Some(worst) = select_for_dismissal(&mut candidates) {
            let department = find_department_mut(&mut self.departments, worst.employee.department)?;
            department.dismiss(worst.employee, &mut self.events)?;
            self.stats.dismissed += 1;
            work.dismissed = Some(worst.employee);
        }

        Ok(work)
    }

    pub fn record_completed_project(&mut self) {
        self.stats.completed += 1;
    }

    pub fn stats(&self) -> CompanyStats {
        self.stats
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn department(&self, kind: DepartmentKind) -> Option<&Department> {
        self.departments.iter().find(|d| d.kind() == kind)
    }

    pub fn backlog(&self) -> &[ProjectId] {
        &self.backlog
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.ledger.get(id).ok()
    }

    pub fn ledger(&self) -> &ProjectLedger {
        &self.ledger
    }

    pub fn idle_limit(&self) -> u32 {
        self.idle_limit
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<CompanyEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}
