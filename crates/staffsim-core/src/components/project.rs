//! Projects and the ledger that tracks them until they are tested.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DepartmentKind, ProjectId};
use crate::error::CompanyError;

/// Where a project is in its lifecycle. Only ever moves forward one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    InProgress,
    Completed,
    Tested,
}

impl ProjectStatus {
    /// The only status this one may move to
    pub fn next(&self) -> Option<ProjectStatus> {
        match self {
            ProjectStatus::InProgress => Some(ProjectStatus::Completed),
            ProjectStatus::Completed => Some(ProjectStatus::Tested),
            ProjectStatus::Tested => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Tested => "Tested",
        };
        f.write_str(label)
    }
}

/// A unit of customer work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Department currently responsible; rewritten to QA once development ends
    pub kind: DepartmentKind,
    /// Busy-days of development required
    complexity: u32,
    status: ProjectStatus,
}

impl Project {
    /// Complexity is checked when the project is handed to
    /// [`Manager::add_projects`](crate::manager::Manager::add_projects)
    pub fn new(kind: DepartmentKind, complexity: u32) -> Self {
        Self {
            id: ProjectId::default(),
            kind,
            complexity,
            status: ProjectStatus::InProgress,
        }
    }

    pub fn complexity(&self) -> u32 {
        self.complexity
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Move to `to`, which must be the immediate successor of the current status
    pub fn advance(&mut self, to: ProjectStatus) -> Result<(), CompanyError> {
        if self.status.next() != Some(to) {
            return Err(CompanyError::InvalidTransition {
                project: self.id,
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// Development is done: mark Completed and route the project to QA
    pub fn hand_off_to_qa(&mut self) -> Result<(), CompanyError> {
        self.advance(ProjectStatus::Completed)?;
        self.kind = DepartmentKind::Qa;
        Ok(())
    }
}

/// Every project the company currently tracks, keyed by id.
///
/// Projects enter through [`ProjectLedger::admit`] and leave once Tested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLedger {
    projects: BTreeMap<ProjectId, Project>,
    last_id: u32,
}

impl ProjectLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a newly arrived project and give it an id
    pub fn admit(&mut self, mut project: Project) -> ProjectId {
        self.last_id += 1;
        let id = ProjectId(self.last_id);
        project.id = id;
        self.projects.insert(id, project);
        id
    }

    pub fn get(&self, id: ProjectId) -> Result<&Project, CompanyError> {
        self.projects.get(&id).ok_or(CompanyError::UnknownProject(id))
    }

    pub fn get_mut(&mut self, id: ProjectId) -> Result<&mut Project, CompanyError> {
        self.projects.get_mut(&id).ok_or(CompanyError::UnknownProject(id))
    }

    pub fn remove(&mut self, id: ProjectId) -> Option<Project> {
        self.projects.remove(&id)
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.projects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_moves_forward_one_step() {
        let mut project = Project::new(DepartmentKind::Web, 2);
        assert_eq!(project.status(), ProjectStatus::InProgress);

        project.advance(ProjectStatus::Completed).unwrap();
        project.advance(ProjectStatus::Tested).unwrap();
        assert_eq!(project.status(), ProjectStatus::Tested);
        assert_eq!(project.status().next(), None);
    }

    #[test]
    fn test_status_cannot_skip_or_regress() {
        let mut project = Project::new(DepartmentKind::Mob, 1);
        let err = project.advance(ProjectStatus::Tested).unwrap_err();
        assert!(matches!(err, CompanyError::InvalidTransition { .. }));

        project.advance(ProjectStatus::Completed).unwrap();
        assert!(project.advance(ProjectStatus::InProgress).is_err());
        assert!(project.advance(ProjectStatus::Completed).is_err());
        assert_eq!(project.status(), ProjectStatus::Completed);
    }

    #[test]
    fn test_hand_off_rewrites_kind() {
        let mut project = Project::new(DepartmentKind::Mob, 3);
        project.hand_off_to_qa().unwrap();
        assert_eq!(project.kind, DepartmentKind::Qa);
        assert_eq!(project.status(), ProjectStatus::Completed);
        assert_eq!(project.complexity(), 3);
    }

    #[test]
    fn test_ledger_assigns_increasing_ids() {
        let mut ledger = ProjectLedger::new();
        let a = ledger.admit(Project::new(DepartmentKind::Web, 1));
        let b = ledger.admit(Project::new(DepartmentKind::Mob, 2));
        assert!(a < b);
        assert_eq!(ledger.get(b).unwrap().id, b);
        assert_eq!(ledger.len(), 2);

        ledger.remove(a);
        assert!(!ledger.contains(a));
        assert_eq!(ledger.get(a).unwrap_err(), CompanyError::UnknownProject(a));
    }
}
