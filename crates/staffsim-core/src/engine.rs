//! Simulation engine - main entry point for running the company day by day

use serde::Serialize;

use crate::components::{EmployeeId, ProjectId};
use crate::config::SimulationConfig;
use crate::error::{CompanyError, ConfigError};
use crate::generation::{ProjectSource, RandomProjects};
use crate::manager::{CompanyStats, Manager};
use crate::systems::CompanyEvent;

/// What happened on one simulated day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub day: u32,
    pub hired: u32,
    pub new_projects: Vec<ProjectId>,
    pub appointed: Vec<ProjectId>,
    pub handed_to_qa: Vec<ProjectId>,
    pub tested: Vec<ProjectId>,
    pub dismissed: Option<EmployeeId>,
    /// Projects still waiting for staff at the end of the day
    pub backlog: usize,
}

/// Main simulation engine
pub struct SimulationEngine<S: ProjectSource = RandomProjects> {
    manager: Manager,
    source: S,
    /// Days simulated so far
    day: u32,
}

impl SimulationEngine<RandomProjects> {
    /// Standard three-department company with random demand
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        let config = config.clone().validated()?;
        let manager = Manager::with_standard_departments(config.idle_days_before_dismissal);
        Ok(Self::with_source(manager, RandomProjects::from_config(&config)?))
    }
}

impl<S: ProjectSource> SimulationEngine<S> {
    pub fn with_source(manager: Manager, source: S) -> Self {
        Self {
            manager,
            source,
            day: 0,
        }
    }

    /// Advance one day: hire, take new demand, appoint, work, dismiss
    pub fn step(&mut self) -> Result<DayReport, CompanyError> {
        self.day += 1;

        let hired = self.manager.hire_employees()?;
        let demand = self.source.next_batch(self.day);
        let new_projects = self.manager.add_projects(demand)?;
        let appointed = self.manager.appoint()?;

        // Anything older than today's demand was hired for this morning
        let stuck = self
            .manager
            .backlog()
            .iter()
            .filter(|id| !new_projects.contains(*id))
            .count();
        if stuck > 0 {
            log::warn!("day {}: {} project(s) still unstaffed after hiring", self.day, stuck);
        }

        let work = self.manager.start_departments_daily_work()?;

        let backlog = self.manager.backlog().len();
        if backlog > 0 {
            log::debug!("day {}: {} project(s) waiting for staff", self.day, backlog);
        }

        Ok(DayReport {
            day: self.day,
            hired,
            new_projects,
            appointed,
            handed_to_qa: work.handed_to_qa,
            tested: work.tested,
            dismissed: work.dismissed,
            backlog,
        })
    }

    /// Run `days` more days and return their reports
    pub fn run(&mut self, days: u32) -> Result<Vec<DayReport>, CompanyError> {
        let mut reports = Vec::with_capacity(days as usize);
        for _ in 0..days {
            reports.push(self.step()?);
        }
        let stats = self.stats();
        log::info!(
            "after {} day(s): {} completed, {} hired, {} dismissed",
            self.day,
            stats.completed,
            stats.hired,
            stats.dismissed
        );
        Ok(reports)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn stats(&self) -> CompanyStats {
        self.manager.stats()
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    pub fn drain_events(&mut self) -> Vec<CompanyEvent> {
        self.manager.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{DepartmentKind, Project, DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL};
    use crate::generation::ScriptedProjects;

    #[test]
    fn test_engine_creation() {
        let engine = SimulationEngine::from_config(&SimulationConfig::default()).unwrap();
        assert_eq!(engine.day(), 0);
        assert_eq!(engine.stats(), CompanyStats::default());
        assert_eq!(engine.manager().departments().len(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig {
            min_complexity: 0,
            ..Default::default()
        };
        assert!(SimulationEngine::from_config(&config).is_err());
    }

    #[test]
    fn test_quiet_days() {
        let manager = Manager::with_standard_departments(DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL);
        let mut engine = SimulationEngine::with_source(manager, ScriptedProjects::new());
        let reports = engine.run(5).unwrap();

        assert_eq!(reports.len(), 5);
        assert_eq!(engine.day(), 5);
        assert!(reports.iter().all(|r| r.hired == 0 && r.dismissed.is_none()));
    }

    #[test]
    fn test_new_demand_waits_for_next_hiring_round() {
        let manager = Manager::with_standard_departments(DEFAULT_IDLE_DAYS_BEFORE_DISMISSAL);
        let source = ScriptedProjects::new().on_day(1, vec![Project::new(DepartmentKind::Web, 1)]);
        let mut engine = SimulationEngine::with_source(manager, source);

        let day1 = engine.step().unwrap();
        assert_eq!(day1.hired, 0);
        assert_eq!(day1.new_projects.len(), 1);
        assert!(day1.appointed.is_empty());
        assert_eq!(day1.backlog, 1);

        let day2 = engine.step().unwrap();
        assert_eq!(day2.hired, 1);
        assert_eq!(day2.appointed, day1.new_projects);
        assert_eq!(day2.handed_to_qa, day1.new_projects);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimulationConfig {
            seed: Some(2024),
            ..Default::default()
        };
        let mut a = SimulationEngine::from_config(&config).unwrap();
        let mut b = SimulationEngine::from_config(&config).unwrap();

        assert_eq!(a.run(30).unwrap(), b.run(30).unwrap());
        assert_eq!(a.stats(), b.stats());
    }
}
