//! Customer demand - where new projects come from each day

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::{DepartmentKind, Project};
use crate::config::{ConfigIssue, SimulationConfig, MAX_PROJECTS_PER_DAY_LIMIT};
use crate::error::ConfigError;

/// Supplies the batch of new projects for a day
pub trait ProjectSource {
    fn next_batch(&mut self, day: u32) -> Vec<Project>;
}

/// Shape of the random daily demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandProfile {
    pub max_projects_per_day: u32,
    pub min_complexity: u32,
    pub max_complexity: u32,
}

impl Default for DemandProfile {
    fn default() -> Self {
        DemandProfile::from(&SimulationConfig::default())
    }
}

impl From<&SimulationConfig> for DemandProfile {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            max_projects_per_day: config.max_projects_per_day,
            min_complexity: config.min_complexity,
            max_complexity: config.max_complexity,
        }
    }
}

impl DemandProfile {
    /// Every problem that would make generation panic or emit unworkable projects
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.min_complexity == 0 {
            issues.push(ConfigIssue::ZeroComplexity);
        }
        if self.min_complexity > self.max_complexity {
            issues.push(ConfigIssue::ComplexityRange {
                min: self.min_complexity,
                max: self.max_complexity,
            });
        }
        if self.max_projects_per_day > MAX_PROJECTS_PER_DAY_LIMIT {
            issues.push(ConfigIssue::TooManyProjects(self.max_projects_per_day));
        }

        issues
    }
}

/// Generate one day of demand.
///
/// Between 0 and `max_projects_per_day` projects arrive, all for the same
/// development department, each with its own complexity.
pub fn generate_projects(rng: &mut impl Rng, profile: &DemandProfile) -> Vec<Project> {
    let count = rng.gen_range(0..=profile.max_projects_per_day);
    let kinds = DepartmentKind::DEVELOPMENT;
    let kind = kinds[rng.gen_range(0..kinds.len())];

    (0..count)
        .map(|_| {
            let complexity = rng.gen_range(profile.min_complexity..=profile.max_complexity);
            Project::new(kind, complexity)
        })
        .collect()
}

/// Seeded random demand
#[derive(Debug, Clone)]
pub struct RandomProjects {
    rng: StdRng,
    profile: DemandProfile,
}

impl RandomProjects {
    /// `seed: None` draws a seed from the OS. Fails on a profile that
    /// [`DemandProfile::issues`] rejects.
    pub fn new(profile: DemandProfile, seed: Option<u64>) -> Result<Self, ConfigError> {
        let issues = profile.issues();
        if !issues.is_empty() {
            return Err(ConfigError::Invalid(issues));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { rng, profile })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Self::new(DemandProfile::from(config), config.seed)
    }
}

impl ProjectSource for RandomProjects {
    fn next_batch(&mut self, _day: u32) -> Vec<Project> {
        generate_projects(&mut self.rng, &self.profile)
    }
}

/// Fixed demand keyed by day; days without an entry bring nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedProjects {
    batches: BTreeMap<u32, Vec<Project>>,
}

impl ScriptedProjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_day(mut self, day: u32, projects: Vec<Project>) -> Self {
        self.batches.entry(day).or_default().extend(projects);
        self
    }
}

impl ProjectSource for ScriptedProjects {
    fn next_batch(&mut self, day: u32) -> Vec<Project> {
        self.batches.remove(&day).unwrap_or_default()
    }
}
