//! Staffsim Core - Software Company Staffing Simulation
//!
//! A day-by-day model of a small software company: customer projects arrive,
//! departments hire and assign staff, developers build, testers test, and
//! employees left idle too long are let go.
//!
//! # Architecture
//!
//! - **Components**: projects, employees and their ids
//! - **Systems**: department policy (Mob, Web, QA), events, dismissal
//! - **Manager**: registry, backlog and the phases of a day
//! - **Engine**: drives the manager with a project source
//!
//! # Example
//!
//! ```rust
//! use staffsim_core::prelude::*;
//!
//! let config = SimulationConfig {
//!     seed: Some(1),
//!     ..Default::default()
//! };
//! let mut engine = SimulationEngine::from_config(&config).unwrap();
//! engine.run(config.days).unwrap();
//!
//! let stats = engine.stats();
//! assert!(stats.dismissed <= stats.hired);
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod manager;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::SimulationConfig;
    pub use crate::engine::{DayReport, SimulationEngine};
    pub use crate::error::{CompanyError, ConfigError};
    pub use crate::generation::{ProjectSource, RandomProjects, ScriptedProjects};
    pub use crate::manager::{CompanyStats, Manager};
    pub use crate::systems::{CompanyEvent, Department};
}
