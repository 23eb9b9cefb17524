//! Component definitions for the company simulation.
//!
//! Components are plain data plus the small state transitions that belong
//! to them. Department policy and daily orchestration live in systems.

mod common;
mod employee;
mod project;

pub use common::*;
pub use employee::*;
pub use project::*;
