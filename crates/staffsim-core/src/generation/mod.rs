//! Generation - procedural creation of customer demand

mod projects;

pub use projects::*;
