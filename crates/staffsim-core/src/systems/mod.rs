//! Systems - department policy, daily work and dismissal logic

mod department;
mod dismissal;
mod events;

pub use department::*;
pub use dismissal::*;
pub use events::*;
