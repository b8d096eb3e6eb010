//! Evolution tag synergies.
//!
//! Two evolutions sharing a tag activate its tier 1 bonus, three or more the
//! tier 2 bonus. Bonuses are recomputed from the evolution list every tick
//! rather than stored on the run.

pub mod data;
pub mod logic;
pub mod types;

pub use data::*;
pub use logic::*;
pub use types::*;
