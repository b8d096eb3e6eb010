//! Meta-progression across runs: run history, aggregate stats and
//! achievements. Stored next to the save under separate keys.

pub mod data;
pub mod logic;
pub mod persistence;
pub mod types;

pub use data::*;
pub use logic::*;
pub use persistence::*;
pub use types::*;
