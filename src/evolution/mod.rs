//! Evolutions offered between battles and the awakenings they unlock.

pub mod awakening;
pub mod data;
pub mod logic;
pub mod types;

pub use awakening::*;
pub use data::*;
pub use logic::*;
pub use types::*;
