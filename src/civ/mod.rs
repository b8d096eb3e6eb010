//! Civilization tracks, biomes and the rules derived from them.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
