//! Primal Path - Roguelite Battle Simulation Engine
//!
//! Pure state transitions for a run of Primal Path: battle ticks,
//! evolutions, synergies, awakenings, events, skills and the permanent
//! tree, plus save and meta-progression persistence. Presentation layers
//! drive the engine through `run::dispatch` and `run::step_battle`.

pub mod build_info;
pub mod civ;
pub mod combat;
pub mod core;
pub mod events;
pub mod evolution;
pub mod meta;
pub mod run;
pub mod save;
pub mod simulator;
pub mod skills;
pub mod synergy;
pub mod tables;
pub mod tree;
pub mod utils;
