//! Autoplay balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of runs through the same dispatch surface a player uses,
//! with a fixed policy, to analyze:
//! - Win rate per difficulty and challenge
//! - Where runs die (which biome, or the final boss)
//! - Kill, turn and bone pacing
//!
//! The policy takes the best previewed evolution, the first biome on offer,
//! the first affordable event choice, every ready skill, and never revives.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{SimReport, SimRun, Stage};
pub use runner::{run_simulation, simulate_single_run};
