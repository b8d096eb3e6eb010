//! Core engine state: constants, randomness, stat effects and the run aggregate.

pub mod constants;
pub mod effects;
pub mod rng;
pub mod run_state;

pub use effects::*;
pub use rng::*;
pub use run_state::*;
