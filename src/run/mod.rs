//! A single run, from difficulty select to the final boss.

pub mod challenge;
pub mod lifecycle;
pub mod phase;

pub use challenge::*;
pub use lifecycle::*;
pub use phase::*;
