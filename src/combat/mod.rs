//! Battle ticks: one exchange of blows between the tribe and the enemy.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
