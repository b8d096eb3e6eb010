//! Permanent civilization tree bought with banked bones.
//!
//! Owned nodes persist in [`SaveData`](crate::save::SaveData) across runs and
//! are summed into a [`TreeBonus`] when a run starts.

pub mod data;
pub mod logic;
pub mod types;

pub use data::*;
pub use logic::*;
pub use types::*;
