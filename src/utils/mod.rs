//! Utility modules.

pub mod persistence;

pub use persistence::*;
