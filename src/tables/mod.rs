//! Static content tables: difficulties, enemies and ally templates.

pub mod allies;
pub mod difficulty;
pub mod enemies;

pub use allies::*;
pub use difficulty::*;
pub use enemies::*;
