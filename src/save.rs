//! Cross-run save data.

use crate::core::constants::SAVE_KEY;
use crate::utils::persistence::JsonStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io;

/// Permanent progress that survives between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    /// Banked bone currency
    pub bones: u32,
    /// Ids of purchased tree nodes
    pub tree: BTreeSet<String>,
    pub clears: u32,
    pub runs: u32,
    /// Difficulty indices cleared at least once
    pub best: BTreeSet<usize>,
}

impl SaveData {
    pub fn has_cleared(&self, difficulty: usize) -> bool {
        self.best.contains(&difficulty)
    }

    /// Bank a run reward, recording a clear when the run was won.
    pub fn with_reward(&self, bones: u32, won: bool, difficulty: usize) -> SaveData {
        let mut next = self.clone();
        next.bones += bones;
        if won {
            next.clears += 1;
            next.best.insert(difficulty);
        }
        next
    }
}

/// Load the save, falling back to a fresh save.
pub fn load_save(store: &JsonStore) -> SaveData {
    store.load_or_default(SAVE_KEY)
}

pub fn write_save(store: &JsonStore, save: &SaveData) -> io::Result<()> {
    store.save(SAVE_KEY, save)
}
