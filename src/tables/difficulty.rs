//! Difficulty levels.

use serde::{Deserialize, Serialize};

/// Scaling multipliers copied onto a run at start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub env_scale: f64,
    pub bone_multiplier: f64,
    pub hp_multiplier: f64,
    pub atk_multiplier: f64,
}

impl Default for Difficulty {
    fn default() -> Self {
        DIFFICULTIES[0].scaling
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DifficultyDef {
    pub name: &'static str,
    pub description: &'static str,
    /// Total clears needed to select this difficulty
    pub unlock_clears: u32,
    pub scaling: Difficulty,
}

pub const DIFFICULTIES: [DifficultyDef; 4] = [
    DifficultyDef {
        name: "Primal",
        description: "Standard difficulty",
        unlock_clears: 0,
        scaling: Difficulty {
            env_scale: 1.0,
            bone_multiplier: 1.0,
            hp_multiplier: 1.0,
            atk_multiplier: 1.0,
        },
    },
    DifficultyDef {
        name: "Ice Age",
        description: "Harsher environment, bones +25%",
        unlock_clears: 1,
        scaling: Difficulty {
            env_scale: 1.6,
            bone_multiplier: 1.25,
            hp_multiplier: 1.7,
            atk_multiplier: 1.5,
        },
    },
    DifficultyDef {
        name: "Cataclysm",
        description: "Much stronger enemies, bones +50%",
        unlock_clears: 3,
        scaling: Difficulty {
            env_scale: 2.2,
            bone_multiplier: 1.5,
            hp_multiplier: 2.8,
            atk_multiplier: 2.4,
        },
    },
    DifficultyDef {
        name: "Mythic World",
        description: "Extreme, two final bosses, bones +80%",
        unlock_clears: 6,
        scaling: Difficulty {
            env_scale: 3.0,
            bone_multiplier: 1.8,
            hp_multiplier: 4.0,
            atk_multiplier: 3.2,
        },
    },
];

pub fn get_difficulty(index: usize) -> Option<&'static DifficultyDef> {
    DIFFICULTIES.get(index)
}

/// Whether a difficulty can be selected with this many total clears.
pub fn difficulty_unlocked(index: usize, clears: u32) -> bool {
    get_difficulty(index)
        .map(|d| clears >= d.unlock_clears)
        .unwrap_or(false)
}

/// Names of cleared difficulties, in table order.
pub fn cleared_difficulty_names(best: &std::collections::BTreeSet<usize>) -> Vec<&'static str> {
    DIFFICULTIES
        .iter()
        .enumerate()
        .filter(|(i, _)| best.contains(i))
        .map(|(_, d)| d.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_difficulties_get_harder() {
        for pair in DIFFICULTIES.windows(2) {
            assert!(pair[1].scaling.hp_multiplier > pair[0].scaling.hp_multiplier);
            assert!(pair[1].scaling.bone_multiplier > pair[0].scaling.bone_multiplier);
            assert!(pair[1].unlock_clears >= pair[0].unlock_clears);
        }
    }

    #[test]
    fn test_unlocks() {
        assert!(difficulty_unlocked(0, 0));
        assert!(!difficulty_unlocked(1, 0));
        assert!(difficulty_unlocked(3, 6));
        assert!(!difficulty_unlocked(4, 100));
    }

    #[test]
    fn test_cleared_names() {
        let best: BTreeSet<usize> = [0, 2].into_iter().collect();
        assert_eq!(cleared_difficulty_names(&best), vec!["Primal", "Cataclysm"]);
    }
}
