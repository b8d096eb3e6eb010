//! Simulation configuration.

use crate::run::ChallengeId;
use crate::save::SaveData;
use crate::tables::get_difficulty;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Difficulty index; the save is given enough clears to unlock it
    pub difficulty: usize,

    /// Challenge applied at run start
    pub challenge: Option<ChallengeId>,

    /// Tree node ids owned before the run
    pub tree_nodes: Vec<String>,

    /// Dispatch steps per run before giving up
    pub max_steps_per_run: u64,

    /// Whether the policy fires skills as soon as they are ready
    pub use_skills: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            difficulty: 0,
            challenge: None,
            tree_nodes: Vec::new(),
            max_steps_per_run: 20_000,
            use_skills: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for one difficulty
    pub fn difficulty_test(difficulty: usize) -> Self {
        Self {
            num_runs: 200,
            difficulty,
            ..Default::default()
        }
    }

    /// Quick config for one challenge on the first difficulty
    pub fn challenge_test(challenge: ChallengeId) -> Self {
        Self {
            num_runs: 200,
            challenge: Some(challenge),
            ..Default::default()
        }
    }

    /// Every tree node owned
    pub fn full_tree_test(difficulty: usize) -> Self {
        Self {
            num_runs: 200,
            difficulty,
            tree_nodes: crate::tree::TREE_NODES
                .iter()
                .map(|n| n.id.to_string())
                .collect(),
            ..Default::default()
        }
    }

    /// Save the simulated runs start from.
    pub fn starting_save(&self) -> SaveData {
        let clears = get_difficulty(self.difficulty)
            .map(|d| d.unlock_clears)
            .unwrap_or(0);
        SaveData {
            clears,
            tree: self.tree_nodes.iter().cloned().collect(),
            ..SaveData::default()
        }
    }
}
