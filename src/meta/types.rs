//! Meta-progression data structures.

use crate::run::challenge::ChallengeId;
use crate::synergy::SynergyTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunResult {
    Victory,
    Defeat,
}

/// Summary of one finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub id: String,
    /// RFC 3339 timestamp of the run's end
    pub date: String,
    pub result: RunResult,
    pub difficulty: usize,
    pub biome_count: u32,
    pub total_kills: u32,
    pub max_damage: i32,
    pub total_damage_dealt: u64,
    pub total_damage_taken: u64,
    pub total_healing: u64,
    pub evolution_count: usize,
    pub synergy_count: usize,
    pub event_count: u32,
    pub skill_usage_count: u32,
    pub bone_earned: u32,
    pub playtime_secs: u64,
    pub awakening: Option<String>,
    pub challenge: Option<ChallengeId>,
}

impl RunStats {
    pub fn is_victory(&self) -> bool {
        self.result == RunResult::Victory
    }
}

/// Lifetime totals used by achievement checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateStats {
    pub total_runs: u32,
    pub total_clears: u32,
    pub total_kills: u64,
    pub total_bone_earned: u64,
    pub total_events: u64,
    pub cleared_difficulties: BTreeSet<usize>,
    /// Awakening ids ever reached
    pub achieved_awakenings: BTreeSet<String>,
    pub synergies_tier1: BTreeSet<SynergyTag>,
    pub synergies_tier2: BTreeSet<SynergyTag>,
    pub cleared_challenges: BTreeSet<ChallengeId>,
    /// Fraction of the tree owned when the last run ended
    pub tree_completion_rate: f64,
    /// Damage taken during the most recent run
    pub last_boss_damage_taken: u64,
}

/// Achievement categories for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Clears,
    Combat,
    Collection,
    Exploration,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 4] = [
        AchievementCategory::Clears,
        AchievementCategory::Combat,
        AchievementCategory::Collection,
        AchievementCategory::Exploration,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Clears => "Clears",
            AchievementCategory::Combat => "Combat",
            AchievementCategory::Collection => "Collection",
            AchievementCategory::Exploration => "Exploration",
        }
    }
}

/// What unlocks an achievement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AchievementCondition {
    FirstClear,
    ClearCount(u32),
    ClearDifficulty(usize),
    AllDifficultiesCleared,
    AllAwakenings,
    MaxDamage(i32),
    TotalKills(u64),
    SynergyTier2(SynergyTag),
    AllSynergiesTier1,
    EventCount(u64),
    ChallengeClear(ChallengeId),
    NoDamageBoss,
    SpeedClear { max_secs: u64 },
    BoneHoarder(u64),
    FullTree,
}

#[derive(Debug, Clone, Copy)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub condition: AchievementCondition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementState {
    pub id: String,
    pub unlocked: bool,
    pub unlocked_date: Option<String>,
}

impl AchievementState {
    pub fn locked(id: &str) -> Self {
        Self {
            id: id.to_string(),
            unlocked: false,
            unlocked_date: None,
        }
    }
}
