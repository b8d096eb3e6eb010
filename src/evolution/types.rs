//! Evolution and awakening data structures.

use crate::civ::{CivType, CivTypeExt};
use crate::core::effects::EffectSet;
use crate::core::run_state::RunState;
use crate::synergy::SynergyTag;
use serde::{Deserialize, Serialize};

/// Static evolution definition.
#[derive(Debug, Clone, Copy)]
pub struct EvolutionDef {
    pub name: &'static str,
    pub description: &'static str,
    pub civ: CivType,
    /// 0 common, 1 rare
    pub rarity: u8,
    pub effect: EffectSet,
    pub tags: &'static [SynergyTag],
}

impl EvolutionDef {
    pub fn is_rare(&self) -> bool {
        self.rarity > 0
    }
}

/// An evolution owned by (or offered to) a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    pub name: String,
    pub description: String,
    pub civ: CivType,
    pub rarity: u8,
    pub effect: EffectSet,
    pub tags: Vec<SynergyTag>,
}

impl From<&EvolutionDef> for Evolution {
    fn from(def: &EvolutionDef) -> Self {
        Self {
            name: def.name.to_string(),
            description: def.description.to_string(),
            civ: def.civ,
            rarity: def.rarity,
            effect: def.effect,
            tags: def.tags.to_vec(),
        }
    }
}

/// Result of taking an evolution.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub run: RunState,
    /// Name of an ally recruited by the level-up
    pub ally_joined: Option<String>,
    /// Name of an ally brought back by a revive evolution
    pub ally_revived: Option<String>,
}

/// Stats the run would have after an evolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionPreview {
    /// Effective attack including multipliers
    pub atk: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub def: i32,
    pub crit_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwakeningTier {
    Micro,
    Final,
}

impl AwakeningTier {
    fn prefix(&self) -> &'static str {
        match self {
            AwakeningTier::Micro => "sa",
            AwakeningTier::Final => "fa",
        }
    }
}

/// Static awakening definition.
#[derive(Debug, Clone, Copy)]
pub struct AwakeningDef {
    pub name: &'static str,
    pub description: &'static str,
    pub civ: CivTypeExt,
    pub tier: AwakeningTier,
    pub effect: EffectSet,
    /// Multiplies living allies' attack
    pub ally_atk_multiplier: Option<i32>,
    /// Fully heals living allies
    pub ally_full_heal: bool,
}

/// An awakening whose requirements are met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AwakeningRule {
    pub civ: CivTypeExt,
    pub tier: AwakeningTier,
}

impl AwakeningRule {
    pub fn new(civ: CivTypeExt, tier: AwakeningTier) -> Self {
        Self { civ, tier }
    }

    /// Stable id such as `sa_tech` or `fa_bal`.
    pub fn id(&self) -> String {
        format!("{}_{}", self.tier.prefix(), self.civ.key())
    }
}

/// An awakening taken during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwokenRecord {
    pub id: String,
    pub name: String,
    pub civ: CivTypeExt,
    pub tier: AwakeningTier,
}

/// An upcoming awakening and how far away it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwakeningProgress {
    pub rule: AwakeningRule,
    pub name: &'static str,
    pub required_level: u32,
    pub remaining: u32,
}
