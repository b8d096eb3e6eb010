//! Event data structures.

use crate::civ::{BiomeId, CivType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStat {
    /// Raises max HP only
    Hp,
    Atk,
    Def,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CivTarget {
    Civ(CivType),
    /// The run's highest civilization
    Dominant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventEffect {
    StatChange { stat: EventStat, value: i32 },
    Heal { amount: i32 },
    Damage { amount: i32 },
    BoneChange { amount: i32 },
    AddAlly,
    RandomEvolution,
    CivLevelUp(CivTarget),
    Nothing,
}

/// Price paid before a choice's effect applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCost {
    Bone(u32),
    HpDamage(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Safe,
    Risky,
    Dangerous,
}

#[derive(Debug, Clone, Copy)]
pub struct EventChoice {
    pub label: &'static str,
    pub description: &'static str,
    pub effect: EventEffect,
    pub risk: RiskLevel,
    pub cost: Option<EventCost>,
}

#[derive(Debug, Clone, Copy)]
pub struct EventDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub situation: &'static str,
    pub choices: &'static [EventChoice],
    /// Biomes where this event is twice as likely
    pub biome_affinity: &'static [BiomeId],
    /// Biomes that must be cleared before the event can appear
    pub min_biomes_cleared: u32,
}

/// Result line shown after a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcomeText {
    pub icon: &'static str,
    pub text: String,
}
