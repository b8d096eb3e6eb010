//! Skill data structures.

use crate::civ::CivTypeExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillId {
    FireBurst,
    NatureHeal,
    BloodRage,
    ShieldWall,
}

impl SkillId {
    pub const ALL: [SkillId; 4] = [
        SkillId::FireBurst,
        SkillId::NatureHeal,
        SkillId::BloodRage,
        SkillId::ShieldWall,
    ];
}

/// What a skill does when used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillEffect {
    /// Fixed damage to the current enemy
    Damage { base: i32, multiplier: f64 },
    /// Heal the player, and each living ally by a share of its max HP
    Heal { base: i32, ally_ratio: f64 },
    /// Temporary attack multiplier paid for with HP
    AttackBuff {
        multiplier: f64,
        hp_cost: i32,
        duration: u32,
    },
    /// Temporary incoming damage reduction
    Shield { reduction: f64, duration: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct SkillDef {
    pub id: SkillId,
    pub name: &'static str,
    pub description: &'static str,
    /// `Balanced` compares against the lowest civilization level
    pub civ: CivTypeExt,
    pub required_level: u32,
    /// Cooldown in battles
    pub cooldown: u32,
    pub effect: SkillEffect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BuffEffect {
    Attack { multiplier: f64 },
    Shield { reduction: f64 },
}

/// A timed skill effect, decremented once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Buff {
    pub skill: SkillId,
    pub remaining_turns: u32,
    pub effect: BuffEffect,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillState {
    pub available: Vec<SkillId>,
    /// Battles left before each skill can be used again
    pub cooldowns: BTreeMap<SkillId, u32>,
    pub buffs: Vec<Buff>,
}

impl SkillState {
    pub fn cooldown(&self, id: SkillId) -> u32 {
        self.cooldowns.get(&id).copied().unwrap_or(0)
    }

    pub fn is_ready(&self, id: SkillId) -> bool {
        self.available.contains(&id) && self.cooldown(id) == 0
    }

    /// Multiplier of the first active attack buff.
    pub fn attack_buff(&self) -> Option<f64> {
        self.buffs.iter().find_map(|b| match b.effect {
            BuffEffect::Attack { multiplier } => Some(multiplier),
            _ => None,
        })
    }

    pub fn shield_reduction(&self) -> Option<f64> {
        self.buffs.iter().find_map(|b| match b.effect {
            BuffEffect::Shield { reduction } => Some(reduction),
            _ => None,
        })
    }
}
