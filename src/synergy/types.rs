//! Synergy data structures.

use serde::{Deserialize, Serialize};

/// Tag carried by evolutions. Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SynergyTag {
    Fire,
    Ice,
    Regen,
    Shield,
    Hunt,
    Spirit,
    Tribe,
    Wild,
}

impl SynergyTag {
    pub const ALL: [SynergyTag; 8] = [
        SynergyTag::Fire,
        SynergyTag::Ice,
        SynergyTag::Regen,
        SynergyTag::Shield,
        SynergyTag::Hunt,
        SynergyTag::Spirit,
        SynergyTag::Tribe,
        SynergyTag::Wild,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SynergyTag::Fire => "Fire",
            SynergyTag::Ice => "Ice",
            SynergyTag::Regen => "Regen",
            SynergyTag::Shield => "Shield",
            SynergyTag::Hunt => "Hunt",
            SynergyTag::Spirit => "Spirit",
            SynergyTag::Tribe => "Tribe",
            SynergyTag::Wild => "Wild",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynergyStat {
    Atk,
    Def,
    Hp,
    /// Whole percentage points
    Crit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllyStat {
    Atk,
    Hp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageTarget {
    Burn,
    /// Reserved, currently ignored
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialSynergy {
    AwakeningBoost,
    AwakeningPower,
    EnvImmune,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SynergyEffect {
    StatBonus { stat: SynergyStat, value: i32 },
    DamageMultiplier { target: DamageTarget, multiplier: f64 },
    HealBonus { ratio: f64 },
    AllyBonus { stat: AllyStat, value: i32 },
    Special(SpecialSynergy),
    Compound(&'static [SynergyEffect]),
}

#[derive(Debug, Clone, Copy)]
pub struct SynergyTierDef {
    pub name: &'static str,
    pub description: &'static str,
    pub effect: SynergyEffect,
}

#[derive(Debug, Clone, Copy)]
pub struct SynergyDef {
    pub tag: SynergyTag,
    pub tier1: SynergyTierDef,
    pub tier2: SynergyTierDef,
}

impl SynergyDef {
    pub fn tier(&self, tier: u8) -> &SynergyTierDef {
        if tier >= 2 {
            &self.tier2
        } else {
            &self.tier1
        }
    }
}

/// A tag with enough evolutions to be active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSynergy {
    pub tag: SynergyTag,
    pub count: usize,
    /// 1 or 2
    pub tier: u8,
    pub bonus_name: String,
}

/// Summed synergy bonuses applied during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynergyBonus {
    pub atk_bonus: i32,
    pub def_bonus: i32,
    pub hp_bonus: i32,
    /// Whole percentage points
    pub crit_bonus: i32,
    pub burn_multiplier: f64,
    pub heal_bonus_ratio: f64,
    pub ally_atk_bonus: i32,
    pub ally_hp_bonus: i32,
    pub env_immune: bool,
}

impl Default for SynergyBonus {
    fn default() -> Self {
        Self {
            atk_bonus: 0,
            def_bonus: 0,
            hp_bonus: 0,
            crit_bonus: 0,
            burn_multiplier: 1.0,
            heal_bonus_ratio: 0.0,
            ally_atk_bonus: 0,
            ally_hp_bonus: 0,
            env_immune: false,
        }
    }
}
