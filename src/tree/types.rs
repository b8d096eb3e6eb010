//! Permanent tree data structures.

use serde::{Deserialize, Serialize};

/// Summed bonuses of every owned tree node. Cached on the run at start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeBonus {
    /// Flat starting attack
    pub atk: i32,
    /// Flat starting max HP
    pub hp: i32,
    /// Flat starting defense
    pub def: i32,
    /// Added to the base rare-evolution rate
    pub rare_rate: f64,
    /// Bone reward bonus (0.1 = +10%)
    pub bone_multiplier: f64,
    /// Glacier damage reduction fraction
    pub ice_resist: f64,
    /// Volcano damage reduction fraction
    pub fire_resist: f64,
    /// Recruited ally HP bonus fraction
    pub ally_hp: f64,
    /// Recruited ally attack bonus fraction
    pub ally_atk: f64,
    pub crit: f64,
    /// Starting level of every civilization
    pub start_civ_level: u32,
    /// Per-turn regeneration as a fraction of max HP
    pub regen: f64,
    /// Non-zero grants one revive per run
    pub revive: u32,
    pub ally_slots: u32,
    pub evolution_choices: u32,
    /// Change to the final awakening level requirement
    pub final_req_delta: i32,
    /// Added to the damage multiplier
    pub damage_multiplier: f64,
    /// Change to the micro awakening level requirement
    pub micro_req_delta: i32,
    /// Extra revive HP fraction above the 30% floor
    pub revive_pct: f64,
}

impl TreeBonus {
    pub const ZERO: TreeBonus = TreeBonus {
        atk: 0,
        hp: 0,
        def: 0,
        rare_rate: 0.0,
        bone_multiplier: 0.0,
        ice_resist: 0.0,
        fire_resist: 0.0,
        ally_hp: 0.0,
        ally_atk: 0.0,
        crit: 0.0,
        start_civ_level: 0,
        regen: 0.0,
        revive: 0,
        ally_slots: 0,
        evolution_choices: 0,
        final_req_delta: 0,
        damage_multiplier: 0.0,
        micro_req_delta: 0,
        revive_pct: 0.0,
    };

    /// Add another node's bonuses into this one.
    pub fn absorb(&mut self, other: &TreeBonus) {
        self.atk += other.atk;
        self.hp += other.hp;
        self.def += other.def;
        self.rare_rate += other.rare_rate;
        self.bone_multiplier += other.bone_multiplier;
        self.ice_resist += other.ice_resist;
        self.fire_resist += other.fire_resist;
        self.ally_hp += other.ally_hp;
        self.ally_atk += other.ally_atk;
        self.crit += other.crit;
        self.start_civ_level += other.start_civ_level;
        self.regen += other.regen;
        self.revive += other.revive;
        self.ally_slots += other.ally_slots;
        self.evolution_choices += other.evolution_choices;
        self.final_req_delta += other.final_req_delta;
        self.damage_multiplier += other.damage_multiplier;
        self.micro_req_delta += other.micro_req_delta;
        self.revive_pct += other.revive_pct;
    }

    pub fn has_revive(&self) -> bool {
        self.revive > 0
    }
}

impl Default for TreeBonus {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Display grouping of tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeCategory {
    Attack,
    Health,
    Defense,
    Crit,
    Bone,
    Ally,
    Environment,
    Special,
}

/// A purchasable node of the permanent tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeNode {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u32,
    pub tier: u8,
    pub category: TreeCategory,
    /// Node that must be owned first
    pub requires: Option<&'static str>,
    pub effect: TreeBonus,
}
