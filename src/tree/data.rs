//! Permanent tree node definitions.

use super::types::{TreeBonus, TreeCategory, TreeNode};
use TreeCategory::*;

const fn node(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    cost: u32,
    tier: u8,
    category: TreeCategory,
    requires: Option<&'static str>,
    effect: TreeBonus,
) -> TreeNode {
    TreeNode {
        id,
        name,
        description,
        cost,
        tier,
        category,
        requires,
        effect,
    }
}

const Z: TreeBonus = TreeBonus::ZERO;

/// Minimum total clears required to buy nodes of each tier (index = tier).
pub const TIER_UNLOCK_CLEARS: [u32; 9] = [0, 0, 0, 0, 1, 1, 3, 6, 10];

pub const MAX_TIER: u8 = 8;

pub fn tier_name(tier: u8) -> &'static str {
    match tier {
        1 => "Tier 1 Basics",
        2 => "Tier 2 Applied",
        3 => "Tier 3 Advanced",
        4 => "Tier 4 Mastery",
        5 => "Tier 5 Legend",
        6 => "Tier 6 Myth",
        7 => "Tier 7 Transcendence",
        8 => "Tier 8 Ultimate",
        _ => "Unknown Tier",
    }
}

pub const TREE_NODES: &[TreeNode] = &[
    // Tier 1
    node("atk1", "Primal Strength", "ATK+1", 15, 1, Attack, None, TreeBonus { atk: 1, ..Z }),
    node("hp1", "Thick Hide", "HP+10", 15, 1, Health, None, TreeBonus { hp: 10, ..Z }),
    node("def1", "Hard Bones", "DEF+1", 20, 1, Defense, None, TreeBonus { def: 1, ..Z }),
    node("rare1", "Memory of Evolution", "Rare +5%", 25, 1, Special, None, TreeBonus { rare_rate: 0.05, ..Z }),
    node("bone1", "Bone Scent", "Bones +10%", 30, 1, Bone, None, TreeBonus { bone_multiplier: 0.1, ..Z }),
    node("spd1", "Swift Feet", "Crit +3%", 20, 1, Crit, None, TreeBonus { crit: 0.03, ..Z }),
    // Tier 2
    node("atk2", "Stonecraft", "ATK+2", 55, 2, Attack, Some("atk1"), TreeBonus { atk: 2, ..Z }),
    node("hp2", "Unyielding Blood", "HP+20", 55, 2, Health, Some("hp1"), TreeBonus { hp: 20, ..Z }),
    node("def2", "Heart of Stone", "DEF+1", 60, 2, Defense, Some("def1"), TreeBonus { def: 1, ..Z }),
    node("ice1", "Cold Tolerance", "Glacier -25%", 50, 2, Environment, None, TreeBonus { ice_resist: 0.25, ..Z }),
    node("fire1", "Heat Tolerance", "Volcano -25%", 50, 2, Environment, None, TreeBonus { fire_resist: 0.25, ..Z }),
    node("crit1", "Vital Points", "Crit +5%", 65, 2, Crit, Some("spd1"), TreeBonus { crit: 0.05, ..Z }),
    node("ally1", "Chieftain's Voice", "Ally HP +15%", 70, 2, Ally, None, TreeBonus { ally_hp: 0.15, ..Z }),
    node("bone2", "Bone Collector", "Bones +10%", 80, 2, Bone, Some("bone1"), TreeBonus { bone_multiplier: 0.1, ..Z }),
    node("env1", "Adaptation", "Environment -15%", 60, 2, Environment, None, TreeBonus { ice_resist: 0.15, fire_resist: 0.15, ..Z }),
    // Tier 3
    node("atk3", "Beast Soul", "ATK+3", 140, 3, Attack, Some("atk2"), TreeBonus { atk: 3, ..Z }),
    node("hp3", "Earth's Blessing", "HP+30", 140, 3, Health, Some("hp2"), TreeBonus { hp: 30, ..Z }),
    node("crit2", "Killing Blow", "Crit +5%", 160, 3, Crit, Some("crit1"), TreeBonus { crit: 0.05, ..Z }),
    node("start1", "Seed of Civilization", "Start civ Lv1", 150, 3, Special, None, TreeBonus { start_civ_level: 1, ..Z }),
    node("ally2", "Tribal Bond", "Ally ATK +20%", 170, 3, Ally, Some("ally1"), TreeBonus { ally_atk: 0.2, ..Z }),
    node("ice2", "Master of Ice", "Glacier -50%", 180, 3, Environment, Some("ice1"), TreeBonus { ice_resist: 0.5, ..Z }),
    node("fire2", "Master of Flame", "Volcano -50%", 180, 3, Environment, Some("fire1"), TreeBonus { fire_resist: 0.5, ..Z }),
    node("heal1", "Regenerating Blood", "Regen 2%/turn", 160, 3, Health, None, TreeBonus { regen: 0.02, ..Z }),
    node("rare2", "Wisdom of Evolution", "Rare +8%", 190, 3, Special, Some("rare1"), TreeBonus { rare_rate: 0.08, ..Z }),
    node("dmg1", "Fighting Spirit", "All damage +8%", 180, 3, Attack, None, TreeBonus { damage_multiplier: 0.08, ..Z }),
    // Tier 4
    node("atk4", "Fist of Ruin", "ATK+5", 350, 4, Attack, Some("atk3"), TreeBonus { atk: 5, ..Z }),
    node("hp4", "Deathless Body", "HP+50", 350, 4, Health, Some("hp3"), TreeBonus { hp: 50, ..Z }),
    node("start2", "Ancient Wisdom", "Start civ Lv2", 450, 4, Special, Some("start1"), TreeBonus { start_civ_level: 1, ..Z }),
    node("bone3", "Bone King", "Bones +15%", 400, 4, Bone, Some("bone2"), TreeBonus { bone_multiplier: 0.15, ..Z }),
    node("rev1", "Rite of Return", "Revive once on death", 500, 4, Special, None, TreeBonus { revive: 1, ..Z }),
    node("ally3", "High Chieftain", "Ally slots +1", 450, 4, Ally, Some("ally2"), TreeBonus { ally_slots: 1, ..Z }),
    node("luck1", "Guided Fate", "4 evolution choices", 400, 4, Special, None, TreeBonus { evolution_choices: 1, ..Z }),
    node("crit3", "Master's Eye", "Crit +8%", 380, 4, Crit, Some("crit2"), TreeBonus { crit: 0.08, ..Z }),
    node("def3", "Iron Wall", "DEF+3", 400, 4, Defense, Some("def2"), TreeBonus { def: 3, ..Z }),
    node("heal2", "Vitality", "Regen 3%/turn", 420, 4, Health, Some("heal1"), TreeBonus { regen: 0.03, ..Z }),
    // Tier 5
    node("final1", "Peak of Evolution", "Final awakening at Lv4", 800, 5, Special, None, TreeBonus { final_req_delta: -1, ..Z }),
    node("atk5", "Ancestral Power", "All damage +15%", 900, 5, Attack, Some("dmg1"), TreeBonus { damage_multiplier: 0.15, ..Z }),
    node("hp5", "Eternal Life", "HP+80", 900, 5, Health, Some("hp4"), TreeBonus { hp: 80, ..Z }),
    node("bone4", "Golden Bones", "Bones +25%", 1000, 5, Bone, Some("bone3"), TreeBonus { bone_multiplier: 0.25, ..Z }),
    node("ally4", "Legendary Chieftain", "Ally ATK +30%", 1200, 5, Ally, Some("ally3"), TreeBonus { ally_atk: 0.3, ..Z }),
    node("awk1", "Awakening Talent", "Micro awakening at Lv3", 700, 5, Special, None, TreeBonus { micro_req_delta: -1, ..Z }),
    // Tier 6
    node("atk6", "Sky-Splitting Fist", "ATK+8", 1500, 6, Attack, Some("atk4"), TreeBonus { atk: 8, ..Z }),
    node("hp6", "World Tree Life", "HP+120", 1500, 6, Health, Some("hp5"), TreeBonus { hp: 120, ..Z }),
    node("crit4", "Divine Eye", "Crit +12%", 1400, 6, Crit, Some("crit3"), TreeBonus { crit: 0.12, ..Z }),
    node("rev2", "Reincarnation", "Revive at 50% HP", 1800, 6, Special, Some("rev1"), TreeBonus { revive_pct: 0.2, ..Z }),
    node("bone5", "Bone God's Grace", "Bones +35%", 1600, 6, Bone, Some("bone4"), TreeBonus { bone_multiplier: 0.35, ..Z }),
    node("dmg2", "Urge to Destroy", "All damage +20%", 1700, 6, Attack, Some("atk5"), TreeBonus { damage_multiplier: 0.2, ..Z }),
    node("start3", "Primeval Memory", "Start civ Lv3", 2000, 6, Special, Some("start2"), TreeBonus { start_civ_level: 1, ..Z }),
    // Tier 7
    node("atk7", "Wrath of the First God", "ATK+12", 3000, 7, Attack, Some("atk6"), TreeBonus { atk: 12, ..Z }),
    node("hp7", "Undying Soul", "HP+200", 3000, 7, Health, Some("hp6"), TreeBonus { hp: 200, ..Z }),
    node("ally5", "Lord of the Divine Tribe", "Ally slots +1, Ally ATK +40%", 3500, 7, Ally, Some("ally4"), TreeBonus { ally_slots: 1, ally_atk: 0.4, ..Z }),
    node("luck2", "Destiny", "5 evolution choices", 2800, 7, Special, Some("luck1"), TreeBonus { evolution_choices: 1, ..Z }),
    node("def4", "Absolute Defense", "DEF+6", 2500, 7, Defense, Some("def3"), TreeBonus { def: 6, ..Z }),
    node("heal3", "Eternal Return", "Regen 5%/turn", 3200, 7, Health, Some("heal2"), TreeBonus { regen: 0.05, ..Z }),
    // Tier 8
    node("atk8", "Annihilation", "ATK+20, All damage +25%", 5000, 8, Attack, Some("atk7"), TreeBonus { atk: 20, damage_multiplier: 0.25, ..Z }),
    node("hp8", "Primordial Vessel", "HP+350", 5000, 8, Health, Some("hp7"), TreeBonus { hp: 350, ..Z }),
    node("bone6", "Bone Creator", "Bones +50%", 6000, 8, Bone, Some("bone5"), TreeBonus { bone_multiplier: 0.5, ..Z }),
    node("final2", "Ultimate Awakening", "Final awakening at Lv3", 8000, 8, Special, None, TreeBonus { final_req_delta: -1, ..Z }),
];

/// Look up a tree node by id.
pub fn get_tree_node(id: &str) -> Option<&'static TreeNode> {
    TREE_NODES.iter().find(|n| n.id == id)
}
