//! Evolution and awakening tables.

use super::types::*;
use crate::civ::{CivType, CivTypeExt};
use crate::core::effects::EffectSet;
use crate::synergy::SynergyTag::{self, *};

const fn evo(
    name: &'static str,
    description: &'static str,
    civ: CivType,
    rarity: u8,
    effect: EffectSet,
    tags: &'static [SynergyTag],
) -> EvolutionDef {
    EvolutionDef {
        name,
        description,
        civ,
        rarity,
        effect,
        tags,
    }
}

const NONE: EffectSet = EffectSet::NONE;

pub const EVOLUTIONS: [EvolutionDef; 32] = [
    // Tech
    evo("Fire Making", "ATK +3", CivType::Tech, 0, EffectSet { atk: 3, ..NONE }, &[Fire]),
    evo("Stone Throwing", "ATK +2, crit +3%", CivType::Tech, 0, EffectSet { atk: 2, crit: 0.03, ..NONE }, &[Hunt]),
    evo("Obsidian Blade", "ATK +5", CivType::Tech, 0, EffectSet { atk: 5, ..NONE }, &[Hunt]),
    evo("Fire Arrow", "ATK +4, burn", CivType::Tech, 0, EffectSet { atk: 4, burn: true, ..NONE }, &[Fire, Hunt]),
    evo("Trapcraft", "ATK +3, DEF +1", CivType::Tech, 0, EffectSet { atk: 3, def: 1, ..NONE }, &[Wild]),
    evo("Blast Stone", "ATK +8", CivType::Tech, 1, EffectSet { atk: 8, ..NONE }, &[Fire]),
    evo("Lava Spear", "ATK +6, DEF +2", CivType::Tech, 1, EffectSet { atk: 6, def: 2, ..NONE }, &[Fire, Shield]),
    evo("Thunder Axe", "ATK +10, crit +5%", CivType::Tech, 1, EffectSet { atk: 10, crit: 0.05, ..NONE }, &[Hunt, Wild]),
    // Life
    evo("Herb Lore", "Heal 12", CivType::Life, 0, EffectSet { heal: 12, ..NONE }, &[Regen]),
    evo("Leather Armor", "DEF +2", CivType::Life, 0, EffectSet { def: 2, ..NONE }, &[Shield]),
    evo("Food Stores", "Max HP +15", CivType::Life, 0, EffectSet { max_hp: 15, ..NONE }, &[Regen]),
    evo("Hunter's Wisdom", "ATK +2, DEF +1", CivType::Life, 0, EffectSet { atk: 2, def: 1, ..NONE }, &[Hunt, Tribe]),
    evo("Comrade Bond", "Allies heal 10", CivType::Life, 0, EffectSet { ally_heal: 10, ..NONE }, &[Tribe]),
    evo("Sacred Spring", "Full heal, max HP +10", CivType::Life, 1, EffectSet { full_heal: true, max_hp: 10, ..NONE }, &[Regen, Spirit]),
    evo("Great Shield", "DEF +5", CivType::Life, 1, EffectSet { def: 5, ..NONE }, &[Shield]),
    evo("Tree of Life", "Max HP +30, heal 15", CivType::Life, 1, EffectSet { max_hp: 30, heal: 15, ..NONE }, &[Regen, Tribe]),
    // Ritual
    evo("Blood Oath", "HP -8, ATK +6", CivType::Ritual, 0, EffectSet { self_damage: 8, atk: 6, ..NONE }, &[Wild]),
    evo("Bone Hex", "HP -5, ATK +4", CivType::Ritual, 0, EffectSet { self_damage: 5, atk: 4, ..NONE }, &[Spirit]),
    evo("Deathly Blessing", "HP -10, ATK +8, DEF +1", CivType::Ritual, 0, EffectSet { self_damage: 10, atk: 8, def: 1, ..NONE }, &[Spirit, Shield]),
    evo("Mad Dance", "HP -15, ATK +12", CivType::Ritual, 0, EffectSet { self_damage: 15, atk: 12, ..NONE }, &[Wild, Hunt]),
    evo("Bone Harvest", "HP -6, ATK +3, bones +2", CivType::Ritual, 0, EffectSet { self_damage: 6, atk: 3, bonus_bone: 2, ..NONE }, &[Wild, Tribe]),
    evo("Soul Eater", "HP -20, ATK +16, bones +3", CivType::Ritual, 1, EffectSet { self_damage: 20, atk: 16, bonus_bone: 3, ..NONE }, &[Spirit, Wild]),
    evo("Blood Pact", "Max HP halved, ATK x2", CivType::Ritual, 1, EffectSet { halve_max_hp: true, attack_multiplier: Some(2.0), ..NONE }, &[Wild]),
    evo("Forbidden Rite", "HP -25, ATK +20, DEF +3", CivType::Ritual, 1, EffectSet { self_damage: 25, atk: 20, def: 3, ..NONE }, &[Spirit, Hunt]),
    // Ally revival, offered only while an ally is down
    evo("Soul Calling", "Revive an ally at 50% HP", CivType::Life, 1, EffectSet { ally_revive_pct: 50, ..NONE }, &[Spirit, Tribe]),
    evo("Prayer of Rebirth", "Revive an ally at full HP, HP -10", CivType::Ritual, 1, EffectSet { ally_revive_pct: 100, self_damage: 10, ..NONE }, &[Spirit]),
    // Dual-tag additions
    evo("Frost Fang", "ATK +6, DEF +3", CivType::Tech, 0, EffectSet { atk: 6, def: 3, ..NONE }, &[Ice, Hunt]),
    evo("Wildfire Seed", "ATK +10, burn", CivType::Tech, 1, EffectSet { atk: 10, burn: true, ..NONE }, &[Fire, Wild]),
    evo("Root Shield", "DEF +5, heal 3", CivType::Life, 0, EffectSet { def: 5, heal: 3, ..NONE }, &[Shield, Regen]),
    evo("Ancestral Blessing", "Max HP +20, allies heal 5", CivType::Life, 1, EffectSet { max_hp: 20, ally_heal: 5, ..NONE }, &[Spirit, Tribe]),
    evo("Blood Frenzy", "HP -10, ATK +8, crit +5%", CivType::Ritual, 0, EffectSet { self_damage: 10, atk: 8, crit: 0.05, ..NONE }, &[Wild, Hunt]),
    evo("Frozen Prayer", "HP -12, DEF +8, ATK +5", CivType::Ritual, 1, EffectSet { self_damage: 12, def: 8, atk: 5, ..NONE }, &[Ice, Spirit]),
];

pub fn find_evolution(name: &str) -> Option<&'static EvolutionDef> {
    EVOLUTIONS.iter().find(|e| e.name == name)
}

const fn awakening(
    name: &'static str,
    description: &'static str,
    civ: CivTypeExt,
    tier: AwakeningTier,
    effect: EffectSet,
) -> AwakeningDef {
    AwakeningDef {
        name,
        description,
        civ,
        tier,
        effect,
        ally_atk_multiplier: None,
        ally_full_heal: false,
    }
}

/// Micro awakenings in `CivTypeExt::ALL` order.
pub const MICRO_AWAKENINGS: [AwakeningDef; 4] = [
    awakening("Awakening of Flame", "ATK +5, burn", CivTypeExt::Tech, AwakeningTier::Micro, EffectSet { atk: 5, burn: true, ..NONE }),
    awakening("Breath of the Forest", "Max HP +20, DEF +2", CivTypeExt::Life, AwakeningTier::Micro, EffectSet { max_hp: 20, def: 2, ..NONE }),
    awakening("Blood Stirring", "ATK +8, HP -10", CivTypeExt::Ritual, AwakeningTier::Micro, EffectSet { atk: 8, self_damage: 10, ..NONE }),
    awakening("Budding Harmony", "ATK +3, max HP +15, DEF +1", CivTypeExt::Balanced, AwakeningTier::Micro, EffectSet { atk: 3, max_hp: 15, def: 1, ..NONE }),
];

/// Final awakenings in `CivTypeExt::ALL` order.
pub const FINAL_AWAKENINGS: [AwakeningDef; 4] = [
    awakening("Progenitor Flame King", "ATK +15, burn, immune to glacier cold", CivTypeExt::Tech, AwakeningTier::Final, EffectSet { atk: 15, burn: true, ..NONE }),
    AwakeningDef {
        ally_atk_multiplier: Some(2),
        ..awakening("Great Tribe Chief", "Max HP +50, DEF +5, ally ATK x2", CivTypeExt::Life, AwakeningTier::Final, EffectSet { max_hp: 50, def: 5, ..NONE })
    },
    awakening("Blood Oracle", "Triple ATK at low HP, bones +10, DEF +2", CivTypeExt::Ritual, AwakeningTier::Final, EffectSet { def: 2, bonus_bone: 10, ..NONE }),
    AwakeningDef {
        ally_full_heal: true,
        ..awakening("Lord of All Things", "ATK +8, max HP +40, DEF +4, allies fully healed", CivTypeExt::Balanced, AwakeningTier::Final, EffectSet { atk: 8, max_hp: 40, def: 4, ..NONE })
    },
];

pub fn awakening_def(rule: AwakeningRule) -> &'static AwakeningDef {
    let table = match rule.tier {
        AwakeningTier::Micro => &MICRO_AWAKENINGS,
        AwakeningTier::Final => &FINAL_AWAKENINGS,
    };
    &table[rule.civ as usize]
}
