//! Skill table.

use super::types::*;
use crate::civ::CivTypeExt;

pub const SKILLS: [SkillDef; 4] = [
    SkillDef {
        id: SkillId::FireBurst,
        name: "Fire Burst",
        description: "Deal 45 damage to the enemy",
        civ: CivTypeExt::Tech,
        required_level: 3,
        cooldown: 2,
        effect: SkillEffect::Damage {
            base: 45,
            multiplier: 1.0,
        },
    },
    SkillDef {
        id: SkillId::NatureHeal,
        name: "Nature's Mending",
        description: "Restore 40 HP, allies recover 20%",
        civ: CivTypeExt::Life,
        required_level: 3,
        cooldown: 3,
        effect: SkillEffect::Heal {
            base: 40,
            ally_ratio: 0.2,
        },
    },
    SkillDef {
        id: SkillId::BloodRage,
        name: "Blood Frenzy",
        description: "ATK x2 for 3 turns, costs 20 HP",
        civ: CivTypeExt::Ritual,
        required_level: 3,
        cooldown: 2,
        effect: SkillEffect::AttackBuff {
            multiplier: 2.0,
            hp_cost: 20,
            duration: 3,
        },
    },
    SkillDef {
        id: SkillId::ShieldWall,
        name: "Shield Wall",
        description: "Incoming damage -50% for 2 turns",
        civ: CivTypeExt::Balanced,
        required_level: 4,
        cooldown: 3,
        effect: SkillEffect::Shield {
            reduction: 0.5,
            duration: 2,
        },
    },
];

pub fn skill_def(id: SkillId) -> &'static SkillDef {
    &SKILLS[id as usize]
}
