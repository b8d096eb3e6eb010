//! Random event table.

use super::types::*;
use crate::civ::{BiomeId, CivType};

const fn choice(
    label: &'static str,
    description: &'static str,
    effect: EventEffect,
    risk: RiskLevel,
    cost: Option<EventCost>,
) -> EventChoice {
    EventChoice {
        label,
        description,
        effect,
        risk,
        cost,
    }
}

const WALK_AWAY: EventChoice = choice(
    "Walk away",
    "Nothing happens",
    EventEffect::Nothing,
    RiskLevel::Safe,
    None,
);

pub const RANDOM_EVENTS: [EventDef; 8] = [
    EventDef {
        id: "bone_merchant",
        name: "Bone Merchant",
        description: "A strange merchant offers power in exchange for bones.",
        situation: "Make a deal?",
        choices: &[
            choice(
                "Trade 30 bones",
                "Spend bones for ATK +8",
                EventEffect::StatChange {
                    stat: EventStat::Atk,
                    value: 8,
                },
                RiskLevel::Safe,
                Some(EventCost::Bone(30)),
            ),
            choice(
                "Trade 50 bones",
                "Spend more bones for greater power",
                EventEffect::StatChange {
                    stat: EventStat::Atk,
                    value: 18,
                },
                RiskLevel::Risky,
                Some(EventCost::Bone(50)),
            ),
            WALK_AWAY,
        ],
        biome_affinity: &[],
        min_biomes_cleared: 0,
    },
    EventDef {
        id: "ancient_shrine",
        name: "Ancient Shrine",
        description: "A faint light seeps from a moss-covered shrine.",
        situation: "You sense a mysterious power...",
        choices: &[
            choice(
                "Offer a prayer",
                "Your highest civilization gains a level",
                EventEffect::CivLevelUp(CivTarget::Dominant),
                RiskLevel::Safe,
                None,
            ),
            choice(
                "Search the shrine",
                "You may find a random evolution",
                EventEffect::RandomEvolution,
                RiskLevel::Risky,
                None,
            ),
            choice(
                "Pass by",
                "Nothing happens",
                EventEffect::Nothing,
                RiskLevel::Safe,
                None,
            ),
        ],
        biome_affinity: &[],
        min_biomes_cleared: 0,
    },
    EventDef {
        id: "lost_ally",
        name: "Lost Companion",
        description: "A wounded companion begs for help. Helping will cost you.",
        situation: "What will you do?",
        choices: &[
            choice(
                "Help them",
                "An ally joins, but you take 15 damage",
                EventEffect::AddAlly,
                RiskLevel::Risky,
                Some(EventCost::HpDamage(15)),
            ),
            choice(
                "Leave them",
                "Guilt lingers... you pick up 10 bones",
                EventEffect::BoneChange { amount: 10 },
                RiskLevel::Safe,
                None,
            ),
        ],
        biome_affinity: &[],
        min_biomes_cleared: 0,
    },
    EventDef {
        id: "poison_swamp",
        name: "Poison Swamp",
        description: "A toxic swamp spreads at your feet. Cross it or go around?",
        situation: "Take the dangerous path?",
        choices: &[
            choice(
                "Wade through",
                "Take 20 damage but gain ATK +5",
                EventEffect::StatChange {
                    stat: EventStat::Atk,
                    value: 5,
                },
                RiskLevel::Dangerous,
                Some(EventCost::HpDamage(20)),
            ),
            choice(
                "Detour for herbs",
                "You might recover some HP",
                EventEffect::Heal { amount: 15 },
                RiskLevel::Safe,
                None,
            ),
        ],
        biome_affinity: &[BiomeId::Grassland],
        min_biomes_cleared: 0,
    },
    EventDef {
        id: "mystery_fossil",
        name: "Mysterious Fossil",
        description: "You find a giant fossil buried in the ground.",
        situation: "How will you use it?",
        choices: &[
            choice(
                "Dig it out",
                "Your defense may improve",
                EventEffect::StatChange {
                    stat: EventStat::Def,
                    value: 5,
                },
                RiskLevel::Safe,
                None,
            ),
            choice(
                "Take it as bones",
                "Gain bones",
                EventEffect::BoneChange { amount: 20 },
                RiskLevel::Safe,
                None,
            ),
        ],
        biome_affinity: &[],
        min_biomes_cleared: 0,
    },
    EventDef {
        id: "beast_den",
        name: "Beast Den",
        description: "You find the den of a huge beast. Something lies inside...",
        situation: "Take the risk?",
        choices: &[
            choice(
                "Explore",
                "Take 20 damage but gain ATK +12",
                EventEffect::StatChange {
                    stat: EventStat::Atk,
                    value: 12,
                },
                RiskLevel::Dangerous,
                Some(EventCost::HpDamage(20)),
            ),
            choice(
                "Pretend you saw nothing",
                "Leave safely and gain DEF +2",
                EventEffect::StatChange {
                    stat: EventStat::Def,
                    value: 2,
                },
                RiskLevel::Safe,
                None,
            ),
        ],
        biome_affinity: &[BiomeId::Volcano],
        min_biomes_cleared: 0,
    },
    EventDef {
        id: "starry_night",
        name: "Starry Night",
        description: "Under a sky full of stars, a strange power surrounds you.",
        situation: "How will you use the starlight?",
        choices: &[
            choice(
                "Meditate",
                "Recover HP",
                EventEffect::Heal { amount: 25 },
                RiskLevel::Safe,
                None,
            ),
            choice(
                "Wish upon a star",
                "Gain a random evolution",
                EventEffect::RandomEvolution,
                RiskLevel::Risky,
                None,
            ),
        ],
        biome_affinity: &[],
        min_biomes_cleared: 0,
    },
    EventDef {
        id: "cave_painting",
        name: "Cave Painting",
        description: "The cave walls record the story of a civilization.",
        situation: "Which painting will you study?",
        choices: &[
            choice(
                "Study the tech mural",
                "Tech level +1",
                EventEffect::CivLevelUp(CivTarget::Civ(CivType::Tech)),
                RiskLevel::Safe,
                None,
            ),
            choice(
                "Study the life mural",
                "Life level +1",
                EventEffect::CivLevelUp(CivTarget::Civ(CivType::Life)),
                RiskLevel::Safe,
                None,
            ),
            choice(
                "Study the ritual mural",
                "Ritual level +1",
                EventEffect::CivLevelUp(CivTarget::Civ(CivType::Ritual)),
                RiskLevel::Safe,
                None,
            ),
        ],
        biome_affinity: &[BiomeId::Glacier],
        min_biomes_cleared: 0,
    },
];

pub fn get_event(id: &str) -> Option<&'static EventDef> {
    RANDOM_EVENTS.iter().find(|e| e.id == id)
}
