//! Synergy bonus table.

use super::types::*;

pub const SYNERGIES: [SynergyDef; 8] = [
    SynergyDef {
        tag: SynergyTag::Fire,
        tier1: SynergyTierDef {
            name: "Scorching Soul",
            description: "Burn damage +30%",
            effect: SynergyEffect::DamageMultiplier {
                target: DamageTarget::Burn,
                multiplier: 1.3,
            },
        },
        tier2: SynergyTierDef {
            name: "Avatar of Hellfire",
            description: "Burn damage x2, ATK +10",
            effect: SynergyEffect::Compound(&[
                SynergyEffect::DamageMultiplier {
                    target: DamageTarget::Burn,
                    multiplier: 2.0,
                },
                SynergyEffect::StatBonus {
                    stat: SynergyStat::Atk,
                    value: 10,
                },
            ]),
        },
    },
    SynergyDef {
        tag: SynergyTag::Ice,
        tier1: SynergyTierDef {
            name: "Freezing Wind",
            description: "DEF +5",
            effect: SynergyEffect::StatBonus {
                stat: SynergyStat::Def,
                value: 5,
            },
        },
        tier2: SynergyTierDef {
            name: "Permafrost",
            description: "DEF +12, immune to environmental damage",
            effect: SynergyEffect::Compound(&[
                SynergyEffect::StatBonus {
                    stat: SynergyStat::Def,
                    value: 12,
                },
                SynergyEffect::Special(SpecialSynergy::EnvImmune),
            ]),
        },
    },
    SynergyDef {
        tag: SynergyTag::Regen,
        tier1: SynergyTierDef {
            name: "Breath of Life",
            description: "Regeneration +50%",
            effect: SynergyEffect::HealBonus { ratio: 0.5 },
        },
        tier2: SynergyTierDef {
            name: "Undying Spring",
            description: "Regeneration x2, allies heal each turn",
            effect: SynergyEffect::Compound(&[
                SynergyEffect::HealBonus { ratio: 1.0 },
                SynergyEffect::AllyBonus {
                    stat: AllyStat::Hp,
                    value: 3,
                },
            ]),
        },
    },
    SynergyDef {
        tag: SynergyTag::Shield,
        tier1: SynergyTierDef {
            name: "Hardened Hide",
            description: "DEF +3",
            effect: SynergyEffect::StatBonus {
                stat: SynergyStat::Def,
                value: 3,
            },
        },
        tier2: SynergyTierDef {
            name: "Guardian Stone",
            description: "DEF +8, ally HP +5",
            effect: SynergyEffect::Compound(&[
                SynergyEffect::StatBonus {
                    stat: SynergyStat::Def,
                    value: 8,
                },
                SynergyEffect::AllyBonus {
                    stat: AllyStat::Hp,
                    value: 5,
                },
            ]),
        },
    },
    SynergyDef {
        tag: SynergyTag::Hunt,
        tier1: SynergyTierDef {
            name: "Sharp Claws",
            description: "ATK +8",
            effect: SynergyEffect::StatBonus {
                stat: SynergyStat::Atk,
                value: 8,
            },
        },
        tier2: SynergyTierDef {
            name: "Predator Instinct",
            description: "ATK +15, crit +10%",
            effect: SynergyEffect::Compound(&[
                SynergyEffect::StatBonus {
                    stat: SynergyStat::Atk,
                    value: 15,
                },
                SynergyEffect::StatBonus {
                    stat: SynergyStat::Crit,
                    value: 10,
                },
            ]),
        },
    },
    SynergyDef {
        tag: SynergyTag::Spirit,
        tier1: SynergyTierDef {
            name: "Spirit Resonance",
            description: "Awakening gauge +1",
            effect: SynergyEffect::Special(SpecialSynergy::AwakeningBoost),
        },
        tier2: SynergyTierDef {
            name: "Ancestral Communion",
            description: "Awakening effects x1.5",
            effect: SynergyEffect::Special(SpecialSynergy::AwakeningPower),
        },
    },
    SynergyDef {
        tag: SynergyTag::Tribe,
        tier1: SynergyTierDef {
            name: "Tribal Bond",
            description: "Ally ATK +5",
            effect: SynergyEffect::AllyBonus {
                stat: AllyStat::Atk,
                value: 5,
            },
        },
        tier2: SynergyTierDef {
            name: "Pride of the Great Tribe",
            description: "Ally ATK +12, ally HP +15",
            effect: SynergyEffect::Compound(&[
                SynergyEffect::AllyBonus {
                    stat: AllyStat::Atk,
                    value: 12,
                },
                SynergyEffect::AllyBonus {
                    stat: AllyStat::Hp,
                    value: 15,
                },
            ]),
        },
    },
    SynergyDef {
        tag: SynergyTag::Wild,
        tier1: SynergyTierDef {
            name: "Wild Instinct",
            description: "Crit +5%",
            effect: SynergyEffect::StatBonus {
                stat: SynergyStat::Crit,
                value: 5,
            },
        },
        tier2: SynergyTierDef {
            name: "Beast Awakening",
            description: "Crit +12%, ATK +10",
            effect: SynergyEffect::Compound(&[
                SynergyEffect::StatBonus {
                    stat: SynergyStat::Crit,
                    value: 12,
                },
                SynergyEffect::StatBonus {
                    stat: SynergyStat::Atk,
                    value: 10,
                },
            ]),
        },
    },
];

pub fn synergy_def(tag: SynergyTag) -> &'static SynergyDef {
    // The table is indexed in tag declaration order.
    &SYNERGIES[tag as usize]
}
