//! Synergy activation and bonus folding.

use super::data::{synergy_def, SYNERGIES};
use super::types::*;
use crate::evolution::Evolution;
use std::collections::HashMap;

/// Active synergies for a set of evolutions, in tag order.
pub fn calc_synergies(evolutions: &[Evolution]) -> Vec<ActiveSynergy> {
    let mut counts: HashMap<SynergyTag, usize> = HashMap::new();
    for tag in evolutions.iter().flat_map(|e| e.tags.iter()) {
        *counts.entry(*tag).or_insert(0) += 1;
    }

    SYNERGIES
        .iter()
        .filter_map(|def| {
            let count = counts.get(&def.tag).copied().unwrap_or(0);
            let tier = synergy_tier(count)?;
            Some(ActiveSynergy {
                tag: def.tag,
                count,
                tier,
                bonus_name: def.tier(tier).name.to_string(),
            })
        })
        .collect()
}

/// Tier for a tag count: none below 2, tier 2 from 3 up.
pub fn synergy_tier(count: usize) -> Option<u8> {
    match count {
        0 | 1 => None,
        2 => Some(1),
        _ => Some(2),
    }
}

pub fn apply_synergy_bonuses(synergies: &[ActiveSynergy]) -> SynergyBonus {
    let mut bonus = SynergyBonus::default();
    for syn in synergies {
        fold_effect(&mut bonus, &synergy_def(syn.tag).tier(syn.tier).effect);
    }
    bonus
}

fn fold_effect(bonus: &mut SynergyBonus, effect: &SynergyEffect) {
    match effect {
        SynergyEffect::StatBonus { stat, value } => match stat {
            SynergyStat::Atk => bonus.atk_bonus += value,
            SynergyStat::Def => bonus.def_bonus += value,
            SynergyStat::Hp => bonus.hp_bonus += value,
            SynergyStat::Crit => bonus.crit_bonus += value,
        },
        SynergyEffect::DamageMultiplier { target, multiplier } => {
            if *target == DamageTarget::Burn {
                bonus.burn_multiplier *= multiplier;
            }
        }
        SynergyEffect::HealBonus { ratio } => bonus.heal_bonus_ratio += ratio,
        SynergyEffect::AllyBonus { stat, value } => match stat {
            AllyStat::Atk => bonus.ally_atk_bonus += value,
            AllyStat::Hp => bonus.ally_hp_bonus += value,
        },
        SynergyEffect::Special(SpecialSynergy::EnvImmune) => bonus.env_immune = true,
        SynergyEffect::Special(_) => {}
        SynergyEffect::Compound(effects) => {
            for sub in effects.iter() {
                fold_effect(bonus, sub);
            }
        }
    }
}

/// Shortcut used by combat: bonuses of the evolutions currently owned.
pub fn synergy_bonus_for(evolutions: &[Evolution]) -> SynergyBonus {
    apply_synergy_bonuses(&calc_synergies(evolutions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::EVOLUTIONS;

    fn evos(names: &[&str]) -> Vec<Evolution> {
        names
            .iter()
            .map(|n| {
                let def = EVOLUTIONS.iter().find(|e| e.name == *n).unwrap();
                Evolution::from(def)
            })
            .collect()
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(synergy_tier(1), None);
        assert_eq!(synergy_tier(2), Some(1));
        assert_eq!(synergy_tier(3), Some(2));
        assert_eq!(synergy_tier(4), Some(2));
    }

    #[test]
    fn test_single_tag_inactive() {
        assert!(calc_synergies(&evos(&["Fire Making"])).is_empty());
    }

    #[test]
    fn test_fire_tiers() {
        let two = calc_synergies(&evos(&["Fire Making", "Blast Stone"]));
        assert_eq!(two.len(), 1);
        assert_eq!(two[0].tag, SynergyTag::Fire);
        assert_eq!(two[0].tier, 1);
        assert_eq!(two[0].bonus_name, "Scorching Soul");
        let b = apply_synergy_bonuses(&two);
        assert!((b.burn_multiplier - 1.3).abs() < 1e-9);
        assert_eq!(b.atk_bonus, 0);

        let three = calc_synergies(&evos(&["Fire Making", "Blast Stone", "Lava Spear"]));
        let b = apply_synergy_bonuses(&three);
        assert!((b.burn_multiplier - 2.0).abs() < 1e-9);
        assert_eq!(b.atk_bonus, 10);
    }

    #[test]
    fn test_synergies_in_tag_order() {
        // Thunder Axe: hunt + wild, Mad Dance: wild + hunt
        let active = calc_synergies(&evos(&["Thunder Axe", "Mad Dance"]));
        let tags: Vec<SynergyTag> = active.iter().map(|s| s.tag).collect();
        assert_eq!(tags, vec![SynergyTag::Hunt, SynergyTag::Wild]);
        let b = apply_synergy_bonuses(&active);
        assert_eq!(b.atk_bonus, 8);
        assert_eq!(b.crit_bonus, 5);
    }

    #[test]
    fn test_permafrost_grants_env_immunity() {
        let active = calc_synergies(&evos(&["Frost Fang", "Frozen Prayer", "Frost Fang"]));
        assert_eq!(active[0].tier, 2);
        let b = apply_synergy_bonuses(&active);
        assert!(b.env_immune);
        assert_eq!(b.def_bonus, 12);
    }

    #[test]
    fn test_spirit_has_no_stat_effect() {
        let b = synergy_bonus_for(&evos(&["Bone Hex", "Soul Eater", "Frozen Prayer"]));
        assert_eq!(b, SynergyBonus::default());
    }

    #[test]
    fn test_empty_is_neutral() {
        let b = apply_synergy_bonuses(&[]);
        assert_eq!(b.burn_multiplier, 1.0);
        assert!(!b.env_immune);
    }
}
