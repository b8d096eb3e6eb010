//! Stat snapshots and effect composition.
//!
//! An [`EffectSet`] is a sparse set of stat deltas carried by evolutions,
//! awakenings and event outcomes. [`apply_effect`] folds it onto a
//! [`StatSnapshot`] in a fixed order.

use serde::{Deserialize, Serialize};

/// The subset of run stats that effects can touch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatSnapshot {
    pub atk: i32,
    pub max_hp: i32,
    pub hp: i32,
    pub def: i32,
    pub crit_rate: f64,
    pub attack_multiplier: f64,
    pub burning: bool,
    pub bonus_bone: i32,
}

/// Sparse stat deltas. Zero, `false` and `None` mean "no change".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSet {
    pub atk: i32,
    pub def: i32,
    /// Crit rate delta as a fraction (0.03 = +3%).
    pub crit: f64,
    pub max_hp: i32,
    pub heal: i32,
    pub full_heal: bool,
    pub self_damage: i32,
    pub burn: bool,
    pub halve_max_hp: bool,
    pub attack_multiplier: Option<f64>,
    pub bonus_bone: i32,
    /// Flat heal for every living ally.
    pub ally_heal: i32,
    /// Revives the first dead ally at this percentage of its max HP.
    pub ally_revive_pct: u32,
}

impl EffectSet {
    pub const NONE: EffectSet = EffectSet {
        atk: 0,
        def: 0,
        crit: 0.0,
        max_hp: 0,
        heal: 0,
        full_heal: false,
        self_damage: 0,
        burn: false,
        halve_max_hp: false,
        attack_multiplier: None,
        bonus_bone: 0,
        ally_heal: 0,
        ally_revive_pct: 0,
    };

    pub fn revives_ally(&self) -> bool {
        self.ally_revive_pct > 0
    }
}

impl Default for EffectSet {
    fn default() -> Self {
        Self::NONE
    }
}

/// Apply an effect to a snapshot and return the result.
///
/// Order: flat atk/def, crit (clamped to `[0, 1]`), max HP (raises current HP
/// by the same amount), heal, full heal, self-damage (floored at 1), burn,
/// half max HP, attack multiplier, bonus bone. Halving always happens before
/// the multiplier so "halve HP, double attack" evolutions are deterministic.
pub fn apply_effect(snapshot: &StatSnapshot, effect: &EffectSet) -> StatSnapshot {
    let mut s = *snapshot;

    s.atk += effect.atk;
    s.def += effect.def;
    if effect.crit != 0.0 {
        s.crit_rate = (s.crit_rate + effect.crit).clamp(0.0, 1.0);
    }
    if effect.max_hp != 0 {
        s.max_hp += effect.max_hp;
        s.hp = (s.hp + effect.max_hp).min(s.max_hp);
    }
    if effect.heal != 0 {
        s.hp = (s.hp + effect.heal).min(s.max_hp);
    }
    if effect.full_heal {
        s.hp = s.max_hp;
    }
    if effect.self_damage != 0 {
        s.hp = (s.hp - effect.self_damage).max(1);
    }
    if effect.burn {
        s.burning = true;
    }
    if effect.halve_max_hp {
        s.max_hp = s.max_hp.div_euclid(2);
        s.hp = s.hp.min(s.max_hp);
    }
    if let Some(mult) = effect.attack_multiplier {
        s.attack_multiplier *= mult;
    }
    s.bonus_bone += effect.bonus_bone;

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(hp: i32, max_hp: i32) -> StatSnapshot {
        StatSnapshot {
            atk: 8,
            max_hp,
            hp,
            def: 2,
            crit_rate: 0.05,
            attack_multiplier: 1.0,
            burning: false,
            bonus_bone: 0,
        }
    }

    #[test]
    fn test_empty_effect_is_identity() {
        let s = snap(50, 80);
        assert_eq!(apply_effect(&s, &EffectSet::NONE), s);
    }

    #[test]
    fn test_max_hp_raises_current_and_max() {
        for (hp, max_hp, n) in [(50, 80, 15), (80, 80, 30), (1, 80, 10), (40, 80, -20)] {
            let s = snap(hp, max_hp);
            let out = apply_effect(
                &s,
                &EffectSet {
                    max_hp: n,
                    ..EffectSet::NONE
                },
            );
            assert_eq!(out.max_hp, max_hp + n);
            assert_eq!(out.hp, (hp + n).min(max_hp + n));
        }
    }

    #[test]
    fn test_half_clamps_hp() {
        for (hp, max_hp) in [(80, 80), (30, 80), (81, 81), (1, 3)] {
            let out = apply_effect(
                &snap(hp, max_hp),
                &EffectSet {
                    halve_max_hp: true,
                    ..EffectSet::NONE
                },
            );
            assert_eq!(out.max_hp, max_hp / 2);
            assert!(out.hp <= out.max_hp);
        }
    }

    #[test]
    fn test_half_then_multiplier() {
        let out = apply_effect(
            &snap(80, 80),
            &EffectSet {
                halve_max_hp: true,
                attack_multiplier: Some(2.0),
                ..EffectSet::NONE
            },
        );
        assert_eq!(out.max_hp, 40);
        assert_eq!(out.hp, 40);
        assert_eq!(out.attack_multiplier, 2.0);
    }

    #[test]
    fn test_attack_multiplier_compounds() {
        let fx = EffectSet {
            attack_multiplier: Some(2.0),
            ..EffectSet::NONE
        };
        let once = apply_effect(&snap(80, 80), &fx);
        let twice = apply_effect(&once, &fx);
        assert_eq!(twice.attack_multiplier, 4.0);
    }

    #[test]
    fn test_self_damage_never_kills() {
        let out = apply_effect(
            &snap(5, 80),
            &EffectSet {
                self_damage: 25,
                ..EffectSet::NONE
            },
        );
        assert_eq!(out.hp, 1);
    }

    #[test]
    fn test_heal_clamped_and_full_heal() {
        let healed = apply_effect(
            &snap(70, 80),
            &EffectSet {
                heal: 15,
                ..EffectSet::NONE
            },
        );
        assert_eq!(healed.hp, 80);

        let full = apply_effect(
            &snap(10, 80),
            &EffectSet {
                full_heal: true,
                max_hp: 10,
                ..EffectSet::NONE
            },
        );
        assert_eq!(full.max_hp, 90);
        assert_eq!(full.hp, 90);
    }

    #[test]
    fn test_crit_clamped() {
        let mut s = snap(80, 80);
        s.crit_rate = 0.98;
        let out = apply_effect(
            &s,
            &EffectSet {
                crit: 0.05,
                ..EffectSet::NONE
            },
        );
        assert_eq!(out.crit_rate, 1.0);
    }

    #[test]
    fn test_burn_and_bonus_bone() {
        let fx = EffectSet {
            burn: true,
            bonus_bone: 3,
            ..EffectSet::NONE
        };
        let once = apply_effect(&snap(80, 80), &fx);
        let twice = apply_effect(&once, &fx);
        assert!(twice.burning);
        assert_eq!(twice.bonus_bone, 6);
    }
}
