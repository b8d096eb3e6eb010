//! Skill availability, use and timers.

use super::data::{skill_def, SKILLS};
use super::types::*;
use crate::combat::{PopupTarget, Sfx, TickEvent};
use crate::core::run_state::{LogTone, RunState};

/// Skills unlocked by the run's current civilization levels, in table order.
pub fn available_skills(run: &RunState) -> Vec<SkillId> {
    SKILLS
        .iter()
        .filter(|s| run.civ.get_ext(s.civ) >= s.required_level)
        .map(|s| s.id)
        .collect()
}

/// Use a skill.
///
/// Returns the run unchanged and no events when the skill is locked or
/// cooling down. A damage skill used with no enemy still starts its cooldown.
pub fn apply_skill(run: &RunState, id: SkillId) -> (RunState, Vec<TickEvent>) {
    if !available_skills(run).contains(&id) || run.skills.cooldown(id) > 0 {
        return (run.clone(), Vec::new());
    }

    let def = skill_def(id);
    let mut next = run.clone();
    let mut events = Vec::new();

    match def.effect {
        SkillEffect::Damage { base, multiplier } => {
            if let Some(enemy) = next.enemy.as_mut() {
                let dmg = (base as f64 * multiplier).floor() as i32;
                enemy.hp -= dmg;
                next.damage_dealt += dmg.max(0) as u64;
                next.push_log(format!("* {} -> {}", def.name, dmg), LogTone::Highlight);
                events.push(TickEvent::Popup {
                    value: dmg,
                    crit: false,
                    heal: false,
                    target: PopupTarget::Enemy,
                });
                events.push(TickEvent::Sfx(Sfx::SkillFire));
                events.push(TickEvent::SkillFx {
                    skill: id,
                    value: dmg as f64,
                });
            }
        }
        SkillEffect::Heal { base, ally_ratio } => {
            next.heal(base);
            for ally in next.allies.iter_mut().filter(|a| a.alive) {
                let amount = (ally.max_hp as f64 * ally_ratio).floor() as i32;
                ally.hp = (ally.hp + amount).min(ally.max_hp);
            }
            next.push_log(format!("* {} +{}", def.name, base), LogTone::Heal);
            events.push(TickEvent::Popup {
                value: base,
                crit: false,
                heal: true,
                target: PopupTarget::Player,
            });
            events.push(TickEvent::Sfx(Sfx::SkillHeal));
            events.push(TickEvent::SkillFx {
                skill: id,
                value: base as f64,
            });
        }
        SkillEffect::AttackBuff {
            multiplier,
            hp_cost,
            duration,
        } => {
            next.hp = (next.hp - hp_cost).max(1);
            next.skills.buffs.push(Buff {
                skill: id,
                remaining_turns: duration,
                effect: BuffEffect::Attack { multiplier },
            });
            next.push_log(
                format!("* {} ATK x{} for {} turns", def.name, multiplier, duration),
                LogTone::Blood,
            );
            events.push(TickEvent::Sfx(Sfx::SkillRage));
            events.push(TickEvent::SkillFx {
                skill: id,
                value: multiplier,
            });
        }
        SkillEffect::Shield {
            reduction,
            duration,
        } => {
            next.skills.buffs.push(Buff {
                skill: id,
                remaining_turns: duration,
                effect: BuffEffect::Shield { reduction },
            });
            next.push_log(
                format!(
                    "* {} -{}% for {} turns",
                    def.name,
                    (reduction * 100.0).floor(),
                    duration
                ),
                LogTone::Frost,
            );
            events.push(TickEvent::Sfx(Sfx::SkillShield));
            events.push(TickEvent::SkillFx {
                skill: id,
                value: reduction,
            });
        }
    }

    next.skills.cooldowns.insert(id, def.cooldown);
    next.skill_use_count += 1;
    (next, events)
}

/// Decrement buff timers by one tick, dropping expired buffs.
pub fn tick_buffs(state: &SkillState) -> SkillState {
    let mut next = state.clone();
    next.buffs = state
        .buffs
        .iter()
        .filter(|b| b.remaining_turns > 1)
        .map(|b| Buff {
            remaining_turns: b.remaining_turns - 1,
            ..*b
        })
        .collect();
    next
}

/// Decrement cooldowns by one battle, dropping those that reach zero.
pub fn decay_cooldowns(state: &SkillState) -> SkillState {
    let mut next = state.clone();
    next.cooldowns = state
        .cooldowns
        .iter()
        .filter(|(_, cd)| **cd > 1)
        .map(|(id, cd)| (*id, cd - 1))
        .collect();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::run_state::test_support::{ally, enemy, grassland_run};
    use crate::core::run_state::AllyRole;

    fn skilled_run() -> RunState {
        let mut run = grassland_run();
        run.civ.tech = 4;
        run.civ.life = 4;
        run.civ.ritual = 4;
        run.enemy = Some(enemy(100, 5, 0));
        run.skills.available = available_skills(&run);
        run
    }

    #[test]
    fn test_available_skills_by_level() {
        let mut run = grassland_run();
        assert!(available_skills(&run).is_empty());
        run.civ.tech = 3;
        assert_eq!(available_skills(&run), vec![SkillId::FireBurst]);
        run.civ.life = 4;
        run.civ.ritual = 4;
        // balanced checks the minimum level: 3
        assert_eq!(
            available_skills(&run),
            vec![SkillId::FireBurst, SkillId::NatureHeal, SkillId::BloodRage]
        );
        run.civ.tech = 4;
        assert!(available_skills(&run).contains(&SkillId::ShieldWall));
    }

    #[test]
    fn test_fire_burst_damages_enemy() {
        let run = skilled_run();
        let (next, events) = apply_skill(&run, SkillId::FireBurst);
        assert_eq!(next.enemy.as_ref().unwrap().hp, 55);
        assert_eq!(next.damage_dealt, run.damage_dealt + 45);
        assert_eq!(next.skills.cooldown(SkillId::FireBurst), 2);
        assert_eq!(next.skill_use_count, 1);
        assert!(events.contains(&TickEvent::Sfx(Sfx::SkillFire)));
        assert!(events.iter().any(|e| matches!(
            e,
            TickEvent::SkillFx {
                skill: SkillId::FireBurst,
                ..
            }
        )));
    }

    #[test]
    fn test_skill_on_cooldown_is_noop() {
        let run = skilled_run();
        let (used, _) = apply_skill(&run, SkillId::FireBurst);
        let (again, events) = apply_skill(&used, SkillId::FireBurst);
        assert_eq!(again, used);
        assert!(events.is_empty());
    }

    #[test]
    fn test_locked_skill_is_noop() {
        let mut run = grassland_run();
        run.enemy = Some(enemy(100, 5, 0));
        let (next, events) = apply_skill(&run, SkillId::FireBurst);
        assert_eq!(next, run);
        assert!(events.is_empty());
    }

    #[test]
    fn test_damage_without_enemy_still_cools_down() {
        let mut run = skilled_run();
        run.enemy = None;
        let (next, events) = apply_skill(&run, SkillId::FireBurst);
        assert!(events.is_empty());
        assert_eq!(next.skills.cooldown(SkillId::FireBurst), 2);
    }

    #[test]
    fn test_nature_heal_heals_player_and_allies() {
        let mut run = skilled_run();
        run.hp = 30;
        let mut hurt = ally(AllyRole::Striker, 40, 5);
        hurt.hp = 10;
        run.allies.push(hurt);
        let (next, _) = apply_skill(&run, SkillId::NatureHeal);
        assert_eq!(next.hp, 70);
        assert_eq!(next.allies[0].hp, 18);
    }

    #[test]
    fn test_blood_rage_costs_hp_and_buffs() {
        let mut run = skilled_run();
        run.hp = 15;
        let (next, _) = apply_skill(&run, SkillId::BloodRage);
        assert_eq!(next.hp, 1);
        assert_eq!(next.skills.attack_buff(), Some(2.0));
        assert_eq!(next.skills.buffs[0].remaining_turns, 3);
    }

    #[test]
    fn test_tick_buffs_expires() {
        let run = skilled_run();
        let (next, _) = apply_skill(&run, SkillId::ShieldWall);
        let one = tick_buffs(&next.skills);
        assert_eq!(one.shield_reduction(), Some(0.5));
        let two = tick_buffs(&one);
        assert!(two.buffs.is_empty());
    }

    #[test]
    fn test_decay_cooldowns() {
        let mut state = SkillState::default();
        state.cooldowns.insert(SkillId::FireBurst, 2);
        state.cooldowns.insert(SkillId::NatureHeal, 1);
        let next = decay_cooldowns(&state);
        assert_eq!(next.cooldown(SkillId::FireBurst), 1);
        assert!(!next.cooldowns.contains_key(&SkillId::NatureHeal));
    }
}
