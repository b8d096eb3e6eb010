//! The battle tick.

use super::types::*;
use crate::civ::{biome_affinity_multiplier, env_hazard, environmental_damage, CivTypeExt, Resistance};
use crate::core::constants::*;
use crate::core::rng::{roll, roll_index};
use crate::core::run_state::{Enemy, LogTone, RunState};
use crate::skills::tick_buffs;
use crate::synergy::{synergy_bonus_for, SynergyBonus};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Whether the ritual final awakening's low-HP triple damage applies.
fn blood_oracle_active(run: &RunState) -> bool {
    run.final_awakening == Some(CivTypeExt::Ritual)
        && (run.hp as f64) < run.max_hp as f64 * RITUAL_LOW_HP_RATIO
}

/// Roll the player's attack against the current arena, before enemy defense.
///
/// Consumes exactly one roll for the crit check.
pub fn calc_player_attack(run: &RunState, bonus: &SynergyBonus, rng: &mut impl Rng) -> PlayerAttack {
    let attack_multiplier = run.attack_multiplier * run.skills.attack_buff().unwrap_or(1.0);
    let atk = run.atk + bonus.atk_bonus;
    let crit_rate = (run.crit_rate + bonus.crit_bonus as f64 / 100.0).min(1.0);

    let mut pa = (atk as f64 * attack_multiplier * run.damage_multiplier).floor() as i32;
    if blood_oracle_active(run) {
        pa *= RITUAL_LOW_HP_MULTIPLIER;
    }
    let crit = roll(rng) < crit_rate;
    if crit {
        pa = (pa as f64 * CRIT_DAMAGE_MULTIPLIER).floor() as i32;
    }
    let affinity = biome_affinity_multiplier(run.arena, &run.civ);
    PlayerAttack {
        damage: (pa as f64 * affinity).floor() as i32,
        crit,
    }
}

fn environment_phase(next: &mut RunState, bonus: &SynergyBonus) {
    if bonus.env_immune {
        return;
    }
    let dmg = environmental_damage(
        next.arena,
        next.difficulty.env_scale,
        &next.tree_bonus,
        next.final_awakening,
    );
    if dmg <= 0 {
        return;
    }
    next.hp -= dmg;
    let hazard = next.arena.biome().and_then(env_hazard);
    let (label, tone) = match hazard {
        Some(h) if h.resistance == Resistance::Ice => (h.label, LogTone::Frost),
        Some(h) => (h.label, LogTone::Fire),
        None => ("Hazard", LogTone::Danger),
    };
    next.push_log(format!("{} -{}", label, dmg), tone);
}

fn player_phase(
    next: &mut RunState,
    enemy: &mut Enemy,
    bonus: &SynergyBonus,
    events: &mut Vec<TickEvent>,
    rng: &mut impl Rng,
) {
    let attack = calc_player_attack(next, bonus, rng);
    let hit = (attack.damage - enemy.def).max(1);
    next.max_hit = next.max_hit.max(hit);

    if blood_oracle_active(next) && next.wave_turn == 1 {
        next.push_log("  Blood power awakens! ATK x3", LogTone::Blood);
    }

    enemy.hp -= hit;
    next.damage_dealt += hit as u64;
    let mut line = format!("Attack -> {} {}", enemy.name, hit);
    if attack.crit {
        line.push_str(" CRITICAL");
    }
    if hit == 1 {
        line.push_str(" (armored)");
    }
    let tone = if attack.crit {
        LogTone::Highlight
    } else if hit == 1 {
        LogTone::Danger
    } else {
        LogTone::Plain
    };
    next.push_log(line, tone);
    events.push(TickEvent::Sfx(if attack.crit { Sfx::Crit } else { Sfx::Hit }));
    events.push(TickEvent::Popup {
        value: hit,
        crit: attack.crit,
        heal: false,
        target: PopupTarget::Enemy,
    });

    if next.burning {
        let burn = (attack.damage as f64 * BURN_DAMAGE_RATIO * bonus.burn_multiplier).floor() as i32;
        enemy.hp -= burn;
        next.damage_dealt += burn.max(0) as u64;
        next.push_log(format!("  Burn {}", burn), LogTone::Fire);
    }
}

fn ally_phase(next: &mut RunState, enemy: &mut Enemy, bonus: &SynergyBonus, events: &mut Vec<TickEvent>) {
    for i in 0..next.allies.len() {
        let ally = next.allies[i].clone();
        if !ally.alive {
            continue;
        }
        if ally.is_healer() {
            if next.no_healing {
                continue;
            }
            let amount = (ally.atk as f64 * HEALER_ATK_RATIO).floor() as i32;
            next.heal(amount);
            next.push_log(format!("  {} +{}", ally.name, amount), LogTone::Heal);
            events.push(TickEvent::Popup {
                value: amount,
                crit: false,
                heal: true,
                target: PopupTarget::Player,
            });
        } else {
            let dmg = (ally.atk + bonus.ally_atk_bonus - enemy.def).max(1);
            enemy.hp -= dmg;
            next.damage_dealt += dmg as u64;
            next.push_log(format!("  {} -> {}", ally.name, dmg), LogTone::Plain);
        }
    }
}

fn regen_phase(next: &mut RunState, bonus: &SynergyBonus, events: &mut Vec<TickEvent>) {
    if next.tree_bonus.regen > 0.0 && !next.no_healing {
        let amount = ((next.max_hp as f64 * next.tree_bonus.regen * (1.0 + bonus.heal_bonus_ratio))
            .floor() as i32)
            .max(1);
        next.heal(amount);
        next.push_log(format!("  Regen +{}", amount), LogTone::Heal);
        events.push(TickEvent::Popup {
            value: amount,
            crit: false,
            heal: true,
            target: PopupTarget::Player,
        });
    }
    if bonus.ally_hp_bonus > 0 {
        for ally in next.allies.iter_mut().filter(|a| a.alive) {
            ally.hp = (ally.hp + bonus.ally_hp_bonus).min(ally.max_hp);
        }
    }
}

fn kill_check(next: &mut RunState, enemy: &mut Enemy, final_boss_mode: bool, events: &mut Vec<TickEvent>) -> Flow {
    if enemy.hp > 0 {
        return Flow::Continue;
    }
    enemy.hp = 0;
    next.bone_earned += enemy.bone;
    next.kills += 1;
    next.push_log(
        format!("=== {} defeated! Bones +{} ===", enemy.name, enemy.bone),
        LogTone::Highlight,
    );
    events.push(TickEvent::Sfx(Sfx::Kill));
    events.push(TickEvent::ShakeEnemy);
    events.push(if final_boss_mode {
        TickEvent::FinalBossKilled
    } else {
        TickEvent::EnemyKilled
    });
    Flow::Stop
}

fn enemy_phase(next: &mut RunState, enemy: &Enemy, bonus: &SynergyBonus, events: &mut Vec<TickEvent>, rng: &mut impl Rng) {
    let mut dmg = (enemy.atk - (next.def + bonus.def_bonus)).max(1);
    if let Some(reduction) = next.skills.shield_reduction() {
        dmg = ((dmg as f64 * (1.0 - reduction)).floor() as i32).max(1);
    }

    let mut fallen = Vec::new();
    if let Some(tank) = next.allies.iter_mut().find(|a| a.alive && a.is_tank()) {
        let absorbed = ((dmg as f64 * TANK_ABSORB_RATIO).floor() as i32).max(1);
        dmg = (dmg as f64 * TANK_PASSTHROUGH_RATIO).floor() as i32;
        if tank.take_damage(absorbed) {
            fallen.push(tank.name.clone());
        }
    }
    for name in fallen {
        next.push_log(format!("{} has fallen", name), LogTone::Danger);
    }

    next.hp -= dmg;
    next.damage_taken += dmg.max(0) as u64;
    next.push_log(format!("{} -> {}", enemy.name, dmg), LogTone::Danger);
    events.push(TickEvent::Popup {
        value: dmg,
        crit: false,
        heal: false,
        target: PopupTarget::Player,
    });

    if roll(rng) < SPLASH_HIT_CHANCE {
        let targets: Vec<usize> = next
            .allies
            .iter()
            .enumerate()
            .filter(|(_, a)| a.alive && !a.is_tank())
            .map(|(i, _)| i)
            .collect();
        if !targets.is_empty() {
            let idx = targets[roll_index(rng, targets.len())];
            let splash = ((enemy.atk as f64 * SPLASH_ATK_RATIO).floor() as i32).max(1);
            let died = next.allies[idx].take_damage(splash);
            let name = next.allies[idx].name.clone();
            next.push_log(format!("  {} -{}", name, splash), LogTone::Danger);
            if died {
                next.push_log(format!("{} has fallen", name), LogTone::Danger);
            }
        }
    }
}

fn death_check(next: &mut RunState, events: &mut Vec<TickEvent>) -> Flow {
    if next.hp > 0 {
        return Flow::Continue;
    }
    if next.tree_bonus.has_revive() && !next.revive_used {
        next.revive_used = true;
        let ratio = REVIVE_MIN_HP_RATIO.max(REVIVE_MIN_HP_RATIO + next.tree_bonus.revive_pct);
        next.hp = (next.max_hp as f64 * ratio).floor() as i32;
        next.push_log("Rite of Revival!", LogTone::Highlight);
        events.push(TickEvent::Sfx(Sfx::Heal));
        return Flow::Continue;
    }
    next.hp = 0;
    next.push_log("The tribe has perished...", LogTone::Danger);
    events.push(TickEvent::Sfx(Sfx::Death));
    events.push(TickEvent::PlayerDead);
    Flow::Stop
}

fn cleanup(next: &mut RunState, start_hp: i32, events: &mut Vec<TickEvent>) {
    next.trim_log();
    events.push(TickEvent::ShakeEnemy);
    if next.hp < start_hp {
        events.push(TickEvent::FlashPlayerDamage);
    }
    if next.hp > start_hp {
        events.push(TickEvent::FlashPlayerHeal);
    }
    next.skills = tick_buffs(&next.skills);
}

/// Advance the current battle by one tick.
///
/// Runs every [`TickPhase`] in order, stopping early when the enemy dies or
/// the player falls for good. Without an enemy the run comes back unchanged.
pub fn tick(run: &RunState, final_boss_mode: bool, rng: &mut impl Rng) -> TickOutcome {
    let mut next = run.clone();
    let mut events = Vec::new();
    let Some(mut enemy) = next.enemy.take() else {
        return TickOutcome { run: next, events };
    };

    next.turn += 1;
    next.wave_turn += 1;
    let start_hp = next.hp;
    let bonus = synergy_bonus_for(&next.evolutions);

    for phase in TickPhase::ORDER {
        let flow = match phase {
            TickPhase::Environment => {
                environment_phase(&mut next, &bonus);
                Flow::Continue
            }
            TickPhase::Player => {
                player_phase(&mut next, &mut enemy, &bonus, &mut events, rng);
                Flow::Continue
            }
            TickPhase::Allies => {
                ally_phase(&mut next, &mut enemy, &bonus, &mut events);
                Flow::Continue
            }
            TickPhase::Regen => {
                regen_phase(&mut next, &bonus, &mut events);
                Flow::Continue
            }
            TickPhase::KillCheck => kill_check(&mut next, &mut enemy, final_boss_mode, &mut events),
            TickPhase::Enemy => {
                enemy_phase(&mut next, &enemy, &bonus, &mut events, rng);
                Flow::Continue
            }
            TickPhase::DeathCheck => death_check(&mut next, &mut events),
            TickPhase::Cleanup => {
                cleanup(&mut next, start_hp, &mut events);
                Flow::Continue
            }
        };
        if flow == Flow::Stop {
            break;
        }
    }

    next.enemy = Some(enemy);
    TickOutcome { run: next, events }
}
