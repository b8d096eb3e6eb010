//! Evolution offers, application and previews.

use super::data::EVOLUTIONS;
use super::types::*;
use crate::core::constants::{ALLY_RECRUIT_LEVELS, BASE_RARE_RATE};
use crate::core::effects::apply_effect;
use crate::core::rng::{roll, roll_index};
use crate::core::run_state::RunState;
use crate::civ::CivType;
use crate::tables::ally_templates;
use rand::Rng;

/// Whether a definition may be offered: not already offered this round, and
/// revive evolutions only while an ally is down.
fn offerable(def: &EvolutionDef, picked: &[&'static EvolutionDef], has_dead_ally: bool) -> bool {
    !picked.iter().any(|p| p.name == def.name) && (!def.effect.revives_ally() || has_dead_ally)
}

/// Offerable evolutions of `civ` (or all civs) that pass the rarity gate.
/// Each rare candidate costs one roll.
fn gated_pool(
    civ: Option<CivType>,
    picked: &[&'static EvolutionDef],
    has_dead_ally: bool,
    rare_rate: f64,
    rng: &mut impl Rng,
) -> Vec<&'static EvolutionDef> {
    let mut pool = Vec::new();
    for def in EVOLUTIONS.iter() {
        if civ.is_some_and(|c| def.civ != c) || !offerable(def, picked, has_dead_ally) {
            continue;
        }
        if def.is_rare() && roll(rng) >= rare_rate {
            continue;
        }
        pool.push(def);
    }
    pool
}

/// Roll the evolution offer shown after a battle.
///
/// One pick per civilization first (tech, life, ritual), then fill from all
/// civilizations, then fall back to any remaining offerable evolution
/// ignoring rarity. Names never repeat within an offer.
pub fn roll_evolution_choices(run: &RunState, rng: &mut impl Rng) -> Vec<Evolution> {
    let rare_rate = BASE_RARE_RATE + run.tree_bonus.rare_rate;
    let target = run.evolution_choices;
    let has_dead = run.has_dead_ally();
    let mut picked: Vec<&'static EvolutionDef> = Vec::with_capacity(target);

    for civ in CivType::ALL {
        let pool = gated_pool(Some(civ), &picked, has_dead, rare_rate, rng);
        if !pool.is_empty() {
            picked.push(pool[roll_index(rng, pool.len())]);
        }
    }

    while picked.len() < target {
        let pool = gated_pool(None, &picked, has_dead, rare_rate, rng);
        if pool.is_empty() {
            break;
        }
        picked.push(pool[roll_index(rng, pool.len())]);
    }

    if picked.len() < target {
        let mut fallback: Vec<&'static EvolutionDef> = EVOLUTIONS
            .iter()
            .filter(|d| offerable(d, &picked, has_dead))
            .collect();
        while picked.len() < target && !fallback.is_empty() {
            let idx = roll_index(rng, fallback.len());
            picked.push(fallback.remove(idx));
        }
    }

    picked.truncate(target);
    picked.into_iter().map(Evolution::from).collect()
}

/// Take an evolution: apply its effect, heal or revive allies, raise the
/// civilization level and possibly recruit an ally.
pub fn apply_evolution(run: &RunState, evolution: &Evolution, rng: &mut impl Rng) -> EvolutionOutcome {
    let mut next = run.clone();
    next.evolutions.push(evolution.clone());
    let snap = apply_effect(&next.snapshot(), &evolution.effect);
    next.write_snapshot(&snap);

    let fx = &evolution.effect;
    if fx.ally_heal > 0 {
        for ally in next.allies.iter_mut().filter(|a| a.alive) {
            ally.hp = (ally.hp + fx.ally_heal).min(ally.max_hp);
        }
    }

    let mut ally_revived = None;
    if fx.revives_ally() {
        if let Some(ally) = next.allies.iter_mut().find(|a| !a.alive) {
            ally.alive = true;
            ally.hp = (ally.max_hp as f64 * fx.ally_revive_pct as f64 / 100.0).floor() as i32;
            ally_revived = Some(ally.name.clone());
        }
    }

    next.civ.increment(evolution.civ);

    let level = next.civ.get(evolution.civ);
    let mut ally_joined = None;
    if next.has_ally_room() && ALLY_RECRUIT_LEVELS.contains(&level) {
        let templates = ally_templates(evolution.civ);
        let template = &templates[roll_index(rng, templates.len())];
        let ally = template.recruit(next.tree_bonus.ally_hp, next.tree_bonus.ally_atk);
        ally_joined = Some(ally.name.clone());
        next.allies.push(ally);
    }

    EvolutionOutcome {
        run: next,
        ally_joined,
        ally_revived,
    }
}

/// Stats after `evolution` without applying it.
pub fn preview_evolution(run: &RunState, evolution: &Evolution) -> EvolutionPreview {
    let s = apply_effect(&run.snapshot(), &evolution.effect);
    EvolutionPreview {
        atk: (s.atk as f64 * s.attack_multiplier * run.damage_multiplier).floor() as i32,
        hp: s.hp,
        max_hp: s.max_hp,
        def: s.def,
        crit_rate: s.crit_rate,
    }
}

/// A random non-revive evolution, used by event outcomes.
pub fn random_evolution(rng: &mut impl Rng) -> Evolution {
    let pool: Vec<&EvolutionDef> = EVOLUTIONS
        .iter()
        .filter(|e| !e.effect.revives_ally())
        .collect();
    Evolution::from(pool[roll_index(rng, pool.len())])
}
