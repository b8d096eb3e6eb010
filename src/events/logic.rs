//! Event rolls and outcomes.

use super::data::RANDOM_EVENTS;
use super::types::*;
use crate::civ::dominant_civ;
use crate::core::constants::{EVENT_CHANCE, EVENT_MIN_BATTLES};
use crate::core::effects::apply_effect;
use crate::core::rng::{roll, roll_index};
use crate::core::run_state::{LogTone, RunState};
use crate::evolution::random_evolution;
use crate::tables::ally_templates;
use rand::Rng;

/// Maybe pick an event after a regular battle.
///
/// Nothing is rolled before the first completed battle. Events tied to the
/// current biome are weighted double.
pub fn roll_event(run: &RunState, rng: &mut impl Rng) -> Option<&'static EventDef> {
    if run.battle_count < EVENT_MIN_BATTLES {
        return None;
    }
    if roll(rng) >= EVENT_CHANCE {
        return None;
    }

    let biome = run.current_biome();
    let mut weighted: Vec<&'static EventDef> = Vec::new();
    for event in RANDOM_EVENTS
        .iter()
        .filter(|e| run.biomes_cleared >= e.min_biomes_cleared)
    {
        weighted.push(event);
        if biome.is_some_and(|b| event.biome_affinity.contains(&b)) {
            weighted.push(event);
        }
    }

    if weighted.is_empty() {
        return None;
    }
    Some(weighted[roll_index(rng, weighted.len())])
}

pub fn can_afford(run: &RunState, cost: Option<EventCost>) -> bool {
    match cost {
        Some(EventCost::Bone(amount)) => run.bone_earned >= amount,
        _ => true,
    }
}

/// Deduct a choice's cost. Bones floor at 0, HP at 1.
pub fn pay_event_cost(run: &RunState, cost: Option<EventCost>) -> RunState {
    let mut next = run.clone();
    match cost {
        Some(EventCost::Bone(amount)) => next.bone_earned = next.bone_earned.saturating_sub(amount),
        Some(EventCost::HpDamage(amount)) => next.hp = (next.hp - amount).max(1),
        None => {}
    }
    next
}

/// Apply a choice's effect. The cost is paid separately.
pub fn apply_event_choice(run: &RunState, choice: &EventChoice, rng: &mut impl Rng) -> RunState {
    let mut next = run.clone();

    match choice.effect {
        EventEffect::StatChange { stat, value } => match stat {
            EventStat::Hp => next.max_hp += value,
            EventStat::Atk => next.atk += value,
            EventStat::Def => next.def += value,
        },
        EventEffect::Heal { amount } => {
            next.heal(amount);
        }
        EventEffect::Damage { amount } => next.hp = (next.hp - amount).max(1),
        EventEffect::BoneChange { amount } => {
            next.bone_earned = (next.bone_earned as i64 + amount as i64).max(0) as u32;
        }
        EventEffect::AddAlly => {
            if next.has_ally_room() {
                let templates = ally_templates(dominant_civ(&next.civ));
                let template = &templates[roll_index(rng, templates.len())];
                next.allies.push(template.recruit(0.0, 0.0));
            }
        }
        EventEffect::RandomEvolution => {
            let evolution = random_evolution(rng);
            let snap = apply_effect(&next.snapshot(), &evolution.effect);
            next.write_snapshot(&snap);
            next.civ.increment(evolution.civ);
            next.push_log(format!("Gained {}", evolution.name), LogTone::Highlight);
            next.evolutions.push(evolution);
        }
        EventEffect::CivLevelUp(target) => {
            let civ = match target {
                CivTarget::Civ(civ) => civ,
                CivTarget::Dominant => dominant_civ(&next.civ),
            };
            next.civ.increment(civ);
        }
        EventEffect::Nothing => {}
    }

    next.event_count += 1;
    next
}

/// Result line for a choice, with its cost appended.
pub fn describe_outcome(effect: &EventEffect, cost: Option<EventCost>) -> EventOutcomeText {
    let (icon, mut text) = match effect {
        EventEffect::StatChange { stat, value } => {
            let (icon, name) = match stat {
                EventStat::Hp => ("+", "Max HP"),
                EventStat::Atk => ("!", "ATK"),
                EventStat::Def => ("#", "DEF"),
            };
            (icon, format!("{} {:+}!", name, value))
        }
        EventEffect::Heal { amount } => ("+", format!("Recovered {} HP!", amount)),
        EventEffect::Damage { amount } => ("x", format!("Took {} damage!", amount)),
        EventEffect::BoneChange { amount } => ("$", format!("Bones {:+}!", amount)),
        EventEffect::AddAlly => ("&", "A companion joined!".to_string()),
        EventEffect::RandomEvolution => ("*", "Gained a random evolution!".to_string()),
        EventEffect::CivLevelUp(_) => ("^", "Civilization level up!".to_string()),
        EventEffect::Nothing => ("-", "Nothing happened".to_string()),
    };

    match cost {
        Some(EventCost::HpDamage(amount)) => text.push_str(&format!(" (HP -{})", amount)),
        Some(EventCost::Bone(amount)) => text.push_str(&format!(" (Bones -{})", amount)),
        None => {}
    }

    EventOutcomeText { icon, text }
}
