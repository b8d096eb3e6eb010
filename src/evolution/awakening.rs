//! Awakening checks and application.

use super::data::awakening_def;
use super::types::*;
use crate::civ::{CivType, CivTypeExt};
use crate::core::constants::{
    BALANCED_FINAL_AWAKENING_LEVEL, BALANCED_MICRO_AWAKENING_LEVEL, MAX_UPCOMING_AWAKENINGS,
};
use crate::core::effects::apply_effect;
use crate::core::run_state::{LogTone, RunState};

fn is_done(run: &RunState, rule: AwakeningRule) -> bool {
    let id = rule.id();
    run.awoken.iter().any(|a| a.id == id)
}

/// Every awakening rule in check order, paired with whether it is satisfied.
fn rules(run: &RunState) -> Vec<(AwakeningRule, bool)> {
    let min = run.civ.min();
    let mut rules = vec![(
        AwakeningRule::new(CivTypeExt::Balanced, AwakeningTier::Micro),
        min >= BALANCED_MICRO_AWAKENING_LEVEL,
    )];
    for civ in CivType::ALL {
        rules.push((
            AwakeningRule::new(civ.into(), AwakeningTier::Micro),
            run.civ.get(civ) >= run.micro_req,
        ));
    }
    let balanced_micro_done = is_done(
        run,
        AwakeningRule::new(CivTypeExt::Balanced, AwakeningTier::Micro),
    );
    rules.push((
        AwakeningRule::new(CivTypeExt::Balanced, AwakeningTier::Final),
        min >= BALANCED_FINAL_AWAKENING_LEVEL && balanced_micro_done,
    ));
    for civ in CivType::ALL {
        rules.push((
            AwakeningRule::new(civ.into(), AwakeningTier::Final),
            run.civ.get(civ) >= run.final_req,
        ));
    }
    rules
}

/// The first satisfied awakening not yet taken.
pub fn check_awakening_rules(run: &RunState) -> Option<AwakeningRule> {
    rules(run)
        .into_iter()
        .find(|(rule, ok)| *ok && !is_done(run, *rule))
        .map(|(rule, _)| rule)
}

pub fn apply_awakening(run: &RunState, rule: AwakeningRule) -> RunState {
    let def = awakening_def(rule);
    let mut next = run.clone();
    let snap = apply_effect(&next.snapshot(), &def.effect);
    next.write_snapshot(&snap);

    if let Some(mult) = def.ally_atk_multiplier {
        for ally in next.allies.iter_mut().filter(|a| a.alive) {
            ally.atk *= mult;
        }
    }
    if def.ally_full_heal {
        for ally in next.allies.iter_mut().filter(|a| a.alive) {
            ally.hp = ally.max_hp;
        }
    }
    if rule.tier == AwakeningTier::Final {
        next.final_awakening = Some(rule.civ);
    }

    next.awoken.push(AwokenRecord {
        id: rule.id(),
        name: def.name.to_string(),
        civ: rule.civ,
        tier: rule.tier,
    });
    next.push_log(format!("Awakening: {}", def.name), LogTone::Highlight);
    next
}

/// Up to three upcoming awakenings with the levels still missing.
pub fn awakening_progress(run: &RunState) -> Vec<AwakeningProgress> {
    let min = run.civ.min();
    let mut upcoming = Vec::new();
    let mut push = |rule: AwakeningRule, required: u32, current: u32| {
        upcoming.push(AwakeningProgress {
            rule,
            name: awakening_def(rule).name,
            required_level: required,
            remaining: required.saturating_sub(current),
        });
    };

    let bal_micro = AwakeningRule::new(CivTypeExt::Balanced, AwakeningTier::Micro);
    if min < BALANCED_MICRO_AWAKENING_LEVEL && !is_done(run, bal_micro) {
        push(bal_micro, BALANCED_MICRO_AWAKENING_LEVEL, min);
    }
    for civ in CivType::ALL {
        let rule = AwakeningRule::new(civ.into(), AwakeningTier::Micro);
        let level = run.civ.get(civ);
        if level < run.micro_req && !is_done(run, rule) {
            push(rule, run.micro_req, level);
        }
    }
    let bal_final = AwakeningRule::new(CivTypeExt::Balanced, AwakeningTier::Final);
    if min >= BALANCED_MICRO_AWAKENING_LEVEL
        && is_done(run, bal_micro)
        && min < BALANCED_FINAL_AWAKENING_LEVEL
        && !is_done(run, bal_final)
    {
        push(bal_final, BALANCED_FINAL_AWAKENING_LEVEL, min);
    }
    for civ in CivType::ALL {
        let rule = AwakeningRule::new(civ.into(), AwakeningTier::Final);
        let level = run.civ.get(civ);
        if level < run.final_req && !is_done(run, rule) {
            push(rule, run.final_req, level);
        }
    }

    upcoming.truncate(MAX_UPCOMING_AWAKENINGS);
    upcoming
}
