//! Challenge runs: a normal run with extra restrictions.

use crate::core::run_state::RunState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChallengeId {
    Fragile,
    Minimalist,
    TimeTrial,
}

impl ChallengeId {
    pub const ALL: [ChallengeId; 3] = [
        ChallengeId::Fragile,
        ChallengeId::Minimalist,
        ChallengeId::TimeTrial,
    ];

    /// Stable key used in stats and achievements.
    pub fn key(&self) -> &'static str {
        match self {
            ChallengeId::Fragile => "fragile",
            ChallengeId::Minimalist => "minimalist",
            ChallengeId::TimeTrial => "time_trial",
        }
    }

    pub fn def(&self) -> &'static ChallengeDef {
        match self {
            ChallengeId::Fragile => &CHALLENGES[0],
            ChallengeId::Minimalist => &CHALLENGES[1],
            ChallengeId::TimeTrial => &CHALLENGES[2],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyStat {
    Atk,
    Hp,
}

/// One restriction applied to a challenge run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChallengeModifier {
    /// Scale starting max HP
    HpMultiplier(f64),
    MaxEvolutions(usize),
    /// Wall-clock limit in seconds; running out is a loss
    SpeedLimit(u32),
    NoHealing,
    EnemyMultiplier { stat: EnemyStat, value: f64 },
}

#[derive(Debug, Clone, Copy)]
pub struct ChallengeDef {
    pub id: ChallengeId,
    pub name: &'static str,
    pub description: &'static str,
    pub modifiers: &'static [ChallengeModifier],
}

pub const CHALLENGES: [ChallengeDef; 3] = [
    ChallengeDef {
        id: ChallengeId::Fragile,
        name: "Fragile Body",
        description: "Start with half HP and take 25% more damage.",
        modifiers: &[
            ChallengeModifier::HpMultiplier(0.5),
            ChallengeModifier::EnemyMultiplier {
                stat: EnemyStat::Atk,
                value: 1.25,
            },
        ],
    },
    ChallengeDef {
        id: ChallengeId::Minimalist,
        name: "Minimalist",
        description: "At most 5 evolutions. Make every pick count.",
        modifiers: &[ChallengeModifier::MaxEvolutions(5)],
    },
    ChallengeDef {
        id: ChallengeId::TimeTrial,
        name: "Time Trial",
        description: "Clear within 10 minutes or lose.",
        modifiers: &[ChallengeModifier::SpeedLimit(600)],
    },
];

/// Apply every modifier of a challenge to a freshly started run.
pub fn apply_challenge(run: &RunState, def: &ChallengeDef) -> RunState {
    let mut next = run.clone();
    for modifier in def.modifiers {
        match *modifier {
            ChallengeModifier::HpMultiplier(value) => {
                next.max_hp = ((next.max_hp as f64 * value).floor() as i32).max(1);
                next.hp = next.max_hp;
            }
            ChallengeModifier::MaxEvolutions(count) => next.max_evolutions = Some(count),
            ChallengeModifier::SpeedLimit(secs) => next.time_limit_secs = Some(secs),
            ChallengeModifier::NoHealing => next.no_healing = true,
            ChallengeModifier::EnemyMultiplier { stat, value } => match stat {
                EnemyStat::Atk => next.enemy_atk_multiplier *= value,
                EnemyStat::Hp => next.enemy_hp_multiplier *= value,
            },
        }
    }
    next.challenge = Some(def.id);
    next
}

/// True once a time-limited run has used up its allowance.
pub fn is_time_up(run: &RunState, elapsed_secs: u64) -> bool {
    run.time_limit_secs
        .is_some_and(|limit| elapsed_secs >= u64::from(limit))
}
