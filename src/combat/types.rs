//! Tick events and phase ordering.

use crate::core::run_state::RunState;
use crate::skills::SkillId;
use serde::{Deserialize, Serialize};

/// Abstract sound cue. Playback is up to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sfx {
    Hit,
    Crit,
    Kill,
    Heal,
    Evolution,
    Death,
    Boss,
    Win,
    SkillFire,
    SkillHeal,
    SkillRage,
    SkillShield,
    Synergy,
    Event,
    Achievement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupTarget {
    Player,
    Enemy,
}

/// Observable effect of a tick or skill, consumed by presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickEvent {
    EnemyKilled,
    PlayerDead,
    FinalBossKilled,
    Sfx(Sfx),
    ShakeEnemy,
    FlashPlayerDamage,
    FlashPlayerHeal,
    Popup {
        value: i32,
        crit: bool,
        heal: bool,
        target: PopupTarget,
    },
    SkillFx {
        skill: SkillId,
        value: f64,
    },
}

/// Steps of a tick, run in [`TickPhase::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    Environment,
    Player,
    Allies,
    Regen,
    KillCheck,
    Enemy,
    DeathCheck,
    Cleanup,
}

impl TickPhase {
    pub const ORDER: [TickPhase; 8] = [
        TickPhase::Environment,
        TickPhase::Player,
        TickPhase::Allies,
        TickPhase::Regen,
        TickPhase::KillCheck,
        TickPhase::Enemy,
        TickPhase::DeathCheck,
        TickPhase::Cleanup,
    ];
}

/// A player's swing before enemy defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerAttack {
    pub damage: i32,
    pub crit: bool,
}

#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub run: RunState,
    pub events: Vec<TickEvent>,
}

impl TickOutcome {
    pub fn has(&self, event: &TickEvent) -> bool {
        self.events.contains(event)
    }
}
