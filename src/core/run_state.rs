//! The per-run aggregate and its parts.

use super::effects::StatSnapshot;
use crate::civ::{Arena, BiomeId, CivLevels, CivType, CivTypeExt};
use crate::core::constants::{LOG_KEEP_LINES, LOG_MAX_LINES};
use crate::evolution::{AwokenRecord, Evolution};
use crate::run::challenge::ChallengeId;
use crate::skills::SkillState;
use crate::tables::{Difficulty, FinalBossKey};
use crate::tree::TreeBonus;
use serde::{Deserialize, Serialize};

/// An enemy in the current battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub atk: i32,
    pub def: i32,
    pub bone: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllyRole {
    Striker,
    /// Heals the player instead of attacking
    Healer,
    /// Absorbs most of the enemy's hit
    Tank,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ally {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub atk: i32,
    pub civ: CivType,
    pub alive: bool,
    pub role: AllyRole,
}

impl Ally {
    pub fn is_tank(&self) -> bool {
        self.role == AllyRole::Tank
    }

    pub fn is_healer(&self) -> bool {
        self.role == AllyRole::Healer
    }

    /// Reduce HP, marking the ally dead at zero or below. Returns true on death.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.hp -= amount;
        if self.hp <= 0 {
            self.alive = false;
            return true;
        }
        false
    }
}

/// Color class of a battle log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogTone {
    Plain,
    Highlight,
    Danger,
    Fire,
    Heal,
    Blood,
    Frost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    pub tone: LogTone,
}

/// Everything that changes during a single run.
///
/// Engine functions never mutate a caller's `RunState`; they clone it, update
/// the copy and return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    // Core combat stats
    pub hp: i32,
    pub max_hp: i32,
    pub atk: i32,
    pub def: i32,
    pub crit_rate: f64,
    pub attack_multiplier: f64,
    pub damage_multiplier: f64,
    pub burning: bool,

    pub civ: CivLevels,

    // Progression
    pub evolutions: Vec<Evolution>,
    pub awoken: Vec<AwokenRecord>,
    pub final_awakening: Option<CivTypeExt>,

    // Party
    pub allies: Vec<Ally>,
    pub max_allies: usize,

    // World position
    pub biome_path: [BiomeId; 3],
    /// Number of biomes entered so far (1-based once the first is picked)
    pub biome_index: usize,
    pub arena: Arena,
    pub wave: u32,
    pub waves_per_biome: u32,
    pub biomes_cleared: u32,

    // Resources
    pub bone_earned: u32,
    pub bonus_bone: i32,

    pub enemy: Option<Enemy>,
    pub skills: SkillState,

    // Bookkeeping
    pub turn: u32,
    pub wave_turn: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub max_hit: i32,
    pub kills: u32,
    pub battle_count: u32,
    pub event_count: u32,
    pub skill_use_count: u32,
    pub total_healing: u64,
    pub revive_used: bool,
    pub log: Vec<LogEntry>,
    pub difficulty_index: usize,
    pub difficulty: Difficulty,
    pub tree_bonus: TreeBonus,
    pub evolution_choices: usize,
    pub micro_req: u32,
    pub final_req: u32,
    pub final_boss: Option<FinalBossKey>,
    pub final_phase: u8,

    // Challenge modifiers
    pub challenge: Option<ChallengeId>,
    pub max_evolutions: Option<usize>,
    pub time_limit_secs: Option<u32>,
    pub enemy_atk_multiplier: f64,
    pub enemy_hp_multiplier: f64,
    pub no_healing: bool,
}

impl RunState {
    pub fn snapshot(&self) -> StatSnapshot {
        StatSnapshot {
            atk: self.atk,
            max_hp: self.max_hp,
            hp: self.hp,
            def: self.def,
            crit_rate: self.crit_rate,
            attack_multiplier: self.attack_multiplier,
            burning: self.burning,
            bonus_bone: self.bonus_bone,
        }
    }

    pub fn write_snapshot(&mut self, s: &StatSnapshot) {
        self.atk = s.atk;
        self.max_hp = s.max_hp;
        self.hp = s.hp;
        self.def = s.def;
        self.crit_rate = s.crit_rate;
        self.attack_multiplier = s.attack_multiplier;
        self.burning = s.burning;
        self.bonus_bone = s.bonus_bone;
    }

    /// `floor(atk * attack_multiplier * damage_multiplier)`
    pub fn effective_attack(&self) -> i32 {
        (self.atk as f64 * self.attack_multiplier * self.damage_multiplier).floor() as i32
    }

    pub fn alive_allies(&self) -> impl Iterator<Item = &Ally> {
        self.allies.iter().filter(|a| a.alive)
    }

    pub fn dead_ally_indices(&self) -> Vec<usize> {
        self.allies
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.alive)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn has_dead_ally(&self) -> bool {
        self.allies.iter().any(|a| !a.alive)
    }

    pub fn has_ally_room(&self) -> bool {
        self.allies.len() < self.max_allies
    }

    pub fn is_boss_wave(&self) -> bool {
        self.wave > self.waves_per_biome
    }

    pub fn current_biome(&self) -> Option<BiomeId> {
        self.arena.biome()
    }

    /// True once a challenge evolution cap has been reached.
    pub fn evolution_cap_reached(&self) -> bool {
        self.max_evolutions
            .map(|cap| self.evolutions.len() >= cap)
            .unwrap_or(false)
    }

    /// Heal the player, clamped to max HP. Returns the amount restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        let healed = (self.hp - before).max(0);
        self.total_healing += healed as u64;
        healed
    }

    pub fn push_log(&mut self, text: impl Into<String>, tone: LogTone) {
        self.log.push(LogEntry {
            text: text.into(),
            tone,
        });
    }

    /// Keep the log bounded: past the maximum, only the newest lines survive.
    pub fn trim_log(&mut self) {
        if self.log.len() > LOG_MAX_LINES {
            let drop = self.log.len() - LOG_KEEP_LINES;
            self.log.drain(..drop);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::run::lifecycle::start_run;
    use crate::save::SaveData;

    /// A fresh Primal-difficulty run fighting in the grassland.
    pub fn grassland_run() -> RunState {
        let mut rng = crate::core::rng::ScriptedRng::constant(0.0);
        let mut run = start_run(0, &SaveData::default(), &mut rng);
        run.biome_path = [BiomeId::Grassland, BiomeId::Glacier, BiomeId::Volcano];
        run.arena = Arena::Biome(BiomeId::Grassland);
        run.biome_index = 1;
        run
    }

    pub fn enemy(hp: i32, atk: i32, def: i32) -> Enemy {
        Enemy {
            name: "Test Beast".to_string(),
            hp,
            max_hp: hp,
            atk,
            def,
            bone: 2,
        }
    }

    pub fn ally(role: AllyRole, hp: i32, atk: i32) -> Ally {
        Ally {
            name: format!("{:?}", role),
            hp,
            max_hp: hp,
            atk,
            civ: CivType::Life,
            alive: true,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_snapshot_roundtrip() {
        let mut run = grassland_run();
        let mut snap = run.snapshot();
        snap.atk = 42;
        snap.burning = true;
        run.write_snapshot(&snap);
        assert_eq!(run.atk, 42);
        assert!(run.burning);
        assert_eq!(run.snapshot(), snap);
    }

    #[test]
    fn test_effective_attack_floors() {
        let mut run = grassland_run();
        run.atk = 10;
        run.attack_multiplier = 1.5;
        run.damage_multiplier = 1.08;
        assert_eq!(run.effective_attack(), 16);
    }

    #[test]
    fn test_trim_log_keeps_newest() {
        let mut run = grassland_run();
        for i in 0..61 {
            run.push_log(format!("line {}", i), LogTone::Plain);
        }
        run.trim_log();
        assert_eq!(run.log.len(), LOG_KEEP_LINES);
        assert_eq!(run.log.last().map(|l| l.text.as_str()), Some("line 60"));

        let mut short = grassland_run();
        short.push_log("only", LogTone::Plain);
        short.trim_log();
        assert_eq!(short.log.len(), 1);
    }

    #[test]
    fn test_heal_tracks_total() {
        let mut run = grassland_run();
        run.hp = 70;
        assert_eq!(run.heal(25), 10);
        assert_eq!(run.hp, run.max_hp);
        assert_eq!(run.total_healing, 10);
    }

    #[test]
    fn test_dead_allies() {
        let mut run = grassland_run();
        run.allies.push(ally(AllyRole::Striker, 20, 5));
        run.allies.push(ally(AllyRole::Tank, 30, 1));
        assert!(!run.has_dead_ally());
        assert!(run.allies[1].take_damage(30));
        assert_eq!(run.dead_ally_indices(), vec![1]);
        assert_eq!(run.alive_allies().count(), 1);
    }

    #[test]
    fn test_evolution_cap() {
        let mut run = grassland_run();
        assert!(!run.evolution_cap_reached());
        run.max_evolutions = Some(0);
        assert!(run.evolution_cap_reached());
    }
}
