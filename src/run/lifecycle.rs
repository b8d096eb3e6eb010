//! Run lifecycle: start, biome travel, battles, the final boss and rewards.
//!
//! Every function takes the current run by reference and returns the next
//! one. Inputs that make no sense in the current state (an unknown biome, an
//! unaffordable revive) return the run unchanged.

use crate::civ::{dominant_civ, Arena, BiomeId, CivLevels, CivType, CivTypeExt};
use crate::core::constants::*;
use crate::core::rng::roll_index;
use crate::core::run_state::{Enemy, LogTone, RunState};
use crate::save::SaveData;
use crate::skills::{available_skills, decay_cooldowns, SkillState};
use crate::tables::{boss_for, get_difficulty, wave_enemy, FinalBossKey, DIFFICULTIES};
use crate::tree::tree_bonus;
use rand::Rng;

/// Result of [`pick_biome_auto`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomePick {
    pub biome: BiomeId,
    /// True when the player must choose among `options`
    pub need_selection: bool,
    pub options: Vec<BiomeId>,
}

fn shuffled_path(rng: &mut impl Rng) -> [BiomeId; BIOME_COUNT] {
    let mut path = BiomeId::ALL;
    for i in (1..path.len()).rev() {
        let j = roll_index(rng, i + 1);
        path.swap(i, j);
    }
    path
}

fn requirement(base: u32, delta: i32) -> u32 {
    (base as i32 + delta).max(1) as u32
}

/// Build a fresh run from base stats and the save's tree bonuses.
///
/// Unknown difficulty indices fall back to the first difficulty. The biome
/// path is shuffled but no biome is entered yet; see [`apply_first_biome`].
pub fn start_run(difficulty: usize, save: &SaveData, rng: &mut impl Rng) -> RunState {
    let (difficulty_index, def) = match get_difficulty(difficulty) {
        Some(def) => (difficulty, def),
        None => (0, &DIFFICULTIES[0]),
    };
    let tb = tree_bonus(save);
    let biome_path = shuffled_path(rng);
    let max_hp = BASE_HP + tb.hp;

    tracing::debug!(
        difficulty = def.name,
        path = ?biome_path,
        tree_nodes = save.tree.len(),
        "starting run"
    );

    RunState {
        hp: max_hp,
        max_hp,
        atk: BASE_ATK + tb.atk,
        def: BASE_DEF + tb.def,
        crit_rate: (BASE_CRIT_RATE + tb.crit).min(1.0),
        attack_multiplier: 1.0,
        damage_multiplier: 1.0 + tb.damage_multiplier,
        burning: false,
        civ: CivLevels::uniform(tb.start_civ_level),
        evolutions: Vec::new(),
        awoken: Vec::new(),
        final_awakening: None,
        allies: Vec::new(),
        max_allies: BASE_MAX_ALLIES + tb.ally_slots as usize,
        biome_path,
        biome_index: 0,
        arena: Arena::Biome(biome_path[0]),
        wave: 0,
        waves_per_biome: WAVES_PER_BIOME,
        biomes_cleared: 0,
        bone_earned: 0,
        bonus_bone: 0,
        enemy: None,
        skills: SkillState::default(),
        turn: 0,
        wave_turn: 0,
        damage_dealt: 0,
        damage_taken: 0,
        max_hit: 0,
        kills: 0,
        battle_count: 0,
        event_count: 0,
        skill_use_count: 0,
        total_healing: 0,
        revive_used: false,
        log: Vec::new(),
        difficulty_index,
        difficulty: def.scaling,
        evolution_choices: BASE_EVOLUTION_CHOICES + tb.evolution_choices as usize,
        micro_req: requirement(BASE_MICRO_AWAKENING_LEVEL, tb.micro_req_delta),
        final_req: requirement(BASE_FINAL_AWAKENING_LEVEL, tb.final_req_delta),
        tree_bonus: tb,
        final_boss: None,
        final_phase: 0,
        challenge: None,
        max_evolutions: None,
        time_limit_secs: None,
        enemy_atk_multiplier: 1.0,
        enemy_hp_multiplier: 1.0,
        no_healing: false,
    }
}

fn remaining_biomes(run: &RunState) -> &[BiomeId] {
    let from = run.biome_index.min(run.biome_path.len());
    &run.biome_path[from..]
}

/// Decide which biome comes next, and whether the player has a choice.
pub fn pick_biome_auto(run: &RunState) -> BiomePick {
    if run.biome_index == 0 {
        return BiomePick {
            biome: run.biome_path[0],
            need_selection: false,
            options: Vec::new(),
        };
    }
    let rem = remaining_biomes(run);
    if rem.len() <= 1 {
        return BiomePick {
            biome: rem.first().copied().unwrap_or(run.biome_path[BIOME_COUNT - 1]),
            need_selection: false,
            options: Vec::new(),
        };
    }
    BiomePick {
        biome: rem[0],
        need_selection: true,
        options: rem.to_vec(),
    }
}

/// Enter a chosen biome.
///
/// The choice is moved into the current path slot so that the biomes left
/// afterwards are exactly the ones not yet visited. A biome that is not among
/// the remaining ones is rejected.
pub fn apply_biome_selection(run: &RunState, biome: BiomeId) -> RunState {
    let Some(offset) = remaining_biomes(run).iter().position(|&b| b == biome) else {
        return run.clone();
    };
    let mut next = run.clone();
    let slot = next.biome_index;
    next.biome_path.swap(slot, slot + offset);
    next.arena = Arena::Biome(biome);
    next.biome_index += 1;
    next.wave = 0;
    tracing::debug!(biome = biome.name(), "entered biome");
    next
}

pub fn apply_first_biome(run: &RunState) -> RunState {
    let mut next = run.clone();
    next.arena = Arena::Biome(next.biome_path[0]);
    next.biome_index = 1;
    next
}

/// Enter the only biome left.
pub fn apply_auto_last_biome(run: &RunState) -> RunState {
    let biome = remaining_biomes(run)
        .first()
        .copied()
        .unwrap_or(run.biome_path[BIOME_COUNT - 1]);
    let mut next = run.clone();
    next.arena = Arena::Biome(biome);
    next.biome_index += 1;
    next.wave = 0;
    tracing::debug!(biome = biome.name(), "entered last biome");
    next
}

fn spawn(run: &RunState, template: &crate::tables::EnemyTemplate, scale: f64) -> Enemy {
    let mut enemy = template.scaled(
        run.difficulty.hp_multiplier * run.enemy_hp_multiplier,
        run.difficulty.atk_multiplier,
        scale,
    );
    enemy.atk = (enemy.atk as f64 * run.enemy_atk_multiplier).floor() as i32;
    enemy
}

fn reset_wave(next: &mut RunState) {
    next.log.clear();
    next.wave_turn = 0;
    next.skills.available = available_skills(next);
}

/// Begin the next wave of the current biome.
///
/// In the final arena this (re)spawns the current final boss instead.
pub fn start_battle(run: &RunState) -> RunState {
    let Some(biome) = run.current_biome() else {
        return start_final_boss(run);
    };
    let mut next = run.clone();
    next.wave += 1;
    let template = if next.is_boss_wave() {
        boss_for(biome)
    } else {
        wave_enemy(biome, next.wave)
    };
    let scale = BIOME_SCALE_BASE
        + next.biome_index as f64 * BIOME_SCALE_STEP
        + next.biomes_cleared as f64 * CLEARED_SCALE_STEP;
    let enemy = spawn(&next, template, scale);
    tracing::debug!(
        biome = biome.name(),
        wave = next.wave,
        enemy = %enemy.name,
        hp = enemy.hp,
        atk = enemy.atk,
        "battle start"
    );
    next.enemy = Some(enemy);
    reset_wave(&mut next);
    next
}

/// Bookkeeping after a regular or boss kill. Returns whether the biome was
/// cleared.
pub fn after_battle(run: &RunState) -> (RunState, bool) {
    let mut next = run.clone();
    let boss = next.is_boss_wave();
    next.enemy = None;
    next.battle_count += 1;
    next.skills = decay_cooldowns(&next.skills);
    if !boss {
        return (next, false);
    }
    next.biomes_cleared += 1;
    let recovery = (next.max_hp as f64 * BOSS_CLEAR_HEAL_RATIO).floor() as i32;
    next.heal(recovery);
    next.wave = 0;
    tracing::debug!(biomes_cleared = next.biomes_cleared, "biome cleared");
    (next, true)
}

/// Final boss matching the final awakening, or the dominant civilization.
pub fn resolve_final_boss_key(run: &RunState) -> FinalBossKey {
    match run.final_awakening {
        Some(CivTypeExt::Tech) => FinalBossKey::Tech,
        Some(CivTypeExt::Life) => FinalBossKey::Life,
        Some(CivTypeExt::Ritual) => FinalBossKey::Ritual,
        Some(CivTypeExt::Balanced) | None => match dominant_civ(&run.civ) {
            CivType::Tech => FinalBossKey::Tech,
            CivType::Life => FinalBossKey::Life,
            CivType::Ritual => FinalBossKey::Ritual,
        },
    }
}

/// Enter the final arena.
///
/// A run already in its second phase keeps its phase and boss.
pub fn start_final_boss(run: &RunState) -> RunState {
    let mut next = run.clone();
    let (key, phase, scale) = match (next.final_phase, next.final_boss) {
        (2, Some(key)) => (key, 2, FINAL_PHASE_TWO_SCALE),
        _ => (resolve_final_boss_key(&next), 1, FINAL_PHASE_ONE_SCALE),
    };
    next.final_boss = Some(key);
    next.final_phase = phase;
    next.arena = Arena::Final;
    next.wave = next.waves_per_biome + 1;
    next.enemy = Some(spawn(&next, key.template(), scale));
    reset_wave(&mut next);
    tracing::debug!(boss = key.name(), phase, "final boss");
    next
}

/// Resolve a final boss kill. Returns whether the run is won.
///
/// On the harder difficulties the first kill summons a second boss.
pub fn handle_final_boss_kill(run: &RunState) -> (RunState, bool) {
    let mut next = run.clone();
    if next.final_phase == 1 && next.difficulty_index >= FINAL_PHASE_TWO_MIN_DIFFICULTY {
        let current = next.final_boss.unwrap_or_else(|| resolve_final_boss_key(&next));
        let second = FinalBossKey::ALL
            .into_iter()
            .find(|&k| k != current)
            .unwrap_or(FinalBossKey::Tech);
        next.final_phase = 2;
        next.final_boss = Some(second);
        next.enemy = Some(spawn(&next, second.template(), FINAL_PHASE_TWO_SCALE));
        reset_wave(&mut next);
        next.push_log(format!("{} rises!", second.name()), LogTone::Danger);
        tracing::debug!(boss = second.name(), "final boss phase two");
        return (next, false);
    }
    next.enemy = None;
    tracing::debug!(turns = next.turn, kills = next.kills, "run won");
    (next, true)
}

/// Bones banked at the end of a run. Never less than one.
pub fn calc_bone_reward(run: &RunState, won: bool) -> u32 {
    let base = (i64::from(run.bone_earned) + i64::from(run.bonus_bone)).max(0) as f64;
    let mut reward =
        (base * run.difficulty.bone_multiplier * (1.0 + run.tree_bonus.bone_multiplier)).floor();
    if run.final_awakening == Some(CivTypeExt::Ritual) {
        reward = (reward * RITUAL_BONE_MULTIPLIER).floor();
    }
    if won {
        reward = (reward * VICTORY_BONE_MULTIPLIER).floor();
    }
    (reward as u32).max(MIN_BONE_REWARD)
}

/// Bone cost of reviving an ally at half HP.
pub fn ally_revive_cost(run: &RunState) -> u32 {
    let cost = REVIVE_COST_BASE
        + run.biomes_cleared as f64 * REVIVE_COST_PER_BIOME
        + run.difficulty_index as f64 * REVIVE_COST_PER_DIFFICULTY;
    (cost.floor() as u32).max(REVIVE_COST_MIN)
}

/// Bone cost of reviving an ally at full HP.
pub fn full_revive_cost(run: &RunState) -> u32 {
    (ally_revive_cost(run) as f64 * FULL_REVIVE_COST_MULTIPLIER).floor() as u32
}

/// Revive the `dead_slot`-th dead ally, paid from the run's bones.
///
/// `full` restores all HP at the higher price; otherwise half.
pub fn revive_ally(run: &RunState, dead_slot: usize, full: bool) -> RunState {
    let Some(&idx) = run.dead_ally_indices().get(dead_slot) else {
        return run.clone();
    };
    let (cost, pct) = if full {
        (full_revive_cost(run), FULL_REVIVE_PCT)
    } else {
        (ally_revive_cost(run), PARTIAL_REVIVE_PCT)
    };
    if run.bone_earned < cost {
        return run.clone();
    }
    let mut next = run.clone();
    next.bone_earned -= cost;
    let ally = &mut next.allies[idx];
    ally.alive = true;
    ally.hp = ((ally.max_hp as f64 * pct as f64 / 100.0).floor() as i32).max(1);
    let name = ally.name.clone();
    next.push_log(format!("{} returns to the tribe", name), LogTone::Heal);
    next
}

/// Give up: half the base bones are kept.
pub fn surrender(run: &RunState) -> RunState {
    let mut next = run.clone();
    next.bone_earned /= 2;
    next.enemy = None;
    tracing::debug!(bones = next.bone_earned, "run surrendered");
    next
}
