//! Phase state machine: one [`Action`] in, one new [`GameState`] out.

use super::challenge::{apply_challenge, ChallengeId};
use super::lifecycle::*;
use crate::civ::BiomeId;
use crate::combat::{tick, TickEvent};
use crate::core::constants::FINAL_AWAKENING_REQUIRED_DIFFICULTY;
use crate::core::run_state::RunState;
use crate::events::{apply_event_choice, can_afford, pay_event_cost, roll_event, EventDef};
use crate::evolution::{
    apply_awakening, apply_evolution, check_awakening_rules, roll_evolution_choices,
    AwakeningRule, Evolution,
};
use crate::meta::{
    calc_run_stats, check_all_achievements, update_aggregate, AchievementState, AggregateStats,
    RunResult, RunStats,
};
use crate::save::SaveData;
use crate::skills::{apply_skill, SkillId};
use crate::tables::difficulty_unlocked;
use crate::tree::{tree_completion_rate, try_buy_node};
use rand::Rng;

/// Screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Title,
    DifficultySelect,
    Evolution,
    Awakening,
    Battle,
    BiomeSelect,
    Event,
    AllyRevive,
    PreFinal,
    GameOver,
    Tree,
}

/// Player input, already translated from whatever the presentation uses.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    GoDifficulty,
    GoTree,
    StartRun { difficulty: usize },
    StartChallenge { challenge: ChallengeId, difficulty: usize },
    PickBiome(BiomeId),
    /// Index into the current evolution offer
    SelectEvolution(usize),
    /// Re-check awakenings, then fight
    ProceedAfterAwakening,
    /// Take the pending awakening
    AcceptAwakening,
    UseSkill(SkillId),
    AfterBattle,
    BiomeCleared,
    GoFinalBoss,
    FinalBossKilled,
    GameOver { won: bool },
    Surrender,
    /// Revive the `dead_slot`-th dead ally, at full HP when `full`
    ReviveAlly { dead_slot: usize, full: bool },
    SkipRevive,
    /// Index into the current event's choices
    ChooseEvent(usize),
    BuyTreeNode(String),
    ResetSave,
    ReturnToTitle,
    RecordRunEnd { won: bool, playtime_secs: u64 },
}

/// Everything outside a single run plus the run itself.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub save: SaveData,
    pub run: Option<RunState>,
    /// True while fighting the final boss
    pub final_mode: bool,
    pub evolution_choices: Vec<Evolution>,
    pub pending_awakening: Option<AwakeningRule>,
    /// Indices into `run.allies` of allies awaiting revival
    pub revive_targets: Vec<usize>,
    pub current_event: Option<&'static EventDef>,
    /// `Some(true)` on victory once the run is over
    pub game_result: Option<bool>,
    pub run_stats: Vec<RunStats>,
    pub aggregate: AggregateStats,
    pub achievements: Vec<AchievementState>,
    /// Achievements unlocked by the last recorded run
    pub new_achievements: Vec<&'static str>,
}

impl GameState {
    pub fn new(save: SaveData) -> Self {
        Self {
            phase: Phase::Title,
            save,
            run: None,
            final_mode: false,
            evolution_choices: Vec::new(),
            pending_awakening: None,
            revive_targets: Vec::new(),
            current_event: None,
            game_result: None,
            run_stats: Vec::new(),
            aggregate: AggregateStats::default(),
            achievements: Vec::new(),
            new_achievements: Vec::new(),
        }
    }

    /// Attach previously stored meta-progression.
    pub fn with_meta(
        mut self,
        run_stats: Vec<RunStats>,
        aggregate: AggregateStats,
        achievements: Vec<AchievementState>,
    ) -> Self {
        self.run_stats = run_stats;
        self.aggregate = aggregate;
        self.achievements = achievements;
        self
    }

    pub fn in_battle(&self) -> bool {
        self.phase == Phase::Battle && self.run.is_some()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(SaveData::default())
    }
}

fn with_run(state: &GameState, run: RunState, phase: Phase) -> GameState {
    GameState {
        run: Some(run),
        phase,
        ..state.clone()
    }
}

fn enter_battle(state: &GameState, run: &RunState) -> GameState {
    let mut next = with_run(state, start_battle(run), Phase::Battle);
    next.evolution_choices.clear();
    next.pending_awakening = None;
    next
}

/// Show an evolution offer, or go straight to battle once the challenge cap
/// is reached.
fn offer_evolutions(state: &GameState, run: RunState, rng: &mut impl Rng) -> GameState {
    if run.evolution_cap_reached() {
        return enter_battle(state, &run);
    }
    let choices = roll_evolution_choices(&run, rng);
    let mut next = with_run(state, run, Phase::Evolution);
    next.evolution_choices = choices;
    next.current_event = None;
    next
}

fn begin_run(state: &GameState, run: RunState, save: SaveData, rng: &mut impl Rng) -> GameState {
    let run = if pick_biome_auto(&run).need_selection {
        run
    } else {
        apply_first_biome(&run)
    };
    let fresh = GameState {
        save,
        final_mode: false,
        pending_awakening: None,
        revive_targets: Vec::new(),
        current_event: None,
        game_result: None,
        new_achievements: Vec::new(),
        ..state.clone()
    };
    offer_evolutions(&fresh, run, rng)
}

fn transition_after_biome(state: &GameState, run: RunState, rng: &mut impl Rng) -> GameState {
    let mut next = if run.biomes_cleared as usize >= run.biome_path.len() {
        with_run(state, run, Phase::PreFinal)
    } else if pick_biome_auto(&run).need_selection {
        with_run(state, run, Phase::BiomeSelect)
    } else {
        offer_evolutions(state, apply_auto_last_biome(&run), rng)
    };
    next.revive_targets.clear();
    next
}

fn end_run(state: &GameState, mut run: RunState, won: bool, reward: u32) -> GameState {
    run.enemy = None;
    let save = state.save.with_reward(reward, won, run.difficulty_index);
    tracing::debug!(won, reward, bones = save.bones, "run over");
    GameState {
        save,
        run: Some(run),
        phase: Phase::GameOver,
        game_result: Some(won),
        final_mode: false,
        ..state.clone()
    }
}

/// Use a skill during battle, returning its presentation events.
pub fn use_skill(state: &GameState, id: SkillId) -> (GameState, Vec<TickEvent>) {
    match &state.run {
        Some(run) if state.phase == Phase::Battle => {
            let (next, events) = apply_skill(run, id);
            (with_run(state, next, Phase::Battle), events)
        }
        _ => (state.clone(), Vec::new()),
    }
}

/// Apply one action. Actions that do not fit the current phase return the
/// state unchanged.
pub fn dispatch(state: &GameState, action: Action, rng: &mut impl Rng) -> GameState {
    match action {
        Action::GoDifficulty => GameState {
            phase: Phase::DifficultySelect,
            ..state.clone()
        },
        Action::GoTree => GameState {
            phase: Phase::Tree,
            ..state.clone()
        },
        Action::StartRun { difficulty } => {
            if !difficulty_unlocked(difficulty, state.save.clears) {
                return state.clone();
            }
            let mut save = state.save.clone();
            save.runs += 1;
            let run = start_run(difficulty, &save, rng);
            begin_run(state, run, save, rng)
        }
        Action::StartChallenge {
            challenge,
            difficulty,
        } => {
            if !difficulty_unlocked(difficulty, state.save.clears) {
                return state.clone();
            }
            let mut save = state.save.clone();
            save.runs += 1;
            let run = apply_challenge(&start_run(difficulty, &save, rng), challenge.def());
            begin_run(state, run, save, rng)
        }
        Action::PickBiome(biome) => match &state.run {
            Some(run) if state.phase == Phase::BiomeSelect => {
                let next = apply_biome_selection(run, biome);
                if next.biome_index == run.biome_index {
                    return state.clone();
                }
                offer_evolutions(state, next, rng)
            }
            _ => state.clone(),
        },
        Action::SelectEvolution(index) => {
            let (Some(run), Some(evolution)) = (&state.run, state.evolution_choices.get(index))
            else {
                return state.clone();
            };
            if state.phase != Phase::Evolution || run.evolution_cap_reached() {
                return state.clone();
            }
            let outcome = apply_evolution(run, evolution, rng);
            match check_awakening_rules(&outcome.run) {
                Some(rule) => {
                    let mut next = with_run(state, outcome.run, Phase::Awakening);
                    next.evolution_choices.clear();
                    next.pending_awakening = Some(rule);
                    next
                }
                None => enter_battle(state, &outcome.run),
            }
        }
        Action::ProceedAfterAwakening => match &state.run {
            Some(run) if state.phase == Phase::Awakening => match check_awakening_rules(run) {
                Some(rule) => GameState {
                    pending_awakening: Some(rule),
                    ..state.clone()
                },
                None => enter_battle(state, run),
            },
            _ => state.clone(),
        },
        Action::AcceptAwakening => match (&state.run, state.pending_awakening) {
            (Some(run), Some(rule)) if state.phase == Phase::Awakening => {
                let next_run = apply_awakening(run, rule);
                match check_awakening_rules(&next_run) {
                    Some(next_rule) => {
                        let mut next = with_run(state, next_run, Phase::Awakening);
                        next.pending_awakening = Some(next_rule);
                        next
                    }
                    None => enter_battle(state, &next_run),
                }
            }
            _ => state.clone(),
        },
        Action::UseSkill(id) => use_skill(state, id).0,
        Action::AfterBattle => match &state.run {
            Some(run) if state.phase == Phase::Battle && !state.final_mode => {
                let (next_run, cleared) = after_battle(run);
                if cleared {
                    let dead = next_run.dead_ally_indices();
                    if !dead.is_empty() {
                        let mut next = with_run(state, next_run, Phase::AllyRevive);
                        next.revive_targets = dead;
                        return next;
                    }
                    return transition_after_biome(state, next_run, rng);
                }
                if let Some(event) = roll_event(&next_run, rng) {
                    let mut next = with_run(state, next_run, Phase::Event);
                    next.current_event = Some(event);
                    return next;
                }
                offer_evolutions(state, next_run, rng)
            }
            _ => state.clone(),
        },
        Action::BiomeCleared => match &state.run {
            Some(run) if state.phase == Phase::AllyRevive => {
                transition_after_biome(state, run.clone(), rng)
            }
            _ => state.clone(),
        },
        Action::GoFinalBoss => match &state.run {
            Some(run) if state.phase == Phase::PreFinal => {
                if run.difficulty_index >= FINAL_AWAKENING_REQUIRED_DIFFICULTY
                    && run.final_awakening.is_none()
                {
                    tracing::debug!("final boss refused without a final awakening");
                    return GameState {
                        phase: Phase::GameOver,
                        game_result: Some(false),
                        ..state.clone()
                    };
                }
                let mut next = with_run(state, start_final_boss(run), Phase::Battle);
                next.final_mode = true;
                next
            }
            _ => state.clone(),
        },
        Action::FinalBossKilled => match &state.run {
            Some(run) if state.phase == Phase::Battle && state.final_mode => {
                let (next_run, won) = handle_final_boss_kill(run);
                if won {
                    let reward = calc_bone_reward(&next_run, true);
                    return end_run(state, next_run, true, reward);
                }
                with_run(state, next_run, Phase::Battle)
            }
            _ => state.clone(),
        },
        Action::GameOver { won } => match &state.run {
            Some(run) if state.phase == Phase::Battle => {
                let reward = calc_bone_reward(run, won);
                end_run(state, run.clone(), won, reward)
            }
            _ => state.clone(),
        },
        Action::Surrender => match &state.run {
            Some(run) if state.phase != Phase::GameOver => {
                let next_run = surrender(run);
                let reward = calc_bone_reward(&next_run, false);
                end_run(state, next_run, false, reward)
            }
            _ => state.clone(),
        },
        Action::ReviveAlly { dead_slot, full } => match &state.run {
            Some(run) if state.phase == Phase::AllyRevive => {
                let next_run = revive_ally(run, dead_slot, full);
                if next_run == *run {
                    return state.clone();
                }
                let dead = next_run.dead_ally_indices();
                if dead.is_empty() {
                    return transition_after_biome(state, next_run, rng);
                }
                let mut next = with_run(state, next_run, Phase::AllyRevive);
                next.revive_targets = dead;
                next
            }
            _ => state.clone(),
        },
        Action::SkipRevive => match &state.run {
            Some(run) if state.phase == Phase::AllyRevive => {
                transition_after_biome(state, run.clone(), rng)
            }
            _ => state.clone(),
        },
        Action::ChooseEvent(index) => {
            let (Some(run), Some(event)) = (&state.run, state.current_event) else {
                return state.clone();
            };
            let Some(choice) = event.choices.get(index) else {
                return state.clone();
            };
            if state.phase != Phase::Event || !can_afford(run, choice.cost) {
                return state.clone();
            }
            let paid = pay_event_cost(run, choice.cost);
            let next_run = apply_event_choice(&paid, choice, rng);
            offer_evolutions(state, next_run, rng)
        }
        Action::BuyTreeNode(id) => match try_buy_node(&state.save, &id) {
            Some(save) => GameState {
                save,
                ..state.clone()
            },
            None => state.clone(),
        },
        Action::ResetSave => GameState {
            save: SaveData::default(),
            ..state.clone()
        },
        Action::ReturnToTitle => GameState {
            phase: Phase::Title,
            run: None,
            final_mode: false,
            game_result: None,
            evolution_choices: Vec::new(),
            pending_awakening: None,
            revive_targets: Vec::new(),
            current_event: None,
            ..state.clone()
        },
        Action::RecordRunEnd { won, playtime_secs } => {
            let Some(run) = &state.run else {
                return state.clone();
            };
            let result = if won {
                RunResult::Victory
            } else {
                RunResult::Defeat
            };
            let stats = calc_run_stats(run, result, calc_bone_reward(run, won), playtime_secs);
            let mut aggregate = update_aggregate(&state.aggregate, &stats, run);
            aggregate.tree_completion_rate = tree_completion_rate(&state.save);
            let (achievements, new_ids) =
                check_all_achievements(&state.achievements, &stats, &aggregate);
            let mut run_stats = state.run_stats.clone();
            run_stats.push(stats);
            GameState {
                run_stats,
                aggregate,
                achievements,
                new_achievements: new_ids,
                ..state.clone()
            }
        }
    }
}

/// Run one battle tick and resolve what it caused.
///
/// A kill moves on through [`Action::AfterBattle`] or
/// [`Action::FinalBossKilled`]; a death ends the run as a loss.
pub fn step_battle(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<TickEvent>) {
    let Some(run) = state.run.as_ref().filter(|_| state.phase == Phase::Battle) else {
        return (state.clone(), Vec::new());
    };
    let outcome = tick(run, state.final_mode, rng);
    let ticked = with_run(state, outcome.run, Phase::Battle);
    let next = if outcome.events.contains(&TickEvent::PlayerDead) {
        dispatch(&ticked, Action::GameOver { won: false }, rng)
    } else if outcome.events.contains(&TickEvent::FinalBossKilled) {
        dispatch(&ticked, Action::FinalBossKilled, rng)
    } else if outcome.events.contains(&TickEvent::EnemyKilled) {
        dispatch(&ticked, Action::AfterBattle, rng)
    } else {
        ticked
    };
    (next, outcome.events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRng;
    use crate::core::run_state::test_support::{ally, enemy, grassland_run};
    use crate::core::run_state::AllyRole;
    use crate::events::get_event;

    fn battle_state(run: RunState) -> GameState {
        let mut state = GameState::default();
        state.run = Some(run);
        state.phase = Phase::Battle;
        state
    }

    #[test]
    fn test_start_run_offers_evolutions() {
        let mut rng = ScriptedRng::constant(0.0);
        let state = dispatch(&GameState::default(), Action::StartRun { difficulty: 0 }, &mut rng);
        assert_eq!(state.phase, Phase::Evolution);
        assert_eq!(state.save.runs, 1);
        assert_eq!(state.evolution_choices.len(), 3);
        let run = state.run.as_ref().unwrap();
        assert_eq!(run.biome_index, 1);
    }

    #[test]
    fn test_locked_difficulty_rejected() {
        let mut rng = ScriptedRng::constant(0.0);
        let start = GameState::default();
        let state = dispatch(&start, Action::StartRun { difficulty: 3 }, &mut rng);
        assert_eq!(state.phase, Phase::Title);
        assert!(state.run.is_none());
        assert_eq!(state.save.runs, 0);
    }

    #[test]
    fn test_select_evolution_starts_battle() {
        let mut rng = ScriptedRng::constant(0.0);
        let state = dispatch(&GameState::default(), Action::StartRun { difficulty: 0 }, &mut rng);
        let state = dispatch(&state, Action::SelectEvolution(0), &mut rng);
        assert_eq!(state.phase, Phase::Battle);
        let run = state.run.as_ref().unwrap();
        assert_eq!(run.evolutions.len(), 1);
        assert!(run.enemy.is_some());
        assert_eq!(run.wave, 1);
        assert!(state.evolution_choices.is_empty());
    }

    #[test]
    fn test_bad_evolution_index_ignored() {
        let mut rng = ScriptedRng::constant(0.0);
        let state = dispatch(&GameState::default(), Action::StartRun { difficulty: 0 }, &mut rng);
        let same = dispatch(&state, Action::SelectEvolution(9), &mut rng);
        assert_eq!(same.phase, Phase::Evolution);
        assert_eq!(same.run, state.run);
    }

    #[test]
    fn test_evolution_cap_skips_offer() {
        // 0.9 never rolls an event
        let mut rng = ScriptedRng::constant(0.9);
        let mut state = GameState::default();
        state.phase = Phase::Battle;
        let mut run = start_battle(&grassland_run());
        run.max_evolutions = Some(0);
        state.run = Some(run);
        let next = dispatch(&state, Action::AfterBattle, &mut rng);
        assert_eq!(next.phase, Phase::Battle);
        assert!(next.evolution_choices.is_empty());
    }

    #[test]
    fn test_kill_leads_to_offer() {
        let mut run = start_battle(&grassland_run());
        run.enemy = Some(enemy(1, 1, 0));
        let state = battle_state(run);
        let mut rng = ScriptedRng::constant(0.9);
        let (next, events) = step_battle(&state, &mut rng);
        assert!(events.contains(&TickEvent::EnemyKilled));
        assert_eq!(next.phase, Phase::Evolution);
        assert_eq!(next.run.as_ref().unwrap().battle_count, 1);
        assert!(next.run.as_ref().unwrap().enemy.is_none());
    }

    #[test]
    fn test_event_after_battle() {
        let mut run = start_battle(&grassland_run());
        run.battle_count = 1;
        let state = battle_state(run);
        let mut rng = ScriptedRng::constant(0.0);
        let next = dispatch(&state, Action::AfterBattle, &mut rng);
        assert_eq!(next.phase, Phase::Event);
        assert!(next.current_event.is_some());
    }

    #[test]
    fn test_choose_event_pays_and_offers() {
        let mut state = battle_state(grassland_run());
        state.phase = Phase::Event;
        state.current_event = get_event("bone_merchant");
        let mut rng = ScriptedRng::constant(0.0);

        let broke = dispatch(&state, Action::ChooseEvent(0), &mut rng);
        assert_eq!(broke.phase, Phase::Event);
        assert_eq!(broke.run, state.run);

        if let Some(run) = state.run.as_mut() {
            run.bone_earned = 40;
        }
        let atk = state.run.as_ref().unwrap().atk;
        let next = dispatch(&state, Action::ChooseEvent(0), &mut rng);
        assert_eq!(next.phase, Phase::Evolution);
        assert!(next.current_event.is_none());
        let run = next.run.as_ref().unwrap();
        assert_eq!(run.bone_earned, 10);
        assert_eq!(run.atk, atk + 8);
        assert_eq!(run.event_count, 1);

        let walked = dispatch(&state, Action::ChooseEvent(2), &mut rng);
        assert_eq!(walked.run.as_ref().unwrap().bone_earned, 40);
        assert_eq!(walked.phase, Phase::Evolution);
    }

    #[test]
    fn test_player_death_ends_run() {
        let mut run = start_battle(&grassland_run());
        run.hp = 1;
        run.enemy = Some(enemy(500, 50, 0));
        run.bone_earned = 10;
        let state = battle_state(run);
        let mut rng = ScriptedRng::constant(0.9);
        let (next, events) = step_battle(&state, &mut rng);
        assert!(events.contains(&TickEvent::PlayerDead));
        assert_eq!(next.phase, Phase::GameOver);
        assert_eq!(next.game_result, Some(false));
        assert_eq!(next.save.bones, 10);
        assert_eq!(next.save.clears, 0);
        assert!(next.run.as_ref().unwrap().enemy.is_none());
    }

    #[test]
    fn test_boss_clear_with_dead_ally_goes_to_revive() {
        let mut run = start_battle(&grassland_run());
        run.wave = 5;
        run.allies.push(ally(AllyRole::Striker, 10, 1));
        run.allies[0].take_damage(10);
        let state = battle_state(run);
        let mut rng = ScriptedRng::constant(0.0);
        let next = dispatch(&state, Action::AfterBattle, &mut rng);
        assert_eq!(next.phase, Phase::AllyRevive);
        assert_eq!(next.revive_targets, vec![0]);

        let skipped = dispatch(&next, Action::SkipRevive, &mut rng);
        assert_eq!(skipped.phase, Phase::BiomeSelect);
        assert!(skipped.revive_targets.is_empty());
    }

    #[test]
    fn test_revive_then_continue() {
        let mut run = grassland_run();
        run.biomes_cleared = 1;
        run.bone_earned = 20;
        run.allies.push(ally(AllyRole::Striker, 10, 1));
        run.allies[0].take_damage(10);
        let mut state = battle_state(run);
        state.phase = Phase::AllyRevive;
        state.revive_targets = vec![0];
        let mut rng = ScriptedRng::constant(0.0);
        let next = dispatch(&state, Action::ReviveAlly { dead_slot: 0, full: false }, &mut rng);
        assert_eq!(next.phase, Phase::BiomeSelect);
        let run = next.run.as_ref().unwrap();
        assert!(run.allies[0].alive);
        assert_eq!(run.bone_earned, 15);
    }

    #[test]
    fn test_all_biomes_cleared_goes_prefinal() {
        let mut run = grassland_run();
        run.biome_index = 3;
        run.biomes_cleared = 2;
        run.wave = 5;
        let state = battle_state(run);
        let mut rng = ScriptedRng::constant(0.0);
        let next = dispatch(&state, Action::AfterBattle, &mut rng);
        assert_eq!(next.phase, Phase::PreFinal);
    }

    #[test]
    fn test_final_boss_requires_awakening_on_mythic() {
        let mut run = grassland_run();
        run.difficulty_index = 3;
        let mut state = battle_state(run);
        state.phase = Phase::PreFinal;
        let mut rng = ScriptedRng::constant(0.0);
        let next = dispatch(&state, Action::GoFinalBoss, &mut rng);
        assert_eq!(next.phase, Phase::GameOver);
        assert_eq!(next.game_result, Some(false));
    }

    #[test]
    fn test_final_boss_victory() {
        let mut state = battle_state(grassland_run());
        state.phase = Phase::PreFinal;
        let mut rng = ScriptedRng::constant(0.9);
        let state = dispatch(&state, Action::GoFinalBoss, &mut rng);
        assert!(state.final_mode);
        assert_eq!(state.phase, Phase::Battle);

        let mut almost = state.clone();
        if let Some(run) = almost.run.as_mut() {
            run.enemy = Some(enemy(1, 1, 0));
            run.bone_earned = 20;
        }
        let (won, events) = step_battle(&almost, &mut rng);
        assert!(events.contains(&TickEvent::FinalBossKilled));
        assert_eq!(won.phase, Phase::GameOver);
        assert_eq!(won.game_result, Some(true));
        // 20 banked plus the kill's 2, times the victory bonus
        assert_eq!(won.save.bones, 33);
        assert_eq!(won.save.clears, 1);
        assert!(won.save.has_cleared(0));
        assert!(!won.final_mode);
    }

    #[test]
    fn test_surrender() {
        let mut run = start_battle(&grassland_run());
        run.bone_earned = 21;
        let state = battle_state(run);
        let mut rng = ScriptedRng::constant(0.0);
        let next = dispatch(&state, Action::Surrender, &mut rng);
        assert_eq!(next.phase, Phase::GameOver);
        assert_eq!(next.save.bones, 10);
    }

    #[test]
    fn test_buy_tree_node_and_reset() {
        let mut state = GameState::default();
        state.save.bones = 1000;
        let node = crate::tree::TREE_NODES[0];
        let mut rng = ScriptedRng::constant(0.0);
        let next = dispatch(&state, Action::BuyTreeNode(node.id.to_string()), &mut rng);
        assert!(next.save.tree.contains(node.id));
        assert_eq!(next.save.bones, 1000 - node.cost);

        let unknown = dispatch(&next, Action::BuyTreeNode("nope".to_string()), &mut rng);
        assert_eq!(unknown.save, next.save);

        let reset = dispatch(&next, Action::ResetSave, &mut rng);
        assert_eq!(reset.save, SaveData::default());
    }

    #[test]
    fn test_record_run_end() {
        let mut run = grassland_run();
        run.kills = 150;
        let mut state = battle_state(run);
        state.phase = Phase::GameOver;
        let mut rng = ScriptedRng::constant(0.0);
        let next = dispatch(&state, Action::RecordRunEnd { won: false, playtime_secs: 90 }, &mut rng);
        assert_eq!(next.run_stats.len(), 1);
        assert_eq!(next.aggregate.total_runs, 1);
        assert!(next.new_achievements.contains(&"mass_slayer"));
    }

    #[test]
    fn test_use_skill_outside_battle_ignored() {
        let mut state = battle_state(grassland_run());
        state.phase = Phase::Evolution;
        let (next, events) = use_skill(&state, SkillId::FireBurst);
        assert!(events.is_empty());
        assert_eq!(next.run, state.run);
    }

    #[test]
    fn test_return_to_title_clears_run() {
        let state = battle_state(grassland_run());
        let mut rng = ScriptedRng::constant(0.0);
        let next = dispatch(&state, Action::ReturnToTitle, &mut rng);
        assert_eq!(next.phase, Phase::Title);
        assert!(next.run.is_none());
    }
}
