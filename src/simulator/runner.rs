//! Simulation runner driving the real dispatch surface.
//!
//! Each run starts from `SimConfig::starting_save` and is played by a fixed
//! policy until game over or the step limit. Statistics are read off the
//! final `GameState`.

use super::config::SimConfig;
use super::report::{SimReport, SimRun, Stage};
use crate::civ::Arena;
use crate::events::can_afford;
use crate::evolution::preview_evolution;
use crate::run::{dispatch, step_battle, use_skill, Action, GameState, Phase};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {}, Kills {}, Turns {}, Bones {}, Biomes {}",
                run_idx + 1,
                config.num_runs,
                if run.won { "WIN" } else { run.stage.name() },
                run.kills,
                run.turns,
                run.bones,
                run.biomes_cleared
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs)
}

/// Score of the stats an evolution would leave the tribe with.
fn evolution_score(state: &GameState, index: usize) -> f64 {
    let (Some(run), Some(evo)) = (&state.run, state.evolution_choices.get(index)) else {
        return f64::MIN;
    };
    let p = preview_evolution(run, evo);
    p.atk as f64 * 2.0 + p.max_hp as f64 * 0.5 + p.hp as f64 * 0.25 + p.def as f64 * 3.0
        + p.crit_rate * 100.0
}

fn best_evolution(state: &GameState) -> usize {
    let mut best = 0;
    let mut best_score = f64::MIN;
    for i in 0..state.evolution_choices.len() {
        let score = evolution_score(state, i);
        if score > best_score {
            best = i;
            best_score = score;
        }
    }
    best
}

fn first_affordable_choice(state: &GameState) -> usize {
    let (Some(run), Some(event)) = (&state.run, state.current_event) else {
        return 0;
    };
    event
        .choices
        .iter()
        .position(|c| can_afford(run, c.cost))
        .unwrap_or(0)
}

fn fire_ready_skills(state: GameState) -> GameState {
    let ready: Vec<_> = state
        .run
        .as_ref()
        .map(|run| {
            run.skills
                .available
                .iter()
                .copied()
                .filter(|&id| run.skills.is_ready(id))
                .collect()
        })
        .unwrap_or_default();
    ready
        .into_iter()
        .fold(state, |s, id| use_skill(&s, id).0)
}

/// Play one run to the end with the autoplay policy.
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> SimRun {
    let start = GameState::new(config.starting_save());
    let action = match config.challenge {
        Some(challenge) => Action::StartChallenge {
            challenge,
            difficulty: config.difficulty,
        },
        None => Action::StartRun {
            difficulty: config.difficulty,
        },
    };
    let mut state = dispatch(&start, action, rng);

    let mut steps = 0;
    while state.phase != Phase::GameOver && steps < config.max_steps_per_run {
        steps += 1;
        state = match state.phase {
            Phase::Evolution => dispatch(&state, Action::SelectEvolution(best_evolution(&state)), rng),
            Phase::Awakening => dispatch(&state, Action::AcceptAwakening, rng),
            Phase::Battle => {
                let state = if config.use_skills {
                    fire_ready_skills(state)
                } else {
                    state
                };
                step_battle(&state, rng).0
            }
            Phase::BiomeSelect => {
                let biome = state
                    .run
                    .as_ref()
                    .and_then(|run| crate::run::pick_biome_auto(run).options.first().copied());
                match biome {
                    Some(biome) => dispatch(&state, Action::PickBiome(biome), rng),
                    None => break,
                }
            }
            Phase::Event => {
                let choice = first_affordable_choice(&state);
                dispatch(&state, Action::ChooseEvent(choice), rng)
            }
            Phase::AllyRevive => dispatch(&state, Action::SkipRevive, rng),
            Phase::PreFinal => dispatch(&state, Action::GoFinalBoss, rng),
            Phase::Title | Phase::DifficultySelect | Phase::Tree | Phase::GameOver => break,
        };
    }

    let bones = state.save.bones;
    let won = state.game_result == Some(true);
    let timed_out = state.phase != Phase::GameOver;
    let Some(run) = state.run else {
        return SimRun {
            won: false,
            timed_out: true,
            stage: Stage::Biome(0),
            kills: 0,
            turns: 0,
            bones,
            biomes_cleared: 0,
            evolutions: 0,
            allies: 0,
            steps,
        };
    };
    let stage = match run.arena {
        Arena::Final => Stage::FinalBoss,
        Arena::Biome(_) if run.biomes_cleared as usize >= run.biome_path.len() => Stage::FinalBoss,
        Arena::Biome(_) => Stage::Biome(run.biome_index),
    };

    SimRun {
        won,
        timed_out,
        stage,
        kills: run.kills,
        turns: run.turn,
        bones,
        biomes_cleared: run.biomes_cleared,
        evolutions: run.evolutions.len(),
        allies: run.alive_allies().count(),
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run::ChallengeId;

    fn config(seed: u64) -> SimConfig {
        SimConfig {
            num_runs: 5,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_runs_finish() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let run = simulate_single_run(&config(7), &mut rng);
        assert!(!run.timed_out);
        assert!(run.kills > 0);
        assert!(run.bones >= 1);
        assert!(run.steps > 0);
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let a = run_simulation(&config(42));
        let b = run_simulation(&config(42));
        assert_eq!(a.num_runs, 5);
        assert_eq!(a.runs, b.runs);
    }

    #[test]
    fn test_challenge_runs_finish() {
        let cfg = SimConfig {
            challenge: Some(ChallengeId::Fragile),
            ..config(3)
        };
        let report = run_simulation(&cfg);
        assert_eq!(report.timed_out, 0);
        assert_eq!(report.runs.len(), 5);
    }

    #[test]
    fn test_best_evolution_prefers_stronger_preview() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let state = dispatch(
            &GameState::default(),
            Action::StartRun { difficulty: 0 },
            &mut rng,
        );
        let best = best_evolution(&state);
        for i in 0..state.evolution_choices.len() {
            assert!(evolution_score(&state, best) >= evolution_score(&state, i));
        }
    }
}
