//! Run summaries, aggregate updates and achievement checks.

use super::data::ACHIEVEMENTS;
use super::types::*;
use crate::core::run_state::RunState;
use crate::evolution::{AwakeningRule, FINAL_AWAKENINGS, MICRO_AWAKENINGS};
use crate::synergy::{calc_synergies, SynergyTag};
use crate::tables::DIFFICULTIES;

/// Summarize a finished run.
pub fn calc_run_stats(run: &RunState, result: RunResult, bone_earned: u32, playtime_secs: u64) -> RunStats {
    RunStats {
        id: uuid::Uuid::new_v4().to_string(),
        date: chrono::Utc::now().to_rfc3339(),
        result,
        difficulty: run.difficulty_index,
        biome_count: run.biomes_cleared,
        total_kills: run.kills,
        max_damage: run.max_hit,
        total_damage_dealt: run.damage_dealt,
        total_damage_taken: run.damage_taken,
        total_healing: run.total_healing,
        evolution_count: run.evolutions.len(),
        synergy_count: calc_synergies(&run.evolutions).len(),
        event_count: run.event_count,
        skill_usage_count: run.skill_use_count,
        bone_earned,
        playtime_secs,
        awakening: run.awoken.last().map(|a| a.name.clone()),
        challenge: run.challenge,
    }
}

/// Fold a finished run into the lifetime totals.
pub fn update_aggregate(prev: &AggregateStats, stats: &RunStats, run: &RunState) -> AggregateStats {
    let mut next = prev.clone();
    next.total_runs += 1;
    next.total_kills += u64::from(stats.total_kills);
    next.total_bone_earned += u64::from(stats.bone_earned);
    next.total_events += u64::from(stats.event_count);
    next.last_boss_damage_taken = run.damage_taken;

    if stats.is_victory() {
        next.total_clears += 1;
        next.cleared_difficulties.insert(stats.difficulty);
        if let Some(challenge) = stats.challenge {
            next.cleared_challenges.insert(challenge);
        }
    }

    for record in &run.awoken {
        next.achieved_awakenings.insert(record.id.clone());
    }
    for syn in calc_synergies(&run.evolutions) {
        if syn.tier >= 1 {
            next.synergies_tier1.insert(syn.tag);
        }
        if syn.tier >= 2 {
            next.synergies_tier2.insert(syn.tag);
        }
    }
    next
}

/// Ids of every awakening that can be reached.
pub fn all_awakening_ids() -> Vec<String> {
    MICRO_AWAKENINGS
        .iter()
        .chain(FINAL_AWAKENINGS.iter())
        .map(|def| AwakeningRule::new(def.civ, def.tier).id())
        .collect()
}

pub fn check_achievement(def: &AchievementDef, agg: &AggregateStats, stats: &RunStats) -> bool {
    match def.condition {
        AchievementCondition::FirstClear => agg.total_clears >= 1,
        AchievementCondition::ClearCount(count) => agg.total_clears >= count,
        AchievementCondition::ClearDifficulty(d) => agg.cleared_difficulties.contains(&d),
        AchievementCondition::AllDifficultiesCleared => {
            (0..DIFFICULTIES.len()).all(|d| agg.cleared_difficulties.contains(&d))
        }
        AchievementCondition::AllAwakenings => all_awakening_ids()
            .iter()
            .all(|id| agg.achieved_awakenings.contains(id)),
        AchievementCondition::MaxDamage(threshold) => stats.max_damage >= threshold,
        AchievementCondition::TotalKills(count) => agg.total_kills >= count,
        AchievementCondition::SynergyTier2(tag) => agg.synergies_tier2.contains(&tag),
        AchievementCondition::AllSynergiesTier1 => SynergyTag::ALL
            .iter()
            .all(|tag| agg.synergies_tier1.contains(tag)),
        AchievementCondition::EventCount(count) => agg.total_events >= count,
        AchievementCondition::ChallengeClear(id) => agg.cleared_challenges.contains(&id),
        AchievementCondition::NoDamageBoss => {
            stats.is_victory() && agg.last_boss_damage_taken == 0
        }
        AchievementCondition::SpeedClear { max_secs } => {
            stats.is_victory() && stats.playtime_secs <= max_secs
        }
        AchievementCondition::BoneHoarder(amount) => agg.total_bone_earned >= amount,
        AchievementCondition::FullTree => agg.tree_completion_rate >= 1.0,
    }
}

/// Re-check every achievement. Already unlocked ones stay unlocked.
///
/// Returns the new state list and the ids unlocked by this check.
pub fn check_all_achievements(
    current: &[AchievementState],
    stats: &RunStats,
    agg: &AggregateStats,
) -> (Vec<AchievementState>, Vec<&'static str>) {
    let now = chrono::Utc::now().to_rfc3339();
    let mut new_ids = Vec::new();
    let states = ACHIEVEMENTS
        .iter()
        .map(|def| {
            let existing = current.iter().find(|s| s.id == def.id);
            if let Some(state) = existing.filter(|s| s.unlocked) {
                return state.clone();
            }
            if check_achievement(def, agg, stats) {
                new_ids.push(def.id);
                return AchievementState {
                    id: def.id.to_string(),
                    unlocked: true,
                    unlocked_date: Some(now.clone()),
                };
            }
            existing
                .cloned()
                .unwrap_or_else(|| AchievementState::locked(def.id))
        })
        .collect();
    (states, new_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::run_state::test_support::grassland_run;
    use crate::evolution::{find_evolution, Evolution};

    fn stats(result: RunResult) -> RunStats {
        let mut run = grassland_run();
        run.kills = 12;
        run.max_hit = 40;
        calc_run_stats(&run, result, 30, 250)
    }

    #[test]
    fn test_calc_run_stats() {
        let mut run = grassland_run();
        run.kills = 7;
        run.biomes_cleared = 2;
        run.max_hit = 55;
        let s = calc_run_stats(&run, RunResult::Defeat, 9, 100);
        assert_eq!(s.total_kills, 7);
        assert_eq!(s.biome_count, 2);
        assert_eq!(s.max_damage, 55);
        assert_eq!(s.bone_earned, 9);
        assert!(!s.is_victory());
        assert!(uuid::Uuid::parse_str(&s.id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&s.date).is_ok());
    }

    #[test]
    fn test_update_aggregate_victory() {
        let mut run = grassland_run();
        for name in ["Fire Arrow", "Fire Making"] {
            run.evolutions.push(Evolution::from(find_evolution(name).unwrap()));
        }
        let s = calc_run_stats(&run, RunResult::Victory, 30, 250);
        let agg = update_aggregate(&AggregateStats::default(), &s, &run);
        assert_eq!(agg.total_runs, 1);
        assert_eq!(agg.total_clears, 1);
        assert_eq!(agg.total_bone_earned, 30);
        assert!(agg.cleared_difficulties.contains(&0));
        assert!(agg.synergies_tier1.contains(&SynergyTag::Fire));
        assert!(agg.synergies_tier2.is_empty());

        let lost = calc_run_stats(&run, RunResult::Defeat, 5, 10);
        let agg = update_aggregate(&agg, &lost, &run);
        assert_eq!(agg.total_runs, 2);
        assert_eq!(agg.total_clears, 1);
    }

    #[test]
    fn test_all_awakening_ids() {
        let ids = all_awakening_ids();
        assert_eq!(ids.len(), MICRO_AWAKENINGS.len() + FINAL_AWAKENINGS.len());
        assert!(ids.contains(&"sa_tech".to_string()));
        assert!(ids.contains(&"fa_bal".to_string()));
    }

    #[test]
    fn test_first_clear_and_speed() {
        let win = stats(RunResult::Victory);
        let agg = AggregateStats {
            total_clears: 1,
            ..AggregateStats::default()
        };
        let first = &ACHIEVEMENTS[0];
        assert!(check_achievement(first, &agg, &win));
        assert!(!check_achievement(first, &AggregateStats::default(), &win));

        let speed = ACHIEVEMENTS.iter().find(|a| a.id == "speed_runner").unwrap();
        assert!(check_achievement(speed, &agg, &win));
        assert!(!check_achievement(speed, &agg, &stats(RunResult::Defeat)));
    }

    #[test]
    fn test_check_all_keeps_unlocked() {
        let s = stats(RunResult::Defeat);
        let agg = AggregateStats {
            total_kills: 150,
            ..AggregateStats::default()
        };
        let (states, new_ids) = check_all_achievements(&[], &s, &agg);
        assert_eq!(states.len(), ACHIEVEMENTS.len());
        assert_eq!(new_ids, vec!["mass_slayer"]);

        let (again, none) = check_all_achievements(&states, &s, &AggregateStats::default());
        assert!(none.is_empty());
        let slayer = again.iter().find(|a| a.id == "mass_slayer").unwrap();
        assert!(slayer.unlocked);
        assert!(slayer.unlocked_date.is_some());
    }

    #[test]
    fn test_full_tree_and_difficulties() {
        let s = stats(RunResult::Victory);
        let mut agg = AggregateStats {
            tree_completion_rate: 1.0,
            ..AggregateStats::default()
        };
        let tree = ACHIEVEMENTS.iter().find(|a| a.id == "full_tree").unwrap();
        assert!(check_achievement(tree, &agg, &s));

        let all = ACHIEVEMENTS.iter().find(|a| a.id == "all_difficulties").unwrap();
        agg.cleared_difficulties = [0, 1, 2].into_iter().collect();
        assert!(!check_achievement(all, &agg, &s));
        agg.cleared_difficulties.insert(3);
        assert!(check_achievement(all, &agg, &s));
    }
}
