//! Meta-progression storage.

use super::types::{AchievementState, AggregateStats, RunStats};
use crate::core::constants::{ACHIEVEMENTS_KEY, AGGREGATE_KEY, MAX_RUN_STATS, STATS_KEY};
use crate::utils::persistence::JsonStore;
use std::io;

/// Run history, achievements and aggregate stats, one JSON file each.
#[derive(Debug, Clone)]
pub struct MetaStore {
    store: JsonStore,
}

impl MetaStore {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub fn load_run_stats(&self) -> Vec<RunStats> {
        self.store.load_or_default(STATS_KEY)
    }

    /// Persist run history, keeping only the newest entries.
    pub fn save_run_stats(&self, stats: &[RunStats]) -> io::Result<()> {
        let start = stats.len().saturating_sub(MAX_RUN_STATS);
        self.store.save(STATS_KEY, &stats[start..])
    }

    /// Append one run to the stored history.
    pub fn record_run(&self, stats: RunStats) -> io::Result<()> {
        let mut all = self.load_run_stats();
        all.push(stats);
        tracing::debug!(runs = all.len(), "recording run stats");
        self.save_run_stats(&all)
    }

    pub fn load_achievements(&self) -> Vec<AchievementState> {
        self.store.load_or_default(ACHIEVEMENTS_KEY)
    }

    pub fn save_achievements(&self, states: &[AchievementState]) -> io::Result<()> {
        self.store.save(ACHIEVEMENTS_KEY, states)
    }

    pub fn load_aggregate(&self) -> AggregateStats {
        self.store.load_or_default(AGGREGATE_KEY)
    }

    pub fn save_aggregate(&self, agg: &AggregateStats) -> io::Result<()> {
        self.store.save(AGGREGATE_KEY, agg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::run_state::test_support::grassland_run;
    use crate::meta::{calc_run_stats, RunResult};

    fn meta_store() -> MetaStore {
        MetaStore::new(JsonStore::new_for_test())
    }

    #[test]
    fn test_empty_store_defaults() {
        let meta = meta_store();
        assert!(meta.load_run_stats().is_empty());
        assert!(meta.load_achievements().is_empty());
        assert_eq!(meta.load_aggregate(), AggregateStats::default());
    }

    #[test]
    fn test_run_history_is_capped() {
        let meta = meta_store();
        let run = grassland_run();
        let all: Vec<RunStats> = (0..MAX_RUN_STATS as u32 + 5)
            .map(|i| calc_run_stats(&run, RunResult::Defeat, i, 0))
            .collect();
        meta.save_run_stats(&all).expect("save should succeed");
        let loaded = meta.load_run_stats();
        assert_eq!(loaded.len(), MAX_RUN_STATS);
        assert_eq!(loaded[0].bone_earned, 5);

        meta.record_run(calc_run_stats(&run, RunResult::Victory, 999, 0))
            .expect("record should succeed");
        let loaded = meta.load_run_stats();
        assert_eq!(loaded.len(), MAX_RUN_STATS);
        assert_eq!(loaded.last().map(|s| s.bone_earned), Some(999));
    }

    #[test]
    fn test_aggregate_and_achievements_roundtrip() {
        let meta = meta_store();
        let mut agg = AggregateStats::default();
        agg.total_runs = 3;
        agg.cleared_difficulties.insert(1);
        meta.save_aggregate(&agg).expect("save should succeed");
        assert_eq!(meta.load_aggregate(), agg);

        let states = vec![AchievementState::locked("first_clear")];
        meta.save_achievements(&states).expect("save should succeed");
        assert_eq!(meta.load_achievements(), states);
    }
}
