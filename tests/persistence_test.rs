//! Integration test: save and meta-progression files
//!
//! Exercises `JsonStore` rooted in a temp directory the way the host
//! application uses it between sessions.

use primal_path::meta::{
    calc_run_stats, check_all_achievements, update_aggregate, MetaStore, RunResult,
};
use primal_path::run::{apply_first_biome, start_run};
use primal_path::save::{load_save, write_save, SaveData};
use primal_path::utils::JsonStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicU64, Ordering};

fn temp_store() -> JsonStore {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    JsonStore::new(std::env::temp_dir().join(format!(
        "primal-path-it-{}-{}",
        std::process::id(),
        id
    )))
}

#[test]
fn test_save_survives_reload() {
    let store = temp_store();
    let mut save = SaveData::default().with_reward(40, true, 0);
    save.tree.insert("atk1".to_string());
    write_save(&store, &save).unwrap();

    let reopened = JsonStore::new(store.dir().to_path_buf());
    assert_eq!(load_save(&reopened), save);
}

#[test]
fn test_missing_files_load_defaults() {
    let store = temp_store();
    let meta = MetaStore::new(store.clone());
    assert_eq!(load_save(&store), SaveData::default());
    assert!(meta.load_run_stats().is_empty());
    assert!(meta.load_achievements().is_empty());
    assert_eq!(meta.load_aggregate().total_runs, 0);
}

#[test]
fn test_meta_round_trip() {
    let store = temp_store();
    let meta = MetaStore::new(store);
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut run = apply_first_biome(&start_run(0, &SaveData::default(), &mut rng));
    run.kills = 120;

    let stats = calc_run_stats(&run, RunResult::Defeat, 12, 300);
    let agg = update_aggregate(&meta.load_aggregate(), &stats, &run);
    let (states, unlocked) = check_all_achievements(&meta.load_achievements(), &stats, &agg);
    assert!(unlocked.contains(&"mass_slayer"));

    meta.record_run(stats.clone()).unwrap();
    meta.save_aggregate(&agg).unwrap();
    meta.save_achievements(&states).unwrap();

    assert_eq!(meta.load_run_stats(), vec![stats]);
    assert_eq!(meta.load_aggregate(), agg);
    assert_eq!(meta.load_achievements(), states);
}

#[test]
fn test_run_history_is_bounded() {
    let meta = MetaStore::new(temp_store());
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let run = start_run(0, &SaveData::default(), &mut rng);
    let all: Vec<_> = (0..55)
        .map(|i| calc_run_stats(&run, RunResult::Defeat, i, 10))
        .collect();
    meta.save_run_stats(&all).unwrap();

    let loaded = meta.load_run_stats();
    assert_eq!(loaded.len(), 50);
    assert_eq!(loaded.last().map(|s| s.bone_earned), Some(54));
    assert_eq!(loaded.first().map(|s| s.bone_earned), Some(5));
}
