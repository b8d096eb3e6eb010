//! Primal Path balance simulator CLI.
//!
//! Run Monte Carlo autoplay simulations to analyze game balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 runs on Primal
//!   cargo run --bin simulate -- -n 100 -d 2     # 100 runs on Cataclysm
//!   cargo run --bin simulate -- --seed 42       # Reproducible run

use primal_path::build_info;
use primal_path::run::ChallengeId;
use primal_path::simulator::{run_simulation, SimConfig};
use primal_path::tables::DIFFICULTIES;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);
    let difficulty = DIFFICULTIES
        .get(config.difficulty)
        .map(|d| d.name)
        .unwrap_or("Unknown");

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              PRIMAL PATH BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("  {}", build_info::version_string());
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Difficulty:     {}", difficulty);
    if let Some(challenge) = config.challenge {
        println!("  Challenge:      {}", challenge.def().name);
    }
    println!("  Tree Nodes:     {}", config.tree_nodes.len());
    println!("  Skills:         {}", if config.use_skills { "on" } else { "off" });
    println!("  Max Steps:      {}", config.max_steps_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_challenge(key: &str) -> Option<ChallengeId> {
    ChallengeId::ALL.into_iter().find(|c| c.key() == key)
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-d" | "--difficulty" => {
                if i + 1 < args.len() {
                    config.difficulty = args[i + 1].parse().unwrap_or(0);
                    i += 1;
                }
            }
            "-c" | "--challenge" => {
                if i + 1 < args.len() {
                    config.challenge = parse_challenge(&args[i + 1]);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--steps" => {
                if i + 1 < args.len() {
                    config.max_steps_per_run = args[i + 1].parse().unwrap_or(20_000);
                    i += 1;
                }
            }
            "--full-tree" => {
                config = SimConfig {
                    tree_nodes: SimConfig::full_tree_test(config.difficulty).tree_nodes,
                    ..config
                };
            }
            "--no-skills" => {
                config.use_skills = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Primal Path Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulation runs (default: 1000)");
    println!("    -d, --difficulty <D>  Difficulty index 0-3 (default: 0)");
    println!("    -c, --challenge <C>   fragile | minimalist | time_trial");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -t, --steps <T>       Max dispatch steps per run (default: 20,000)");
    println!("    --full-tree           Own every tree node");
    println!("    --no-skills           Never use skills");
    println!("    -v, --verbose         Per-run output");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
    println!();
    println!("Set RUST_LOG=primal_path=debug to trace run transitions.");
}
