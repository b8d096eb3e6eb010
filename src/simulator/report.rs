//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// Where a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Stage {
    /// 1-based position along the biome path
    Biome(usize),
    FinalBoss,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Biome(0) => "Not started",
            Stage::Biome(1) => "Biome 1",
            Stage::Biome(2) => "Biome 2",
            Stage::Biome(_) => "Biome 3",
            Stage::FinalBoss => "Final boss",
        }
    }
}

/// Outcome of one simulated run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimRun {
    pub won: bool,
    pub timed_out: bool,
    pub stage: Stage,
    pub kills: u32,
    pub turns: u32,
    /// Bones banked by the run
    pub bones: u32,
    pub biomes_cleared: u32,
    pub evolutions: usize,
    /// Allies alive at the end
    pub allies: usize,
    pub steps: u64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub wins: u32,
    pub timed_out: u32,
    pub win_rate: f64,

    pub avg_kills: f64,
    pub avg_turns: f64,
    pub avg_bones: f64,
    pub avg_biomes_cleared: f64,
    pub avg_evolutions: f64,

    /// Losses by the stage they happened in, keyed by stage name
    pub death_distribution: BTreeMap<&'static str, u32>,

    #[serde(skip)]
    pub runs: Vec<SimRun>,
}

fn average(runs: &[SimRun], f: impl Fn(&SimRun) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<SimRun>) -> Self {
        let num_runs = runs.len() as u32;
        let wins = runs.iter().filter(|r| r.won).count() as u32;
        let timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;
        let win_rate = if num_runs == 0 {
            0.0
        } else {
            wins as f64 / num_runs as f64
        };

        let mut death_distribution = BTreeMap::new();
        for run in runs.iter().filter(|r| !r.won && !r.timed_out) {
            *death_distribution.entry(run.stage.name()).or_insert(0) += 1;
        }

        Self {
            num_runs,
            wins,
            timed_out,
            win_rate,
            avg_kills: average(&runs, |r| r.kills as f64),
            avg_turns: average(&runs, |r| r.turns as f64),
            avg_bones: average(&runs, |r| r.bones as f64),
            avg_biomes_cleared: average(&runs, |r| r.biomes_cleared as f64),
            avg_evolutions: average(&runs, |r| r.evolutions as f64),
            death_distribution,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 PRIMAL PATH SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} won, {} timed out\n\n",
            self.num_runs, self.wins, self.timed_out
        ));

        report.push_str("── PACING ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Kills:          {:.1}\n", self.avg_kills));
        report.push_str(&format!("  Avg Turns:          {:.0}\n", self.avg_turns));
        report.push_str(&format!("  Avg Bones Banked:   {:.1}\n", self.avg_bones));
        report.push_str(&format!("  Avg Biomes Cleared: {:.2}\n", self.avg_biomes_cleared));
        report.push_str(&format!("  Avg Evolutions:     {:.1}\n\n", self.avg_evolutions));

        report.push_str("── DEATHS BY STAGE ──────────────────────────────────────────────\n");
        let losses = self.num_runs.saturating_sub(self.wins + self.timed_out).max(1);
        for (stage, count) in &self.death_distribution {
            let pct = *count as f64 / losses as f64 * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<12} {:>5} {:>5.1}% {}\n", stage, count, pct, bar));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.win_rate > 0.8 {
            "TOO EASY - Most runs win"
        } else if self.win_rate > 0.3 {
            "GOOD - Challenging but fair"
        } else if self.win_rate > 0.05 {
            "HARD - Few runs win"
        } else {
            "TOO HARD - Almost nobody wins"
        };
        report.push_str(&format!("  Win Rate: {:.1}%\n", self.win_rate * 100.0));
        report.push_str(&format!("  Rating:   {}\n", rating));
        if self.timed_out > 0 {
            report.push_str("  ⚠️  Some runs hit the step limit - stalled battle?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(won: bool, stage: Stage, kills: u32) -> SimRun {
        SimRun {
            won,
            timed_out: false,
            stage,
            kills,
            turns: kills * 4,
            bones: kills,
            biomes_cleared: 0,
            evolutions: 3,
            allies: 0,
            steps: 100,
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![
            run(true, Stage::FinalBoss, 20),
            run(false, Stage::Biome(2), 10),
            run(false, Stage::Biome(2), 6),
            run(false, Stage::FinalBoss, 18),
        ];
        let report = SimReport::from_runs(runs);
        assert_eq!(report.num_runs, 4);
        assert_eq!(report.wins, 1);
        assert!((report.win_rate - 0.25).abs() < 1e-9);
        assert!((report.avg_kills - 13.5).abs() < 1e-9);
        assert_eq!(report.death_distribution.get("Biome 2"), Some(&2));
        assert_eq!(report.death_distribution.get("Final boss"), Some(&1));
        assert!(report.to_text().contains("Win Rate: 25.0%"));
    }

    #[test]
    fn test_json_report() {
        let report = SimReport::from_runs(vec![run(false, Stage::Biome(1), 3)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert_eq!(json["death_distribution"]["Biome 1"], 1);
        assert!(json.get("runs").is_none());
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.win_rate, 0.0);
        assert_eq!(report.avg_kills, 0.0);
    }
}
