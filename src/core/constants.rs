// Base player stats
pub const BASE_HP: i32 = 80;
pub const BASE_ATK: i32 = 8;
pub const BASE_DEF: i32 = 2;
pub const BASE_CRIT_RATE: f64 = 0.05;
pub const BASE_MAX_ALLIES: usize = 3;
pub const BASE_EVOLUTION_CHOICES: usize = 3;

// Awakening thresholds
pub const BASE_MICRO_AWAKENING_LEVEL: u32 = 4;
pub const BASE_FINAL_AWAKENING_LEVEL: u32 = 5;
pub const BALANCED_MICRO_AWAKENING_LEVEL: u32 = 3;
pub const BALANCED_FINAL_AWAKENING_LEVEL: u32 = 4;
pub const MAX_UPCOMING_AWAKENINGS: usize = 3;

// Evolutions and recruitment
pub const BASE_RARE_RATE: f64 = 0.12;
pub const ALLY_RECRUIT_LEVELS: [u32; 3] = [2, 4, 6];

// World layout
pub const WAVES_PER_BIOME: u32 = 4;
pub const BIOME_COUNT: usize = 3;
pub const BIOME_SCALE_BASE: f64 = 0.75;
pub const BIOME_SCALE_STEP: f64 = 0.25;
pub const CLEARED_SCALE_STEP: f64 = 0.25;
pub const BOSS_CLEAR_HEAL_RATIO: f64 = 0.2;

// Final boss
pub const FINAL_PHASE_ONE_SCALE: f64 = 1.0;
pub const FINAL_PHASE_TWO_SCALE: f64 = 0.85;
/// Difficulties at or above this index fight a second final boss.
pub const FINAL_PHASE_TWO_MIN_DIFFICULTY: usize = 2;
/// Difficulties at or above this index lose without a final awakening.
pub const FINAL_AWAKENING_REQUIRED_DIFFICULTY: usize = 3;

// Combat
pub const CRIT_DAMAGE_MULTIPLIER: f64 = 1.6;
pub const RITUAL_LOW_HP_RATIO: f64 = 0.3;
pub const RITUAL_LOW_HP_MULTIPLIER: i32 = 3;
pub const BURN_DAMAGE_RATIO: f64 = 0.2;
pub const HEALER_ATK_RATIO: f64 = 2.5;
pub const TANK_ABSORB_RATIO: f64 = 0.6;
pub const TANK_PASSTHROUGH_RATIO: f64 = 0.4;
pub const SPLASH_HIT_CHANCE: f64 = 0.25;
pub const SPLASH_ATK_RATIO: f64 = 0.4;
pub const REVIVE_MIN_HP_RATIO: f64 = 0.3;

// Battle log ring buffer
pub const LOG_MAX_LINES: usize = 60;
pub const LOG_KEEP_LINES: usize = 35;

// Bone rewards
pub const RITUAL_BONE_MULTIPLIER: f64 = 1.5;
pub const VICTORY_BONE_MULTIPLIER: f64 = 1.5;
pub const MIN_BONE_REWARD: u32 = 1;

// Ally revive pricing: max(MIN, floor(BASE + cleared * PER_BIOME + difficulty * PER_DIFFICULTY))
pub const REVIVE_COST_MIN: u32 = 2;
pub const REVIVE_COST_BASE: f64 = 3.0;
pub const REVIVE_COST_PER_BIOME: f64 = 2.0;
pub const REVIVE_COST_PER_DIFFICULTY: f64 = 1.5;
pub const FULL_REVIVE_COST_MULTIPLIER: f64 = 1.8;
pub const PARTIAL_REVIVE_PCT: u32 = 50;
pub const FULL_REVIVE_PCT: u32 = 100;

// Random events
pub const EVENT_CHANCE: f64 = 0.3;
pub const EVENT_MIN_BATTLES: u32 = 1;

// Storage keys
pub const SAVE_KEY: &str = "primal-path-v7";
pub const STATS_KEY: &str = "primal-path-stats";
pub const ACHIEVEMENTS_KEY: &str = "primal-path-achievements";
pub const AGGREGATE_KEY: &str = "primal-path-aggregate";
pub const MAX_RUN_STATS: usize = 50;
pub const SAVE_DIR_NAME: &str = ".primal-path";
