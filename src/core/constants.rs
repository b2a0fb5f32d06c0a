// Resource names
pub const SCRAP: &str = "Scrap";
pub const ENERGY: &str = "Energy";

// Timing (external schedulers; the engine itself never sleeps)
pub const PRODUCTION_INTERVAL_SECONDS: u64 = 1;
pub const AUTO_ATTACK_INTERVAL_SECONDS: u64 = 1;
pub const WAVE_RESPAWN_DELAY_SECONDS: u64 = 2;

// XP and leveling
pub const XP_THRESHOLD_PER_LEVEL: f64 = 100.0;

// Combat base stats and geometric wave scaling
pub const BASE_DAMAGE: f64 = 1.0;
pub const ENEMY_BASE_HEALTH: f64 = 50.0;
pub const ENEMY_HEALTH_GROWTH: f64 = 1.2;
pub const ENEMY_BASE_DAMAGE: f64 = 5.0;
pub const ENEMY_DAMAGE_GROWTH: f64 = 1.1;
pub const ENEMY_BASE_REWARD: f64 = 10.0;
pub const ENEMY_REWARD_GROWTH: f64 = 1.1;

// Non-primary splash targets take this fraction of the hit
pub const SPLASH_FALLOFF: f64 = 0.5;

// Per-kill grants, scaled by the current wave number
pub const KILL_XP_PER_WAVE: f64 = 15.0;
pub const KILL_SCRAP_PER_WAVE: f64 = 8.0;

// Persistence
pub const SAVE_VERSION: u32 = 2;
pub const ACHIEVEMENTS_VERSION: u32 = 1;
