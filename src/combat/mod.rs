//! Wave combat: spawning, splash damage resolution, rewards.

pub mod logic;
pub mod types;

pub use logic::{calculate_auto_attack_damage, damage_enemy, spawn_wave};
pub use types::{CombatReport, Enemy};
