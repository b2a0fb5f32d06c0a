use serde::{Deserialize, Serialize};

use crate::core::constants::*;

/// One enemy in the active wave. Stats are fixed at spawn; only `health`
/// changes afterwards, and only through [`super::logic::damage_enemy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub health: f64,
    pub max_health: f64,
    pub damage: f64,
    pub reward: f64,
}

impl Enemy {
    /// Enemy `index` of wave `wave`, with geometrically scaled stats.
    pub fn for_wave(wave: u32, index: usize) -> Self {
        let step = (wave.saturating_sub(1)) as f64;
        let health = ENEMY_BASE_HEALTH * ENEMY_HEALTH_GROWTH.powf(step);
        Self {
            id: format!("enemy-{wave}-{index}"),
            health,
            max_health: health,
            damage: ENEMY_BASE_DAMAGE * ENEMY_DAMAGE_GROWTH.powf(step),
            reward: ENEMY_BASE_REWARD * ENEMY_REWARD_GROWTH.powf(step),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn take_damage(&mut self, amount: f64) {
        self.health -= amount;
    }
}

/// What one resolved attack event did. The presentation layer maps this to
/// log lines and effects; nothing in the engine depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatReport {
    /// Enemies hit (primary plus splash targets).
    pub targets_hit: usize,
    /// Total damage actually dealt across all targets.
    pub damage_dealt: f64,
    pub kills: u32,
    pub money_gained: f64,
    pub experience_granted: f64,
    pub scrap_granted: f64,
    /// True when this event emptied the wave (and advanced the counter).
    pub wave_cleared: bool,
}
