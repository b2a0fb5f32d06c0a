//! The game state facade: one mutable aggregate owning all player progress,
//! with command methods delegating to the subsystem modules.

use serde::{Deserialize, Serialize};

use crate::achievements::Achievements;
use crate::catalog;
use crate::combat::types::{CombatReport, Enemy};
use crate::core::constants::*;
use crate::core::progression;
use crate::factories::types::Factory;
use crate::ledger::{self, Resource};
use crate::multipliers::{self, BonusKind, Buff, PermanentMultipliers};
use crate::shop::types::Upgrade;
use crate::{combat, shop};

/// Main game state containing all player progress.
///
/// Everything is owned here; external collaborators (timers, input, UI)
/// mutate it only through the command methods. Enemies are transient per
/// session and skipped by persistence — the wave counter survives, the wave
/// itself respawns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub save_version: u32,

    // Player progress
    pub level: u32,
    pub experience: f64,
    pub money: f64,
    pub typing_speed: f64,
    pub accuracy: f64,
    /// Auto-attack base damage; owned guns fold their flat bonus in here.
    pub base_damage: f64,

    // Economy
    pub resources: Vec<Resource>,

    // Combat
    pub wave: u32,
    #[serde(skip)]
    pub enemies: Vec<Enemy>,

    // Purchasable content (live copies of catalog data)
    pub factories: Vec<Factory>,
    pub upgrades: Vec<Upgrade>,
    #[serde(default)]
    pub purchased_guns: Vec<String>,
    #[serde(default)]
    pub purchased_shop_items: Vec<String>,

    // Multipliers
    #[serde(default)]
    pub buffs: Vec<Buff>,
    #[serde(default)]
    pub permanent: PermanentMultipliers,

    pub last_save_time: i64,
    #[serde(default)]
    pub play_time_seconds: u64,
}

impl GameState {
    /// Fresh game: level 1, empty ledger, wave 1 not yet spawned, full
    /// catalog installed, no purchases.
    pub fn new(now_ms: i64) -> Self {
        Self {
            save_version: SAVE_VERSION,
            level: 1,
            experience: 0.0,
            money: 0.0,
            typing_speed: 0.0,
            accuracy: 0.0,
            base_damage: BASE_DAMAGE,
            resources: vec![Resource::new(SCRAP), Resource::new(ENERGY)],
            wave: 1,
            enemies: Vec::new(),
            factories: catalog::default_factories(),
            upgrades: catalog::starting_upgrades(),
            purchased_guns: Vec::new(),
            purchased_shop_items: Vec::new(),
            buffs: Vec::new(),
            permanent: PermanentMultipliers::default(),
            last_save_time: now_ms,
            play_time_seconds: 0,
        }
    }

    // ── Multiplier engine ───────────────────────────────────────

    /// Effective multiplier for a kind without touching state: live-buff
    /// product × permanent[kind] × permanent[all].
    pub fn active_buff_multiplier(&self, kind: BonusKind, now_ms: i64) -> f64 {
        let permanent = if kind == BonusKind::All {
            self.permanent.all
        } else {
            self.permanent.get(kind) * self.permanent.all
        };
        multipliers::buff_product(&self.buffs, kind, now_ms) * permanent
    }

    /// Same as [`Self::active_buff_multiplier`], but purges expired buffs
    /// first (lazy GC on read — there is no expiry timer).
    pub fn effective_multiplier(&mut self, kind: BonusKind, now_ms: i64) -> f64 {
        multipliers::purge_expired(&mut self.buffs, now_ms);
        self.active_buff_multiplier(kind, now_ms)
    }

    pub fn apply_buff(
        &mut self,
        kind: BonusKind,
        multiplier: f64,
        duration_seconds: u64,
        now_ms: i64,
    ) {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return;
        }
        self.buffs
            .push(Buff::new(kind, multiplier, duration_seconds, now_ms));
    }

    // ── Commands ────────────────────────────────────────────────

    /// Ledger apply-delta: income is resource-multiplier-adjusted, spending
    /// is raw, amounts clamp at zero.
    pub fn update_resource(&mut self, name: &str, delta: f64, now_ms: i64) {
        let income_multiplier = self.effective_multiplier(BonusKind::Resource, now_ms);
        ledger::apply_delta(&mut self.resources, name, delta, income_multiplier);
    }

    pub fn add_experience(&mut self, amount: f64, now_ms: i64) -> bool {
        progression::add_experience(self, amount, now_ms)
    }

    /// The typing minigame reports computed WPM/accuracy here.
    pub fn update_typing_stats(&mut self, wpm: f64, accuracy: f64) {
        self.typing_speed = if wpm.is_finite() { wpm.max(0.0) } else { 0.0 };
        self.accuracy = if accuracy.is_finite() {
            accuracy.clamp(0.0, 100.0)
        } else {
            0.0
        };
    }

    pub fn spawn_wave(&mut self) {
        combat::logic::spawn_wave(self);
    }

    pub fn damage_enemy(
        &mut self,
        target_id: &str,
        raw_damage: f64,
        splash_count: usize,
        now_ms: i64,
    ) -> CombatReport {
        combat::logic::damage_enemy(self, target_id, raw_damage, splash_count, now_ms)
    }

    pub fn purchase_upgrade(&mut self, id: &str, now_ms: i64) -> bool {
        shop::logic::purchase_upgrade(self, id, now_ms)
    }

    pub fn upgrade_factory(&mut self, id: &str) -> bool {
        shop::logic::upgrade_factory(self, id)
    }

    pub fn unlock_factory(&mut self, id: &str) -> bool {
        shop::logic::unlock_factory(self, id)
    }

    pub fn toggle_factory(&mut self, id: &str) -> bool {
        shop::logic::toggle_factory(self, id)
    }

    pub fn purchase_gun(&mut self, id: &str) -> bool {
        shop::logic::purchase_gun(self, id)
    }

    pub fn calculate_auto_attack_damage(&self, now_ms: i64) -> f64 {
        combat::logic::calculate_auto_attack_damage(self, now_ms)
    }

    /// Restore everything to initial values. The only command with a
    /// cross-collaborator side effect: achievement progress resets too.
    pub fn reset_game(&mut self, achievements: &mut Achievements, now_ms: i64) {
        *self = Self::new(now_ms);
        achievements.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(1_234_567_890);
        assert_eq!(state.level, 1);
        assert_eq!(state.experience, 0.0);
        assert_eq!(state.money, 0.0);
        assert_eq!(state.base_damage, BASE_DAMAGE);
        assert_eq!(state.wave, 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.last_save_time, 1_234_567_890);
        assert_eq!(state.save_version, SAVE_VERSION);
        assert_eq!(
            state
                .resources
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>(),
            vec![SCRAP, ENERGY]
        );
        assert!(state.factories.iter().all(|f| !f.unlocked));
        assert!(state.upgrades.iter().all(|u| !u.purchased));
    }

    #[test]
    fn test_zero_buff_multiplier_is_permanent_product() {
        let mut state = GameState::new(0);
        state.permanent.apply(BonusKind::Damage, 2.0);
        state.permanent.apply(BonusKind::All, 1.5);
        assert_eq!(state.active_buff_multiplier(BonusKind::Damage, 0), 3.0);
        assert_eq!(state.active_buff_multiplier(BonusKind::Money, 0), 1.5);
        assert_eq!(state.active_buff_multiplier(BonusKind::All, 0), 1.5);
    }

    #[test]
    fn test_effective_multiplier_purges_expired_buffs() {
        let mut state = GameState::new(0);
        state.apply_buff(BonusKind::Damage, 2.0, 60, 0);
        assert_eq!(state.effective_multiplier(BonusKind::Damage, 0), 2.0);

        let after_expiry = 61_000;
        assert_eq!(
            state.effective_multiplier(BonusKind::Damage, after_expiry),
            1.0
        );
        assert!(state.buffs.is_empty());
    }

    #[test]
    fn test_apply_buff_rejects_degenerate_multipliers() {
        let mut state = GameState::new(0);
        state.apply_buff(BonusKind::All, f64::NAN, 60, 0);
        state.apply_buff(BonusKind::All, -1.0, 60, 0);
        assert!(state.buffs.is_empty());
    }

    #[test]
    fn test_update_typing_stats_sanitizes() {
        let mut state = GameState::new(0);
        state.update_typing_stats(72.5, 96.0);
        assert_eq!(state.typing_speed, 72.5);
        assert_eq!(state.accuracy, 96.0);

        state.update_typing_stats(f64::NAN, 150.0);
        assert_eq!(state.typing_speed, 0.0);
        assert_eq!(state.accuracy, 100.0);

        state.update_typing_stats(-20.0, -5.0);
        assert_eq!(state.typing_speed, 0.0);
        assert_eq!(state.accuracy, 0.0);
    }

    #[test]
    fn test_reset_game_restores_initial_values_and_resets_achievements() {
        let mut state = GameState::new(0);
        let mut achievements = Achievements::default();
        achievements.update_progress("wpm-50", 42.0);

        state.level = 9;
        state.money = 500.0;
        state.update_resource(SCRAP, 300.0, 0);
        state.wave = 14;
        state.apply_buff(BonusKind::Damage, 2.0, 600, 0);

        state.reset_game(&mut achievements, 777);

        assert_eq!(state.level, 1);
        assert_eq!(state.money, 0.0);
        assert_eq!(state.wave, 1);
        assert!(state.buffs.is_empty());
        assert_eq!(ledger::amount_of(&state.resources, SCRAP), 0.0);
        assert_eq!(state.last_save_time, 777);
        assert!(achievements.entries.is_empty());
    }

    #[test]
    fn test_serialization_skips_enemies() {
        let mut state = GameState::new(0);
        state.wave = 5;
        state.spawn_wave();
        assert_eq!(state.enemies.len(), 5);

        let json = serde_json::to_string(&state).unwrap();
        let loaded: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.wave, 5);
        assert!(loaded.enemies.is_empty());
    }

    #[test]
    fn test_serialization_round_trip_preserves_progress() {
        let mut state = GameState::new(42);
        state.level = 15;
        state.experience = 70.0;
        state.money = 1234.5;
        state.update_resource(SCRAP, 500.0, 0);
        state.permanent.apply(BonusKind::Experience, 2.0);
        state.purchased_guns.push("pistol".to_string());

        let json = serde_json::to_string_pretty(&state).unwrap();
        let loaded: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.level, 15);
        assert_eq!(loaded.experience, 70.0);
        assert_eq!(loaded.money, 1234.5);
        assert_eq!(ledger::amount_of(&loaded.resources, SCRAP), 500.0);
        assert_eq!(loaded.permanent.get(BonusKind::Experience), 2.0);
        assert_eq!(loaded.purchased_guns, vec!["pistol".to_string()]);
        assert_eq!(loaded.last_save_time, 42);
    }
}
