//! Combat resolution: wave spawning and splash damage.
//!
//! Per-wave state machine: empty list → `spawn_wave` fills it → attacks whittle
//! it down → the event that kills the last enemy advances the wave counter
//! (increment-on-clear; spawning never touches the counter). All operations
//! are idempotent no-ops on missing or already-dead targets — the UI may fire
//! an attack at an enemy that died earlier in the same tick.

use crate::combat::types::{CombatReport, Enemy};
use crate::core::constants::*;
use crate::core::game_state::GameState;
use crate::core::progression;
use crate::factories::types::bonus_factor;
use crate::multipliers::BonusKind;

/// Replace a non-finite value with 0 before it can reach stored state.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Passive per-hit damage: base damage (guns included) scaled by typing
/// speed, the factory auto-attack factor, and the damage multiplier.
///
/// Recomputed from current state on every call; never cached.
pub fn calculate_auto_attack_damage(state: &GameState, now_ms: i64) -> f64 {
    let auto_factor = bonus_factor(&state.factories, |e| e.auto_attack_bonus);
    let speed_factor = 1.0 + sanitize(state.typing_speed) / 100.0;
    let multiplier = state.active_buff_multiplier(BonusKind::Damage, now_ms);
    sanitize(state.base_damage * speed_factor * auto_factor * multiplier)
}

/// Populate the wave: enemy count equals the wave number. No-op while
/// enemies are still alive.
pub fn spawn_wave(state: &mut GameState) {
    if !state.enemies.is_empty() {
        return;
    }
    let wave = state.wave;
    state.enemies = (0..wave as usize).map(|i| Enemy::for_wave(wave, i)).collect();
}

/// Splash target selection: contiguous indices centered on the target,
/// expanding alternately outward (target, target−1, target+1, target−2, …)
/// until `count` slots are filled or both ends of the list are exhausted.
/// The primary target is always slot 0.
fn splash_indices(len: usize, target: usize, count: usize) -> Vec<usize> {
    let mut selected = vec![target];
    let mut offset = 1usize;
    while selected.len() < count {
        let below = target.checked_sub(offset);
        let above = if target + offset < len {
            Some(target + offset)
        } else {
            None
        };
        if below.is_none() && above.is_none() {
            break;
        }
        if let Some(i) = below {
            selected.push(i);
        }
        if selected.len() < count {
            if let Some(i) = above {
                selected.push(i);
            }
        }
        offset += 1;
    }
    selected
}

/// Resolve one attack event against `target_id`.
///
/// The hit combines the passive auto-attack contribution with the
/// typing-sourced `raw_damage` (scaled by the typing-damage factory factor),
/// both under the damage multiplier. Non-primary splash targets take
/// [`SPLASH_FALLOFF`] of the hit. Defeated enemies are removed, their rewards
/// granted, and clearing the wave advances the counter exactly once.
pub fn damage_enemy(
    state: &mut GameState,
    target_id: &str,
    raw_damage: f64,
    splash_count: usize,
    now_ms: i64,
) -> CombatReport {
    let mut report = CombatReport::default();

    let Some(target_index) = state.enemies.iter().position(|e| e.id == target_id) else {
        return report;
    };

    let damage_multiplier = state.effective_multiplier(BonusKind::Damage, now_ms);
    let typing_factor = bonus_factor(&state.factories, |e| e.typing_damage_bonus);
    let auto_factor = bonus_factor(&state.factories, |e| e.auto_attack_bonus);
    let speed_factor = 1.0 + sanitize(state.typing_speed) / 100.0;
    let auto_part = state.base_damage * speed_factor * auto_factor;
    let typed_part = sanitize(raw_damage) * typing_factor;
    let hit = sanitize((auto_part + typed_part) * damage_multiplier).max(0.0);

    for (slot, index) in splash_indices(state.enemies.len(), target_index, splash_count.max(1))
        .into_iter()
        .enumerate()
    {
        let amount = if slot == 0 { hit } else { hit * SPLASH_FALLOFF };
        state.enemies[index].take_damage(amount);
        report.targets_hit += 1;
        report.damage_dealt += amount;
    }

    let wave = state.wave;
    let mut reward_sum = 0.0;
    for enemy in state.enemies.iter().filter(|e| !e.is_alive()) {
        report.kills += 1;
        reward_sum += enemy.reward;
    }
    state.enemies.retain(|e| e.is_alive());

    if report.kills > 0 {
        let money_multiplier = state.effective_multiplier(BonusKind::Money, now_ms);
        let money = sanitize(reward_sum * money_multiplier);
        state.money += money;
        report.money_gained = money;

        for _ in 0..report.kills {
            progression::add_experience(state, KILL_XP_PER_WAVE * wave as f64, now_ms);
            state.update_resource(SCRAP, KILL_SCRAP_PER_WAVE * wave as f64, now_ms);
            report.experience_granted += KILL_XP_PER_WAVE * wave as f64;
            report.scrap_granted += KILL_SCRAP_PER_WAVE * wave as f64;
        }

        if state.enemies.is_empty() {
            state.wave += 1;
            report.wave_cleared = true;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger;

    fn state_with_wave(wave: u32) -> GameState {
        let mut state = GameState::new(0);
        state.wave = wave;
        spawn_wave(&mut state);
        state
    }

    #[test]
    fn test_spawn_wave_three_enemies_full_health() {
        let state = state_with_wave(3);
        assert_eq!(state.enemies.len(), 3);
        for (i, enemy) in state.enemies.iter().enumerate() {
            assert_eq!(enemy.id, format!("enemy-3-{i}"));
            assert_eq!(enemy.health, enemy.max_health);
        }
        // Spawning never advances the counter
        assert_eq!(state.wave, 3);
    }

    #[test]
    fn test_spawn_wave_is_noop_while_enemies_remain() {
        let mut state = state_with_wave(2);
        let before = state.enemies.clone();
        spawn_wave(&mut state);
        assert_eq!(state.enemies, before);
    }

    #[test]
    fn test_splash_indices_center_expansion() {
        assert_eq!(splash_indices(5, 2, 3), vec![2, 1, 3]);
        assert_eq!(splash_indices(5, 2, 5), vec![2, 1, 3, 0, 4]);
        assert_eq!(splash_indices(5, 0, 3), vec![0, 1, 2]);
        assert_eq!(splash_indices(5, 4, 3), vec![4, 3, 2]);
        assert_eq!(splash_indices(2, 0, 10), vec![0, 1]);
        assert_eq!(splash_indices(1, 0, 4), vec![0]);
    }

    #[test]
    fn test_splash_hits_only_adjacent_targets() {
        let mut state = state_with_wave(5);
        let target_id = state.enemies[2].id.clone();
        let report = damage_enemy(&mut state, &target_id, 10.0, 3, 0);

        assert_eq!(report.targets_hit, 3);
        assert!(state.enemies[0].health == state.enemies[0].max_health);
        assert!(state.enemies[1].health < state.enemies[1].max_health);
        assert!(state.enemies[2].health < state.enemies[2].max_health);
        assert!(state.enemies[3].health < state.enemies[3].max_health);
        assert!(state.enemies[4].health == state.enemies[4].max_health);
        // Primary takes full damage, neighbors take the falloff fraction
        let primary = state.enemies[2].max_health - state.enemies[2].health;
        let neighbor = state.enemies[1].max_health - state.enemies[1].health;
        assert!((neighbor - primary * SPLASH_FALLOFF).abs() < 1e-9);
    }

    #[test]
    fn test_missing_target_is_idempotent_noop() {
        let mut state = state_with_wave(3);
        let before = state.clone();
        let report = damage_enemy(&mut state, "enemy-3-99", 50.0, 3, 0);

        assert_eq!(report, CombatReport::default());
        assert_eq!(state.enemies, before.enemies);
        assert_eq!(state.wave, before.wave);
        assert_eq!(state.money, before.money);
        assert_eq!(state.resources, before.resources);
    }

    #[test]
    fn test_killing_last_enemy_advances_wave_once() {
        let mut state = state_with_wave(1);
        let target_id = state.enemies[0].id.clone();
        let report = damage_enemy(&mut state, &target_id, 1_000_000.0, 1, 0);

        assert_eq!(report.kills, 1);
        assert!(report.wave_cleared);
        assert!(state.enemies.is_empty());
        assert_eq!(state.wave, 2);
    }

    #[test]
    fn test_kill_grants_money_experience_and_scrap() {
        let mut state = state_with_wave(2);
        let target_id = state.enemies[0].id.clone();
        let reward = state.enemies[0].reward;
        let report = damage_enemy(&mut state, &target_id, 1_000_000.0, 1, 0);

        assert_eq!(report.kills, 1);
        assert!((state.money - reward).abs() < 1e-9);
        // Wave 2 kill: 30 xp, 16 scrap (no multipliers active)
        assert_eq!(state.experience, 30.0);
        assert_eq!(ledger::amount_of(&state.resources, SCRAP), 16.0);
        assert!(!report.wave_cleared);
        assert_eq!(state.wave, 2);
    }

    #[test]
    fn test_auto_attack_damage_includes_typing_speed() {
        let mut state = GameState::new(0);
        assert_eq!(calculate_auto_attack_damage(&state, 0), BASE_DAMAGE);
        state.typing_speed = 100.0;
        assert_eq!(calculate_auto_attack_damage(&state, 0), BASE_DAMAGE * 2.0);
    }

    #[test]
    fn test_nan_raw_damage_degrades_to_auto_attack_only() {
        let mut state = state_with_wave(3);
        let target_id = state.enemies[0].id.clone();
        let report = damage_enemy(&mut state, &target_id, f64::NAN, 1, 0);

        let expected = calculate_auto_attack_damage(&state, 0);
        assert!((report.damage_dealt - expected).abs() < 1e-9);
        assert!(state.enemies[0].health.is_finite());
    }

    #[test]
    fn test_zero_splash_count_still_hits_primary() {
        let mut state = state_with_wave(3);
        let target_id = state.enemies[1].id.clone();
        let report = damage_enemy(&mut state, &target_id, 5.0, 0, 0);
        assert_eq!(report.targets_hit, 1);
    }
}
