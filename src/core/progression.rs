//! Level and experience progression.
//!
//! The level-up threshold is `100 × level`. Crossing it increments the level
//! by one and resets experience to zero; any overflow past the threshold is
//! dropped. That overflow drop is long-standing live behavior the rest of
//! the balance curve was tuned around, so it is kept deliberately rather
//! than carried forward.

use crate::core::constants::XP_THRESHOLD_PER_LEVEL;
use crate::core::game_state::GameState;
use crate::factories::types::bonus_factor;
use crate::multipliers::BonusKind;

/// Experience needed to finish the given level.
pub fn xp_threshold(level: u32) -> f64 {
    XP_THRESHOLD_PER_LEVEL * level as f64
}

/// Grant experience, scaled by the factory experience factor and the
/// experience-kind multiplier. Returns true if a level-up occurred.
pub fn add_experience(state: &mut GameState, amount: f64, now_ms: i64) -> bool {
    let factor = bonus_factor(&state.factories, |e| e.experience_bonus);
    let multiplier = state.effective_multiplier(BonusKind::Experience, now_ms);
    let gained = amount * factor * multiplier;
    if !gained.is_finite() || gained <= 0.0 {
        return false;
    }

    state.experience += gained;
    if state.experience >= xp_threshold(state.level) {
        state.level += 1;
        state.experience = 0.0;
        refresh_factory_unlocks(state);
        return true;
    }
    false
}

/// Re-evaluate automatic factory unlocks after a level change. Unlocks are
/// never revoked — a level-sacrifice purchase cannot re-lock a factory.
pub fn refresh_factory_unlocks(state: &mut GameState) {
    let level = state.level;
    for factory in &mut state.factories {
        if factory.unlock_level <= level {
            factory.unlocked = true;
        }
    }
}
