//! Per-tick resource production from active factories.

use crate::core::constants::{ENERGY, SCRAP};
use crate::core::game_state::GameState;
use crate::factories::types::bonus_factor;
use crate::ledger;
use crate::multipliers::BonusKind;

/// Advance production by one tick (the external scheduler calls this once
/// per second).
///
/// For each resource, the raw output is the sum of the matching production
/// effect times level over all contributing factories, compounded by the
/// `resource_bonus` factor. The result is stored as the resource's
/// `per_second` display value — which may be negative, since trade-off
/// factories (energy-for-scrap) are legal — and then applied through the
/// ledger, where income picks up the resource-kind multiplier and amounts
/// clamp at zero.
pub fn tick_production(state: &mut GameState, now_ms: i64) {
    let bonus = bonus_factor(&state.factories, |e| e.resource_bonus);
    let income_multiplier = state.effective_multiplier(BonusKind::Resource, now_ms);

    let contributing = || state.factories.iter().filter(|f| f.is_contributing());
    let scrap_base: f64 = contributing()
        .map(|f| f.effects.scrap_production * f.level as f64)
        .sum();
    let energy_base: f64 = contributing()
        .map(|f| f.effects.energy_production * f.level as f64)
        .sum();

    for (name, base) in [(SCRAP, scrap_base), (ENERGY, energy_base)] {
        let per_second = base * bonus;
        if let Some(resource) = state.resources.iter_mut().find(|r| r.name == name) {
            resource.per_second = per_second;
        }
        ledger::apply_delta(&mut state.resources, name, per_second, income_multiplier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_state::GameState;
    use crate::multipliers::Buff;

    fn state_with_factory(id: &str, level: u32) -> GameState {
        let mut state = GameState::new(0);
        let factory = state
            .factories
            .iter_mut()
            .find(|f| f.id == id)
            .expect("catalog factory");
        factory.unlocked = true;
        factory.active = true;
        factory.level = level;
        state
    }

    #[test]
    fn test_all_factories_inactive_produces_nothing() {
        let mut state = GameState::new(0);
        tick_production(&mut state, 0);
        for resource in &state.resources {
            assert_eq!(resource.per_second, 0.0);
            assert_eq!(resource.amount, 0.0);
        }
    }

    #[test]
    fn test_scrap_collector_produces_scrap() {
        let mut state = state_with_factory("scrap-collector", 3);
        tick_production(&mut state, 0);

        let scrap = state.resources.iter().find(|r| r.name == SCRAP).unwrap();
        assert_eq!(scrap.per_second, 3.0);
        assert_eq!(scrap.amount, 3.0);
        let energy = state.resources.iter().find(|r| r.name == ENERGY).unwrap();
        assert_eq!(energy.per_second, 0.0);
    }

    #[test]
    fn test_resource_buff_scales_income_but_not_per_second() {
        let mut state = state_with_factory("scrap-collector", 2);
        state
            .buffs
            .push(Buff::new(BonusKind::Resource, 2.0, 60, 0));
        tick_production(&mut state, 0);

        let scrap = state.resources.iter().find(|r| r.name == SCRAP).unwrap();
        assert_eq!(scrap.per_second, 2.0);
        assert_eq!(scrap.amount, 4.0);
    }

    #[test]
    fn test_trade_off_factory_drives_energy_negative_rate() {
        let mut state = state_with_factory("recycler", 1);
        // Seed some energy to be consumed
        ledger::apply_delta(&mut state.resources, ENERGY, 10.0, 1.0);
        tick_production(&mut state, 0);

        let energy = state.resources.iter().find(|r| r.name == ENERGY).unwrap();
        assert!(energy.per_second < 0.0);
        assert!(energy.amount < 10.0);
        let scrap = state.resources.iter().find(|r| r.name == SCRAP).unwrap();
        assert!(scrap.per_second > 0.0);
    }

    #[test]
    fn test_negative_rate_never_drives_amount_below_zero() {
        let mut state = state_with_factory("recycler", 10);
        for _ in 0..50 {
            tick_production(&mut state, 0);
        }
        let energy = state.resources.iter().find(|r| r.name == ENERGY).unwrap();
        assert_eq!(energy.amount, 0.0);
    }

    #[test]
    fn test_resource_bonus_compounds_production() {
        let mut state = state_with_factory("scrap-collector", 2);
        {
            let hub = state
                .factories
                .iter_mut()
                .find(|f| f.id == "logistics-hub")
                .unwrap();
            hub.unlocked = true;
            hub.active = true;
            hub.level = 4;
        }
        tick_production(&mut state, 0);

        // 2 scrap/s * (1 + 0.05 * 4) = 2.4
        let scrap = state.resources.iter().find(|r| r.name == SCRAP).unwrap();
        assert!((scrap.per_second - 2.4).abs() < 1e-12);
    }
}
