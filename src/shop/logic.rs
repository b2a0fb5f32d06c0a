//! Commerce controller: purchase validation and execution.
//!
//! Every entry point re-validates affordability even though the UI gates the
//! affordance, and declines silently: a failed purchase returns `false` and
//! leaves state byte-for-byte unchanged. A successful purchase applies cost
//! and effect together; there is no partially-applied outcome.

use crate::catalog;
use crate::core::game_state::GameState;
use crate::ledger;
use crate::shop::types::{ShopItemKind, UpgradeCost, UpgradeEffect, UpgradeKind};

/// Apply a purchase effect: consumables become timed buffs, everything else
/// stacks into the permanent multiplier table.
fn apply_effect(state: &mut GameState, effect: &UpgradeEffect, consumable: bool, now_ms: i64) {
    if consumable {
        let duration = effect.duration_seconds.unwrap_or(0);
        state.apply_buff(effect.kind, effect.multiplier, duration, now_ms);
    } else {
        state.permanent.apply(effect.kind, effect.multiplier);
    }
}

/// Purchase by id, searching money-cost shop items first, then catalog
/// upgrades (resource- or level-cost).
pub fn purchase_upgrade(state: &mut GameState, id: &str, now_ms: i64) -> bool {
    if let Some(item) = catalog::shop_items().into_iter().find(|i| i.id == id) {
        return purchase_shop_item(state, &item, now_ms);
    }

    let Some(index) = state.upgrades.iter().position(|u| u.id == id) else {
        return false;
    };
    let upgrade = state.upgrades[index].clone();
    if upgrade.purchased {
        return false;
    }
    if let Some(required) = upgrade.requires_level {
        if state.level < required {
            return false;
        }
    }

    match &upgrade.cost {
        UpgradeCost::Resource(cost) => {
            if ledger::amount_of(&state.resources, &cost.resource) < cost.amount {
                return false;
            }
            ledger::apply_delta(&mut state.resources, &cost.resource, -cost.amount, 1.0);
        }
        UpgradeCost::Levels(levels) => {
            // Level sacrifice can never take the player below level 1
            if state.level <= *levels {
                return false;
            }
            state.level -= levels;
            state.experience = 0.0;
        }
    }

    state.upgrades[index].purchased = true;
    let consumable = upgrade.kind == UpgradeKind::Consumable;
    apply_effect(state, &upgrade.effect, consumable, now_ms);
    true
}

fn purchase_shop_item(state: &mut GameState, item: &crate::shop::types::ShopItem, now_ms: i64) -> bool {
    let permanent = item.kind == ShopItemKind::Permanent;
    if permanent && state.purchased_shop_items.iter().any(|p| p == &item.id) {
        return false;
    }
    if state.money < item.cost {
        return false;
    }

    state.money -= item.cost;
    if permanent {
        state.purchased_shop_items.push(item.id.clone());
    }
    apply_effect(state, &item.effect, !permanent, now_ms);
    true
}

/// Buy the next factory level. Cost grows linearly with level.
pub fn upgrade_factory(state: &mut GameState, id: &str) -> bool {
    let Some(index) = state.factories.iter().position(|f| f.id == id) else {
        return false;
    };
    let factory = &state.factories[index];
    if !factory.unlocked {
        return false;
    }
    let cost = factory.next_level_cost();
    let resource = factory.base_cost.resource.clone();
    if ledger::amount_of(&state.resources, &resource) < cost {
        return false;
    }

    ledger::apply_delta(&mut state.resources, &resource, -cost, 1.0);
    state.factories[index].level += 1;
    true
}

/// Pay the base cost to unlock a factory ahead of its level gate. Starts it
/// at level 1 and active.
pub fn unlock_factory(state: &mut GameState, id: &str) -> bool {
    let Some(index) = state.factories.iter().position(|f| f.id == id) else {
        return false;
    };
    let factory = &state.factories[index];
    if factory.unlocked {
        return false;
    }
    let cost = factory.base_cost.amount;
    let resource = factory.base_cost.resource.clone();
    if ledger::amount_of(&state.resources, &resource) < cost {
        return false;
    }

    ledger::apply_delta(&mut state.resources, &resource, -cost, 1.0);
    let factory = &mut state.factories[index];
    factory.unlocked = true;
    factory.level = 1;
    factory.active = true;
    true
}

/// Flip a factory's active flag. No-op (false) while locked.
pub fn toggle_factory(state: &mut GameState, id: &str) -> bool {
    match state.factories.iter_mut().find(|f| f.id == id) {
        Some(factory) if factory.unlocked => {
            factory.active = !factory.active;
            true
        }
        _ => false,
    }
}

/// Buy a weapon from the armory. One-shot per id; the gun's flat damage is
/// folded into the auto-attack base.
pub fn purchase_gun(state: &mut GameState, id: &str) -> bool {
    let Some(gun) = catalog::gun_catalog().into_iter().find(|g| g.id == id) else {
        return false;
    };
    if state.purchased_guns.iter().any(|g| g == id) {
        return false;
    }
    if state.money < gun.cost {
        return false;
    }

    state.money -= gun.cost;
    state.purchased_guns.push(gun.id);
    state.base_damage += gun.damage;
    true
}
