//! Static catalog definitions: factories, upgrades, shop items, guns.
//!
//! Pure data, no behavior. Factories and upgrades are instantiated into live
//! state (they carry mutable level/purchased flags); shop items and guns are
//! looked up here at purchase time. Save migration rebuilds the live lists
//! from these constructors, so ids are the stable identity across releases.

use crate::core::constants::{ENERGY, SCRAP};
use crate::factories::types::{Factory, FactoryEffects, ResourceCost};
use crate::multipliers::BonusKind;
use crate::shop::types::{
    Gun, ShopItem, ShopItemKind, Upgrade, UpgradeCost, UpgradeEffect, UpgradeKind,
};

fn factory(
    id: &str,
    name: &str,
    description: &str,
    unlock_level: u32,
    base_cost: ResourceCost,
    effects: FactoryEffects,
) -> Factory {
    Factory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        level: 0,
        unlock_level,
        unlocked: false,
        active: false,
        base_cost,
        effects,
    }
}

fn scrap_cost(amount: f64) -> ResourceCost {
    ResourceCost {
        resource: SCRAP.to_string(),
        amount,
    }
}

fn energy_cost(amount: f64) -> ResourceCost {
    ResourceCost {
        resource: ENERGY.to_string(),
        amount,
    }
}

/// The factory roster, locked and at level 0. `unlocked` flags are
/// re-evaluated against the player level on every level change.
pub fn default_factories() -> Vec<Factory> {
    vec![
        factory(
            "scrap-collector",
            "Scrap Collector",
            "Drones that sweep the wasteland for salvage.",
            2,
            scrap_cost(50.0),
            FactoryEffects {
                scrap_production: 1.0,
                ..Default::default()
            },
        ),
        factory(
            "energy-generator",
            "Energy Generator",
            "Salvaged solar panels and a very long extension cord.",
            3,
            scrap_cost(100.0),
            FactoryEffects {
                energy_production: 0.5,
                ..Default::default()
            },
        ),
        factory(
            "auto-turret",
            "Auto-Turret Array",
            "Roof-mounted turrets that fire between your keystrokes.",
            5,
            scrap_cost(200.0),
            FactoryEffects {
                auto_attack_bonus: 0.1,
                ..Default::default()
            },
        ),
        factory(
            "keyboard-workshop",
            "Keyboard Workshop",
            "Hand-tuned switches. Every word hits harder.",
            7,
            energy_cost(150.0),
            FactoryEffects {
                typing_damage_bonus: 0.1,
                ..Default::default()
            },
        ),
        factory(
            "training-sim",
            "Training Simulator",
            "Type under pressure, learn twice as fast.",
            9,
            energy_cost(250.0),
            FactoryEffects {
                experience_bonus: 0.05,
                ..Default::default()
            },
        ),
        factory(
            "recycler",
            "Industrial Recycler",
            "Burns energy to smelt wreckage into scrap.",
            10,
            scrap_cost(500.0),
            FactoryEffects {
                scrap_production: 2.0,
                energy_production: -0.5,
                ..Default::default()
            },
        ),
        factory(
            "logistics-hub",
            "Logistics Hub",
            "Routes everything everywhere a little faster.",
            12,
            energy_cost(400.0),
            FactoryEffects {
                resource_bonus: 0.05,
                ..Default::default()
            },
        ),
    ]
}

fn upgrade(
    id: &str,
    name: &str,
    description: &str,
    cost: UpgradeCost,
    kind: UpgradeKind,
    effect: UpgradeEffect,
    requires_level: Option<u32>,
) -> Upgrade {
    Upgrade {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        cost,
        kind,
        effect,
        purchased: false,
        requires_level,
    }
}

/// One-shot upgrades, resource-cost and level-sacrifice (prestige).
pub fn starting_upgrades() -> Vec<Upgrade> {
    vec![
        upgrade(
            "mech-keyboard",
            "Mechanical Keyboard",
            "Clacky. Deadly. +25% damage.",
            UpgradeCost::Resource(scrap_cost(100.0)),
            UpgradeKind::Typing,
            UpgradeEffect::permanent(BonusKind::Damage, 1.25),
            None,
        ),
        upgrade(
            "assembly-lines",
            "Assembly Lines",
            "Factories produce 50% more.",
            UpgradeCost::Resource(scrap_cost(250.0)),
            UpgradeKind::Factory,
            UpgradeEffect::permanent(BonusKind::Resource, 1.5),
            None,
        ),
        upgrade(
            "hollow-points",
            "Hollow Points",
            "+50% damage from every source.",
            UpgradeCost::Resource(energy_cost(200.0)),
            UpgradeKind::Combat,
            UpgradeEffect::permanent(BonusKind::Damage, 1.5),
            None,
        ),
        upgrade(
            "ergonomic-setup",
            "Ergonomic Setup",
            "Less wrist strain, +25% experience.",
            UpgradeCost::Resource(energy_cost(150.0)),
            UpgradeKind::Typing,
            UpgradeEffect::permanent(BonusKind::Experience, 1.25),
            None,
        ),
        upgrade(
            "rebirth-protocol",
            "Rebirth Protocol",
            "Sacrifice 5 levels. Everything doubles, forever.",
            UpgradeCost::Levels(5),
            UpgradeKind::Prestige,
            UpgradeEffect::permanent(BonusKind::All, 2.0),
            Some(10),
        ),
        upgrade(
            "ascension",
            "Ascension",
            "Sacrifice 10 levels. Everything triples, forever.",
            UpgradeCost::Levels(10),
            UpgradeKind::Prestige,
            UpgradeEffect::permanent(BonusKind::All, 3.0),
            Some(20),
        ),
    ]
}

fn shop_item(
    id: &str,
    name: &str,
    description: &str,
    cost: f64,
    kind: ShopItemKind,
    effect: UpgradeEffect,
) -> ShopItem {
    ShopItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        cost,
        kind,
        effect,
    }
}

/// Money-cost shop stock. Permanent items are one-shot; consumables are
/// repeatable timed buffs.
pub fn shop_items() -> Vec<ShopItem> {
    vec![
        shop_item(
            "war-bonds",
            "War Bonds",
            "Permanently earn 50% more money.",
            1000.0,
            ShopItemKind::Permanent,
            UpgradeEffect::permanent(BonusKind::Money, 1.5),
        ),
        shop_item(
            "power-grid",
            "Power Grid",
            "Permanently produce 25% more resources.",
            750.0,
            ShopItemKind::Permanent,
            UpgradeEffect::permanent(BonusKind::Resource, 1.25),
        ),
        shop_item(
            "adrenaline-shot",
            "Adrenaline Shot",
            "Double damage for 60 seconds.",
            100.0,
            ShopItemKind::Consumable,
            UpgradeEffect::timed(BonusKind::Damage, 2.0, 60),
        ),
        shop_item(
            "caffeine-rush",
            "Caffeine Rush",
            "Double experience for 2 minutes.",
            150.0,
            ShopItemKind::Consumable,
            UpgradeEffect::timed(BonusKind::Experience, 2.0, 120),
        ),
        shop_item(
            "scrap-magnet",
            "Scrap Magnet",
            "Double resource income for 90 seconds.",
            120.0,
            ShopItemKind::Consumable,
            UpgradeEffect::timed(BonusKind::Resource, 2.0, 90),
        ),
        shop_item(
            "lucky-charm",
            "Lucky Charm",
            "Double money from kills for 90 seconds.",
            200.0,
            ShopItemKind::Consumable,
            UpgradeEffect::timed(BonusKind::Money, 2.0, 90),
        ),
    ]
}

fn gun(id: &str, name: &str, description: &str, cost: f64, damage: f64) -> Gun {
    Gun {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        cost,
        damage,
    }
}

/// The armory. Flat damage stacks additively into the auto-attack base.
pub fn gun_catalog() -> Vec<Gun> {
    vec![
        gun("pistol", "Rusty Pistol", "Better than harsh words.", 100.0, 5.0),
        gun("shotgun", "Pump Shotgun", "Crowd control, one shell at a time.", 500.0, 15.0),
        gun("rifle", "Scoped Rifle", "Reach out and delete something.", 2000.0, 40.0),
        gun(
            "minigun",
            "Salvaged Minigun",
            "The wave stops coming when the barrel stops spinning.",
            10000.0,
            120.0,
        ),
    ]
}
