//! Commerce: upgrades, shop items, and the armory.

pub mod logic;
pub mod types;

pub use logic::{
    purchase_gun, purchase_upgrade, toggle_factory, unlock_factory, upgrade_factory,
};
pub use types::{Gun, ShopItem, ShopItemKind, Upgrade, UpgradeCost, UpgradeEffect, UpgradeKind};
