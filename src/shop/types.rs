use serde::{Deserialize, Serialize};

use crate::factories::types::ResourceCost;
use crate::multipliers::BonusKind;

/// What a purchase grants: a multiplicative effect on one bonus kind,
/// either permanent (no duration) or as a timed buff (consumables).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeEffect {
    pub kind: BonusKind,
    pub multiplier: f64,
    pub duration_seconds: Option<u64>,
}

impl UpgradeEffect {
    pub fn permanent(kind: BonusKind, multiplier: f64) -> Self {
        Self {
            kind,
            multiplier,
            duration_seconds: None,
        }
    }

    pub fn timed(kind: BonusKind, multiplier: f64, duration_seconds: u64) -> Self {
        Self {
            kind,
            multiplier,
            duration_seconds: Some(duration_seconds),
        }
    }
}

/// How an upgrade is paid for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UpgradeCost {
    /// One-time deduction from a ledger resource.
    Resource(ResourceCost),
    /// Level sacrifice: deducts player levels and resets experience.
    Levels(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKind {
    Typing,
    Factory,
    Combat,
    Prestige,
    Permanent,
    Consumable,
}

/// A one-shot catalog upgrade carried in live state (for its `purchased`
/// flag). Consumable-kind upgrades create a timed buff instead of a
/// permanent stack but are still one-shot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: UpgradeCost,
    pub kind: UpgradeKind,
    pub effect: UpgradeEffect,
    pub purchased: bool,
    pub requires_level: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopItemKind {
    /// One-shot; stacks into the permanent multiplier table.
    Permanent,
    /// Repeatable; creates a timed buff on every purchase.
    Consumable,
}

/// A money-cost item. Pure catalog data; ownership of permanent items is
/// tracked on the game state, consumables carry no ownership at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub kind: ShopItemKind,
    pub effect: UpgradeEffect,
}

/// An armory weapon. One-shot per id; owned guns contribute their flat
/// damage to the auto-attack base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gun {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub damage: f64,
}
