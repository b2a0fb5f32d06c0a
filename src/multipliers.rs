//! Bonus kinds, timed buffs, and the permanent multiplier table.
//!
//! Every gain category in the game (damage dealt, resource income, experience,
//! money, or everything at once) is a [`BonusKind`]. The effective multiplier
//! for a kind is the product of all live buffs of that kind (and of `All`),
//! the permanent multiplier for the kind, and the permanent `All` multiplier.
//! Expired buffs are purged lazily whenever a multiplier is computed; nothing
//! observable depends on the exact moment an expired buff disappears.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed set of gain categories a multiplier or buff can apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    Damage,
    Resource,
    Experience,
    Money,
    All,
}

impl BonusKind {
    pub fn all() -> [BonusKind; 5] {
        [
            BonusKind::Damage,
            BonusKind::Resource,
            BonusKind::Experience,
            BonusKind::Money,
            BonusKind::All,
        ]
    }
}

/// A time-limited multiplicative bonus created by a consumable purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Buff {
    pub id: String,
    pub kind: BonusKind,
    pub multiplier: f64,
    /// Absolute expiry timestamp, epoch milliseconds.
    pub end_time_ms: i64,
}

impl Buff {
    pub fn new(kind: BonusKind, multiplier: f64, duration_seconds: u64, now_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            multiplier,
            end_time_ms: now_ms + duration_seconds as i64 * 1000,
        }
    }

    pub fn is_active(&self, now_ms: i64) -> bool {
        self.end_time_ms > now_ms
    }
}

/// Monotonically non-decreasing multipliers from one-shot purchases.
///
/// All entries start at 1.0 and only ever grow (multiplicatively).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermanentMultipliers {
    pub damage: f64,
    pub resource: f64,
    pub experience: f64,
    pub money: f64,
    pub all: f64,
}

impl Default for PermanentMultipliers {
    fn default() -> Self {
        Self {
            damage: 1.0,
            resource: 1.0,
            experience: 1.0,
            money: 1.0,
            all: 1.0,
        }
    }
}

impl PermanentMultipliers {
    pub fn get(&self, kind: BonusKind) -> f64 {
        match kind {
            BonusKind::Damage => self.damage,
            BonusKind::Resource => self.resource,
            BonusKind::Experience => self.experience,
            BonusKind::Money => self.money,
            BonusKind::All => self.all,
        }
    }

    /// Stack a permanent multiplier into the table. Non-finite or
    /// non-positive factors are ignored so the table can never regress.
    pub fn apply(&mut self, kind: BonusKind, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let slot = match kind {
            BonusKind::Damage => &mut self.damage,
            BonusKind::Resource => &mut self.resource,
            BonusKind::Experience => &mut self.experience,
            BonusKind::Money => &mut self.money,
            BonusKind::All => &mut self.all,
        };
        *slot *= factor;
    }
}

/// Remove every buff whose end time has passed.
pub fn purge_expired(buffs: &mut Vec<Buff>, now_ms: i64) {
    buffs.retain(|b| b.is_active(now_ms));
}

/// Product of the multipliers of every live buff matching `kind` or `All`.
///
/// Same-kind buffs stack multiplicatively, so an `All` buff always compounds
/// with a kind-specific one.
pub fn buff_product(buffs: &[Buff], kind: BonusKind, now_ms: i64) -> f64 {
    buffs
        .iter()
        .filter(|b| b.is_active(now_ms) && (b.kind == kind || b.kind == BonusKind::All))
        .map(|b| b.multiplier)
        .product()
}
