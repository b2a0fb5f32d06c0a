use serde::{Deserialize, Serialize};

/// A cost denominated in one of the ledger resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCost {
    pub resource: String,
    pub amount: f64,
}

/// Per-level effect magnitudes of a factory. All fields are optional in the
/// catalog (sparse); a zero magnitude means the factory does not contribute
/// to that category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryEffects {
    pub scrap_production: f64,
    pub energy_production: f64,
    pub typing_damage_bonus: f64,
    pub auto_attack_bonus: f64,
    pub experience_bonus: f64,
    pub resource_bonus: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: u32,
    pub unlock_level: u32,
    pub unlocked: bool,
    pub active: bool,
    pub base_cost: ResourceCost,
    pub effects: FactoryEffects,
}

impl Factory {
    /// True when the factory currently contributes to production and bonuses.
    pub fn is_contributing(&self) -> bool {
        self.unlocked && self.active && self.level > 0
    }

    /// Cost of the next level: base cost scaled by the level being bought.
    pub fn next_level_cost(&self) -> f64 {
        self.base_cost.amount * (self.level + 1) as f64
    }
}

/// Compounded multiplicative factor for one bonus category across all
/// contributing factories: `∏ (1 + magnitude × level)`.
pub fn bonus_factor(factories: &[Factory], select: impl Fn(&FactoryEffects) -> f64) -> f64 {
    factories
        .iter()
        .filter(|f| f.is_contributing())
        .map(|f| 1.0 + select(&f.effects) * f.level as f64)
        .product()
}
