//! Resource ledger: named accumulators with a production rate display value.
//!
//! Amounts are mutated only through [`apply_delta`]; positive deltas are
//! scaled by the resource-kind effective multiplier before they land, and
//! amounts clamp at zero on write (the single agreed clamp point — render
//! code never needs to re-clamp).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub amount: f64,
    pub per_second: f64,
}

impl Resource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            amount: 0.0,
            per_second: 0.0,
        }
    }
}

/// Apply a raw delta to the named resource.
///
/// Positive deltas (income) are multiplied by `income_multiplier`; negative
/// deltas (spending) are applied as-is so purchase costs are never discounted
/// by income buffs. Unknown names and non-finite deltas are no-ops.
pub fn apply_delta(resources: &mut [Resource], name: &str, delta: f64, income_multiplier: f64) {
    if !delta.is_finite() || !income_multiplier.is_finite() {
        return;
    }
    let Some(resource) = resources.iter_mut().find(|r| r.name == name) else {
        return;
    };
    let applied = if delta > 0.0 {
        delta * income_multiplier
    } else {
        delta
    };
    resource.amount = (resource.amount + applied).max(0.0);
}

/// Current amount of the named resource; 0 for unknown names.
pub fn amount_of(resources: &[Resource], name: &str) -> f64 {
    resources
        .iter()
        .find(|r| r.name == name)
        .map(|r| r.amount)
        .unwrap_or(0.0)
}
