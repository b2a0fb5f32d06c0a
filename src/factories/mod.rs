//! Factories: persistent production and bonus sources.

pub mod production;
pub mod types;

pub use production::tick_production;
pub use types::{Factory, FactoryEffects, ResourceCost};
