//! Achievement progress collaborator.
//!
//! The engine does not own the achievement catalog (an external observer
//! grants rewards back through the normal commands); it only carries the
//! progress document — id → progress/completed/claimed — which persists in
//! `~/.typestorm/achievements.json`, separately keyed and versioned from the
//! main save.

pub mod persistence;
pub mod types;

pub use persistence::{load_achievements, save_achievements};
pub use types::{AchievementEntry, Achievements};
