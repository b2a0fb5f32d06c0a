//! Typestorm - progression/economy engine for a typing wave-defense
//! incremental game.
//!
//! The engine is a single mutable aggregate ([`GameState`]) plus pure
//! subsystem modules. Presentation, input capture, and timers live outside
//! the crate and drive it through the facade's command methods.

pub mod achievements;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod factories;
pub mod ledger;
pub mod multipliers;
pub mod save_manager;
pub mod shop;

pub use crate::core::game_state::GameState;
