//! Core game state and progression.

pub mod constants;
pub mod game_state;
pub mod progression;

pub use game_state::GameState;
