//! The game engine: state, operations, intents, and errors.
//!
//! [`Game`] owns everything: the fixed category registry, the observable
//! [`GameState`], and the seeded draw source. The five operations —
//! `select_category`, `start_game`, `select_cell`, `reset_game`,
//! `exit_to_start` — are the only way state changes.

pub mod action;
pub mod error;
pub mod game;
pub mod state;

pub use action::Action;
pub use error::EngineError;
pub use game::Game;
pub use state::{GameState, MoveHistory, Phase, WinEvent, MAX_LIVE_MARKS};
