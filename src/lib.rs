//! # emoji-ttt
//!
//! Game engine for a two-player tic-tac-toe variant where each player's
//! marks are emoji drawn from a chosen category, and each player holds at
//! most three live marks: placing a fourth evicts that player's oldest
//! mark, so the board keeps "fading" under both players.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: the engine owns a plain [`GameState`] value
//!    and mutates it only through its operations. No ambient globals, no
//!    I/O, no timers.
//!
//! 2. **Deterministic randomness**: symbol draws come from a seeded source
//!    injected at construction, so the same seed and click sequence always
//!    replay the same game.
//!
//! 3. **UI-shaped input policy**: validation failures on the selection
//!    screen are rejected with an error; out-of-precondition board clicks
//!    (a decided game, an occupied cell, the just-vacated cell) are
//!    silently ignored, matching how a casual UI treats stray input.
//!
//! ## Modules
//!
//! - `core`: player slots, per-player storage, draw RNG
//! - `categories`: emoji categories and the deployment registry
//! - `board`: the 3x3 grid and the win-line table
//! - `engine`: game state, operations, errors, intents
//!
//! ## Example
//!
//! ```
//! use emoji_ttt::{Game, PlayerSlot};
//!
//! let mut game = Game::with_standard_categories(7);
//!
//! let animals = game.registry().by_name("animals").unwrap().id;
//! let food = game.registry().by_name("food").unwrap().id;
//!
//! game.select_category(PlayerSlot::One, animals)?;
//! game.select_category(PlayerSlot::Two, food)?;
//! game.start_game()?;
//!
//! game.select_cell(4)?;
//! assert!(game.state().board.cell(4).is_some());
//! assert_eq!(game.state().turn, PlayerSlot::Two);
//! # Ok::<(), emoji_ttt::EngineError>(())
//! ```

pub mod core;
pub mod categories;
pub mod board;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{DrawRng, DrawRngState, PlayerPair, PlayerSlot};

pub use crate::categories::{CategoryDefinition, CategoryId, CategoryRegistry, Symbol};

pub use crate::board::{find_winning_line, Board, CELL_COUNT, WIN_LINES};

pub use crate::engine::{
    Action, EngineError, Game, GameState, MoveHistory, Phase, WinEvent, MAX_LIVE_MARKS,
};
