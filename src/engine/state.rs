//! Observable game state.
//!
//! `GameState` is plain serializable data owned by [`Game`](super::Game).
//! The presentation layer reads it back after every operation: board
//! contents, turn, winner and winning line, and the transient just-evicted
//! index it uses for animation cueing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::categories::CategoryId;
use crate::core::{PlayerPair, PlayerSlot};

/// Maximum number of live marks a player may hold. Placing one more
/// evicts that player's oldest mark.
pub const MAX_LIVE_MARKS: usize = 3;

/// Board indices currently occupied by one player's live marks, oldest
/// first. Inline capacity matches the cap, so histories never allocate.
pub type MoveHistory = SmallVec<[usize; MAX_LIVE_MARKS]>;

/// Coarse game phase, derived from `started` and `winner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Players are choosing categories; the board is not playable.
    Selection,
    /// The game is running.
    InProgress,
    /// A winner has been declared; only reset or exit proceed.
    Finished,
}

/// One-shot notification that a win was just detected.
///
/// Consumed at most once per decided game via
/// [`Game::take_win_event`](super::Game::take_win_event); the sound cue
/// hangs off this, not off polling `winner`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinEvent {
    /// The player who just won.
    pub player: PlayerSlot,
    /// The completed line.
    pub line: [usize; 3],
}

/// Complete observable game state.
///
/// Mutated exclusively through the engine's operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub board: Board,

    /// Category assigned to each player, if selected.
    pub categories: PlayerPair<Option<CategoryId>>,

    /// Live-mark indices per player, oldest first.
    pub histories: PlayerPair<MoveHistory>,

    /// Whose move is next. Frozen on the winner's turn once the game is
    /// decided.
    pub turn: PlayerSlot,

    /// Board index vacated by the most recent eviction. Unplaceable until
    /// the next successful placement clears or replaces it.
    pub last_evicted: Option<usize>,

    /// The winner, once declared.
    pub winner: Option<PlayerSlot>,

    /// The completed line, once a winner exists.
    pub winning_line: Option<[usize; 3]>,

    /// Whether category selection is complete and play may proceed.
    pub started: bool,
}

impl GameState {
    /// Creates the empty, not-started state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            categories: PlayerPair::with_default(),
            histories: PlayerPair::with_default(),
            turn: PlayerSlot::One,
            last_evicted: None,
            winner: None,
            winning_line: None,
            started: false,
        }
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.started {
            Phase::Selection
        } else if self.winner.is_some() {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    /// Marks currently live for `player`, oldest first.
    #[must_use]
    pub fn live_marks(&self, player: PlayerSlot) -> &[usize] {
        &self.histories[player]
    }

    /// Clears everything a rematch resets: board, histories, winner and
    /// line, the evicted marker, and the turn. Categories and `started`
    /// survive.
    pub(crate) fn clear_round(&mut self) {
        self.board.clear();
        for player in PlayerSlot::both() {
            self.histories[player].clear();
        }
        self.turn = PlayerSlot::One;
        self.last_evicted = None;
        self.winner = None;
        self.winning_line = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
