//! The game engine: owns state, applies operations, detects wins.
//!
//! ## Operation model
//!
//! Every operation runs synchronously to completion in response to one
//! user intent; there is exactly one logical actor at a time, so no
//! locking exists anywhere in the engine.
//!
//! Selection-screen failures (duplicate category, premature start) are
//! rejected with [`EngineError`] and leave state untouched. Board clicks
//! that violate a precondition (decided game, occupied cell, the cell
//! vacated by this turn's eviction) are silently ignored, matching the
//! input policy of a casual UI.

use tracing::{debug, info, instrument, warn};

use super::action::Action;
use super::error::EngineError;
use super::state::{GameState, WinEvent, MAX_LIVE_MARKS};
use crate::board::find_winning_line;
use crate::categories::{CategoryDefinition, CategoryId, CategoryRegistry, Symbol};
use crate::core::{DrawRng, PlayerSlot};

/// The game engine.
///
/// Owns the category registry (fixed at construction), the observable
/// [`GameState`], and the injected draw source. All mutation of the state
/// goes through the operations below.
///
/// ## Example
///
/// ```
/// use emoji_ttt::{Game, PlayerSlot};
///
/// let mut game = Game::with_standard_categories(42);
/// let animals = game.registry().by_name("animals").unwrap().id;
/// let sports = game.registry().by_name("sports").unwrap().id;
///
/// game.select_category(PlayerSlot::One, animals)?;
/// game.select_category(PlayerSlot::Two, sports)?;
/// game.start_game()?;
/// # Ok::<(), emoji_ttt::EngineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    registry: CategoryRegistry,
    state: GameState,
    rng: DrawRng,
    pending_win: Option<WinEvent>,
}

impl Game {
    /// Create an engine over `registry`, drawing symbols from a source
    /// seeded with `seed`.
    #[must_use]
    pub fn new(registry: CategoryRegistry, seed: u64) -> Self {
        Self {
            registry,
            state: GameState::new(),
            rng: DrawRng::new(seed),
            pending_win: None,
        }
    }

    /// Engine over the standard four-category deployment set.
    #[must_use]
    pub fn with_standard_categories(seed: u64) -> Self {
        Self::new(CategoryRegistry::standard(), seed)
    }

    // === Queries ===

    /// The observable game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The category registry this engine was built over.
    #[must_use]
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Whether `category` is unavailable to `player` because the opponent
    /// holds it. The selection screen uses this to disable buttons.
    #[must_use]
    pub fn is_category_taken(&self, player: PlayerSlot, category: CategoryId) -> bool {
        self.state.categories[player.opponent()] == Some(category)
    }

    /// Categories `player` may currently select.
    pub fn available_categories(
        &self,
        player: PlayerSlot,
    ) -> impl Iterator<Item = &CategoryDefinition> {
        let taken = self.state.categories[player.opponent()];
        self.registry.iter().filter(move |c| Some(c.id) != taken)
    }

    /// One-shot win notification for presentation side effects (the win
    /// sound). Returns `Some` exactly once per decided game; reset and
    /// exit discard any unconsumed event.
    pub fn take_win_event(&mut self) -> Option<WinEvent> {
        self.pending_win.take()
    }

    // === Operations ===

    /// Assign a category to a player.
    ///
    /// # Errors
    ///
    /// `UnknownCategory` if the ID is not registered; `CategoryTaken` if
    /// the other player already holds it. State is unchanged on error.
    #[instrument(skip(self))]
    pub fn select_category(
        &mut self,
        player: PlayerSlot,
        category: CategoryId,
    ) -> Result<(), EngineError> {
        if !self.registry.contains(category) {
            return Err(EngineError::UnknownCategory(category));
        }
        if self.state.started {
            // The selection screen is unreachable once play begins;
            // honoring a late switch would change win detection mid-game.
            return Ok(());
        }
        if self.is_category_taken(player, category) {
            warn!(%player, %category, "category already held by the other player");
            return Err(EngineError::CategoryTaken { category });
        }

        self.state.categories[player] = Some(category);
        debug!(%player, %category, "category selected");
        Ok(())
    }

    /// Begin play once both players hold distinct categories.
    ///
    /// Idempotent on failure: repeated calls before selection is complete
    /// keep failing identically.
    ///
    /// # Errors
    ///
    /// `CategoriesNotSelected` if either slot is unassigned or both hold
    /// the same category.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        match (
            self.state.categories[PlayerSlot::One],
            self.state.categories[PlayerSlot::Two],
        ) {
            (Some(one), Some(two)) if one != two => {
                self.state.started = true;
                info!(%one, %two, "game started");
                Ok(())
            }
            _ => Err(EngineError::CategoriesNotSelected),
        }
    }

    /// Place the current player's next mark at `index`.
    ///
    /// Ignored (returns `Ok`, state unchanged) when the game is not
    /// running, the cell is occupied or out of range, or the cell is the
    /// one vacated by this turn's eviction. Otherwise draws a symbol,
    /// evicts the player's oldest mark if they already hold
    /// [`MAX_LIVE_MARKS`], places the mark, and either declares a win or
    /// passes the turn.
    ///
    /// # Errors
    ///
    /// `SymbolPoolExhausted` if the player's category holds no symbol
    /// beyond their live marks. State is unchanged on error.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Result<(), EngineError> {
        if !self.state.started || self.state.winner.is_some() {
            return Ok(());
        }
        if !self.state.board.is_vacant(index) {
            return Ok(());
        }
        if self.state.last_evicted == Some(index) {
            return Ok(());
        }

        let player = self.state.turn;
        // `started` guarantees both slots were assigned from this registry.
        let Some(category_id) = self.state.categories[player] else {
            return Ok(());
        };
        let Some(category) = self.registry.get(category_id) else {
            return Ok(());
        };

        let symbol = {
            // Draw from the symbols not already live for this player. The
            // mark about to be evicted still counts as live here.
            let live: Vec<&Symbol> = self.state.histories[player]
                .iter()
                .filter_map(|&mark| self.state.board.cell(mark))
                .collect();
            let pool: Vec<&Symbol> = category
                .symbols()
                .iter()
                .filter(|s| !live.contains(s))
                .collect();
            let Some(&drawn) = self.rng.choose(&pool) else {
                warn!(%player, %category_id, "draw pool exhausted");
                return Err(EngineError::SymbolPoolExhausted(player));
            };
            drawn.clone()
        };

        if self.state.histories[player].len() == MAX_LIVE_MARKS {
            let oldest = self.state.histories[player].remove(0);
            self.state.board.clear_cell(oldest);
            self.state.last_evicted = Some(oldest);
            debug!(%player, index = oldest, "oldest mark evicted");
        } else {
            self.state.last_evicted = None;
        }

        debug!(%player, index, %symbol, "mark placed");
        self.state.board.place(index, symbol);
        self.state.histories[player].push(index);

        match find_winning_line(&self.state.board, |s| category.contains(s)) {
            Some(line) => {
                self.state.winner = Some(player);
                self.state.winning_line = Some(line);
                self.pending_win = Some(WinEvent { player, line });
                info!(%player, ?line, "win detected");
            }
            None => {
                self.state.turn = player.opponent();
            }
        }
        Ok(())
    }

    /// Rematch: clear the board and round state, keep categories and the
    /// started flag. Player 1 moves first again.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.state.clear_round();
        self.pending_win = None;
        debug!("round reset");
    }

    /// Back to the selection screen: reset the round and discard both
    /// category assignments.
    #[instrument(skip(self))]
    pub fn exit_to_start(&mut self) {
        self.reset_game();
        for player in PlayerSlot::both() {
            self.state.categories[player] = None;
        }
        self.state.started = false;
        debug!("returned to selection");
    }

    /// Apply a user intent.
    ///
    /// # Errors
    ///
    /// Whatever the dispatched operation returns.
    pub fn apply(&mut self, action: Action) -> Result<(), EngineError> {
        match action {
            Action::SelectCategory { player, category } => {
                self.select_category(player, category)
            }
            Action::StartGame => self.start_game(),
            Action::SelectCell { index } => self.select_cell(index),
            Action::ResetGame => {
                self.reset_game();
                Ok(())
            }
            Action::ExitToStart => {
                self.exit_to_start();
                Ok(())
            }
        }
    }
}
