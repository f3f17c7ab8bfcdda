//! User intents as data.

use serde::{Deserialize, Serialize};

use crate::categories::CategoryId;
use crate::core::PlayerSlot;

/// One user intent, as data.
///
/// The presentation layer may call the [`Game`](super::Game) methods
/// directly, or route intents through [`Game::apply`](super::Game::apply)
/// to queue, log, or replay them.
///
/// ## Example
///
/// ```
/// use emoji_ttt::{Action, Game, PlayerSlot};
///
/// let mut game = Game::with_standard_categories(42);
/// let animals = game.registry().by_name("animals").unwrap().id;
/// let food = game.registry().by_name("food").unwrap().id;
///
/// let intents = [
///     Action::SelectCategory { player: PlayerSlot::One, category: animals },
///     Action::SelectCategory { player: PlayerSlot::Two, category: food },
///     Action::StartGame,
///     Action::SelectCell { index: 4 },
/// ];
/// for intent in intents {
///     game.apply(intent)?;
/// }
/// assert!(game.state().board.cell(4).is_some());
/// # Ok::<(), emoji_ttt::EngineError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Assign a category to a player on the selection screen.
    SelectCategory {
        /// The selecting player.
        player: PlayerSlot,
        /// The chosen category.
        category: CategoryId,
    },
    /// Begin play.
    StartGame,
    /// Click a board cell.
    SelectCell {
        /// Cell index, 0-8 row-major.
        index: usize,
    },
    /// Rematch with the same categories.
    ResetGame,
    /// Back to the selection screen.
    ExitToStart,
}
