//! Engine validation errors.

use thiserror::Error;

use crate::categories::CategoryId;
use crate::core::PlayerSlot;

/// A rejected operation. State is unchanged whenever one of these is
/// returned.
///
/// Only the selection screen produces user-facing failures; board clicks
/// that violate a precondition are silently ignored instead and never
/// reach this type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The category ID is not present in the registry.
    #[error("{0} is not a registered category")]
    UnknownCategory(CategoryId),

    /// The other player already holds this category.
    #[error("{category} is already selected by the other player")]
    CategoryTaken {
        /// The contested category.
        category: CategoryId,
    },

    /// `start_game` was called before both players held distinct
    /// categories.
    #[error("both players must select different emoji categories")]
    CategoriesNotSelected,

    /// The drawing pool for a player is empty: the category holds no
    /// symbol beyond the ones already live on the board. Unreachable with
    /// the standard six-symbol categories; indicates a category smaller
    /// than the live-mark cap.
    #[error("{0} has no symbol available to draw")]
    SymbolPoolExhausted(PlayerSlot),
}
