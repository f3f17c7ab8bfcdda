//! Player identification and per-player data storage.
//!
//! ## PlayerSlot
//!
//! Exactly two players exist; `PlayerSlot` names them. Player 1 always
//! moves first in a fresh or reset game.
//!
//! ## PlayerPair
//!
//! Per-player data storage backed by a fixed two-element array, indexable
//! by `PlayerSlot`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two player slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// Player 1 (moves first).
    One,
    /// Player 2.
    Two,
}

impl PlayerSlot {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Raw index (0 or 1) for array-backed storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// Both slots, in turn order.
    pub fn both() -> impl Iterator<Item = PlayerSlot> {
        [PlayerSlot::One, PlayerSlot::Two].into_iter()
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSlot::One => write!(f, "Player 1"),
            PlayerSlot::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use emoji_ttt::core::{PlayerPair, PlayerSlot};
///
/// let mut marks: PlayerPair<u32> = PlayerPair::with_value(0);
///
/// marks[PlayerSlot::Two] = 3;
/// assert_eq!(marks[PlayerSlot::One], 0);
/// assert_eq!(marks[PlayerSlot::Two], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerSlot) -> T) -> Self {
        Self {
            data: [factory(PlayerSlot::One), factory(PlayerSlot::Two)],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a pair with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerSlot) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerSlot) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerSlot, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerSlot, &T)> {
        PlayerSlot::both().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerPair<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerSlot> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerSlot) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerSlot> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerSlot) -> &mut Self::Output {
        self.get_mut(player)
    }
}
