//! Core engine primitives: players and randomness.
//!
//! These are the building blocks with no game rules of their own. The
//! rules live in [`crate::engine`].

pub mod player;
pub mod rng;

pub use player::{PlayerPair, PlayerSlot};
pub use rng::{DrawRng, DrawRngState};
