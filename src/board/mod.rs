//! The 3x3 board and its win-line table.
//!
//! ## Key Types
//!
//! - `Board`: nine cells, each empty or holding one placed `Symbol`
//! - `WIN_LINES`: the eight index triples that decide a game
//!
//! Wins are membership wins: a line counts for the mover only when all
//! three of its symbols belong to the mover's category.

pub mod grid;
pub mod lines;

pub use grid::{Board, CELL_COUNT};
pub use lines::{find_winning_line, WIN_LINES};
