//! Win-line table for the 3x3 grid.

use super::grid::Board;
use crate::categories::Symbol;

/// The eight index triples forming straight lines on the board: rows,
/// columns, then diagonals.
///
/// Scanned in this order; the first satisfied line is the one reported.
/// At most one line can newly complete per move under the three-mark cap,
/// so the order only matters for reproducibility.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First line whose three cells are all occupied by symbols satisfying
/// `belongs`.
///
/// The engine passes membership in the mover's category; a line of
/// opponent symbols never satisfies it for the mover.
#[must_use]
pub fn find_winning_line<F>(board: &Board, belongs: F) -> Option<[usize; 3]>
where
    F: Fn(&Symbol) -> bool,
{
    WIN_LINES
        .into_iter()
        .find(|line| line.iter().all(|&index| board.cell(index).is_some_and(&belongs)))
}
