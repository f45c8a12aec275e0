//! Bounds and overlap checks for ship placement.

use crate::board::{Board, CellState};
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Ship};

const SIZE: usize = BOARD_SIZE as usize;

/// Coordinate along the ship's axis, or `None` when unanchored.
fn axis_start(ship: &Ship) -> Option<usize> {
    ship.anchor.map(|a| match ship.orientation {
        Orientation::Horizontal => a.x,
        Orientation::Vertical => a.y,
    })
}

/// `true` iff the whole footprint stays inside the grid.
/// An unanchored ship is never within bounds.
pub fn within_bounds(ship: &Ship) -> bool {
    match (ship.anchor, axis_start(ship)) {
        (Some(anchor), Some(start)) => anchor.in_bounds() && start + ship.length() <= SIZE,
        _ => false,
    }
}

/// `true` iff every footprint cell is currently `Empty` on `board`.
pub fn is_free(ship: &Ship, board: &Board) -> bool {
    ship.footprint()
        .all(|idx| board.get(idx) == Some(CellState::Empty))
}

/// `within_bounds && is_free`.
pub fn can_place(ship: &Ship, board: &Board) -> bool {
    within_bounds(ship) && is_free(ship, board)
}

/// Like [`can_place`] but reports why a placement is rejected.
pub fn validate(ship: &Ship, board: &Board) -> Result<(), BoardError> {
    if !within_bounds(ship) {
        return Err(BoardError::ShipOutOfBounds);
    }
    if !is_free(ship, board) {
        return Err(BoardError::ShipOverlaps);
    }
    Ok(())
}

/// Number of footprint cells past the board edge along the ship's axis.
/// Only sizes the forbidden preview; rejection goes through [`can_place`].
pub fn overhang(ship: &Ship) -> usize {
    axis_start(ship)
        .map(|start| start.saturating_add(ship.length()).saturating_sub(SIZE))
        .unwrap_or(0)
}
