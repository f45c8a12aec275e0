//! Random, non-overlapping fleet placement by rejection sampling.

use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use crate::board::{Board, CellState};
use crate::common::BoardError;
use crate::config::{BOARD_CELLS, NUM_SHIPS, SHIPS};
use crate::coords::coords;
use crate::placement::can_place;
use crate::ship::{Orientation, Ship};

/// Longest ship the sampler accepts; together with the ship count this
/// keeps sequential sampling from ever painting itself into a corner.
pub const MAX_SHIP_LENGTH: usize = 5;

/// The standard fleet, unplaced, in configuration order.
pub fn standard_fleet() -> Vec<Ship> {
    SHIPS.iter().map(|&def| Ship::new(def)).collect()
}

/// Draw a uniformly random anchor and orientation for `ship`.
pub fn random_candidate<R: Rng + ?Sized>(ship: &Ship, rng: &mut R) -> Ship {
    let anchor = coords(rng.random_range(0..BOARD_CELLS));
    let orientation = if rng.random_bool(0.5) {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    Ship::at(ship.ship_type(), anchor, orientation)
}

/// Sample candidates until one fits on `board`. No attempt cap.
pub fn random_placement<R: Rng + ?Sized>(ship: &Ship, board: &Board, rng: &mut R) -> Ship {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let candidate = random_candidate(ship, rng);
        if can_place(&candidate, board) {
            debug!(
                "placed {} at {:?} {:?} after {} attempts",
                candidate.name(),
                candidate.anchor,
                candidate.orientation,
                attempts
            );
            return Ship {
                placed: true,
                ..candidate
            };
        }
    }
}

/// Place every ship of `ships` at random, in order, each avoiding the ones
/// placed before it. Output order matches input order.
///
/// Fleets larger than `NUM_SHIPS` or with ships outside
/// `1..=MAX_SHIP_LENGTH` are refused with `UnableToPlaceShip`.
pub fn randomize_fleet<R: Rng + ?Sized>(ships: &[Ship], rng: &mut R) -> Result<Vec<Ship>, BoardError> {
    if ships.len() > NUM_SHIPS
        || ships
            .iter()
            .any(|s| s.length() == 0 || s.length() > MAX_SHIP_LENGTH)
    {
        return Err(BoardError::UnableToPlaceShip);
    }

    let mut board = Board::empty();
    let mut placed = Vec::with_capacity(ships.len());
    for ship in ships {
        let ship = random_placement(ship, &board, rng);
        board = board.stamp_ship(&ship, CellState::Ship);
        placed.push(ship);
    }
    Ok(placed)
}
