//! Owned snapshot of everything a UI needs to draw one frame.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::Rng;

use crate::board::CellState;
use crate::coords::Coord;
use crate::game::{Game, GamePhase, Side, Stats};
use crate::ship::{Orientation, Ship, ShipType};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipView {
    pub name: String,
    pub length: usize,
    pub orientation: Orientation,
    pub anchor: Option<Coord>,
    pub placed: bool,
    pub sunk: bool,
}

impl From<&Ship> for ShipView {
    fn from(ship: &Ship) -> Self {
        ShipView {
            name: ship.name().to_string(),
            length: ship.length(),
            orientation: ship.orientation,
            anchor: ship.anchor,
            placed: ship.placed,
            sunk: ship.sunk,
        }
    }
}

impl From<&ShipType> for ShipView {
    fn from(def: &ShipType) -> Self {
        ShipView::from(&Ship::new(*def))
    }
}

impl ShipView {
    /// Enemy ship as the player may know it: position only once sunk.
    fn hidden(ship: &Ship) -> Self {
        let mut view = ShipView::from(ship);
        if !ship.sunk {
            view.anchor = None;
            view.orientation = Orientation::default();
        }
        view
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub phase: GamePhase,
    pub winner: Option<Side>,
    /// Player's own board, placement preview included.
    pub player_board: Vec<CellState>,
    /// Computer's board with unhit ships concealed.
    pub computer_board: Vec<CellState>,
    pub player_fleet: Vec<ShipView>,
    pub computer_fleet: Vec<ShipView>,
    pub available_ships: Vec<ShipView>,
    pub currently_placing: Option<ShipView>,
    pub player_stats: Stats,
    pub computer_stats: Stats,
}

impl<R: Rng> From<&Game<R>> for Snapshot {
    fn from(game: &Game<R>) -> Self {
        Snapshot {
            phase: game.phase(),
            winner: game.winner(),
            player_board: game.player_board().cells().to_vec(),
            computer_board: game.computer_board_view().cells().to_vec(),
            player_fleet: game.placed_ships().iter().map(ShipView::from).collect(),
            computer_fleet: game.computer_ships().iter().map(ShipView::hidden).collect(),
            available_ships: game.available_ships().iter().map(ShipView::from).collect(),
            currently_placing: game.currently_placing().map(ShipView::from),
            player_stats: game.stats(Side::Player),
            computer_stats: game.stats(Side::Computer),
        }
    }
}
