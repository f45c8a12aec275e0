//! Flat cell-state grid derived from a fleet and its shot history.
//!
//! A `Board` is never the source of truth. It is rebuilt from ships and
//! shots whenever it is needed, and every stamping operation returns a new
//! grid instead of touching the old one.

use core::fmt;
use core::ops::Index;

use crate::common::BoardError;
use crate::config::{BOARD_CELLS, BOARD_SIZE};
use crate::placement::{can_place, overhang};
use crate::ship::Ship;
use crate::shot::{Shot, ShotKind};

/// State of a single rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    ShipSunk,
    Forbidden,
}

impl CellState {
    /// Cells that have not been fired at yet.
    pub fn is_untried(self) -> bool {
        matches!(self, CellState::Empty | CellState::Ship)
    }

    /// Cells that have already been fired at.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss | CellState::ShipSunk)
    }

    fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => 'S',
            CellState::Hit => 'X',
            CellState::Miss => 'o',
            CellState::ShipSunk => '#',
            CellState::Forbidden => '!',
        }
    }
}

/// A 10×10 row-major grid of cell states.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; BOARD_CELLS],
}

impl Board {
    /// All cells empty.
    pub fn empty() -> Self {
        Board {
            cells: [CellState::Empty; BOARD_CELLS],
        }
    }

    /// Render a fleet and the shots fired at it.
    ///
    /// Precedence, lowest to highest: ship body, hit/miss, sunk ship.
    pub fn render(ships: &[Ship], shots: &[Shot]) -> Self {
        let board = ships
            .iter()
            .fold(Board::empty(), |b, ship| b.stamp_ship(ship, CellState::Ship));
        let board = shots.iter().fold(board, |b, shot| b.stamp_shot(shot));
        ships
            .iter()
            .filter(|ship| ship.sunk)
            .fold(board, |b, ship| b.stamp_ship(ship, CellState::ShipSunk))
    }

    /// Render like [`Board::render`] and overlay a candidate placement.
    ///
    /// A legal candidate shows as `Ship`. An illegal one shows as
    /// `Forbidden` over the part of its footprint that stays on the board.
    pub fn render_with_candidate(ships: &[Ship], shots: &[Shot], candidate: Option<&Ship>) -> Self {
        let board = Board::render(ships, shots);
        match candidate {
            Some(ghost) if ghost.anchor.is_some() => {
                if can_place(ghost, &board) {
                    board.stamp_ship(ghost, CellState::Ship)
                } else {
                    let clipped = ghost.truncated(overhang(ghost));
                    board.stamp_ship(&clipped, CellState::Forbidden)
                }
            }
            _ => board,
        }
    }

    /// New board with every footprint cell of `ship` set to `state`.
    /// Cells beyond the last index are ignored.
    pub fn stamp_ship(&self, ship: &Ship, state: CellState) -> Self {
        let mut next = *self;
        for idx in ship.footprint() {
            if let Some(cell) = next.cells.get_mut(idx) {
                *cell = state;
            }
        }
        next
    }

    /// New board with the shot's single cell set to `Hit` or `Miss`.
    pub fn stamp_shot(&self, shot: &Shot) -> Self {
        let mut next = *self;
        let cell = shot.position.checked_index().and_then(|idx| next.cells.get_mut(idx));
        if let Some(cell) = cell {
            *cell = match shot.kind {
                ShotKind::Hit => CellState::Hit,
                ShotKind::Miss => CellState::Miss,
            };
        }
        next
    }

    /// Opponent's view: ship bodies that were never hit read as water.
    pub fn concealed(&self) -> Self {
        let mut next = *self;
        for cell in next.cells.iter_mut() {
            if *cell == CellState::Ship {
                *cell = CellState::Empty;
            }
        }
        next
    }

    /// Rebuild a board from a row-major cell list, e.g. a [`crate::Snapshot`].
    pub fn from_cells(cells: &[CellState]) -> Result<Self, BoardError> {
        let cells = cells.try_into().map_err(|_| BoardError::InvalidIndex)?;
        Ok(Board { cells })
    }

    pub fn get(&self, index: usize) -> Option<CellState> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Indices of all cells not yet fired at.
    pub fn untried(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_untried())
            .map(|(i, _)| i)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Index<usize> for Board {
    type Output = CellState;

    fn index(&self, index: usize) -> &CellState {
        &self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = BOARD_SIZE as usize;
        write!(f, "  ")?;
        for c in 0..size {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.chunks(size).enumerate() {
            write!(f, "{:>2}", r)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "}}")
    }
}
