//! Common types for the engine: errors and fire results.

use crate::game::GamePhase;

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// Shot landed on a ship segment that is still afloat.
    Hit,
    /// Shot landed on open water.
    Miss,
    /// Shot sank a ship, carrying its name.
    Sink(&'static str),
}

impl FireResult {
    /// `true` for both `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, FireResult::Miss)
    }
}

/// Errors returned by board-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Specified index is out of range.
    InvalidIndex,
    /// Cell was already fired at (hit, miss or sunk).
    AlreadyResolved,
    /// Ship footprint leaves the board.
    ShipOutOfBounds,
    /// Ship footprint overlaps another ship.
    ShipOverlaps,
    /// Fleet can never fit on the board.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::AlreadyResolved => write!(f, "Cell was already fired at"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Rejection of a game command. The game state is left untouched whenever
/// one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Command is not valid in the current phase.
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    /// Named ship is not part of the fleet.
    UnknownShip,
    /// Ship has already been committed to the board.
    ShipAlreadyPlaced,
    /// No ship is currently selected for placement.
    NoShipSelected,
    /// Selected ship has no candidate position yet.
    NoCandidate,
    /// Candidate position is out of bounds or overlapping.
    CannotPlace,
    /// Match cannot start while ships remain unplaced.
    ShipsRemaining(usize),
    /// Every cell has already been fired at.
    NoTargets,
    /// Underlying board error.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Expected phase {:?}, game is in {:?}", expected, actual)
            }
            GameError::UnknownShip => write!(f, "Ship name not found in fleet"),
            GameError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            GameError::NoShipSelected => write!(f, "No ship selected for placement"),
            GameError::NoCandidate => write!(f, "Selected ship has no position"),
            GameError::CannotPlace => write!(f, "Ship cannot be placed there"),
            GameError::ShipsRemaining(n) => write!(f, "{} ships still need placing", n),
            GameError::NoTargets => write!(f, "No untried cells left"),
            GameError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
