//! Commonly used types for ease of import.

pub use crate::{Board, CellState, Coord, FireResult, Game, GameError, GamePhase, Orientation, Ship, Side};

#[cfg(feature = "std")]
pub use crate::{init_logging, Session, Snapshot};
