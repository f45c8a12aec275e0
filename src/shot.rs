//! Shot records and sunk-ship resolution.

use alloc::vec::Vec;

use log::{debug, warn};

use crate::bitboard::{BitBoardError, CellSet};
use crate::board::{Board, CellState};
use crate::common::{BoardError, FireResult};
use crate::coords::{coords, Coord};
use crate::ship::Ship;

/// Outcome recorded for a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum ShotKind {
    Hit,
    Miss,
}

/// One entry of a side's shot history. Histories are append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub position: Coord,
    pub kind: ShotKind,
}

impl Shot {
    pub fn is_hit(&self) -> bool {
        self.kind == ShotKind::Hit
    }
}

/// Record a shot at `index` against the fleet rendered as `board`.
///
/// `Ship` cells record a hit and `Empty` cells a miss. Firing at a cell that
/// was already resolved is a caller bug and is reported as `AlreadyResolved`
/// without touching `shots`.
pub fn fire(index: usize, board: &Board, shots: &mut Vec<Shot>) -> Result<Shot, BoardError> {
    let kind = match board.get(index) {
        None => return Err(BoardError::InvalidIndex),
        Some(CellState::Ship) => ShotKind::Hit,
        Some(CellState::Empty) => ShotKind::Miss,
        Some(_) => return Err(BoardError::AlreadyResolved),
    };
    let shot = Shot {
        position: coords(index),
        kind,
    };
    debug!("shot at {:?}: {:?}", shot.position, kind);
    shots.push(shot);
    Ok(shot)
}

/// Set of all on-board indices present in `shots`, whatever their kind.
/// Off-board positions cannot cover a ship cell and are skipped.
fn shot_indices(shots: &[Shot]) -> Result<CellSet, BitBoardError> {
    CellSet::from_indices(shots.iter().filter_map(|s| s.position.checked_index()))
}

/// New ship list where `sunk` is set iff every footprint cell of a ship
/// appears among `shots`, i.e. `footprint & !fired` is empty. The input is
/// left untouched. A ship whose footprint leaves the board is never sunk.
pub fn recompute_sunk(shots: &[Shot], ships: &[Ship]) -> Vec<Ship> {
    let fired = match shot_indices(shots) {
        Ok(set) => set,
        Err(e) => {
            warn!("ignoring shots while recomputing sunk ships: {}", e);
            CellSet::new()
        }
    };
    ships
        .iter()
        .map(|ship| {
            let sunk = ship
                .mask()
                .map(|mask| !mask.is_empty() && mask.is_subset(&fired))
                .unwrap_or(false);
            Ship { sunk, ..*ship }
        })
        .collect()
}

/// Fire at `index`, then recompute the fleet's sunk flags.
///
/// Returns the updated fleet and a result that names the ship when this shot
/// increased the number of sunk ships.
pub fn resolve(
    index: usize,
    ships: &[Ship],
    shots: &mut Vec<Shot>,
) -> Result<(Vec<Ship>, FireResult), BoardError> {
    let board = Board::render(ships, shots);
    let shot = fire(index, &board, shots)?;
    let updated = recompute_sunk(shots, ships);
    let result = match shot.kind {
        ShotKind::Miss => FireResult::Miss,
        ShotKind::Hit => updated
            .iter()
            .zip(ships)
            .find(|(after, before)| after.sunk && !before.sunk)
            .map(|(after, _)| FireResult::Sink(after.name()))
            .unwrap_or(FireResult::Hit),
    };
    Ok((updated, result))
}

/// Number of `Hit` entries in a history.
pub fn successful_hits(shots: &[Shot]) -> usize {
    shots.iter().filter(|s| s.is_hit()).count()
}
