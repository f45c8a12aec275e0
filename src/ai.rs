// Hunt-and-target strategy for the computer opponent.
//
// Target mode probes the untried neighbours of every hit whose ship is still
// afloat. Hunt mode, used whenever target mode has nothing to offer, picks
// uniformly among all untried cells.

use alloc::vec::Vec;

use log::warn;
use rand::Rng;

use crate::bitboard::CellSet;
use crate::board::{Board, CellState};
use crate::coords::neighbors;
use crate::shot::Shot;

/// Hits whose cell still renders as `Hit`, i.e. whose ship is not sunk.
pub fn hot_hits<'a>(board: &'a Board, shots: &'a [Shot]) -> impl Iterator<Item = usize> + 'a {
    shots
        .iter()
        .filter(|s| s.is_hit())
        .filter_map(|s| s.position.checked_index())
        .filter(move |&idx| board.get(idx) == Some(CellState::Hit))
}

/// Untried neighbours of all hot hits, ascending and without duplicates.
pub fn target_candidates(board: &Board, shots: &[Shot]) -> Vec<usize> {
    let untried = hot_hits(board, shots)
        .flat_map(neighbors)
        .filter(|&n| board.get(n).is_some_and(CellState::is_untried));
    match CellSet::from_indices(untried) {
        Ok(set) => set.iter().collect(),
        Err(e) => {
            warn!("dropping hunt targets: {}", e);
            Vec::new()
        }
    }
}

/// Cells the computer will choose from this turn: target candidates when
/// there are any, otherwise every untried cell.
pub fn candidate_targets(board: &Board, shots: &[Shot]) -> Vec<usize> {
    let targets = target_candidates(board, shots);
    if targets.is_empty() {
        board.untried().collect()
    } else {
        targets
    }
}

/// Pick the next cell to fire at, or `None` when nothing is left untried.
pub fn select_target<R: Rng + ?Sized>(board: &Board, shots: &[Shot], rng: &mut R) -> Option<usize> {
    let candidates = candidate_targets(board, shots);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
