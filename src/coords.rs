//! Mapping between linear cell indices and `(x, y)` board coordinates.
//!
//! Indices are row-major: `index = y * BOARD_SIZE + x`. Neither direction
//! checks ranges; callers validate before converting.

use crate::config::BOARD_SIZE;

const SIZE: usize = BOARD_SIZE as usize;

/// A board coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Linear index of this coordinate. Only meaningful when
    /// [`Coord::in_bounds`] holds; see [`Coord::checked_index`].
    pub const fn index(self) -> usize {
        index(self.x, self.y)
    }

    /// Linear index, or `None` when the coordinate lies off the board.
    pub const fn checked_index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(index(self.x, self.y))
        } else {
            None
        }
    }

    /// Coordinate for a linear index.
    pub const fn from_index(idx: usize) -> Self {
        coords(idx)
    }

    /// `true` when both axes lie on the board.
    pub const fn in_bounds(self) -> bool {
        self.x < SIZE && self.y < SIZE
    }

    /// Orthogonal neighbours (left, right, up, down) clipped at the board edge.
    /// An off-board coordinate has no neighbours.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        const DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let origin_ok = self.in_bounds();
        DIRS.into_iter().filter_map(move |(dx, dy)| {
            if !origin_ok {
                return None;
            }
            let x = self.x.checked_add_signed(dx)?;
            let y = self.y.checked_add_signed(dy)?;
            let c = Coord::new(x, y);
            c.in_bounds().then_some(c)
        })
    }
}

/// `y * 10 + x`. Saturates instead of overflowing for off-board input.
#[inline]
pub const fn index(x: usize, y: usize) -> usize {
    y.saturating_mul(SIZE).saturating_add(x)
}

/// `(index mod 10, index div 10)`.
#[inline]
pub const fn coords(idx: usize) -> Coord {
    Coord {
        x: idx % SIZE,
        y: idx / SIZE,
    }
}

/// Neighbour indices of `idx`, see [`Coord::neighbors`].
pub fn neighbors(idx: usize) -> impl Iterator<Item = usize> {
    coords(idx).neighbors().map(Coord::index)
}
