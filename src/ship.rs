//! Ship definitions and their footprints on the board.

use crate::bitboard::{BitBoardError, CellSet};
use crate::config::BOARD_SIZE;
use crate::coords::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Index distance between consecutive footprint cells.
    pub fn step(self) -> usize {
        match self {
            Orientation::Horizontal => 1,
            Orientation::Vertical => BOARD_SIZE as usize,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship of the fleet, placed or not.
///
/// The anchor is the lowest-index cell of the footprint. An unplaced ship
/// may still carry an anchor while it is being positioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    pub ship_type: ShipType,
    pub orientation: Orientation,
    pub anchor: Option<Coord>,
    pub placed: bool,
    pub sunk: bool,
}

impl Ship {
    /// Fresh, unplaced, horizontal ship without a position.
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            orientation: Orientation::Horizontal,
            anchor: None,
            placed: false,
            sunk: false,
        }
    }

    /// Ship anchored at `anchor` with `orientation`, not yet committed.
    pub fn at(ship_type: ShipType, anchor: Coord, orientation: Orientation) -> Self {
        Self {
            anchor: Some(anchor),
            orientation,
            ..Self::new(ship_type)
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Footprint indices: `anchor, anchor + step, ...` for `length` cells.
    ///
    /// Empty when the ship has no anchor or the anchor is off the board.
    /// Cells past the board edge are still produced (they wrap into the next
    /// row or exceed 99), so bounds must be checked separately.
    pub fn footprint(&self) -> impl Iterator<Item = usize> {
        let step = self.orientation.step();
        let len = self.length();
        self.anchor
            .and_then(Coord::checked_index)
            .into_iter()
            .flat_map(move |start| (0..len).map(move |i| start + i * step))
    }

    /// Footprint as a cell set. Fails when any cell lies past index 99.
    pub fn mask(&self) -> Result<CellSet, BitBoardError> {
        CellSet::from_indices(self.footprint())
    }

    /// Same ship with `length` shortened by `by` cells, used to clip
    /// placement previews at the board edge.
    pub(crate) fn truncated(&self, by: usize) -> Self {
        let mut ship = *self;
        ship.ship_type = ShipType::new(self.name(), self.length().saturating_sub(by));
        ship
    }
}
