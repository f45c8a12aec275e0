use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const BOARD_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("carrier", 5),
    ShipType::new("battleship", 4),
    ShipType::new("cruiser", 3),
    ShipType::new("submarine", 3),
    ShipType::new("destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
/// Reaching this many hits against one side ends the match.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Delay before the computer's shot lands, in milliseconds.
pub const COMPUTER_DELAY_MS: u64 = 300;

/// Convert a ship name string to the canonical static name used in the
/// configuration. Returns `None` if the name does not match any defined ship.
pub fn ship_name_static(name: &str) -> Option<&'static str> {
    for def in SHIPS.iter() {
        if def.name() == name {
            return Some(def.name());
        }
    }
    None
}
