use proptest::prelude::*;
use seabattle::placement::validate;
use seabattle::{
    can_place, is_free, overhang, within_bounds, Board, BoardError, CellState, Coord, Orientation,
    Ship, ShipType, BOARD_SIZE,
};

fn ship(len: usize, x: usize, y: usize, orientation: Orientation) -> Ship {
    Ship::at(ShipType::new("test", len), Coord::new(x, y), orientation)
}

#[test]
fn test_within_bounds() {
    assert!(within_bounds(&ship(5, 0, 0, Orientation::Vertical)));
    assert!(within_bounds(&ship(5, 0, 0, Orientation::Horizontal)));
    assert!(within_bounds(&ship(4, 6, 0, Orientation::Horizontal)));
    assert!(!within_bounds(&ship(4, 7, 0, Orientation::Horizontal)));
    assert!(within_bounds(&ship(5, 9, 5, Orientation::Vertical)));
    assert!(!within_bounds(&ship(5, 9, 6, Orientation::Vertical)));
    assert!(!within_bounds(&Ship::new(ShipType::new("test", 2))));
}

#[test]
fn test_is_free() {
    let placed = ship(3, 0, 0, Orientation::Horizontal);
    let board = Board::empty().stamp_ship(&placed, CellState::Ship);
    assert!(is_free(&ship(3, 0, 1, Orientation::Horizontal), &board));
    assert!(!is_free(&ship(3, 2, 0, Orientation::Vertical), &board));
    // misses are not free either
    let board = board.stamp_ship(&ship(1, 5, 5, Orientation::Horizontal), CellState::Miss);
    assert!(!is_free(&ship(2, 5, 4, Orientation::Vertical), &board));
}

#[test]
fn test_can_place_and_validate() {
    let board = Board::empty().stamp_ship(&ship(2, 4, 4, Orientation::Horizontal), CellState::Ship);

    let ok = ship(3, 0, 0, Orientation::Horizontal);
    assert!(can_place(&ok, &board));
    assert_eq!(validate(&ok, &board), Ok(()));

    let out = ship(3, 8, 0, Orientation::Horizontal);
    assert!(!can_place(&out, &Board::empty()));
    assert_eq!(validate(&out, &board), Err(BoardError::ShipOutOfBounds));

    let overlap = ship(3, 5, 2, Orientation::Vertical);
    assert!(!can_place(&overlap, &board));
    assert_eq!(validate(&overlap, &board), Err(BoardError::ShipOverlaps));
}

#[test]
fn test_overhang() {
    assert_eq!(overhang(&ship(5, 8, 0, Orientation::Horizontal)), 3);
    assert_eq!(overhang(&ship(5, 5, 0, Orientation::Horizontal)), 0);
    assert_eq!(overhang(&ship(2, 0, 9, Orientation::Vertical)), 1);
    assert_eq!(overhang(&ship(2, 9, 0, Orientation::Vertical)), 0);
    assert_eq!(overhang(&Ship::new(ShipType::new("test", 4))), 0);
}

proptest! {
    #[test]
    fn can_place_matches_geometry(
        x in 0..BOARD_SIZE as usize,
        y in 0..BOARD_SIZE as usize,
        len in 1usize..=5,
        vertical in any::<bool>(),
        blocked in proptest::collection::vec(0usize..100, 0..20),
    ) {
        let orient = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let mut board = Board::empty();
        for idx in &blocked {
            board = board.stamp_ship(&ship(1, idx % 10, idx / 10, Orientation::Horizontal), CellState::Ship);
        }
        let candidate = ship(len, x, y, orient);

        let cells: Vec<(usize, usize)> = (0..len)
            .map(|i| if vertical { (x, y + i) } else { (x + i, y) })
            .collect();
        let inside = cells.iter().all(|&(cx, cy)| cx < 10 && cy < 10);
        let clear = inside && cells.iter().all(|&(cx, cy)| !blocked.contains(&(cy * 10 + cx)));

        prop_assert_eq!(within_bounds(&candidate), inside);
        prop_assert_eq!(can_place(&candidate, &board), inside && clear);
        prop_assert_eq!(overhang(&candidate) == 0, inside);
    }
}
