#![allow(dead_code)]

use rand::Rng;
use seabattle::{Board, CellState, Game, Orientation};

/// Player fleet used by most tests: every ship horizontal on an even row.
pub const LAYOUT: [(&str, usize, usize, Orientation); 5] = [
    ("carrier", 0, 0, Orientation::Horizontal),
    ("battleship", 0, 2, Orientation::Horizontal),
    ("cruiser", 0, 4, Orientation::Horizontal),
    ("submarine", 0, 6, Orientation::Horizontal),
    ("destroyer", 0, 8, Orientation::Horizontal),
];

pub fn place_standard_fleet<R: Rng>(game: &mut Game<R>) {
    for (name, x, y, orientation) in LAYOUT {
        game.select_ship(name).unwrap();
        if orientation == Orientation::Vertical {
            game.rotate_ship().unwrap();
        }
        game.set_candidate(x, y).unwrap();
        game.place_ship().unwrap();
    }
}

/// Game in `PlayerTurn` with the standard layout placed.
pub fn started_game(seed: u64) -> Game {
    let mut game = Game::from_seed(seed);
    place_standard_fleet(&mut game);
    game.start_match().unwrap();
    game
}

pub fn cells_in(board: &Board, state: CellState) -> Vec<usize> {
    (0..board.cells().len())
        .filter(|&i| board[i] == state)
        .collect()
}
