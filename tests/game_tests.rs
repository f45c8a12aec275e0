mod common;

use common::{cells_in, place_standard_fleet, started_game};
use seabattle::{
    BoardError, CellState, FireResult, Game, GameError, GamePhase, Orientation, Side, Snapshot,
    Stats, NUM_SHIPS, TOTAL_SHIP_CELLS,
};

#[test]
fn test_new_game_starts_in_placement() {
    let game = Game::from_seed(1);
    assert_eq!(game.phase(), GamePhase::Placement);
    assert_eq!(game.winner(), None);
    assert_eq!(game.available_ships().len(), NUM_SHIPS);
    assert!(game.placed_ships().is_empty());
    assert!(game.computer_ships().is_empty());
    assert!(game.currently_placing().is_none());
}

#[test]
fn test_select_rotate_and_position() {
    let mut game = Game::from_seed(1);
    assert_eq!(game.rotate_ship(), Err(GameError::NoShipSelected));
    assert_eq!(game.set_candidate(0, 0), Err(GameError::NoShipSelected));
    assert_eq!(game.select_ship("canoe"), Err(GameError::UnknownShip));

    game.select_ship("cruiser").unwrap();
    let ship = game.currently_placing().unwrap();
    assert_eq!(ship.orientation, Orientation::Horizontal);
    assert!(ship.anchor.is_none());

    game.rotate_ship().unwrap();
    assert_eq!(game.currently_placing().unwrap().orientation, Orientation::Vertical);

    assert_eq!(
        game.set_candidate(10, 0),
        Err(GameError::Board(BoardError::InvalidIndex))
    );
    game.set_candidate(2, 3).unwrap();
    assert_eq!(cells_in(&game.player_board(), CellState::Ship), vec![32, 42, 52]);

    game.clear_candidate().unwrap();
    assert_eq!(game.player_board().count(CellState::Ship), 0);
    assert!(game.currently_placing().is_some());
}

#[test]
fn test_placement_preview_and_rejection() {
    let mut game = Game::from_seed(1);
    game.select_ship("carrier").unwrap();
    assert_eq!(game.place_ship(), Err(GameError::NoCandidate));

    game.set_candidate(7, 0).unwrap();
    assert_eq!(cells_in(&game.player_board(), CellState::Forbidden), vec![7, 8, 9]);
    assert_eq!(game.place_ship(), Err(GameError::CannotPlace));
    assert_eq!(game.available_ships().len(), NUM_SHIPS);
    assert!(game.placed_ships().is_empty());

    game.set_candidate(0, 0).unwrap();
    game.place_ship().unwrap();
    assert!(game.currently_placing().is_none());
    assert_eq!(game.available_ships().len(), NUM_SHIPS - 1);
    assert!(game.placed_ships()[0].placed);
    assert_eq!(game.select_ship("carrier"), Err(GameError::ShipAlreadyPlaced));

    game.select_ship("destroyer").unwrap();
    game.set_candidate(3, 0).unwrap();
    assert_eq!(cells_in(&game.player_board(), CellState::Forbidden), vec![3, 4]);
    assert_eq!(game.place_ship(), Err(GameError::CannotPlace));
}

#[test]
fn test_start_requires_full_fleet() {
    let mut game = Game::from_seed(1);
    assert_eq!(game.start_match(), Err(GameError::ShipsRemaining(NUM_SHIPS)));
    assert_eq!(
        game.fire_at(0),
        Err(GameError::WrongPhase {
            expected: GamePhase::PlayerTurn,
            actual: GamePhase::Placement
        })
    );

    place_standard_fleet(&mut game);
    game.start_match().unwrap();
    assert_eq!(game.phase(), GamePhase::PlayerTurn);
    assert_eq!(game.computer_ships().len(), NUM_SHIPS);
    assert!(game.computer_ships().iter().all(|s| s.placed));
    assert_eq!(game.computer_board().count(CellState::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(game.computer_board_view().count(CellState::Ship), 0);

    assert!(game.select_ship("carrier").is_err());
    assert!(game.start_match().is_err());
}

#[test]
fn test_turns_alternate() {
    let mut game = started_game(5);
    game.fire_at(0).unwrap();
    assert_eq!(game.phase(), GamePhase::ComputerTurn);

    // player cannot fire twice in a row
    assert!(matches!(game.fire_at(1), Err(GameError::WrongPhase { .. })));
    assert_eq!(game.hits_by_player().len(), 1);

    game.computer_turn().unwrap();
    assert_eq!(game.phase(), GamePhase::PlayerTurn);
    assert_eq!(game.hits_by_computer().len(), 1);
    assert!(matches!(game.computer_turn(), Err(GameError::WrongPhase { .. })));

    assert_eq!(game.fire_at(0), Err(GameError::Board(BoardError::AlreadyResolved)));
    assert_eq!(game.fire_at(100), Err(GameError::Board(BoardError::InvalidIndex)));
    assert_eq!(game.phase(), GamePhase::PlayerTurn);
}

#[test]
fn test_player_sinks_fleet_and_wins() {
    let mut game = started_game(11);
    let targets = cells_in(&game.computer_board(), CellState::Ship);
    assert_eq!(targets.len(), TOTAL_SHIP_CELLS);

    let mut sinks = 0;
    for (n, &t) in targets.iter().enumerate() {
        let result = game.fire_at(t).unwrap();
        assert!(result.is_hit());
        if matches!(result, FireResult::Sink(_)) {
            sinks += 1;
        }
        if n + 1 < targets.len() {
            assert_eq!(game.phase(), GamePhase::ComputerTurn);
            game.computer_turn().unwrap();
        }
    }

    assert_eq!(sinks, NUM_SHIPS);
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.sunk_count(Side::Computer), NUM_SHIPS);
    assert_eq!(game.computer_board().count(CellState::ShipSunk), TOTAL_SHIP_CELLS);

    let before = Snapshot::from(&game);
    assert!(game.fire_at(cells_in(&game.computer_board(), CellState::Empty)[0]).is_err());
    assert!(game.computer_turn().is_err());
    assert_eq!(Snapshot::from(&game), before);
}

#[test]
fn test_computer_wins_when_player_misses() {
    let mut game = started_game(21);
    let misses = cells_in(&game.computer_board(), CellState::Empty);
    let mut hits = cells_in(&game.computer_board(), CellState::Ship);
    hits.pop();

    for t in misses.into_iter().chain(hits) {
        game.fire_at(t).unwrap();
        game.computer_turn().unwrap();
        if game.is_over() {
            break;
        }
    }

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.winner(), Some(Side::Computer));
    assert_eq!(game.stats(Side::Computer).hits, TOTAL_SHIP_CELLS);
    assert!(game.placed_ships().iter().all(|s| s.sunk));
}

#[test]
fn test_stats_and_accuracy() {
    let mut game = started_game(3);
    assert_eq!(game.stats(Side::Player), Stats::default());

    let ship_cell = cells_in(&game.computer_board(), CellState::Ship)[0];
    let water = cells_in(&game.computer_board(), CellState::Empty);

    game.fire_at(ship_cell).unwrap();
    game.computer_turn().unwrap();
    game.fire_at(water[0]).unwrap();
    game.computer_turn().unwrap();
    game.fire_at(water[1]).unwrap();

    let stats = game.stats(Side::Player);
    assert_eq!(stats.shots, 3);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.accuracy_percent, 33);
}

#[test]
fn test_reset_is_idempotent() {
    let mut game = started_game(9);
    game.fire_at(0).unwrap();
    game.computer_turn().unwrap();

    game.reset();
    let first = Snapshot::from(&game);
    game.reset();
    assert_eq!(Snapshot::from(&game), first);

    assert_eq!(game.phase(), GamePhase::Placement);
    assert_eq!(game.winner(), None);
    assert!(game.placed_ships().is_empty());
    assert!(game.computer_ships().is_empty());
    assert!(game.hits_by_player().is_empty());
    assert!(game.hits_by_computer().is_empty());
    assert_eq!(game.available_ships().len(), NUM_SHIPS);

    // a fresh match can be played after a reset
    place_standard_fleet(&mut game);
    game.start_match().unwrap();
    assert_eq!(game.phase(), GamePhase::PlayerTurn);
}

#[test]
fn test_same_seed_same_match() {
    let mut a = started_game(77);
    let mut b = started_game(77);
    assert_eq!(a.computer_ships(), b.computer_ships());

    for t in [0, 13, 27] {
        a.fire_at(t).unwrap();
        b.fire_at(t).unwrap();
        assert_eq!(a.computer_turn().unwrap(), b.computer_turn().unwrap());
    }
    assert_eq!(a.hits_by_computer(), b.hits_by_computer());
}
