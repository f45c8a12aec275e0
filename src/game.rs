//! Match lifecycle: placement, alternating turns and game over.

use alloc::vec::Vec;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ai;
use crate::board::Board;
use crate::common::{BoardError, FireResult, GameError};
use crate::config::{ship_name_static, BOARD_CELLS, SHIPS, TOTAL_SHIP_CELLS};
use crate::coords::Coord;
use crate::fleet::{randomize_fleet, standard_fleet};
use crate::placement::validate;
use crate::ship::{Ship, ShipType};
use crate::shot::{resolve, successful_hits, Shot};

/// Phase of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum GamePhase {
    #[default]
    Placement,
    PlayerTurn,
    ComputerTurn,
    GameOver,
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum Side {
    Player,
    Computer,
}

/// Shooting statistics for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub shots: usize,
    pub hits: usize,
    /// Rounded hit percentage, 0 before the first shot.
    pub accuracy_percent: u32,
}

impl Stats {
    fn from_shots(shots: &[Shot]) -> Self {
        let hits = successful_hits(shots);
        let accuracy_percent = if shots.is_empty() {
            0
        } else {
            ((hits * 200 + shots.len()) / (shots.len() * 2)) as u32
        };
        Stats {
            shots: shots.len(),
            hits,
            accuracy_percent,
        }
    }
}

/// The game engine. Fleets and shot histories are the only state; boards
/// are rendered from them on demand.
///
/// All randomness comes from `R`, so a seeded generator makes a match fully
/// reproducible.
#[derive(Debug, Clone)]
pub struct Game<R: Rng = SmallRng> {
    phase: GamePhase,
    winner: Option<Side>,
    currently_placing: Option<Ship>,
    available: Vec<ShipType>,
    placed_ships: Vec<Ship>,
    computer_ships: Vec<Ship>,
    hits_by_player: Vec<Shot>,
    hits_by_computer: Vec<Shot>,
    rng: R,
}

#[cfg(feature = "std")]
impl Game<SmallRng> {
    /// New game seeded from the thread-local generator.
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(SmallRng::from_rng(&mut seed_rng))
    }
}

#[cfg(feature = "std")]
impl Default for Game<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Game<SmallRng> {
    /// Reproducible game from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            phase: GamePhase::Placement,
            winner: None,
            currently_placing: None,
            available: SHIPS.to_vec(),
            placed_ships: Vec::new(),
            computer_ships: Vec::new(),
            hits_by_player: Vec::new(),
            hits_by_computer: Vec::new(),
            rng,
        }
    }

    // --- queries ---

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Ship being positioned, if any.
    pub fn currently_placing(&self) -> Option<&Ship> {
        self.currently_placing.as_ref()
    }

    /// Ships the player still has to place.
    pub fn available_ships(&self) -> &[ShipType] {
        &self.available
    }

    /// The player's fleet.
    pub fn placed_ships(&self) -> &[Ship] {
        &self.placed_ships
    }

    /// The computer's fleet. Empty until the match starts.
    pub fn computer_ships(&self) -> &[Ship] {
        &self.computer_ships
    }

    /// Shots fired by the player at the computer's fleet.
    pub fn hits_by_player(&self) -> &[Shot] {
        &self.hits_by_player
    }

    /// Shots fired by the computer at the player's fleet.
    pub fn hits_by_computer(&self) -> &[Shot] {
        &self.hits_by_computer
    }

    /// The player's board, including the placement preview.
    pub fn player_board(&self) -> Board {
        Board::render_with_candidate(
            &self.placed_ships,
            &self.hits_by_computer,
            self.currently_placing.as_ref(),
        )
    }

    /// The computer's board with every ship visible.
    pub fn computer_board(&self) -> Board {
        Board::render(&self.computer_ships, &self.hits_by_player)
    }

    /// The computer's board as the player may see it.
    pub fn computer_board_view(&self) -> Board {
        self.computer_board().concealed()
    }

    pub fn stats(&self, side: Side) -> Stats {
        Stats::from_shots(self.shots_by(side))
    }

    /// Number of sunk ships in `side`'s fleet.
    pub fn sunk_count(&self, side: Side) -> usize {
        self.fleet_of(side).iter().filter(|s| s.sunk).count()
    }

    fn shots_by(&self, side: Side) -> &[Shot] {
        match side {
            Side::Player => &self.hits_by_player,
            Side::Computer => &self.hits_by_computer,
        }
    }

    fn fleet_of(&self, side: Side) -> &[Ship] {
        match side {
            Side::Player => &self.placed_ships,
            Side::Computer => &self.computer_ships,
        }
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    // --- placement ---

    /// Pick a ship to position. It starts horizontal and off the board.
    pub fn select_ship(&mut self, name: &str) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Placement)?;
        let name = ship_name_static(name).ok_or(GameError::UnknownShip)?;
        let def = self
            .available
            .iter()
            .find(|s| s.name() == name)
            .copied()
            .ok_or(GameError::ShipAlreadyPlaced)?;
        self.currently_placing = Some(Ship::new(def));
        Ok(())
    }

    /// Toggle the orientation of the ship being positioned.
    pub fn rotate_ship(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Placement)?;
        let ship = self
            .currently_placing
            .as_mut()
            .ok_or(GameError::NoShipSelected)?;
        ship.orientation = ship.orientation.rotated();
        Ok(())
    }

    /// Move the ship being positioned so its anchor sits at `(x, y)`.
    pub fn set_candidate(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Placement)?;
        let anchor = Coord::new(x, y);
        if !anchor.in_bounds() {
            return Err(BoardError::InvalidIndex.into());
        }
        let ship = self
            .currently_placing
            .as_mut()
            .ok_or(GameError::NoShipSelected)?;
        ship.anchor = Some(anchor);
        Ok(())
    }

    /// Take the ship being positioned off the board without deselecting it.
    pub fn clear_candidate(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Placement)?;
        let ship = self
            .currently_placing
            .as_mut()
            .ok_or(GameError::NoShipSelected)?;
        ship.anchor = None;
        Ok(())
    }

    /// Commit the ship being positioned at its current candidate position.
    pub fn place_ship(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Placement)?;
        let ship = self.currently_placing.ok_or(GameError::NoShipSelected)?;
        if ship.anchor.is_none() {
            return Err(GameError::NoCandidate);
        }
        let board = Board::render(&self.placed_ships, &self.hits_by_computer);
        validate(&ship, &board).map_err(|_| GameError::CannotPlace)?;

        debug!("player placed {} at {:?}", ship.name(), ship.anchor);
        self.placed_ships.push(Ship {
            placed: true,
            ..ship
        });
        self.available.retain(|s| s.name() != ship.name());
        self.currently_placing = None;
        Ok(())
    }

    /// Leave placement: the computer fleet is generated and the player
    /// takes the first shot.
    pub fn start_match(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Placement)?;
        if !self.available.is_empty() {
            return Err(GameError::ShipsRemaining(self.available.len()));
        }
        self.computer_ships = randomize_fleet(&standard_fleet(), &mut self.rng)?;
        self.currently_placing = None;
        self.phase = GamePhase::PlayerTurn;
        info!("match started");
        Ok(())
    }

    // --- turns ---

    /// Player fires at the computer's board. On success the turn passes to
    /// the computer unless the shot ended the match.
    pub fn fire_at(&mut self, index: usize) -> Result<FireResult, GameError> {
        self.expect_phase(GamePhase::PlayerTurn)?;
        if index >= BOARD_CELLS {
            return Err(BoardError::InvalidIndex.into());
        }
        if self.computer_board().get(index).is_some_and(|c| c.is_resolved()) {
            return Err(BoardError::AlreadyResolved.into());
        }

        let (ships, result) = resolve(index, &self.computer_ships, &mut self.hits_by_player)?;
        self.computer_ships = ships;
        debug!("player fired at {}: {:?}", index, result);

        if self.check_game_over().is_none() {
            self.phase = GamePhase::ComputerTurn;
        }
        Ok(result)
    }

    /// Cell the computer would fire at right now, without firing.
    pub fn plan_computer_target(&mut self) -> Result<usize, GameError> {
        self.expect_phase(GamePhase::ComputerTurn)?;
        let board = Board::render(&self.placed_ships, &self.hits_by_computer);
        ai::select_target(&board, &self.hits_by_computer, &mut self.rng).ok_or(GameError::NoTargets)
    }

    /// Run the computer's turn: pick a target, fire, and hand the turn back
    /// to the player unless the match is over.
    pub fn computer_turn(&mut self) -> Result<FireResult, GameError> {
        let target = self.plan_computer_target()?;
        let (ships, result) = resolve(target, &self.placed_ships, &mut self.hits_by_computer)?;
        self.placed_ships = ships;
        debug!("computer fired at {}: {:?}", target, result);

        if self.check_game_over().is_none() {
            self.phase = GamePhase::PlayerTurn;
        }
        Ok(result)
    }

    /// Enter `GameOver` once either side has landed every hit.
    fn check_game_over(&mut self) -> Option<Side> {
        let winner = if successful_hits(&self.hits_by_player) >= TOTAL_SHIP_CELLS {
            Side::Player
        } else if successful_hits(&self.hits_by_computer) >= TOTAL_SHIP_CELLS {
            Side::Computer
        } else {
            return None;
        };
        self.phase = GamePhase::GameOver;
        self.winner = Some(winner);
        info!("game over, winner: {:?}", winner);
        Some(winner)
    }

    /// Back to an empty placement phase. Keeps the random generator.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Placement;
        self.winner = None;
        self.currently_placing = None;
        self.available = SHIPS.to_vec();
        self.placed_ships.clear();
        self.computer_ships.clear();
        self.hits_by_player.clear();
        self.hits_by_computer.clear();
        debug!("game reset");
    }
}
