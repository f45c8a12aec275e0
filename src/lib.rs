#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod coords;
pub mod domain;
pub mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod prelude;
#[cfg(feature = "std")]
mod session;
mod ship;
pub mod shot;

pub use bitboard::{BitBoard, BitBoardError, CellSet};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coords::*;
pub use domain::{ShipView, Snapshot};
pub use fleet::{randomize_fleet, standard_fleet};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::{can_place, is_free, overhang, within_bounds};
#[cfg(feature = "std")]
pub use session::Session;
pub use ship::*;
pub use shot::{fire, recompute_sunk, resolve, successful_hits, Shot, ShotKind};
