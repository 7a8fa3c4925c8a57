//! Core building blocks: coordinates, tiles, the bag, players, RNG.
//!
//! This module contains the value types the rest of the engine is built on.
//! Nothing in here performs I/O or knows about the turn protocol.

pub mod coord;
pub mod player;
pub mod rng;
pub mod tile;

pub use coord::{Coordinate, Direction};
pub use player::{Player, Roster, HAND_CAPACITY};
pub use rng::{GameRng, GameRngState};
pub use tile::{Tile, TileBag, TILE_COUNT};
