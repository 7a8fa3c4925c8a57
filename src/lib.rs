//! # wordfield
//!
//! Rules engine for a word-placement board game: a fixed 15x15 grid with
//! premium squares, a shared bag of 100 lettered tiles, per-player racks,
//! and a turn engine that validates and scores submitted moves.
//!
//! ## Design Principles
//!
//! 1. **All-or-nothing turns**: a move either commits fully or leaves the
//!    game untouched. The engine mutates a working clone of the state and
//!    swaps it in wholesale on success; there is no incremental undo.
//!
//! 2. **Collaborators at the seams**: dictionary lookup (`Lexicon`) and
//!    persistence (`SnapshotStore`) are traits. The engine itself performs
//!    no I/O.
//!
//! 3. **Deterministic by seed**: all randomness flows through `GameRng`.
//!    A seed reproduces a whole game, and a snapshot captures the RNG
//!    position so restored games reproduce future draws.
//!
//! ## Modules
//!
//! - `core`: coordinates, tiles, the tile bag, players, RNG
//! - `board`: the 15x15 grid, squares, premium layout, rendering
//! - `words`: word discovery along an axis, premium-aware scoring
//! - `moves`: geometric validation of requested placements
//! - `game`: game state and the turn engine
//! - `dict`: dictionary contract and word-list implementation
//! - `snapshot`: serializable game state and the store contract
//! - `input`: text command parsing for interactive front ends

pub mod board;
pub mod core;
pub mod dict;
pub mod error;
pub mod game;
pub mod input;
pub mod moves;
pub mod snapshot;
pub mod words;

// Re-export commonly used types
pub use crate::core::coord::{Coordinate, Direction};
pub use crate::core::player::{Player, Roster, HAND_CAPACITY};
pub use crate::core::rng::{GameRng, GameRngState};
pub use crate::core::tile::{Tile, TileBag, TILE_COUNT};

pub use crate::board::{Board, Premium, Square, CENTER, SIZE};

pub use crate::words::{locate, Word};

pub use crate::moves::{validate, PlacementLine, Placements, TilePlacement};

pub use crate::error::{GameError, MoveError};

pub use crate::game::{
    FinalStandings, Game, GameBuilder, MoveKind, MoveOutcome, MoveRequest, TurnRecord, BINGO_BONUS,
};

pub use crate::dict::{DictError, Lexicon, WordList};

pub use crate::snapshot::{FileStore, GameSnapshot, SnapshotError, SnapshotStore};

pub use crate::input::{parse_command, ParseError};
