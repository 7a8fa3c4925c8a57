//! Error taxonomy for move handling.
//!
//! Every variant of `MoveError` is recoverable: the engine guarantees the
//! game state is unchanged, so the caller can correct the input and retry.
//! `GameError` wraps a move failure or a persistence failure for the
//! save-before-commit path.

use crate::core::coord::Coordinate;
use crate::core::tile::Tile;
use crate::snapshot::SnapshotError;

/// A rejected move. State is guaranteed untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A placement coordinate is off the board.
    #[error("space {0} is off the board; rows and columns run 0 to {max}", max = crate::board::SIZE - 1)]
    InvalidSpace(Coordinate),

    /// The target square already holds a tile.
    #[error("could not place tile: space {0} is already occupied")]
    SpaceOccupied(Coordinate),

    /// Placements do not lie on a single row or column.
    #[error("word placement invalid, tiles must lie on a single row or column")]
    InvalidPlacement,

    /// Two placements target the same square.
    #[error("space {0} is targeted by more than one tile")]
    RepeatedPlacement(Coordinate),

    /// The span between the outermost placements has a gap.
    #[error("word placement invalid, gap between letters found")]
    WordDisconnected,

    /// The opening move does not cover the center square.
    #[error("the opening move must cover the center square")]
    InvalidStart,

    /// A requested tile is not in the acting player's hand.
    #[error("tile {0} requested for action but not held")]
    TileNotInHand(Tile),

    /// The bag holds fewer tiles than the swap asks for.
    #[error("cannot swap {requested} tiles, only {remaining} left in the bag")]
    NotEnoughTilesForSwap { requested: usize, remaining: usize },

    /// The placement forms no words at all.
    #[error("no valid words found in the tile placements")]
    NoValidWordsFound,

    /// Some formed words are not in the dictionary. Nothing commits.
    #[error("invalid words: {}", .0.join(", "))]
    InvalidWords(Vec<String>),

    /// The game has already finished.
    #[error("the game is already finished")]
    GameFinished,
}

/// Failure of a persisted turn: either the move itself, or the snapshot
/// write that gates the commit.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),

    /// The turn was not committed; in-memory state stays at the pre-move
    /// position so memory and store cannot diverge.
    #[error("failed to persist the turn: {0}")]
    Snapshot(#[from] SnapshotError),
}
