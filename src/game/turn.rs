//! Move requests, outcomes, and the committed-turn record.

use serde::{Deserialize, Serialize};

use crate::core::tile::Tile;
use crate::moves::Placements;

/// A structured move, already parsed by the front end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRequest {
    /// Put tiles on the board to form words.
    Place { placements: Placements },
    /// Trade tiles from the hand for fresh ones from the bag.
    Swap { tiles: Vec<Tile> },
}

/// Which kind of move a committed turn was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    Place,
    Swap,
}

/// What a committed turn did, for the display layer.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    /// Words formed by a placement, in discovery order. Empty for swaps.
    pub words: Vec<String>,
    /// Points earned, bonus included. Zero for swaps.
    pub points: i32,
    /// Tiles traded by a swap. Zero for placements.
    pub tiles_swapped: usize,
    /// Final standings when this turn ended the game.
    pub standings: Option<FinalStandings>,
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Swap => write!(f, "swapped {} tiles", self.tiles_swapped),
            MoveKind::Place => write!(
                f,
                "played {} for {} points",
                self.words.join(", "),
                self.points
            ),
        }
    }
}

/// One committed turn, appended to the game history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Monotonic turn number, starting at 1.
    pub number: u32,
    /// Name of the acting player.
    pub player: String,
    /// The move as submitted.
    pub request: MoveRequest,
    /// Points the move earned.
    pub points: i32,
}

/// End-of-game result after remaining tiles are deducted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalStandings {
    /// Name of the winning player. Ties go to the earliest roster slot.
    pub winner: String,
    /// Final scores in roster order.
    pub scores: Vec<(String, i32)>,
}
