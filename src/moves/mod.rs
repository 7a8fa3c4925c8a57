//! Geometric validation of requested tile placements.
//!
//! The validator writes placements onto a *scratch* board as it checks
//! them, so later rules (the gap check) and word discovery both see the
//! hypothetical final position. Callers own the scratch copy: discard it
//! when validation fails, swap it in when the whole move commits.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, CENTER};
use crate::core::coord::{Coordinate, Direction};
use crate::core::player::HAND_CAPACITY;
use crate::core::tile::Tile;
use crate::error::MoveError;

/// A request to put one tile on one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub coordinate: Coordinate,
    pub tile: Tile,
}

impl TilePlacement {
    #[must_use]
    pub const fn new(coordinate: Coordinate, tile: Tile) -> Self {
        Self { coordinate, tile }
    }
}

/// Placement list for one move. A move never exceeds the hand capacity, so
/// the list lives on the stack.
pub type Placements = SmallVec<[TilePlacement; HAND_CAPACITY]>;

/// The resolved line of a validated move: its direction and the minimum
/// end of the placement span, where word discovery starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementLine {
    pub direction: Direction,
    pub start: Coordinate,
}

/// Check geometric legality and write the placements onto `board`.
///
/// `board` must be a scratch clone of the authoritative grid. Rules, in
/// input order per placement: in bounds, not a duplicate target, target
/// square empty, all on a single row or column. Across the set: the
/// inclusive span between the outermost placements must end up fully
/// occupied, and an opening move (`opening` true) must cover the center
/// square. A single placement resolves horizontal by convention; the
/// perpendicular word check decides what it really formed.
///
/// On failure the scratch board is part-written and must be discarded.
pub fn validate(
    board: &mut Board,
    placements: &[TilePlacement],
    opening: bool,
) -> Result<PlacementLine, MoveError> {
    let Some(first) = placements.first() else {
        return Err(MoveError::InvalidPlacement);
    };

    let mut direction = Direction::Horizontal;
    let mut targeted: FxHashSet<Coordinate> = FxHashSet::default();

    for (i, placement) in placements.iter().enumerate() {
        let at = placement.coordinate;

        if !Board::in_bounds(at) {
            return Err(MoveError::InvalidSpace(at));
        }
        if !targeted.insert(at) {
            return Err(MoveError::RepeatedPlacement(at));
        }
        if !board.is_empty(at) {
            return Err(MoveError::SpaceOccupied(at));
        }

        match i {
            0 => {}
            1 => {
                direction = if at.row == first.coordinate.row {
                    Direction::Horizontal
                } else if at.col == first.coordinate.col {
                    Direction::Vertical
                } else {
                    return Err(MoveError::InvalidPlacement);
                };
            }
            _ => {
                if at.line(direction) != first.coordinate.line(direction) {
                    return Err(MoveError::InvalidPlacement);
                }
            }
        }

        board.place(at, placement.tile)?;
    }

    // With the new tiles written, the span between the outermost
    // placements must be gap-free (existing tiles fill the holes).
    let line = first.coordinate.line(direction);
    let lo = placements
        .iter()
        .map(|p| p.coordinate.axis(direction))
        .min()
        .unwrap_or(0);
    let hi = placements
        .iter()
        .map(|p| p.coordinate.axis(direction))
        .max()
        .unwrap_or(0);
    for axis in lo..=hi {
        if board.is_empty(Coordinate::on_line(direction, line, axis)) {
            return Err(MoveError::WordDisconnected);
        }
    }

    if opening && !placements.iter().any(|p| p.coordinate == CENTER) {
        return Err(MoveError::InvalidStart);
    }

    Ok(PlacementLine {
        direction,
        start: Coordinate::on_line(direction, line, lo),
    })
}
