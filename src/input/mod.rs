//! Text command parsing for interactive front ends.
//!
//! Two commands exist:
//!
//! - `place a(8,h) t(8,i)`: placement tokens are `letter(row,col)` with a
//!   1-based row number and a column letter. A `_x` prefix plays a blank
//!   standing in for `x`: `place _e(8,j)`.
//! - `swap a b _`: letters to trade back, `_` for a blank.
//!
//! Parsing produces a structured `MoveRequest`; the rules engine never
//! sees raw text.

use crate::board::SIZE;
use crate::core::coord::Coordinate;
use crate::core::tile::Tile;
use crate::game::MoveRequest;
use crate::moves::{Placements, TilePlacement};

/// Malformed move text. Surfaced before the engine runs; no state change.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty move input")]
    Empty,

    #[error("invalid action {0:?}: allowed [swap, place]")]
    UnknownCommand(String),

    #[error("{0} needs at least one tile")]
    MissingTiles(String),

    #[error("could not parse tile token {0:?}")]
    TileFormat(String),

    #[error("coordinate out of range in {0:?}")]
    OutOfRange(String),
}

/// Parse one line of input into a move request.
pub fn parse_command(line: &str) -> Result<MoveRequest, ParseError> {
    let mut tokens = line.split_whitespace();
    let action = tokens.next().ok_or(ParseError::Empty)?;

    match action {
        "place" => {
            let placements = tokens
                .map(parse_placement)
                .collect::<Result<Placements, _>>()?;
            if placements.is_empty() {
                return Err(ParseError::MissingTiles("place".to_string()));
            }
            Ok(MoveRequest::Place { placements })
        }
        "swap" => {
            let tiles = tokens.map(parse_tile).collect::<Result<Vec<_>, _>>()?;
            if tiles.is_empty() {
                return Err(ParseError::MissingTiles("swap".to_string()));
            }
            Ok(MoveRequest::Swap { tiles })
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Parse a `letter(row,col)` placement token.
fn parse_placement(token: &str) -> Result<TilePlacement, ParseError> {
    let bad = || ParseError::TileFormat(token.to_string());

    let body = token.strip_suffix(')').ok_or_else(bad)?;
    let (letters, coords) = body.split_once('(').ok_or_else(bad)?;
    let (row_text, col_text) = coords.split_once(',').ok_or_else(bad)?;

    let row: usize = row_text
        .trim()
        .parse()
        .map_err(|_| ParseError::OutOfRange(token.to_string()))?;
    if !(1..=SIZE).contains(&row) {
        return Err(ParseError::OutOfRange(token.to_string()));
    }

    let col_text = col_text.trim();
    let col_char = match col_text.chars().next() {
        Some(c) if col_text.chars().count() == 1 => c.to_ascii_lowercase(),
        _ => return Err(bad()),
    };
    if !('a'..='o').contains(&col_char) {
        return Err(ParseError::OutOfRange(token.to_string()));
    }
    let col = (col_char as u8 - b'a') as usize;

    let tile = match letters.strip_prefix('_') {
        Some(substitute) => {
            let c = match substitute.chars().next() {
                Some(c) if substitute.chars().count() == 1 && c.is_ascii_alphabetic() => c,
                _ => return Err(bad()),
            };
            Tile::blank_as(c)
        }
        None => {
            let c = match letters.chars().next() {
                Some(c) if letters.chars().count() == 1 && c.is_ascii_alphabetic() => c,
                _ => return Err(bad()),
            };
            Tile::new(c)
        }
    };

    Ok(TilePlacement::new(Coordinate::new(row - 1, col), tile))
}

/// Parse a bare tile token for a swap: a letter, or `_` for a blank.
fn parse_tile(token: &str) -> Result<Tile, ParseError> {
    let c = match token.chars().next() {
        Some(c) if token.chars().count() == 1 => c,
        _ => return Err(ParseError::TileFormat(token.to_string())),
    };
    if c == '_' || c.is_ascii_alphabetic() {
        Ok(Tile::new(c))
    } else {
        Err(ParseError::TileFormat(token.to_string()))
    }
}
