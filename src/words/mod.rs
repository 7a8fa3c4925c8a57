//! Word discovery and scoring.
//!
//! A `Word` is ephemeral: the maximal contiguous run of occupied squares
//! through an origin square along one axis, rebuilt from the board on every
//! validation pass and discarded afterwards.
//!
//! ## Scoring
//!
//! Premiums apply exactly once per square for the life of a game. A square
//! whose premium was consumed by an earlier turn contributes its tile's
//! face value only; a fresh letter premium multiplies the face value; a
//! fresh word premium folds into a running product applied to the whole
//! word. The consumed check runs before any multiplier, and the engine
//! marks squares consumed only after the whole move has scored.

use crate::board::{Board, Square};
use crate::core::coord::{Coordinate, Direction};

/// An ordered run of occupied squares along one axis.
///
/// Squares are ordered by increasing coordinate along the scanning axis,
/// which fixes the letter order of the resulting word string.
#[derive(Clone, Debug)]
pub struct Word {
    direction: Direction,
    squares: Vec<(Coordinate, Square)>,
}

impl Word {
    /// The axis this word runs along.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of squares in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Whether the run is empty. Only true for a run built on an empty
    /// origin square.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// The squares of the run in axis order.
    #[must_use]
    pub fn squares(&self) -> &[(Coordinate, Square)] {
        &self.squares
    }

    /// The word as a dictionary-ready string (blanks show their substitute).
    #[must_use]
    pub fn text(&self) -> String {
        self.squares
            .iter()
            .filter_map(|(_, s)| s.tile())
            .map(|t| t.letter())
            .collect()
    }

    /// Score the word, applying each unconsumed premium exactly once.
    #[must_use]
    pub fn score(&self) -> i32 {
        let mut total = 0;
        let mut word_multiplier = 1;
        for &(coordinate, square) in &self.squares {
            let face = square.tile().map_or(0, |t| t.value());
            if square.multiplier_consumed() {
                total += face;
                continue;
            }
            let premium = Board::premium(coordinate);
            match premium.word_multiplier() {
                1 => total += face * premium.letter_multiplier(),
                w => {
                    total += face;
                    word_multiplier *= w;
                }
            }
        }
        total * word_multiplier
    }
}

/// Find the maximal run of occupied squares through `origin`.
///
/// Returns the run plus a `formed` flag which is false when the run has
/// length 1; an isolated tile is not a word for scoring or validation.
/// An empty origin square yields an empty, unformed run.
#[must_use]
pub fn locate(board: &Board, direction: Direction, origin: Coordinate) -> (Word, bool) {
    if board.is_empty(origin) {
        return (
            Word {
                direction,
                squares: Vec::new(),
            },
            false,
        );
    }

    let line = origin.line(direction);
    let (lo, hi) = board.run_bounds(direction, origin);
    let squares: Vec<_> = (lo..=hi)
        .map(|axis| {
            let at = Coordinate::on_line(direction, line, axis);
            (at, board.square(at))
        })
        .collect();

    let formed = squares.len() > 1;
    (Word { direction, squares }, formed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::Tile;

    fn board_with(word: &str, row: usize, start_col: usize) -> Board {
        let mut board = Board::new();
        for (i, letter) in word.chars().enumerate() {
            board
                .place(Coordinate::new(row, start_col + i), Tile::new(letter))
                .unwrap();
        }
        board
    }

    #[test]
    fn test_locate_orders_by_axis() {
        let board = board_with("CAT", 7, 6);
        // Origin in the middle still yields letters left-to-right.
        let (word, formed) = locate(&board, Direction::Horizontal, Coordinate::new(7, 7));
        assert!(formed);
        assert_eq!(word.text(), "CAT");
    }

    #[test]
    fn test_locate_single_tile_is_not_formed() {
        let board = board_with("Q", 3, 3);
        let (word, formed) = locate(&board, Direction::Horizontal, Coordinate::new(3, 3));
        assert!(!formed);
        assert_eq!(word.len(), 1);
    }

    #[test]
    fn test_locate_word_touching_left_edge() {
        let board = board_with("AXE", 5, 0);
        let (word, formed) = locate(&board, Direction::Horizontal, Coordinate::new(5, 2));
        assert!(formed);
        assert_eq!(word.text(), "AXE");
    }

    #[test]
    fn test_score_with_double_word() {
        // CAT across the center double-word square, nothing consumed.
        let board = board_with("CAT", 7, 6);
        let (word, _) = locate(&board, Direction::Horizontal, Coordinate::new(7, 6));
        assert_eq!(word.score(), (3 + 1 + 1) * 2);
    }

    #[test]
    fn test_score_skips_consumed_premium() {
        let mut board = board_with("CAT", 7, 6);
        for col in 6..9 {
            board.mark_used(Coordinate::new(7, col));
        }
        let (word, _) = locate(&board, Direction::Horizontal, Coordinate::new(7, 6));
        assert_eq!(word.score(), 3 + 1 + 1);
    }

    #[test]
    fn test_score_letter_premium_and_blank() {
        // Row 6 col 6 is a double-letter square; a blank there still adds 0.
        let mut board = Board::new();
        board
            .place(Coordinate::new(6, 6), Tile::blank_as('C'))
            .unwrap();
        board
            .place(Coordinate::new(6, 7), Tile::new('A'))
            .unwrap();
        board
            .place(Coordinate::new(6, 8), Tile::new('T'))
            .unwrap();
        let (word, _) = locate(&board, Direction::Horizontal, Coordinate::new(6, 6));
        assert_eq!(word.text(), "CAT");
        // Blank C: 0 * 2, A: face, T on another double-letter: 1 * 2.
        assert_eq!(word.score(), 0 + 1 + 2);
    }
}
