//! Grid coordinates and scan directions.
//!
//! Coordinates are 0-indexed `(row, col)` pairs. A `Direction` names the
//! axis a word runs along; the *axis* of a coordinate is the component that
//! varies along that direction and the *line* is the component that stays
//! fixed. A horizontal word has a fixed row (line) and varying columns
//! (axis).

use serde::{Deserialize, Serialize};

/// A grid location, `(row, col)`, 0-indexed from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The component that varies along `direction`.
    #[must_use]
    pub const fn axis(self, direction: Direction) -> usize {
        match direction {
            Direction::Horizontal => self.col,
            Direction::Vertical => self.row,
        }
    }

    /// The component that stays fixed along `direction`.
    #[must_use]
    pub const fn line(self, direction: Direction) -> usize {
        match direction {
            Direction::Horizontal => self.row,
            Direction::Vertical => self.col,
        }
    }

    /// Rebuild a coordinate from its fixed line and a position on the axis.
    #[must_use]
    pub const fn on_line(direction: Direction, line: usize, axis: usize) -> Self {
        match direction {
            Direction::Horizontal => Self::new(line, axis),
            Direction::Vertical => Self::new(axis, line),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The axis a word runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// The perpendicular direction.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_line_round_trip() {
        let c = Coordinate::new(3, 11);
        for dir in [Direction::Horizontal, Direction::Vertical] {
            assert_eq!(Coordinate::on_line(dir, c.line(dir), c.axis(dir)), c);
        }
    }

    #[test]
    fn test_flip() {
        assert_eq!(Direction::Horizontal.flip(), Direction::Vertical);
        assert_eq!(Direction::Vertical.flip(), Direction::Horizontal);
    }
}
