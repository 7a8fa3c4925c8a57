//! The 15x15 board: squares, premium layout, placement, run scans.
//!
//! ## Layout vs. state
//!
//! The premium classes (double/triple letter, double/triple word) are a
//! fixed property of the grid, parsed once from a token table and shared by
//! every game. A `Square` carries only the mutable part: the occupying tile
//! and whether its premium has been consumed by a scoring pass.
//!
//! ## Working copies
//!
//! The grid is an `im::Vector`, so cloning a board for speculative
//! validation is cheap and a rejected move can simply drop its copy.

use std::sync::OnceLock;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::coord::{Coordinate, Direction};
use crate::core::tile::Tile;
use crate::error::MoveError;

/// Board dimension. The grid is `SIZE x SIZE`.
pub const SIZE: usize = 15;

/// The center square, which the opening move must cover.
pub const CENTER: Coordinate = Coordinate::new(7, 7);

/// Premium layout, one token per square: `.` none, `2l`/`3l` letter
/// multipliers, `2w`/`3w` word multipliers.
const STANDARD_LAYOUT: &str = "
    3w .  .  2l .  .  .  3w .  .  .  2l .  .  3w
    .  2w .  .  .  3l .  .  .  3l .  .  .  2w .
    .  .  2w .  .  .  2l .  2l .  .  .  2w .  .
    2l .  .  2w .  .  .  2l .  .  .  2w .  .  2l
    .  .  .  .  2w .  .  .  .  .  2w .  .  .  .
    .  3l .  .  .  3l .  .  .  3l .  .  .  3l .
    .  .  2l .  .  .  2l .  2l .  .  .  2l .  .
    3w .  .  2l .  .  .  2w .  .  .  2l .  .  3w
    .  .  2l .  .  .  2l .  2l .  .  .  2l .  .
    .  3l .  .  .  3l .  .  .  3l .  .  .  3l .
    .  .  .  .  2w .  .  .  .  .  2w .  .  .  .
    2l .  .  2w .  .  .  2l .  .  .  2w .  .  2l
    .  .  2w .  .  .  2l .  2l .  .  .  2w .  .
    .  2w .  .  .  3l .  .  .  3l .  .  .  2w .
    3w .  .  2l .  .  .  3w .  .  .  2l .  .  3w
";

/// Score multiplier class of a square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Premium {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Premium {
    /// Multiplier applied to a single tile's face value.
    #[must_use]
    pub const fn letter_multiplier(self) -> i32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Multiplier applied to a whole word's total.
    #[must_use]
    pub const fn word_multiplier(self) -> i32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }

    /// Label used when rendering an empty square.
    #[must_use]
    const fn label(self) -> &'static str {
        match self {
            Premium::None => " .",
            Premium::DoubleLetter => "2l",
            Premium::TripleLetter => "3l",
            Premium::DoubleWord => "2w",
            Premium::TripleWord => "3w",
        }
    }
}

fn standard_layout() -> &'static [Premium; SIZE * SIZE] {
    static LAYOUT: OnceLock<[Premium; SIZE * SIZE]> = OnceLock::new();
    LAYOUT.get_or_init(|| {
        let mut grid = [Premium::None; SIZE * SIZE];
        let mut tokens = STANDARD_LAYOUT.split_whitespace();
        for slot in grid.iter_mut() {
            *slot = match tokens.next() {
                Some(".") => Premium::None,
                Some("2l") => Premium::DoubleLetter,
                Some("3l") => Premium::TripleLetter,
                Some("2w") => Premium::DoubleWord,
                Some("3w") => Premium::TripleWord,
                other => unreachable!("bad layout token: {other:?}"),
            };
        }
        assert!(tokens.next().is_none(), "layout has extra tokens");
        grid
    })
}

/// One board cell: an optional occupying tile plus the consumed flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    tile: Option<Tile>,
    used: bool,
}

impl Square {
    /// The occupying tile, if any.
    #[must_use]
    pub const fn tile(self) -> Option<Tile> {
        self.tile
    }

    /// Whether no tile occupies this square.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.tile.is_none()
    }

    /// Whether the square's premium has already been consumed by scoring.
    #[must_use]
    pub const fn multiplier_consumed(self) -> bool {
        self.used
    }
}

/// The playing grid, stored flat as `row * SIZE + col`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vector<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            squares: std::iter::repeat(Square::default())
                .take(SIZE * SIZE)
                .collect(),
        }
    }

    const fn index(coordinate: Coordinate) -> usize {
        coordinate.row * SIZE + coordinate.col
    }

    /// Whether a coordinate lies on the board.
    #[must_use]
    pub const fn in_bounds(coordinate: Coordinate) -> bool {
        coordinate.row < SIZE && coordinate.col < SIZE
    }

    /// Premium class of a square. A property of the layout, not the game.
    #[must_use]
    pub fn premium(coordinate: Coordinate) -> Premium {
        standard_layout()[Self::index(coordinate)]
    }

    /// The square at a coordinate.
    #[must_use]
    pub fn square(&self, coordinate: Coordinate) -> Square {
        self.squares[Self::index(coordinate)]
    }

    /// The tile at a coordinate, if any.
    #[must_use]
    pub fn tile(&self, coordinate: Coordinate) -> Option<Tile> {
        self.square(coordinate).tile()
    }

    /// Whether no tile occupies the square.
    #[must_use]
    pub fn is_empty(&self, coordinate: Coordinate) -> bool {
        self.square(coordinate).is_empty()
    }

    /// Whether the whole board is still bare. Drives the opening-move rule.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.squares.iter().all(|s| s.is_empty())
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Place a tile. Fails if the square is occupied.
    pub fn place(&mut self, coordinate: Coordinate, tile: Tile) -> Result<(), MoveError> {
        let square = &mut self.squares[Self::index(coordinate)];
        if square.tile.is_some() {
            return Err(MoveError::SpaceOccupied(coordinate));
        }
        square.tile = Some(tile);
        Ok(())
    }

    /// Idempotently flag a square's premium as consumed.
    pub fn mark_used(&mut self, coordinate: Coordinate) {
        self.squares[Self::index(coordinate)].used = true;
    }

    /// Inclusive axis bounds of the maximal occupied run through `origin`.
    ///
    /// Scans both senses along `direction` while squares remain occupied,
    /// stopping at the first empty square or the board edge. The origin
    /// itself is always part of the run.
    #[must_use]
    pub fn run_bounds(&self, direction: Direction, origin: Coordinate) -> (usize, usize) {
        let line = origin.line(direction);
        let occupied =
            |axis: usize| !self.is_empty(Coordinate::on_line(direction, line, axis));

        let mut lo = origin.axis(direction);
        while lo > 0 && occupied(lo - 1) {
            lo -= 1;
        }
        let mut hi = origin.axis(direction);
        while hi + 1 < SIZE && occupied(hi + 1) {
            hi += 1;
        }
        (lo, hi)
    }
}

impl std::fmt::Display for Board {
    /// Render the grid: column letters across the top, 1-based row numbers
    /// down the side, premium labels on empty squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..SIZE {
            write!(f, " {} ", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 0..SIZE {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..SIZE {
                match self.tile(Coordinate::new(row, col)) {
                    Some(tile) if tile.is_blank() => {
                        write!(f, " {} ", tile.letter().to_ascii_lowercase())?
                    }
                    Some(tile) => write!(f, " {} ", tile.letter())?,
                    None => write!(f, "{} ", Self::premium(Coordinate::new(row, col)).label())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
