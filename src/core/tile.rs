//! Lettered tiles and the shared draw bag.
//!
//! ## Tiles
//!
//! A `Tile` is an immutable value: a letter, a point value, and a blank
//! flag. Blanks sit in the bag and in hands under the `'_'` marker and are
//! worth 0 points. When a blank is placed, the player picks the letter it
//! stands for (`Tile::blank_as`); the substitute letter drives word
//! formation while the value stays 0.
//!
//! ## The bag
//!
//! `TileBag` owns every tile not currently in a hand or on the board, plus
//! the game's RNG. Draws shuffle first, so the order tiles were returned in
//! never leaks into future draws.

use serde::{Deserialize, Serialize};

use super::rng::{GameRng, GameRngState};

/// Marker letter for blank tiles while in the bag or a hand.
pub const BLANK: char = '_';

/// Total tiles in a fresh bag.
pub const TILE_COUNT: usize = 100;

/// Letter, count, value for the standard distribution (100 tiles).
const DISTRIBUTION: &[(char, usize, i32)] = &[
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
    (BLANK, 2, 0),
];

/// Point value for a letter. Blanks are worth 0.
#[must_use]
pub fn letter_value(letter: char) -> i32 {
    let letter = letter.to_ascii_uppercase();
    DISTRIBUTION
        .iter()
        .find(|(l, _, _)| *l == letter)
        .map(|(_, _, v)| *v)
        .unwrap_or(0)
}

/// A lettered tile.
///
/// Equality compares letter, value, and the blank flag, so a blank placed
/// as `'A'` is never equal to a real `'A'` tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    letter: char,
    value: i32,
    blank: bool,
}

impl Tile {
    /// Create a tile for a letter, or the blank marker for `'_'`.
    ///
    /// The letter is uppercase-normalized. Only `A..=Z` and `'_'` name
    /// tiles; anything else is a corrupted request and aborts.
    #[must_use]
    pub fn new(letter: char) -> Self {
        let letter = letter.to_ascii_uppercase();
        assert!(
            letter.is_ascii_uppercase() || letter == BLANK,
            "no such tile: {letter:?}"
        );
        Self {
            letter,
            value: letter_value(letter),
            blank: letter == BLANK,
        }
    }

    /// A blank tile standing in for `letter`. Worth 0 points.
    #[must_use]
    pub fn blank_as(letter: char) -> Self {
        let letter = letter.to_ascii_uppercase();
        assert!(letter.is_ascii_uppercase(), "no such letter: {letter:?}");
        Self {
            letter,
            value: 0,
            blank: true,
        }
    }

    /// The letter this tile shows: its own, or a blank's substitute.
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    /// Face value in points. Always 0 for blanks.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.value
    }

    /// Whether this tile is a blank.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.blank
    }

    /// Whether a held tile satisfies this requested tile.
    ///
    /// Blanks are claimed by the marker, never by the substitute letter:
    /// playing a blank as `'A'` consumes a held `'_'`, not a held `'A'`.
    #[must_use]
    pub fn claims(self, held: Tile) -> bool {
        if self.blank {
            held.blank && held.letter == BLANK
        } else {
            self == held
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}{}]", self.letter, self.value)
    }
}

/// The shared pool of undrawn tiles.
#[derive(Clone, Debug)]
pub struct TileBag {
    tiles: Vec<Tile>,
    rng: GameRng,
}

impl TileBag {
    /// A full 100-tile bag using the standard distribution.
    #[must_use]
    pub fn standard(rng: GameRng) -> Self {
        let mut tiles = Vec::with_capacity(TILE_COUNT);
        for &(letter, count, _) in DISTRIBUTION {
            for _ in 0..count {
                tiles.push(Tile::new(letter));
            }
        }
        Self { tiles, rng }
    }

    /// Rebuild a bag from snapshot parts.
    #[must_use]
    pub fn restore(tiles: Vec<Tile>, rng: &GameRngState) -> Self {
        Self {
            tiles,
            rng: GameRng::from_state(rng),
        }
    }

    /// Draw up to `count` tiles. Never errors: a short bag yields fewer.
    ///
    /// The pool is reshuffled before every draw.
    pub fn draw(&mut self, count: usize) -> Vec<Tile> {
        self.rng.shuffle(&mut self.tiles);
        let count = count.min(self.tiles.len());
        self.tiles.drain(..count).collect()
    }

    /// Return tiles to the pool (used by swaps).
    pub fn put_back(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    /// Tiles left in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The undrawn tiles, for snapshotting.
    #[must_use]
    pub fn remaining(&self) -> &[Tile] {
        &self.tiles
    }

    /// The RNG position, for snapshotting.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
