//! Players and turn order.
//!
//! ## Player
//!
//! A rack of up to seven tiles, a cumulative score, and best-single-turn
//! tracking. Hand checks are multiset-aware: each requested tile consumes
//! one distinct held tile, so two played `'A'`s need two held `'A'`s.
//!
//! ## Roster
//!
//! Turn order is an index into an ordered player list advanced with modular
//! arithmetic. The roster is shuffled once at game start to decide who goes
//! first.

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Maximum tiles in a hand.
pub const HAND_CAPACITY: usize = 7;

/// One participant: name, rack, score, best-turn tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Tile>,
    score: i32,
    best_turn_score: i32,
    best_word: String,
}

impl Player {
    /// Create a player with an empty hand and zero score.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_hand(name, Vec::new())
    }

    /// Create a player holding specific tiles, for rebuilding external
    /// state.
    #[must_use]
    pub fn with_hand(name: impl Into<String>, hand: Vec<Tile>) -> Self {
        Self {
            name: name.into(),
            hand,
            score: 0,
            best_turn_score: 0,
            best_word: String::new(),
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tiles currently held.
    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    /// Cumulative score.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Best single-turn score so far.
    #[must_use]
    pub fn best_turn_score(&self) -> i32 {
        self.best_turn_score
    }

    /// The word that earned the best single-turn score.
    #[must_use]
    pub fn best_word(&self) -> &str {
        &self.best_word
    }

    /// Whether a requested tile could be claimed from this hand.
    #[must_use]
    pub fn holds(&self, requested: Tile) -> bool {
        self.hand.iter().any(|&held| requested.claims(held))
    }

    /// Remove and return the held tile satisfying `requested`, if any.
    ///
    /// Claims one tile per call, so repeated requests need repeated holdings.
    pub(crate) fn take_claimed(&mut self, requested: Tile) -> Option<Tile> {
        let at = self.hand.iter().position(|&held| requested.claims(held))?;
        Some(self.hand.remove(at))
    }

    /// Add drawn tiles to the hand.
    pub(crate) fn add_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.hand.extend(tiles);
    }

    /// Credit a committed turn, updating best-turn tracking.
    pub(crate) fn credit_turn(&mut self, word: &str, points: i32) {
        self.score += points;
        if points > self.best_turn_score {
            self.best_turn_score = points;
            self.best_word = word.to_string();
        }
    }

    /// Deduct the face value of unplayed tiles at game end.
    pub(crate) fn deduct_remaining(&mut self) {
        let held: i32 = self.hand.iter().map(|t| t.value()).sum();
        self.score -= held;
    }
}

/// The ordered player list plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    current: usize,
}

impl Roster {
    /// Build a roster from players already in their turn order.
    ///
    /// The first entry acts first. Panics on an empty list; a roster
    /// without players is not a game.
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        assert!(!players.is_empty(), "a roster needs at least one player");
        Self {
            players,
            current: 0,
        }
    }

    /// Rebuild a roster from snapshot parts.
    #[must_use]
    pub fn restore(players: Vec<Player>, current: usize) -> Self {
        assert!(
            current < players.len(),
            "current player {current} out of range for {} players",
            players.len()
        );
        Self { players, current }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty. Never true for a constructed roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// All players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current]
    }

    pub(crate) fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Advance to the next player in cyclic order.
    pub(crate) fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_claimed_is_multiset_aware() {
        let mut p = Player::new("ada");
        p.add_tiles([Tile::new('A'), Tile::new('B')]);

        assert!(p.take_claimed(Tile::new('A')).is_some());
        // Only one 'A' was held.
        assert!(p.take_claimed(Tile::new('A')).is_none());
        assert_eq!(p.hand().len(), 1);
    }

    #[test]
    fn test_credit_turn_tracks_best() {
        let mut p = Player::new("ada");
        p.credit_turn("CAT", 10);
        p.credit_turn("AX", 8);
        assert_eq!(p.score(), 18);
        assert_eq!(p.best_turn_score(), 10);
        assert_eq!(p.best_word(), "CAT");
    }

    #[test]
    fn test_roster_cycles() {
        let mut roster = Roster::new(vec![
            Player::new("a"),
            Player::new("b"),
            Player::new("c"),
        ]);
        assert_eq!(roster.current().name(), "a");
        roster.advance();
        roster.advance();
        roster.advance();
        assert_eq!(roster.current().name(), "a");
    }

    #[test]
    fn test_deduct_remaining() {
        let mut p = Player::new("ada");
        p.credit_turn("QI", 11);
        p.add_tiles([Tile::new('Q'), Tile::new('Z')]);
        p.deduct_remaining();
        assert_eq!(p.score(), 11 - 20);
    }
}
