//! Game state and the turn engine.
//!
//! ## Turn protocol
//!
//! A move request enters `apply_turn`, which commits it against a working
//! clone of the whole game and swaps the clone in only when every check
//! passes. A rejected move therefore leaves the board, the bag, and every
//! hand exactly as they were; there is no undo path to get wrong.
//!
//! ## Lifecycle
//!
//! `GameBuilder` shuffles the turn order, fills the bag, and deals seven
//! tiles per player. Turns then alternate cyclically until a committed
//! placement empties the acting player's hand, at which point every rack's
//! remaining face value is deducted and the highest score wins. Finished
//! games reject further moves.

mod turn;

pub use turn::{FinalStandings, MoveKind, MoveOutcome, MoveRequest, TurnRecord};

use im::Vector;

use crate::board::Board;
use crate::core::player::{Player, Roster, HAND_CAPACITY};
use crate::core::rng::GameRng;
use crate::core::tile::{Tile, TileBag};
use crate::dict::Lexicon;
use crate::error::{GameError, MoveError};
use crate::moves::{validate, Placements};
use crate::snapshot::{GameSnapshot, SnapshotStore};
use crate::words::locate;

/// Bonus for playing a full seven-tile hand in one move.
pub const BINGO_BONUS: i32 = 50;

/// An active game: board, bag, players, and the turn history.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    bag: TileBag,
    roster: Roster,
    turn_number: u32,
    history: Vector<TurnRecord>,
    standings: Option<FinalStandings>,
}

/// Builder for starting a fresh game.
///
/// ```
/// use wordfield::game::GameBuilder;
///
/// let game = GameBuilder::new()
///     .player("ada")
///     .player("grace")
///     .seed(42)
///     .build();
/// assert_eq!(game.roster().len(), 2);
/// assert_eq!(game.current_player().hand().len(), 7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    names: Vec<String>,
    seed: Option<u64>,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player. Turn order is decided by a shuffle at build time.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Fix the RNG seed for a reproducible game. Entropy-seeded otherwise.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the game: shuffle turn order, fill the bag, deal hands.
    #[must_use]
    pub fn build(self) -> Game {
        assert!(
            (1..=4).contains(&self.names.len()),
            "player count must be 1-4"
        );

        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut names = self.names;
        rng.shuffle(&mut names);

        let mut bag = TileBag::standard(rng);
        let players = names
            .into_iter()
            .map(|name| {
                let mut player = Player::new(name);
                player.add_tiles(bag.draw(HAND_CAPACITY));
                player
            })
            .collect();

        Game {
            board: Board::new(),
            bag,
            roster: Roster::new(players),
            turn_number: 1,
            history: Vector::new(),
            standings: None,
        }
    }
}

impl Game {
    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The tile bag.
    #[must_use]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    /// Players and turn order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.roster.current()
    }

    /// Turn number of the next move to commit, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Committed turns, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Final standings, once a player has gone out.
    #[must_use]
    pub fn standings(&self) -> Option<&FinalStandings> {
        self.standings.as_ref()
    }

    /// Whether the game has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.standings.is_some()
    }

    /// Apply one move for the current player.
    ///
    /// On success the move is committed, the turn advances, and the
    /// outcome describes what happened. On failure the game is untouched
    /// and the error says exactly what was wrong.
    pub fn apply_turn(
        &mut self,
        request: MoveRequest,
        lexicon: &dyn Lexicon,
    ) -> Result<MoveOutcome, MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameFinished);
        }
        let mut working = self.clone();
        let outcome = working.commit(request, lexicon)?;
        *self = working;
        Ok(outcome)
    }

    /// Apply one move and persist the resulting snapshot before committing.
    ///
    /// The turn counts only if the snapshot write succeeds; on a store
    /// failure the in-memory game stays at the pre-move position so memory
    /// and durable state cannot diverge.
    pub fn apply_turn_saved<S>(
        &mut self,
        id: &str,
        request: MoveRequest,
        lexicon: &dyn Lexicon,
        store: &S,
    ) -> Result<MoveOutcome, GameError>
    where
        S: SnapshotStore + ?Sized,
    {
        if self.is_finished() {
            return Err(GameError::Move(MoveError::GameFinished));
        }
        let mut working = self.clone();
        let outcome = working.commit(request, lexicon).map_err(GameError::Move)?;
        store.save(id, &working.snapshot())?;
        *self = working;
        Ok(outcome)
    }

    /// Capture the complete game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            bag_tiles: self.bag.remaining().to_vec(),
            bag_rng: self.bag.rng_state(),
            players: self.roster.players().to_vec(),
            current_player: self.roster.current_index(),
            turn_number: self.turn_number,
            history: self.history.clone(),
            standings: self.standings.clone(),
        }
    }

    /// Rebuild a game from a snapshot.
    #[must_use]
    pub fn restore(snapshot: GameSnapshot) -> Self {
        Self {
            board: snapshot.board,
            bag: TileBag::restore(snapshot.bag_tiles, &snapshot.bag_rng),
            roster: Roster::restore(snapshot.players, snapshot.current_player),
            turn_number: snapshot.turn_number,
            history: snapshot.history,
            standings: snapshot.standings,
        }
    }

    // Runs against the working clone; free to mutate and bail.
    fn commit(
        &mut self,
        request: MoveRequest,
        lexicon: &dyn Lexicon,
    ) -> Result<MoveOutcome, MoveError> {
        let (kind, words, points, tiles_swapped) = match &request {
            MoveRequest::Swap { tiles } => {
                self.commit_swap(tiles)?;
                (MoveKind::Swap, Vec::new(), 0, tiles.len())
            }
            MoveRequest::Place { placements } => {
                let (words, points) = self.commit_place(placements, lexicon)?;
                (MoveKind::Place, words, points, 0)
            }
        };

        self.history.push_back(TurnRecord {
            number: self.turn_number,
            player: self.roster.current().name().to_string(),
            request,
            points,
        });

        let standings = if self.roster.current().hand().is_empty() {
            Some(self.finish())
        } else {
            self.turn_number += 1;
            self.roster.advance();
            None
        };

        Ok(MoveOutcome {
            kind,
            words,
            points,
            tiles_swapped,
            standings,
        })
    }

    fn commit_swap(&mut self, tiles: &[Tile]) -> Result<(), MoveError> {
        if self.bag.len() < tiles.len() {
            return Err(MoveError::NotEnoughTilesForSwap {
                requested: tiles.len(),
                remaining: self.bag.len(),
            });
        }

        let mut surrendered = Vec::with_capacity(tiles.len());
        for &tile in tiles {
            let held = self
                .roster
                .current_mut()
                .take_claimed(tile)
                .ok_or(MoveError::TileNotInHand(tile))?;
            surrendered.push(held);
        }

        // Draw before returning, so the player cannot redraw the tiles
        // they just gave up.
        let drawn = self.bag.draw(tiles.len());
        self.roster.current_mut().add_tiles(drawn);
        self.bag.put_back(surrendered);
        Ok(())
    }

    fn commit_place(
        &mut self,
        placements: &Placements,
        lexicon: &dyn Lexicon,
    ) -> Result<(Vec<String>, i32), MoveError> {
        for placement in placements {
            self.roster
                .current_mut()
                .take_claimed(placement.tile)
                .ok_or(MoveError::TileNotInHand(placement.tile))?;
        }

        let opening = self.board.is_untouched();
        let mut scratch = self.board.clone();
        let line = validate(&mut scratch, placements, opening)?;

        let mut words = Vec::new();
        let (main, formed) = locate(&scratch, line.direction, line.start);
        if formed {
            words.push(main);
        }
        for placement in placements {
            let (cross, formed) = locate(&scratch, line.direction.flip(), placement.coordinate);
            if formed {
                words.push(cross);
            }
        }
        if words.is_empty() {
            return Err(MoveError::NoValidWordsFound);
        }

        let mut failed = Vec::new();
        let mut points = 0;
        for word in &words {
            let text = word.text();
            if lexicon.contains(&text) {
                points += word.score();
            } else {
                failed.push(text);
            }
        }
        if !failed.is_empty() {
            return Err(MoveError::InvalidWords(failed));
        }

        if placements.len() == HAND_CAPACITY {
            points += BINGO_BONUS;
        }

        // Scoring is done: premiums under this move never apply again.
        for placement in placements {
            scratch.mark_used(placement.coordinate);
        }
        self.board = scratch;

        let texts: Vec<String> = words.iter().map(|w| w.text()).collect();
        self.roster.current_mut().credit_turn(&texts[0], points);

        let refill = self.bag.draw(placements.len());
        self.roster.current_mut().add_tiles(refill);

        Ok((texts, points))
    }

    fn finish(&mut self) -> FinalStandings {
        for player in self.roster.players_mut() {
            player.deduct_remaining();
        }

        let players = self.roster.players();
        let mut winner = &players[0];
        for player in &players[1..] {
            if player.score() > winner.score() {
                winner = player;
            }
        }

        let standings = FinalStandings {
            winner: winner.name().to_string(),
            scores: players
                .iter()
                .map(|p| (p.name().to_string(), p.score()))
                .collect(),
        };
        self.standings = Some(standings.clone());
        standings
    }
}
