//! Serializable game state and the persistence contract.
//!
//! A `GameSnapshot` captures everything needed to resume a game: the board,
//! the bag contents plus the RNG position (so future draws replay), the
//! roster, and the turn history. The engine writes a snapshot after every
//! committed turn, so a crash between turns loses at most the in-flight
//! move.
//!
//! Storage is behind the `SnapshotStore` trait; `FileStore` keeps one
//! bincode file per game id.

use std::fs;
use std::io;
use std::path::PathBuf;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::player::Player;
use crate::core::rng::GameRngState;
use crate::core::tile::Tile;
use crate::game::{FinalStandings, TurnRecord};

/// Complete serializable game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub bag_tiles: Vec<Tile>,
    pub bag_rng: GameRngState,
    /// Players in turn order.
    pub players: Vec<Player>,
    /// Index of the player whose turn it is.
    pub current_player: usize,
    pub turn_number: u32,
    pub history: Vector<TurnRecord>,
    pub standings: Option<FinalStandings>,
}

/// Persistence failure.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// No snapshot is stored under the given id.
    #[error("no saved game with id {0:?}")]
    NotFound(String),

    #[error("snapshot io error: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot encoding error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Where snapshots live.
pub trait SnapshotStore {
    /// Persist a snapshot under an id, replacing any previous one.
    fn save(&self, id: &str, snapshot: &GameSnapshot) -> Result<(), SnapshotError>;

    /// Load the snapshot stored under an id.
    fn load(&self, id: &str) -> Result<GameSnapshot, SnapshotError>;
}

/// One bincode file per game id under a base directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{id}.game"))
    }
}

impl SnapshotStore for FileStore {
    fn save(&self, id: &str, snapshot: &GameSnapshot) -> Result<(), SnapshotError> {
        let bytes = bincode::serialize(snapshot)?;
        fs::write(self.path_for(id), bytes)?;
        Ok(())
    }

    fn load(&self, id: &str) -> Result<GameSnapshot, SnapshotError> {
        let bytes = match fs::read(self.path_for(id)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(SnapshotError::NotFound(id.to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        Ok(bincode::deserialize(&bytes)?)
    }
}
