//! Error types for move commits and game sequencing

use thiserror::Error;

use crate::board::{PlayerId, Pos, Wall};

/// Reasons the authoritative board rejects a move
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Target lies outside the lattice
    #[error("position ({}, {}) is off the board", .0.row, .0.col)]
    OutOfBounds(Pos),

    /// Pawn target is a wall slot or connector
    #[error("position ({}, {}) is not a pawn cell", .0.row, .0.col)]
    NotACell(Pos),

    /// Pawn target is not among the generated pawn moves
    #[error("pawn cannot reach ({}, {}) this turn", .0.row, .0.col)]
    IllegalPawnMove(Pos),

    /// Wall budget exhausted
    #[error("{0:?} has no walls left")]
    NoWallsLeft(PlayerId),

    /// Anchor is not an interior connector
    #[error("invalid wall anchor ({}, {})", .0.anchor.row, .0.anchor.col)]
    InvalidWallAnchor(Wall),

    /// Wall crosses or overlaps an existing wall
    #[error("wall at ({}, {}) overlaps an existing wall", .0.anchor.row, .0.anchor.col)]
    WallOverlap(Wall),

    /// Wall would cut a player off from its objective row
    #[error("wall at ({}, {}) would block a player's last path", .0.anchor.row, .0.anchor.col)]
    WallBlocksPath(Wall),
}

/// Errors from the turn-sequencing layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("game is over")]
    GameOver,

    #[error("it is {0:?}'s turn")]
    NotYourTurn(PlayerId),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors reading or writing a saved game
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("save file I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed save file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported save version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Starting position cannot exist on a real board
    #[error("invalid starting position: {0}")]
    InvalidBoard(&'static str),

    /// A logged move does not replay
    #[error("move {ply} in the save file is illegal: {source}")]
    IllegalMove {
        ply: usize,
        #[source]
        source: GameError,
    },
}

/// Errors from the AI player controller
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Search found nothing to play
    #[error("no legal move available")]
    NoLegalMove,

    #[error(transparent)]
    Move(#[from] MoveError),
}
