//! Quoridor rules and AI engine
//!
//! A Quoridor implementation with a configurable computer opponent:
//! - Standard 9x9 board stored as a 17x17 lattice of cells, wall slots and
//!   connectors
//! - Pawn jumps with diagonal side-steps when the straight jump is blocked
//! - Ten walls per player; a wall may never cut a player off from its goal
//! - First pawn to reach the opposite row wins
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Lattice encoding, player records, moves
//! - [`rules`]: Path queries, legal move generation, win detection
//! - [`eval`]: Heuristic evaluation
//! - [`search`]: Virtual boards, move ordering, minimax with alpha-beta
//! - [`engine`]: AI player controller with difficulty presets
//! - [`player`]: Human and AI controllers behind one interface
//! - [`game`]: Turn sequencing with undo and redo
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use quoridor::{AIEngine, Board, Difficulty, PlayerId};
//! use quoridor::rules::shortest_path_length;
//!
//! let mut board = Board::new();
//! assert_eq!(shortest_path_length(&board, PlayerId::One), Some(8));
//!
//! let mut engine = AIEngine::with_difficulty(Difficulty::Easy);
//! let result = engine.play_turn(&mut board, PlayerId::One).unwrap();
//! println!("AI played {:?}", result.best_move);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Orientation, PlayerId, Pos, Wall, GRID_SIZE, MAX_WALLS, PAWN_DIM};
pub use engine::{AIEngine, AiConfig, Difficulty, MoveResult, SearchType};
pub use error::{EngineError, GameError, MoveError, SaveError};
pub use game::{Game, SavedGame};
pub use player::{MoveRequest, PlayerKind};
pub use rules::{generate_all_moves, has_path, shortest_path_length};
pub use search::find_best_move;
