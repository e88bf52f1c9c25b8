//! Game rules for Quoridor
//!
//! This module implements the rule set:
//! - Path reachability (BFS existence, A* length)
//! - Pawn moves with straight jumps and diagonal side-steps
//! - Wall placement with overlap and path-preservation checks
//! - Win condition

pub mod movegen;
pub mod path;
pub mod win;

// Re-exports for convenient access
pub use movegen::{
    free_wall_candidates, generate_all_moves, generate_pawn_moves, generate_wall_moves,
    is_legal_move, is_legal_wall, is_wall_placement_free, pawn_targets, validate_move,
};
pub(crate) use movegen::keeps_paths;
pub use path::{has_path, shortest_path_length};
pub use win::check_winner;
