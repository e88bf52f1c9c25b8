//! Search module for the Quoridor AI
//!
//! Contains:
//! - Virtual boards: disposable copies the search mutates
//! - Move ordering and wall-candidate bounding
//! - Visit history for root anti-oscillation
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod history;
pub mod ordering;
pub mod virtual_board;

pub use alphabeta::{find_best_move, SearchConfig, SearchResult, SearchStats, Searcher, INF};
pub use history::VisitHistory;
pub use ordering::{ordered_moves, wall_priority, DEFAULT_WALL_CANDIDATE_CAP};
pub use virtual_board::VirtualBoard;
