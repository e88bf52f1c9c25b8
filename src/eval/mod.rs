//! Evaluation module for Quoridor positions
//!
//! The evaluation considers:
//! - Win/loss on the objective rows
//! - Shortest-path difference between the two pawns
//! - Remaining wall budget
//! - Forward progress toward the objective row

pub mod heuristic;
pub mod weights;

pub use heuristic::{evaluate, evaluate_breakdown, EvalBreakdown};
pub use weights::{LOSS_SCORE, WIN_SCORE};
