//! Evaluation weights and difficulty-derived constants
//!
//! Path difference dominates; wall budget and forward progress break ties.

/// Score of a won position
pub const WIN_SCORE: f64 = f64::INFINITY;
/// Score of a lost position
pub const LOSS_SCORE: f64 = f64::NEG_INFINITY;

/// Weight of one step of shortest-path difference
pub const PATH_WEIGHT: f64 = 4.0;

/// Weight of the progress fraction (0.0 on the start row, 1.0 at home).
/// Kept below `PATH_WEIGHT` so it only breaks ties.
pub const PROGRESS_WEIGHT: f64 = 1.0;

/// Wall-budget weights for easy, medium and hard
pub const WALL_WEIGHT_EASY: f64 = 0.5;
pub const WALL_WEIGHT_MEDIUM: f64 = 1.0;
pub const WALL_WEIGHT_HARD: f64 = 1.5;
