//! Heuristic evaluation function for Quoridor positions
//!
//! `score = 4 * (opponent_path - own_path) + wall_weight * own_walls + progress`
//! where `progress` is the fraction of the board depth the player has already
//! covered. Won and lost positions score `+inf` and `-inf`.

use crate::board::{Board, PlayerId};
use crate::rules::shortest_path_length;

use super::weights::{LOSS_SCORE, PATH_WEIGHT, PROGRESS_WEIGHT, WIN_SCORE};

/// Individual terms of an evaluation, for display and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalBreakdown {
    /// Shortest path of the evaluated player, `None` if cut off
    pub own_path: Option<u32>,
    /// Shortest path of the opponent, `None` if cut off
    pub opponent_path: Option<u32>,
    pub walls_left: u8,
    /// Fraction of the board depth covered, in `[0, 1]`
    pub progress: f64,
    pub total: f64,
}

/// Evaluate the board from the perspective of `player`.
///
/// Returns a score where:
/// - Positive values indicate advantage for `player`
/// - `+inf` means `player` is already home, `-inf` means the opponent is
///
/// # Arguments
/// * `board` - The board state (usually a search copy)
/// * `player` - The perspective to score for
/// * `wall_weight` - Value of each wall left in `player`'s budget
#[must_use]
pub fn evaluate(board: &Board, player: PlayerId, wall_weight: f64) -> f64 {
    evaluate_breakdown(board, player, wall_weight).total
}

/// Same as [`evaluate`] but returns every term
#[must_use]
pub fn evaluate_breakdown(board: &Board, player: PlayerId, wall_weight: f64) -> EvalBreakdown {
    let opponent = player.opponent();
    let walls_left = board.walls_left(player);
    let progress = progress(board, player);

    let terminal = |total: f64, own_path: Option<u32>, opponent_path: Option<u32>| EvalBreakdown {
        own_path,
        opponent_path,
        walls_left,
        progress,
        total,
    };

    if board.has_reached_goal(player) {
        return terminal(WIN_SCORE, Some(0), None);
    }
    if board.has_reached_goal(opponent) {
        return terminal(LOSS_SCORE, None, Some(0));
    }

    let own_path = shortest_path_length(board, player);
    let opponent_path = shortest_path_length(board, opponent);

    // Only reachable on hypothetical boards
    let (Some(own), Some(opp)) = (own_path, opponent_path) else {
        let total = if own_path.is_none() { LOSS_SCORE } else { WIN_SCORE };
        return terminal(total, own_path, opponent_path);
    };

    let path_score = PATH_WEIGHT * (f64::from(opp) - f64::from(own));
    let wall_score = wall_weight * f64::from(walls_left);
    let total = path_score + wall_score + PROGRESS_WEIGHT * progress;

    EvalBreakdown {
        own_path,
        opponent_path,
        walls_left,
        progress,
        total,
    }
}

/// Fraction of the board depth covered by `player`'s pawn
fn progress(board: &Board, player: PlayerId) -> f64 {
    let depth = (board.size() - 1) as f64;
    let remaining = f64::from(board.pawn(player).row.abs_diff(board.objective_row(player)));
    (depth - remaining) / depth
}
