//! Depth-limited minimax with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Quoridor AI.
//! Values are always scored from the searching player's point of view and
//! each node knows whether it maximizes or minimizes; scores are never
//! negated between plies.
//!
//! # Features
//!
//! - Root instant-win scan before any recursion
//! - Move ordering: winning pawn move, other pawn moves, then walls
//! - Wall-candidate bounding by strategic priority
//! - Root-only anti-oscillation from the AI's visit history
//! - Optional deadline that degrades to static evaluation
//!
//! # Example
//!
//! ```
//! use quoridor::board::{Board, PlayerId};
//! use quoridor::search::{SearchConfig, Searcher, VisitHistory};
//!
//! let mut searcher = Searcher::new(SearchConfig::default());
//! let board = Board::new();
//!
//! let result = searcher.search(&board, PlayerId::One, &VisitHistory::new());
//! assert!(result.best_move.is_some());
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::board::{Board, Move, PlayerId};
use crate::eval::evaluate;
use crate::rules::{check_winner, generate_pawn_moves};

use super::history::VisitHistory;
use super::ordering::{ordered_moves, DEFAULT_WALL_CANDIDATE_CAP};
use super::virtual_board::VirtualBoard;

/// Infinity score for alpha-beta bounds
pub const INF: f64 = f64::INFINITY;

/// Flat bonus for root wall moves while the AI is stuck
const STUCK_WALL_BONUS: f64 = 0.5;

/// Nodes between deadline checks
const TIME_CHECK_INTERVAL: u64 = 256;

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Plies searched, counting the root move
    pub max_depth: u8,
    /// Weight of each remaining wall in the evaluation
    pub wall_weight: f64,
    /// Wall placements expanded per node
    pub wall_candidate_cap: usize,
    /// `false` runs plain minimax over the same candidates
    pub pruning: bool,
    /// Optional deadline; past it nodes return their static evaluation
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            wall_weight: 1.0,
            wall_candidate_cap: DEFAULT_WALL_CANDIDATE_CAP,
            pruning: true,
            time_limit: None,
        }
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Total alpha-beta cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Static evaluations at depth-exhausted or dead-end nodes
    pub leaf_evals: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when the root has no legal move
    pub best_move: Option<Move>,
    /// Minimax value of the best move
    pub score: f64,
    /// Value after the root anti-oscillation adjustments
    pub adjusted_score: f64,
    /// Configured depth
    pub depth: u8,
    /// Nodes visited below the root
    pub nodes: u64,
    /// Won on the spot by the root scan
    pub instant_win: bool,
    /// Deadline passed before the search finished
    pub timed_out: bool,
    pub stats: SearchStats,
}

impl SearchResult {
    fn empty(depth: u8, score: f64) -> Self {
        Self {
            best_move: None,
            score,
            adjusted_score: score,
            depth,
            nodes: 0,
            instant_win: false,
            timed_out: false,
            stats: SearchStats::default(),
        }
    }
}

// =============================================================================
// Searcher
// =============================================================================

/// Minimax searcher over virtual boards.
///
/// The searcher never receives the authoritative board mutably; every
/// expansion works on a fresh `VirtualBoard`.
pub struct Searcher {
    config: SearchConfig,
    /// Side the values are scored for, fixed per search
    ai: PlayerId,
    nodes: u64,
    stats: SearchStats,
    start_time: Option<Instant>,
    stopped: bool,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            ai: PlayerId::One,
            nodes: 0,
            stats: SearchStats::default(),
            start_time: None,
            stopped: false,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Choose a move for `player`.
    ///
    /// `history` holds the cells the player's pawn visited recently and only
    /// affects the comparison between root moves.
    pub fn search(
        &mut self,
        board: &Board,
        player: PlayerId,
        history: &VisitHistory,
    ) -> SearchResult {
        self.ai = player;
        self.nodes = 0;
        self.stats = SearchStats::default();
        self.stopped = false;
        self.start_time = Some(Instant::now());

        let depth = self.config.max_depth.max(1);

        // Instant win: never missed regardless of depth
        let objective = board.objective_row(player);
        if let Some(win) = generate_pawn_moves(board, player)
            .into_iter()
            .find(|mv| mv.target().is_some_and(|to| to.row == objective))
        {
            debug!(?player, ?win, "instant win at root");
            let mut result = SearchResult::empty(depth, INF);
            result.best_move = Some(win);
            result.instant_win = true;
            return result;
        }

        let moves = ordered_moves(board, player, self.config.wall_candidate_cap);
        if moves.is_empty() {
            debug!(?player, "no legal move at root");
            return SearchResult::empty(depth, evaluate(board, player, self.config.wall_weight));
        }

        let root = VirtualBoard::from_board(board);
        let stuck = history.is_stuck();
        let mut best_move = None;
        let mut best_score = -INF;
        let mut best_adjusted = -INF;

        for mv in moves {
            let adjustment = match mv {
                Move::Pawn(to) => -history.penalty(to),
                Move::Wall(_) if stuck => STUCK_WALL_BONUS,
                Move::Wall(_) => 0.0,
            };

            // Only a value above `best_adjusted - adjustment` can win the root
            // comparison, so that is the child's lower bound.
            let alpha = if self.config.pruning && best_move.is_some() {
                best_adjusted - adjustment
            } else {
                -INF
            };

            let child = root.apply(mv, player);
            let score = self.minimax(&child, player.opponent(), depth - 1, alpha, INF);
            let adjusted = score + adjustment;
            trace!(?mv, score, adjusted, "root move");

            if best_move.is_none() || adjusted > best_adjusted {
                best_move = Some(mv);
                best_score = score;
                best_adjusted = adjusted;
            }
        }

        debug!(
            ?player,
            ?best_move,
            score = best_score,
            depth,
            nodes = self.nodes,
            timed_out = self.stopped,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            adjusted_score: best_adjusted,
            depth,
            nodes: self.nodes,
            instant_win: false,
            timed_out: self.stopped,
            stats: self.stats.clone(),
        }
    }

    /// Check the deadline and latch `stopped` once it passes.
    #[inline]
    fn check_time(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if let (Some(start), Some(limit)) = (self.start_time, self.config.time_limit) {
            if start.elapsed() >= limit {
                self.stopped = true;
            }
        }
        self.stopped
    }

    fn leaf(&mut self, board: &Board) -> f64 {
        self.stats.leaf_evals += 1;
        evaluate(board, self.ai, self.config.wall_weight)
    }

    /// Minimax value of `state` with `to_move` on turn, from the AI's side.
    fn minimax(
        &mut self,
        state: &VirtualBoard,
        to_move: PlayerId,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.nodes += 1;

        if self.nodes % TIME_CHECK_INTERVAL == 0 {
            self.check_time();
        }

        let board = state.board();

        // Terminal, fixed perspective
        if let Some(winner) = check_winner(board) {
            return if winner == self.ai { INF } else { -INF };
        }

        if depth == 0 || self.stopped {
            return self.leaf(board);
        }

        let moves = ordered_moves(board, to_move, self.config.wall_candidate_cap);
        if moves.is_empty() {
            return self.leaf(board);
        }

        let maximizing = to_move == self.ai;
        let mut value = if maximizing { -INF } else { INF };

        for (i, mv) in moves.into_iter().enumerate() {
            let child = state.apply(mv, to_move);
            let score = self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta);

            if maximizing {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        value
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// One-shot search with the default wall cap.
///
/// Returns `None` when `player` has no legal move.
pub fn find_best_move(
    board: &Board,
    player: PlayerId,
    depth: u8,
    wall_weight: f64,
    history: &VisitHistory,
) -> Option<Move> {
    let config = SearchConfig {
        max_depth: depth,
        wall_weight,
        ..SearchConfig::default()
    };
    Searcher::new(config).search(board, player, history).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Wall};
    use crate::rules::{is_legal_move, shortest_path_length};

    fn config(depth: u8, pruning: bool) -> SearchConfig {
        SearchConfig {
            max_depth: depth,
            pruning,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn test_instant_win_every_depth() {
        let mut board = Board::new();
        board.place_pawn(PlayerId::One, Pos::new(2, 6));
        board.place_pawn(PlayerId::Two, Pos::new(8, 8));

        for depth in 1..=3 {
            let mv = find_best_move(&board, PlayerId::One, depth, 1.0, &VisitHistory::new());
            assert_eq!(mv, Some(Move::Pawn(Pos::new(0, 6))), "depth {depth}");
        }
    }

    #[test]
    fn test_instant_win_by_diagonal_jump() {
        let mut board = Board::new();
        board.place_pawn(PlayerId::Two, Pos::new(14, 8));
        // Player one sits on row 16 in front of player two; straight jump off the edge
        let mut searcher = Searcher::new(config(3, true));
        let result = searcher.search(&board, PlayerId::Two, &VisitHistory::new());
        assert!(result.instant_win);
        let to = result.best_move.and_then(Move::target).unwrap();
        assert_eq!(to.row, 16);
        assert_eq!(result.score, INF);
    }

    #[test]
    fn test_depth_one_start_advances() {
        let board = Board::new();
        let mv = find_best_move(&board, PlayerId::One, 1, 1.0, &VisitHistory::new()).unwrap();
        assert!(mv.is_pawn());

        let mut after = board.clone();
        after.apply_move(mv, PlayerId::One).unwrap();
        assert_eq!(shortest_path_length(&after, PlayerId::One), Some(7));
    }

    #[test]
    fn test_result_is_legal() {
        let mut board = Board::new();
        board.apply_move(Move::Pawn(Pos::new(14, 8)), PlayerId::One).unwrap();
        board.apply_move(Move::Wall(Wall::horizontal(13, 7)), PlayerId::Two).unwrap();

        let mut searcher = Searcher::new(config(2, true));
        let result = searcher.search(&board, PlayerId::One, &VisitHistory::new());
        let mv = result.best_move.unwrap();
        assert!(is_legal_move(&board, PlayerId::One, mv));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_search_does_not_touch_board() {
        let board = Board::new();
        let before = board.clone();
        let mut searcher = Searcher::new(config(2, true));
        let _ = searcher.search(&board, PlayerId::Two, &VisitHistory::new());
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_matches_exhaustive_minimax() {
        let mut positions = Vec::new();

        let start = Board::with_walls(4, 1);
        positions.push((start.clone(), PlayerId::One));
        positions.push((start.clone(), PlayerId::Two));

        let mut walled = start.clone();
        walled.place_wall(Wall::horizontal(3, 3), PlayerId::Two);
        positions.push((walled.clone(), PlayerId::One));

        let mut advanced = Board::with_walls(4, 2);
        advanced.place_pawn(PlayerId::One, Pos::new(4, 2));
        advanced.place_pawn(PlayerId::Two, Pos::new(2, 4));
        positions.push((advanced, PlayerId::Two));

        for (board, player) in positions {
            for depth in 1..=3 {
                let history = VisitHistory::new();
                let mut pruned = Searcher::new(config(depth, true));
                let mut full = Searcher::new(config(depth, false));
                let a = pruned.search(&board, player, &history);
                let b = full.search(&board, player, &history);

                assert_eq!(a.score, b.score, "depth {depth}");
                assert_eq!(a.best_move, b.best_move, "depth {depth}");
                assert!(a.nodes <= b.nodes);
            }
        }
    }

    #[test]
    fn test_pruning_with_history_matches_exhaustive() {
        let board = Board::with_walls(4, 1);
        let mut history = VisitHistory::new();
        history.push(Pos::new(4, 4));
        history.push(Pos::new(6, 4));
        history.push(Pos::new(4, 4));
        history.push(Pos::new(6, 4));

        let mut pruned = Searcher::new(config(3, true));
        let mut full = Searcher::new(config(3, false));
        let a = pruned.search(&board, PlayerId::One, &history);
        let b = full.search(&board, PlayerId::One, &history);
        assert_eq!(a.adjusted_score, b.adjusted_score);
        assert_eq!(a.best_move, b.best_move);
    }

    #[test]
    fn test_oscillation_penalty_avoids_revisit() {
        let board = Board::new();
        let forward = Move::Pawn(Pos::new(14, 8));
        assert_eq!(
            find_best_move(&board, PlayerId::One, 1, 1.0, &VisitHistory::new()),
            Some(forward)
        );

        let mut history = VisitHistory::new();
        for _ in 0..3 {
            history.push(Pos::new(14, 8));
        }
        let mv = find_best_move(&board, PlayerId::One, 1, 1.0, &history);
        assert!(mv.is_some());
        assert_ne!(mv, Some(forward));
    }

    #[test]
    fn test_no_legal_move() {
        // Player one boxed in by two walls, the edge and player two
        let mut board = Board::with_walls(3, 0);
        board.place_pawn(PlayerId::One, Pos::new(4, 2));
        board.place_pawn(PlayerId::Two, Pos::new(4, 0));
        board.place_wall(Wall::horizontal(3, 1), PlayerId::Two);
        board.place_wall(Wall::vertical(3, 3), PlayerId::Two);

        let result =
            Searcher::new(config(2, true)).search(&board, PlayerId::One, &VisitHistory::new());
        assert!(result.best_move.is_none());
        assert_eq!(
            find_best_move(&board, PlayerId::One, 2, 1.0, &VisitHistory::new()),
            None
        );
    }

    #[test]
    fn test_deadline_still_returns_move() {
        let board = Board::new();
        let mut searcher = Searcher::new(SearchConfig {
            max_depth: 3,
            time_limit: Some(Duration::ZERO),
            ..SearchConfig::default()
        });
        let result = searcher.search(&board, PlayerId::One, &VisitHistory::new());
        assert!(result.timed_out);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_stats_rate() {
        let stats = SearchStats {
            cutoffs: 4,
            first_move_cutoffs: 3,
            leaf_evals: 0,
        };
        assert_eq!(stats.first_move_rate(), 75.0);
        assert_eq!(SearchStats::default().first_move_rate(), 0.0);
    }
}
