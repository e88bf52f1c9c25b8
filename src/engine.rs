//! AI player controller
//!
//! This module provides the AI engine that picks and commits moves for a
//! computer player. Each turn follows this order:
//!
//! 1. **Random move**: with probability `random_move_chance`, play a uniformly
//!    random legal move (imperfect play for the easier tiers)
//! 2. **Search**: otherwise run the minimax searcher, which itself returns an
//!    immediate win without recursing when one exists
//!
//! The engine keeps the visit history of its own pawn for the whole game and
//! hands it to every search for root-level anti-oscillation.
//!
//! # Example
//!
//! ```
//! use quoridor::{AIEngine, Board, Difficulty, PlayerId};
//!
//! let mut engine = AIEngine::with_difficulty(Difficulty::Easy);
//! let mut board = Board::new();
//!
//! let result = engine.play_turn(&mut board, PlayerId::One).unwrap();
//! println!("Played {:?} via {:?}", result.best_move, result.search_type);
//! ```

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::board::{Board, Move, PlayerId, Pos};
use crate::error::{EngineError, MoveError};
use crate::eval::weights::{WALL_WEIGHT_EASY, WALL_WEIGHT_HARD, WALL_WEIGHT_MEDIUM};
use crate::rules::generate_all_moves;
use crate::search::{
    SearchConfig, SearchResult, SearchStats, Searcher, VisitHistory, DEFAULT_WALL_CANDIDATE_CAP,
};

/// AI strength preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Preset configuration for this tier
    pub fn config(self) -> AiConfig {
        let (search_depth, wall_weight, random_move_chance) = match self {
            Difficulty::Easy => (1, WALL_WEIGHT_EASY, 0.2),
            Difficulty::Medium => (2, WALL_WEIGHT_MEDIUM, 0.05),
            Difficulty::Hard => (3, WALL_WEIGHT_HARD, 0.0),
        };
        AiConfig {
            search_depth,
            wall_weight,
            random_move_chance,
            wall_candidate_cap: DEFAULT_WALL_CANDIDATE_CAP,
            time_limit: None,
        }
    }
}

/// Difficulty-derived configuration of an AI player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig {
    /// Plies searched, counting the AI's own move
    pub search_depth: u8,
    /// Evaluation weight of each wall left
    pub wall_weight: f64,
    /// Probability of playing a random legal move instead of searching
    pub random_move_chance: f64,
    /// Wall placements expanded per search node
    pub wall_candidate_cap: usize,
    /// Optional search deadline
    pub time_limit: Option<Duration>,
}

impl AiConfig {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.search_depth,
            wall_weight: self.wall_weight,
            wall_candidate_cap: self.wall_candidate_cap,
            pruning: true,
            time_limit: self.time_limit,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

/// Which part of the engine produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Pawn move straight onto the objective row
    ImmediateWin,
    /// Random legal move
    Random,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move decision with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` when no legal move exists
    pub best_move: Option<Move>,
    /// Search value of the move from the AI's side (0 for random moves)
    pub score: f64,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Cutoff and leaf counters of the search (zero for random moves)
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn random(mv: Option<Move>, time_ms: u64) -> Self {
        Self {
            best_move: mv,
            score: 0.0,
            search_type: SearchType::Random,
            time_ms,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        let search_type = if result.instant_win {
            SearchType::ImmediateWin
        } else {
            SearchType::AlphaBeta
        };
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
            stats: result.stats,
        }
    }
}

/// AI engine for Quoridor.
///
/// Owns the searcher, its configuration, the random source for imperfect
/// play, and the visit history of its pawn.
pub struct AIEngine {
    config: AiConfig,
    searcher: Searcher,
    history: VisitHistory,
    rng: StdRng,
}

impl AIEngine {
    /// Medium difficulty engine
    #[must_use]
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::Medium)
    }

    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::with_config(difficulty.config())
    }

    /// Engine with custom configuration, seeded from the OS
    #[must_use]
    pub fn with_config(config: AiConfig) -> Self {
        Self::build(config, StdRng::from_os_rng())
    }

    /// Engine with a fixed seed, for reproducible play
    #[must_use]
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: AiConfig, rng: StdRng) -> Self {
        Self {
            searcher: Searcher::new(config.search_config()),
            config,
            history: VisitHistory::new(),
            rng,
        }
    }

    /// Best move for `player`, or `None` if no legal move exists.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, player: PlayerId) -> Option<Move> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Decide a move without committing it.
    ///
    /// The board is only read; the search works on its own copies.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, player: PlayerId) -> MoveResult {
        let start = Instant::now();

        if self.config.random_move_chance > 0.0
            && self.rng.random::<f64>() < self.config.random_move_chance
        {
            let moves = generate_all_moves(board, player);
            let mv = moves.choose(&mut self.rng).copied();
            info!(?player, ?mv, "random move");
            return MoveResult::random(mv, start.elapsed().as_millis() as u64);
        }

        let result = self.searcher.search(board, player, &self.history);
        let elapsed = start.elapsed().as_millis() as u64;
        info!(
            ?player,
            mv = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            cutoffs = result.stats.cutoffs,
            elapsed_ms = elapsed,
            "search move"
        );
        MoveResult::from_search(result, elapsed)
    }

    /// Commit `mv` to the authoritative board and update the visit history.
    ///
    /// Nothing changes when the move is rejected.
    pub fn commit(
        &mut self,
        board: &mut Board,
        player: PlayerId,
        mv: Move,
    ) -> Result<(), MoveError> {
        board.apply_move(mv, player)?;
        self.record_move(mv);
        Ok(())
    }

    /// Decide and commit a move in one step.
    ///
    /// Returns `EngineError::NoLegalMove` without touching any state when
    /// the player cannot move.
    pub fn play_turn(
        &mut self,
        board: &mut Board,
        player: PlayerId,
    ) -> Result<MoveResult, EngineError> {
        let result = self.get_move_with_stats(board, player);
        let mv = result.best_move.ok_or(EngineError::NoLegalMove)?;
        self.commit(board, player, mv)?;
        Ok(result)
    }

    /// Record a move of this engine's player committed elsewhere.
    /// Only pawn moves enter the history.
    pub fn record_move(&mut self, mv: Move) {
        if let Move::Pawn(to) = mv {
            self.record_visit(to);
        }
    }

    pub fn record_visit(&mut self, cell: Pos) {
        debug!(row = cell.row, col = cell.col, "visit");
        self.history.push(cell);
    }

    pub fn history(&self) -> &VisitHistory {
        &self.history
    }

    /// Forget visited cells, for a new game
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.set_config(difficulty.config());
    }

    pub fn set_config(&mut self, config: AiConfig) {
        self.config = config;
        self.searcher.set_config(config.search_config());
    }

    /// Set maximum search depth
    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.search_depth = depth;
        self.searcher.set_config(self.config.search_config());
    }

    /// Set (or clear) the search deadline
    pub fn set_time_limit(&mut self, limit: Option<Duration>) {
        self.config.time_limit = limit;
        self.searcher.set_config(self.config.search_config());
    }

    pub fn max_depth(&self) -> u8 {
        self.config.search_depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AIEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AIEngine")
            .field("config", &self.config)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
