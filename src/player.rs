//! Player controllers
//!
//! Humans and AIs sit behind the same `request_move` call. Callers branch on
//! the returned `MoveRequest`, never on the kind of player.

use crate::board::{Board, Move, PlayerId};
use crate::engine::{AIEngine, Difficulty, MoveResult};

/// Who controls a side
#[derive(Debug)]
pub enum PlayerKind {
    Human,
    Ai(Box<AIEngine>),
}

/// Outcome of asking a player for a move
#[derive(Debug, Clone)]
pub enum MoveRequest {
    /// Wait for UI input
    AwaitInput,
    /// A decided move
    Ready(MoveResult),
}

impl PlayerKind {
    pub fn ai(difficulty: Difficulty) -> Self {
        PlayerKind::Ai(Box::new(AIEngine::with_difficulty(difficulty)))
    }

    #[inline]
    pub fn is_ai(&self) -> bool {
        matches!(self, PlayerKind::Ai(_))
    }

    pub fn label(&self) -> String {
        match self {
            PlayerKind::Human => "Human".to_string(),
            PlayerKind::Ai(engine) => format!("AI (depth {})", engine.max_depth()),
        }
    }

    /// Ask this player for a move on `board` as `id`
    pub fn request_move(&mut self, board: &Board, id: PlayerId) -> MoveRequest {
        match self {
            PlayerKind::Human => MoveRequest::AwaitInput,
            PlayerKind::Ai(engine) => MoveRequest::Ready(engine.get_move_with_stats(board, id)),
        }
    }

    /// Tell the controller one of its moves was committed
    pub fn move_committed(&mut self, mv: Move) {
        if let PlayerKind::Ai(engine) = self {
            engine.record_move(mv);
        }
    }

    /// Forget per-game state
    pub fn reset(&mut self) {
        if let PlayerKind::Ai(engine) = self {
            engine.reset();
        }
    }
}
