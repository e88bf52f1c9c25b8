//! Game state management for the Quoridor GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::board::{Move, Orientation, PlayerId};
use crate::engine::{AIEngine, AiConfig, Difficulty, MoveResult};
use crate::eval::{evaluate_breakdown, EvalBreakdown};
use crate::game::Game;
use crate::player::{MoveRequest, PlayerKind};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE {
        human: PlayerId,
        difficulty: Difficulty,
    },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human: PlayerId::One,
            difficulty: Difficulty::Medium,
        }
    }
}

impl GameMode {
    fn controllers(self) -> [PlayerKind; 2] {
        match self {
            GameMode::PvE { human, difficulty } => {
                let ai = || PlayerKind::ai(difficulty);
                match human {
                    PlayerId::One => [PlayerKind::Human, ai()],
                    PlayerId::Two => [ai(), PlayerKind::Human],
                }
            }
            GameMode::PvP => [PlayerKind::Human, PlayerKind::Human],
        }
    }

    /// Fresh controller for one side
    fn controller(self, player: PlayerId) -> PlayerKind {
        let [one, two] = self.controllers();
        match player {
            PlayerId::One => one,
            PlayerId::Two => two,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    /// The AI's controller lives on the worker until it answers
    Thinking {
        receiver: Receiver<(PlayerKind, MoveRequest)>,
        player: PlayerId,
        start_time: Instant,
    },
    /// Hint search for the side to move; dropped when the position changes
    Hinting { receiver: Receiver<MoveResult> },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    players: [PlayerKind; 2],
    pub last_ai_result: Option<MoveResult>,
    /// Evaluation of the current position for the side that just moved
    pub last_eval: Option<(PlayerId, EvalBreakdown)>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
    pub wall_orientation: Orientation,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            game: Game::new(),
            mode,
            players: mode.controllers(),
            last_ai_result: None,
            last_eval: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            wall_orientation: Orientation::Horizontal,
        }
    }

    /// Restart in the same mode
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    pub fn current_turn(&self) -> PlayerId {
        self.game.turn()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human, .. } => self.game.turn() == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_hinting(&self) -> bool {
        matches!(self.ai_state, AiState::Hinting { .. })
    }

    /// Drop a pending hint, its position is gone
    fn cancel_hint(&mut self) {
        if self.is_hinting() {
            self.ai_state = AiState::Idle;
        }
    }

    /// Replay the log into each AI controller's visit history
    fn rebuild_histories(&mut self) {
        for controller in &mut self.players {
            controller.reset();
        }
        for entry in self.game.log() {
            self.players[entry.player.index()].move_committed(entry.mv);
        }
    }

    pub fn player_label(&self, id: PlayerId) -> String {
        match self.mode {
            GameMode::PvE { human, difficulty } if human != id => format!("AI ({})", difficulty.label()),
            GameMode::PvE { .. } => "You".to_string(),
            GameMode::PvP => self.players[id.index()].label(),
        }
    }

    pub fn toggle_orientation(&mut self) {
        self.wall_orientation = self.wall_orientation.flipped();
    }

    /// Attempt a human move
    pub fn try_human_move(&mut self, mv: Move) -> Result<(), String> {
        if self.game.is_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(mv).map_err(|e| e.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) -> Result<(), crate::error::GameError> {
        let player = self.game.turn();
        self.game.try_move(mv)?;
        self.players[player.index()].move_committed(mv);
        self.cancel_hint();

        self.suggested_move = None;
        self.message = None;
        self.last_eval = Some((player, evaluate_breakdown(self.game.board(), player, 1.0)));

        self.move_timer.stop();
        if !self.game.is_over() {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game.is_over() {
            return;
        }

        let player = self.game.turn();
        let board = self.game.board().clone();
        let mut controller = std::mem::replace(&mut self.players[player.index()], PlayerKind::Human);

        let (tx, rx) = channel();
        thread::spawn(move || {
            let request = controller.request_move(&board, player);
            let _ = tx.send((controller, request));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            player,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        if let AiState::Hinting { receiver } = &self.ai_state {
            match receiver.try_recv() {
                Ok(result) => {
                    self.ai_state = AiState::Idle;
                    self.suggested_move = result.best_move;
                    self.last_ai_result = Some(result);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    warn!("hint worker disconnected");
                    self.ai_state = AiState::Idle;
                }
            }
            return;
        }

        let (received, player, elapsed) = match &self.ai_state {
            AiState::Thinking {
                receiver,
                player,
                start_time,
            } => match receiver.try_recv() {
                Ok(received) => (received, *player, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!(?player, "AI worker disconnected");
                    let player = *player;
                    self.ai_state = AiState::Idle;
                    self.players[player.index()] = self.mode.controller(player);
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle | AiState::Hinting { .. } => return,
        };

        let (controller, request) = received;
        self.players[player.index()] = controller;
        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);

        let MoveRequest::Ready(result) = request else {
            return;
        };
        self.last_ai_result = Some(result.clone());

        match result.best_move {
            Some(mv) => {
                if let Err(e) = self.execute_move(mv) {
                    warn!(error = %e, "AI move rejected");
                    self.message = Some(format!("AI move rejected: {e}"));
                }
            }
            None => self.message = Some("AI has no legal move".to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle | AiState::Hinting { .. } => None,
        }
    }

    /// Request move suggestion for PvP mode, searched on a worker thread
    pub fn request_suggestion(&mut self) {
        if self.game.is_over() || self.is_ai_thinking() || self.is_hinting() {
            return;
        }

        let config = AiConfig {
            search_depth: 2,
            random_move_chance: 0.0,
            ..AiConfig::default()
        };
        let board = self.game.board().clone();
        let player = self.game.turn();

        let (tx, rx) = channel();
        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let _ = tx.send(engine.get_move_with_stats(&board, player));
        });

        self.ai_state = AiState::Hinting { receiver: rx };
    }

    /// Write the current game to `path`
    pub fn save_game(&mut self, path: &str) {
        match self.game.save(path) {
            Ok(()) => self.message = Some(format!("Saved to {path}")),
            Err(e) => {
                warn!(error = %e, path, "save failed");
                self.message = Some(format!("Save failed: {e}"));
            }
        }
    }

    /// Replace the current game with the one saved at `path`, keeping the mode
    pub fn load_game(&mut self, path: &str) {
        if self.is_ai_thinking() {
            self.message = Some("AI is thinking".to_string());
            return;
        }

        match Game::load(path) {
            Ok(game) => {
                self.game = game;
                self.cancel_hint();
                self.rebuild_histories();
                self.last_ai_result = None;
                self.last_eval = None;
                self.suggested_move = None;
                self.move_timer = MoveTimer::default();
                self.message = Some(format!("Loaded {path}"));
            }
            Err(e) => {
                warn!(error = %e, path, "load failed");
                self.message = Some(format!("Load failed: {e}"));
            }
        }
    }

    /// Undo last move; in PvE, back to the human's turn
    pub fn undo(&mut self) {
        if !self.game.can_undo() || self.is_ai_thinking() {
            return;
        }

        self.game.undo();
        if let GameMode::PvE { human, .. } = self.mode {
            while self.game.turn() != human && self.game.can_undo() {
                self.game.undo();
            }
        }
        self.cancel_hint();
        self.rebuild_histories();

        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }

    /// Redo the last undone move; in PvE, the AI reply too
    pub fn redo(&mut self) {
        if !self.game.can_redo() || self.is_ai_thinking() {
            return;
        }

        self.game.redo();
        if let GameMode::PvE { human, .. } = self.mode {
            while self.game.turn() != human && self.game.can_redo() {
                self.game.redo();
            }
        }
        self.cancel_hint();
        self.rebuild_histories();

        self.suggested_move = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::is_legal_move;

    fn ai_history(state: &GameState, id: PlayerId) -> Vec<Pos> {
        match &state.players[id.index()] {
            PlayerKind::Ai(engine) => engine.history().iter().copied().collect(),
            PlayerKind::Human => panic!("expected an AI controller"),
        }
    }

    fn ai_first() -> GameState {
        GameState::new(GameMode::PvE {
            human: PlayerId::Two,
            difficulty: Difficulty::Easy,
        })
    }

    #[test]
    fn test_undo_rewinds_ai_history() {
        let mut state = ai_first();
        for (row, col) in [(14, 8), (2, 8), (12, 8)] {
            state.execute_move(Move::Pawn(Pos::new(row, col))).unwrap();
        }
        assert_eq!(ai_history(&state, PlayerId::One), vec![Pos::new(14, 8), Pos::new(12, 8)]);

        state.undo();
        assert_eq!(state.game.move_count(), 1);
        assert_eq!(state.game.turn(), PlayerId::Two);
        assert_eq!(ai_history(&state, PlayerId::One), vec![Pos::new(14, 8)]);

        state.redo();
        assert_eq!(state.game.move_count(), 3);
        assert_eq!(ai_history(&state, PlayerId::One), vec![Pos::new(14, 8), Pos::new(12, 8)]);
    }

    #[test]
    fn test_hint_runs_off_thread() {
        let mut state = GameState::new(GameMode::PvP);
        state.request_suggestion();
        assert!(state.is_hinting());
        assert!(!state.is_ai_thinking());

        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_hinting() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!state.is_hinting());
        let hint = state.suggested_move.unwrap();
        assert!(is_legal_move(state.game.board(), PlayerId::One, hint));
    }

    #[test]
    fn test_move_cancels_pending_hint() {
        let mut state = GameState::new(GameMode::PvP);
        state.request_suggestion();
        state.try_human_move(Move::Pawn(Pos::new(14, 8))).unwrap();
        assert!(!state.is_hinting());
        state.check_ai_result();
        assert_eq!(state.suggested_move, None);
    }

    #[test]
    fn test_save_and_load_restore_game() {
        let path = std::env::temp_dir().join(format!("quoridor-ui-{}.json", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let mut state = ai_first();
        for (row, col) in [(14, 8), (2, 8), (12, 8)] {
            state.execute_move(Move::Pawn(Pos::new(row, col))).unwrap();
        }
        state.save_game(&path);
        let saved_board = state.game.board().clone();

        let mut fresh = ai_first();
        fresh.load_game(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(fresh.game.board(), &saved_board);
        assert_eq!(fresh.game.turn(), PlayerId::Two);
        assert_eq!(ai_history(&fresh, PlayerId::One), vec![Pos::new(14, 8), Pos::new(12, 8)]);
    }

    #[test]
    fn test_failed_load_keeps_game() {
        let mut state = ai_first();
        state.execute_move(Move::Pawn(Pos::new(14, 8))).unwrap();
        state.load_game("/nonexistent/quoridor/save.json");
        assert_eq!(state.game.move_count(), 1);
        assert!(state.message.as_deref().is_some_and(|m| m.starts_with("Load failed")));
    }
}
