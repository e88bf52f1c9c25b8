//! Game session: turn order, move log, undo and redo, save files
//!
//! Undo rebuilds the board by replaying the log from the initial position,
//! so every intermediate state is one reached through committed moves.
//! Save files hold the same two things (start position and log), and
//! loading replays the log through the validated move path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Move, PlayerId, Pos, Wall};
use crate::error::{GameError, SaveError};
use crate::rules::{check_winner, generate_all_moves, has_path, is_wall_placement_free};

/// Save format version written by [`Game::to_saved`]
pub const SAVE_VERSION: u32 = 1;

/// One committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedMove {
    pub player: PlayerId,
    pub mv: Move,
}

/// Position a saved game starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartPosition {
    pub pawn_dim: usize,
    pub wall_budget: u8,
    /// Player one, player two
    pub pawns: [Pos; 2],
    pub walls_left: [u8; 2],
    pub walls: Vec<Wall>,
}

impl StartPosition {
    fn of(board: &Board) -> Self {
        Self {
            pawn_dim: board.pawn_dim(),
            wall_budget: board.wall_budget(),
            pawns: [board.pawn(PlayerId::One), board.pawn(PlayerId::Two)],
            walls_left: [board.walls_left(PlayerId::One), board.walls_left(PlayerId::Two)],
            walls: board.walls(),
        }
    }

    /// Rebuild the board, rejecting positions no game could reach
    fn restore(&self) -> Result<Board, SaveError> {
        if !(2..=64).contains(&self.pawn_dim) {
            return Err(SaveError::InvalidBoard("board size out of range"));
        }
        let mut board = Board::with_walls(self.pawn_dim, self.wall_budget);

        for &wall in &self.walls {
            if !is_wall_placement_free(&board, wall) {
                return Err(SaveError::InvalidBoard("misplaced or overlapping wall"));
            }
            board.place_wall(wall, PlayerId::One);
        }

        let size = board.size();
        let on_grid =
            |pos: Pos| pos.is_cell() && (pos.row as usize) < size && (pos.col as usize) < size;
        if !self.pawns.iter().all(|&pos| on_grid(pos)) {
            return Err(SaveError::InvalidBoard("pawn off the cell grid"));
        }
        if self.pawns[0] == self.pawns[1] {
            return Err(SaveError::InvalidBoard("pawns share a cell"));
        }
        if self.walls_left.iter().any(|&left| left > self.wall_budget) {
            return Err(SaveError::InvalidBoard("wall count above budget"));
        }

        for (id, (&pos, &left)) in [PlayerId::One, PlayerId::Two]
            .into_iter()
            .zip(self.pawns.iter().zip(&self.walls_left))
        {
            board.place_pawn(id, pos);
            board.set_walls_left(id, left);
        }

        if !has_path(&board, PlayerId::One) || !has_path(&board, PlayerId::Two) {
            return Err(SaveError::InvalidBoard("a player is cut off from its goal"));
        }
        Ok(board)
    }
}

/// On-disk form of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub version: u32,
    pub start: StartPosition,
    pub first: PlayerId,
    pub moves: Vec<LoggedMove>,
}

/// Version field alone, read before the rest of the file
#[derive(Deserialize)]
struct SaveHeader {
    version: u32,
}

#[derive(Debug, Clone)]
pub struct Game {
    initial: Board,
    board: Board,
    first: PlayerId,
    turn: PlayerId,
    log: Vec<LoggedMove>,
    redo_stack: Vec<LoggedMove>,
    winner: Option<PlayerId>,
}

impl Game {
    /// Standard board, player one moves first
    pub fn new() -> Self {
        Self::with_board(Board::new(), PlayerId::One)
    }

    /// Start from an arbitrary position
    pub fn with_board(board: Board, first: PlayerId) -> Self {
        let winner = check_winner(&board);
        Self {
            initial: board.clone(),
            board,
            first,
            turn: first,
            log: Vec::new(),
            redo_stack: Vec::new(),
            winner,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn log(&self) -> &[LoggedMove] {
        &self.log
    }

    pub fn move_count(&self) -> usize {
        self.log.len()
    }

    pub fn last_move(&self) -> Option<LoggedMove> {
        self.log.last().copied()
    }

    /// Legal moves for the side to move, empty once the game is over
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        generate_all_moves(&self.board, self.turn)
    }

    /// Play `mv` for the side to move
    pub fn try_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.try_move_as(self.turn, mv)
    }

    /// Play `mv` for `player`, rejecting out-of-turn moves
    pub fn try_move_as(&mut self, player: PlayerId, mv: Move) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if player != self.turn {
            return Err(GameError::NotYourTurn(self.turn));
        }

        self.board.apply_move(mv, player)?;
        self.log.push(LoggedMove { player, mv });
        self.redo_stack.clear();
        self.advance();

        debug!(?player, ?mv, ply = self.log.len(), "move committed");
        if let Some(winner) = self.winner {
            info!(?winner, moves = self.log.len(), "game over");
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.winner = check_winner(&self.board);
        self.turn = self.turn.opponent();
    }

    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Take back the last move
    pub fn undo(&mut self) -> Option<LoggedMove> {
        let undone = self.log.pop()?;
        self.redo_stack.push(undone);
        self.replay();
        debug!(mv = ?undone.mv, ply = self.log.len(), "undo");
        Some(undone)
    }

    /// Replay the most recently undone move
    pub fn redo(&mut self) -> Option<LoggedMove> {
        let entry = self.redo_stack.pop()?;
        self.board.play_unchecked(entry.mv, entry.player);
        self.log.push(entry);
        self.advance();
        debug!(mv = ?entry.mv, ply = self.log.len(), "redo");
        Some(entry)
    }

    /// Rebuild the board from the initial position and the log
    fn replay(&mut self) {
        self.board = self.initial.clone();
        for entry in &self.log {
            self.board.play_unchecked(entry.mv, entry.player);
        }
        self.turn = if self.log.len() % 2 == 0 {
            self.first
        } else {
            self.first.opponent()
        };
        self.winner = check_winner(&self.board);
    }

    /// Back to the initial position, clearing both stacks
    pub fn restart(&mut self) {
        self.log.clear();
        self.redo_stack.clear();
        self.replay();
    }

    /// Start position and move log. The redo stack is not kept.
    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            version: SAVE_VERSION,
            start: StartPosition::of(&self.initial),
            first: self.first,
            moves: self.log.clone(),
        }
    }

    /// Rebuild a game, re-checking every logged move
    pub fn from_saved(saved: &SavedGame) -> Result<Game, SaveError> {
        if saved.version != SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion {
                found: saved.version,
                expected: SAVE_VERSION,
            });
        }

        let mut game = Game::with_board(saved.start.restore()?, saved.first);
        for (i, entry) in saved.moves.iter().enumerate() {
            game.try_move_as(entry.player, entry.mv)
                .map_err(|source| SaveError::IllegalMove { ply: i + 1, source })?;
        }
        Ok(game)
    }

    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(&self.to_saved())?)
    }

    pub fn from_json(json: &str) -> Result<Game, SaveError> {
        let header: SaveHeader = serde_json::from_str(json)?;
        if header.version != SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion {
                found: header.version,
                expected: SAVE_VERSION,
            });
        }
        let saved: SavedGame = serde_json::from_str(json)?;
        Game::from_saved(&saved)
    }

    /// Write the game as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), moves = self.log.len(), "game saved");
        Ok(())
    }

    /// Read a game written by [`Game::save`]
    pub fn load(path: impl AsRef<Path>) -> Result<Game, SaveError> {
        let path = path.as_ref();
        let game = Game::from_json(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), moves = game.log.len(), "game loaded");
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;
    use crate::rules::has_path;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.turn(), PlayerId::One);
        game.try_move(Move::Pawn(Pos::new(14, 8))).unwrap();
        assert_eq!(game.turn(), PlayerId::Two);
        game.try_move(Move::Wall(Wall::horizontal(13, 7))).unwrap();
        assert_eq!(game.turn(), PlayerId::One);
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.board().walls_left(PlayerId::Two), 9);
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut game = Game::new();
        let err = game.try_move_as(PlayerId::Two, Move::Pawn(Pos::new(2, 8)));
        assert_eq!(err, Err(GameError::NotYourTurn(PlayerId::One)));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_illegal_move_rejected() {
        let mut game = Game::new();
        let err = game.try_move(Move::Pawn(Pos::new(15, 8)));
        assert_eq!(err, Err(GameError::Move(MoveError::NotACell(Pos::new(15, 8)))));
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), PlayerId::One);
    }

    #[test]
    fn test_winner_ends_game() {
        let mut board = Board::new();
        board.place_pawn(PlayerId::One, Pos::new(2, 0));
        let mut game = Game::with_board(board, PlayerId::One);

        game.try_move(Move::Pawn(Pos::new(0, 0))).unwrap();
        assert_eq!(game.winner(), Some(PlayerId::One));
        assert!(game.legal_moves().is_empty());
        assert_eq!(
            game.try_move(Move::Pawn(Pos::new(2, 8))),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_undo_redo() {
        let mut game = Game::new();
        game.try_move(Move::Pawn(Pos::new(14, 8))).unwrap();
        game.try_move(Move::Wall(Wall::vertical(9, 9))).unwrap();
        let after_two = game.board().clone();

        let undone = game.undo().unwrap();
        assert_eq!(undone.player, PlayerId::Two);
        assert_eq!(game.turn(), PlayerId::Two);
        assert_eq!(game.board().walls_left(PlayerId::Two), 10);
        assert!(game.board().walls().is_empty());

        game.undo().unwrap();
        assert_eq!(game.board(), &Board::new());
        assert!(game.undo().is_none());

        game.redo().unwrap();
        game.redo().unwrap();
        assert_eq!(game.board(), &after_two);
        assert_eq!(game.turn(), PlayerId::One);
        assert!(!game.can_redo());
    }

    #[test]
    fn test_new_move_clears_redo() {
        let mut game = Game::new();
        game.try_move(Move::Pawn(Pos::new(14, 8))).unwrap();
        game.undo();
        assert!(game.can_redo());
        game.try_move(Move::Pawn(Pos::new(16, 6))).unwrap();
        assert!(!game.can_redo());
    }

    #[test]
    fn test_undo_after_win() {
        let mut board = Board::new();
        board.place_pawn(PlayerId::One, Pos::new(2, 0));
        let mut game = Game::with_board(board, PlayerId::One);
        game.try_move(Move::Pawn(Pos::new(0, 0))).unwrap();
        game.undo();
        assert_eq!(game.winner(), None);
        assert_eq!(game.turn(), PlayerId::One);
    }

    #[test]
    fn test_random_play_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(0x51D3);
        for _ in 0..3 {
            let mut game = Game::new();
            for _ in 0..150 {
                if game.is_over() {
                    break;
                }
                let moves = game.legal_moves();
                let mv = *moves.choose(&mut rng).unwrap();
                game.try_move(mv).unwrap();

                let board = game.board();
                assert!(has_path(board, PlayerId::One));
                assert!(has_path(board, PlayerId::Two));
                assert_ne!(board.pawn(PlayerId::One), board.pawn(PlayerId::Two));
                for id in [PlayerId::One, PlayerId::Two] {
                    assert_eq!(board.walls_placed(id) + board.walls_left(id), 10);
                }
            }
            let total: u8 = [PlayerId::One, PlayerId::Two]
                .iter()
                .map(|&id| game.board().walls_placed(id))
                .sum();
            assert_eq!(usize::from(total), game.board().walls().len());
        }
    }

    fn sample_game() -> Game {
        let mut game = Game::new();
        game.try_move(Move::Pawn(Pos::new(14, 8))).unwrap();
        game.try_move(Move::Wall(Wall::horizontal(13, 7))).unwrap();
        game.try_move(Move::Pawn(Pos::new(14, 6))).unwrap();
        game.try_move(Move::Pawn(Pos::new(2, 8))).unwrap();
        game
    }

    #[test]
    fn test_save_round_trip() {
        let game = sample_game();
        let json = game.to_json().unwrap();
        let loaded = Game::from_json(&json).unwrap();

        assert_eq!(loaded.board(), game.board());
        assert_eq!(loaded.turn(), game.turn());
        assert_eq!(loaded.log(), game.log());
        assert_eq!(loaded.board().walls_left(PlayerId::Two), 9);

        // Undo still reaches the original start
        let mut loaded = loaded;
        while loaded.undo().is_some() {}
        assert_eq!(loaded.board(), &Board::new());
    }

    #[test]
    fn test_save_round_trip_custom_start() {
        let mut board = Board::with_walls(5, 3);
        board.place_wall(Wall::vertical(3, 3), PlayerId::Two);
        board.place_pawn(PlayerId::One, Pos::new(6, 2));
        let mut game = Game::with_board(board, PlayerId::Two);
        game.try_move(Move::Pawn(Pos::new(2, 4))).unwrap();

        let loaded = Game::from_saved(&game.to_saved()).unwrap();
        assert_eq!(loaded.board(), game.board());
        assert_eq!(loaded.turn(), PlayerId::One);
    }

    #[test]
    fn test_save_file_round_trip() {
        let path = std::env::temp_dir().join(format!("quoridor-save-{}.json", std::process::id()));
        let game = sample_game();
        game.save(&path).unwrap();
        let loaded = Game::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded.board(), game.board());
    }

    #[test]
    fn test_load_rejects_illegal_log() {
        let mut saved = sample_game().to_saved();
        // Player one tries to walk through the wall at (13, 7)
        saved.moves[2] = LoggedMove {
            player: PlayerId::One,
            mv: Move::Pawn(Pos::new(12, 8)),
        };
        match Game::from_saved(&saved) {
            Err(SaveError::IllegalMove { ply, source }) => {
                assert_eq!(ply, 3);
                assert_eq!(
                    source,
                    GameError::Move(MoveError::IllegalPawnMove(Pos::new(12, 8)))
                );
            }
            other => panic!("expected illegal move, got {other:?}"),
        }

        let mut saved = sample_game().to_saved();
        saved.moves[1].player = PlayerId::One;
        assert!(matches!(
            Game::from_saved(&saved),
            Err(SaveError::IllegalMove { ply: 2, source: GameError::NotYourTurn(PlayerId::Two) })
        ));
    }

    #[test]
    fn test_load_rejects_bad_files() {
        let json = sample_game().to_json().unwrap();
        let bumped = json.replacen("\"version\": 1", "\"version\": 99", 1);
        assert!(matches!(
            Game::from_json(&bumped),
            Err(SaveError::UnsupportedVersion { found: 99, expected: 1 })
        ));
        assert!(matches!(Game::from_json("{ not json"), Err(SaveError::Json(_))));

        let mut saved = sample_game().to_saved();
        saved.start.pawns[1] = saved.start.pawns[0];
        assert!(matches!(Game::from_saved(&saved), Err(SaveError::InvalidBoard(_))));

        let mut saved = sample_game().to_saved();
        saved.start.walls = vec![Wall::horizontal(1, 1), Wall::vertical(1, 1)];
        assert!(matches!(Game::from_saved(&saved), Err(SaveError::InvalidBoard(_))));

        let mut saved = sample_game().to_saved();
        saved.start.pawn_dim = 200;
        assert!(matches!(Game::from_saved(&saved), Err(SaveError::InvalidBoard(_))));
    }
}
