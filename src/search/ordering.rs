//! Move ordering and wall-candidate bounding
//!
//! Candidates are tried in rank order: a pawn move onto the mover's objective
//! row first, then the other pawn moves, then walls. Walls are ranked by a
//! strategic priority and only the best `cap` of them that keep both paths
//! open are expanded.

use crate::board::{Board, Move, Orientation, PlayerId, Pos, Wall};
use crate::rules::{free_wall_candidates, generate_pawn_moves, keeps_paths};

/// Default number of wall placements expanded per node
pub const DEFAULT_WALL_CANDIDATE_CAP: usize = 20;

// Priority constants. Tunable, not load-bearing for correctness.
const DISTANCE_WEIGHT: f64 = 1.0;
const AHEAD_BONUS: f64 = 4.0;
const HORIZONTAL_BONUS: f64 = 2.0;
const OWN_PATH_RADIUS: u32 = 4;
const OWN_PATH_PENALTY: f64 = 3.0;

/// Rank of a move: 0 wins on the spot, 1 other pawn moves, 2 walls
#[inline]
pub fn move_rank(board: &Board, mover: PlayerId, mv: Move) -> u8 {
    match mv {
        Move::Pawn(to) if to.row == board.objective_row(mover) => 0,
        Move::Pawn(_) => 1,
        Move::Wall(_) => 2,
    }
}

/// True when `point` lies between `id`'s pawn and its objective row
fn lies_ahead(board: &Board, id: PlayerId, point: Pos) -> bool {
    let pawn = board.pawn(id);
    if board.objective_row(id) < pawn.row {
        point.row < pawn.row
    } else {
        point.row > pawn.row
    }
}

/// Strategic value of a wall for `mover`.
///
/// Walls close to the opponent and in front of it score higher; horizontal
/// walls in front of it higher still. Horizontal walls right in front of the
/// mover's own pawn are penalized.
pub fn wall_priority(board: &Board, mover: PlayerId, wall: Wall) -> f64 {
    let opponent = mover.opponent();
    let horizontal = wall.orientation == Orientation::Horizontal;

    let mut score = -DISTANCE_WEIGHT * f64::from(wall.anchor.distance(board.pawn(opponent)));
    if lies_ahead(board, opponent, wall.anchor) {
        score += AHEAD_BONUS;
        if horizontal {
            score += HORIZONTAL_BONUS;
        }
    }

    if horizontal
        && lies_ahead(board, mover, wall.anchor)
        && wall.anchor.distance(board.pawn(mover)) <= OWN_PATH_RADIUS
    {
        score -= OWN_PATH_PENALTY;
    }

    score
}

/// Walls for `mover` in priority order, at most `cap`, each keeping both
/// players' paths open.
pub fn ranked_walls(board: &Board, mover: PlayerId, cap: usize) -> Vec<Wall> {
    if board.walls_left(mover) == 0 || cap == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, Wall)> = free_wall_candidates(board)
        .into_iter()
        .map(|wall| (wall_priority(board, mover, wall), wall))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .map(|(_, wall)| wall)
        .filter(|&wall| keeps_paths(board, wall))
        .take(cap)
        .collect()
}

/// Legal moves for `mover` in search order, walls bounded by `cap`
pub fn ordered_moves(board: &Board, mover: PlayerId, cap: usize) -> Vec<Move> {
    let mut moves = generate_pawn_moves(board, mover);
    moves.sort_by_key(|&mv| move_rank(board, mover, mv));
    moves.extend(ranked_walls(board, mover, cap).into_iter().map(Move::Wall));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{generate_wall_moves, is_legal_wall};

    #[test]
    fn test_winning_pawn_move_first() {
        let mut board = Board::new();
        board.place_pawn(PlayerId::One, Pos::new(2, 4));
        let moves = ordered_moves(&board, PlayerId::One, 5);
        assert_eq!(moves[0], Move::Pawn(Pos::new(0, 4)));
        assert_eq!(move_rank(&board, PlayerId::One, moves[0]), 0);
    }

    #[test]
    fn test_pawns_before_walls() {
        let board = Board::new();
        let moves = ordered_moves(&board, PlayerId::One, DEFAULT_WALL_CANDIDATE_CAP);
        let first_wall = moves.iter().position(|m| m.is_wall()).unwrap();
        assert!(moves[..first_wall].iter().all(|m| m.is_pawn()));
        assert!(moves[first_wall..].iter().all(|m| m.is_wall()));
        assert_eq!(first_wall, 3);
    }

    #[test]
    fn test_cap_bounds_walls() {
        let board = Board::new();
        let walls = ranked_walls(&board, PlayerId::One, DEFAULT_WALL_CANDIDATE_CAP);
        assert_eq!(walls.len(), DEFAULT_WALL_CANDIDATE_CAP);
        assert!(walls.iter().all(|&w| is_legal_wall(&board, w)));

        let all = ranked_walls(&board, PlayerId::One, usize::MAX);
        assert_eq!(all.len(), generate_wall_moves(&board, PlayerId::One).len());
    }

    #[test]
    fn test_best_wall_blocks_opponent() {
        let board = Board::new();
        let walls = ranked_walls(&board, PlayerId::One, 3);
        // In front of player two, who starts on row 0
        assert_eq!(walls[0].anchor.row, 1);
        assert_eq!(walls[0].orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_own_path_penalty() {
        let board = Board::new();
        // Near player one's own pawn, blocking its way forward
        let own = wall_priority(&board, PlayerId::One, Wall::horizontal(15, 7));
        let far = wall_priority(&board, PlayerId::One, Wall::horizontal(15, 1));
        let base = |w: Wall| {
            let distance = f64::from(w.anchor.distance(board.pawn(PlayerId::Two)));
            -distance + AHEAD_BONUS + HORIZONTAL_BONUS
        };
        assert_eq!(own, base(Wall::horizontal(15, 7)) - OWN_PATH_PENALTY);
        assert_eq!(far, base(Wall::horizontal(15, 1)));
    }

    #[test]
    fn test_no_walls_without_budget() {
        let board = Board::with_walls(9, 0);
        let moves = ordered_moves(&board, PlayerId::Two, DEFAULT_WALL_CANDIDATE_CAP);
        assert!(moves.iter().all(|m| m.is_pawn()));
    }
}
