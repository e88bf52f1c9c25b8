//! Legal move generation
//!
//! Pawn moves follow the jump rules: a pawn facing the opponent jumps
//! straight over it when the slot and landing cell behind are open, and only
//! falls back to the two diagonal side-steps when the straight jump is
//! unavailable. Wall moves must not overlap existing walls and must leave
//! both players a path to their objective row.

use crate::board::{Board, Move, Orientation, PlayerId, Pos, Wall};
use crate::error::MoveError;

use super::path::{has_path, STEPS};

/// Generate every legal pawn move for `player`
pub fn generate_pawn_moves(board: &Board, player: PlayerId) -> Vec<Move> {
    let size = board.size();
    let from = board.pawn(player);
    let mut moves = Vec::with_capacity(5);

    for &(dr, dc) in &STEPS {
        let Some(next) = from.offset(dr, dc, size) else {
            continue;
        };
        if !board.is_passage_open(from, next) {
            continue;
        }

        if board.occupant(next).is_none() {
            moves.push(Move::Pawn(next));
            continue;
        }

        // Opponent ahead: straight jump first
        if let Some(landing) = next.offset(dr, dc, size) {
            if board.is_passage_open(next, landing) && board.occupant(landing).is_none() {
                moves.push(Move::Pawn(landing));
                continue;
            }
        }

        // Straight jump blocked by a wall or the edge: side-steps
        let laterals: [(i32, i32); 2] = if dr != 0 { [(0, -2), (0, 2)] } else { [(-2, 0), (2, 0)] };
        for (lr, lc) in laterals {
            let Some(side) = next.offset(lr, lc, size) else {
                continue;
            };
            if board.is_passage_open(next, side) && board.occupant(side).is_none() {
                moves.push(Move::Pawn(side));
            }
        }
    }

    moves
}

/// True when the wall fits geometrically: its anchor is a connector and none
/// of its three lattice points holds a wall already.
pub fn is_wall_placement_free(board: &Board, wall: Wall) -> bool {
    board.is_valid_anchor(wall.anchor)
        && wall.cells().iter().all(|&p| board.grid().is_empty(p))
}

/// True when the wall fits and still leaves both players a path.
///
/// The wall is tried on a scratch copy which is dropped afterwards, so
/// nothing leaks into `board`.
pub fn is_legal_wall(board: &Board, wall: Wall) -> bool {
    is_wall_placement_free(board, wall) && keeps_paths(board, wall)
}

/// Path check for a wall that is already known to fit
pub(crate) fn keeps_paths(board: &Board, wall: Wall) -> bool {
    let mut scratch = board.clone();
    // Budget on the scratch copy is irrelevant; charge player one
    scratch.place_wall(wall, PlayerId::One);
    has_path(&scratch, PlayerId::One) && has_path(&scratch, PlayerId::Two)
}

/// Every wall that fits geometrically, horizontal before vertical per
/// connector. Path preservation is not checked.
pub fn free_wall_candidates(board: &Board) -> Vec<Wall> {
    let mut walls = Vec::new();
    for anchor in board.grid().connector_positions() {
        if !board.grid().is_empty(anchor) {
            continue;
        }
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let wall = Wall::new(anchor, orientation);
            if is_wall_placement_free(board, wall) {
                walls.push(wall);
            }
        }
    }
    walls
}

/// Generate every legal wall placement for `player` (empty without budget)
pub fn generate_wall_moves(board: &Board, player: PlayerId) -> Vec<Move> {
    if board.walls_left(player) == 0 {
        return Vec::new();
    }
    free_wall_candidates(board)
        .into_iter()
        .filter(|&wall| keeps_paths(board, wall))
        .map(Move::Wall)
        .collect()
}

/// Pawn moves followed by wall moves
pub fn generate_all_moves(board: &Board, player: PlayerId) -> Vec<Move> {
    let mut moves = generate_pawn_moves(board, player);
    moves.extend(generate_wall_moves(board, player));
    moves
}

/// Check a move against the rules, reporting why it is rejected
pub fn validate_move(board: &Board, player: PlayerId, mv: Move) -> Result<(), MoveError> {
    match mv {
        Move::Pawn(to) => {
            if !board.grid().contains(to) {
                return Err(MoveError::OutOfBounds(to));
            }
            if !to.is_cell() {
                return Err(MoveError::NotACell(to));
            }
            if !generate_pawn_moves(board, player).contains(&mv) {
                return Err(MoveError::IllegalPawnMove(to));
            }
            Ok(())
        }
        Move::Wall(wall) => {
            if !board.is_valid_anchor(wall.anchor) {
                return Err(MoveError::InvalidWallAnchor(wall));
            }
            if board.walls_left(player) == 0 {
                return Err(MoveError::NoWallsLeft(player));
            }
            if !is_wall_placement_free(board, wall) {
                return Err(MoveError::WallOverlap(wall));
            }
            if !keeps_paths(board, wall) {
                return Err(MoveError::WallBlocksPath(wall));
            }
            Ok(())
        }
    }
}

/// Boolean form of [`validate_move`]
#[inline]
pub fn is_legal_move(board: &Board, player: PlayerId, mv: Move) -> bool {
    validate_move(board, player, mv).is_ok()
}

/// Pawn destinations as plain cells, for highlighting
pub fn pawn_targets(board: &Board, player: PlayerId) -> Vec<Pos> {
    generate_pawn_moves(board, player)
        .into_iter()
        .filter_map(Move::target)
        .collect()
}
