//! Win condition: a pawn standing on its objective row

use crate::board::{Board, PlayerId};

/// Player whose pawn is on its objective row, if any.
///
/// Player one is checked first; on a committed board at most one pawn can be
/// home because play stops at the first arrival.
pub fn check_winner(board: &Board) -> Option<PlayerId> {
    [PlayerId::One, PlayerId::Two]
        .into_iter()
        .find(|&id| board.has_reached_goal(id))
}
