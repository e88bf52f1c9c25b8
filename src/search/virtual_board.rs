//! Disposable board copies for search
//!
//! The search engine only ever sees a `VirtualBoard`. Applying a move returns
//! a fresh copy; the input and the authoritative board are never touched.

use crate::board::{Board, Move, PlayerId};

/// Copy of the grid and both player records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualBoard {
    board: Board,
}

impl VirtualBoard {
    /// Snapshot an authoritative board
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            board: board.clone(),
        }
    }

    /// Read access for move generation and evaluation
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return a new state with `mv` played by `actor`.
    ///
    /// The move is assumed legal; legality is filtered before this point.
    #[must_use]
    pub fn apply(&self, mv: Move, actor: PlayerId) -> VirtualBoard {
        let mut next = self.board.clone();
        next.play_unchecked(mv, actor);
        VirtualBoard { board: next }
    }
}
