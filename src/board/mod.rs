//! Board representation for Quoridor
//!
//! The board is a square lattice of side `2N-1` where coordinate parity
//! decides what a point is:
//! - even/even: a pawn cell
//! - odd/even or even/odd: a wall slot between two cells
//! - odd/odd: a connector where the two segments of a wall meet

use serde::{Deserialize, Serialize};

pub mod board;
pub mod grid;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, PlayerState};
pub use grid::Grid;

/// Pawn rows on a standard board
pub const PAWN_DIM: usize = 9;
/// Side length of the standard lattice (17x17)
pub const GRID_SIZE: usize = PAWN_DIM * 2 - 1;
/// Wall budget each player starts with
pub const MAX_WALLS: u8 = 10;

/// Grid value of an open slot or an empty cell
pub const EMPTY: u8 = 0;
/// Grid value of a wall segment
pub const WALL_SEGMENT: u8 = 1;
/// Connector code of a horizontal wall
pub const HORIZONTAL_CONNECTOR: u8 = 1;
/// Connector code of a vertical wall
pub const VERTICAL_CONNECTOR: u8 = 2;

/// Player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Value written into an occupied cell
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<PlayerId> {
        match code {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }
}

/// Point on the lattice (grid coordinates, not pawn-cell coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Build a position from signed coordinates, `None` when outside `size`
    #[inline]
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Pos> {
        if row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Offset by a signed delta, `None` when leaving the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, size: usize) -> Option<Pos> {
        Pos::checked(i32::from(self.row) + dr, i32::from(self.col) + dc, size)
    }

    #[inline]
    pub fn is_cell(self) -> bool {
        self.row % 2 == 0 && self.col % 2 == 0
    }

    #[inline]
    pub fn is_wall_slot(self) -> bool {
        self.row % 2 != self.col % 2
    }

    #[inline]
    pub fn is_connector(self) -> bool {
        self.row % 2 == 1 && self.col % 2 == 1
    }

    /// Manhattan distance in grid units
    #[inline]
    pub fn distance(self, other: Pos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

/// Wall orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Connector code stored at the wall's midpoint
    #[inline]
    pub fn connector_code(self) -> u8 {
        match self {
            Orientation::Horizontal => HORIZONTAL_CONNECTOR,
            Orientation::Vertical => VERTICAL_CONNECTOR,
        }
    }

    #[inline]
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A wall anchored on a connector point.
///
/// A horizontal wall covers `(r, c-1)`, `(r, c)`, `(r, c+1)`; a vertical
/// wall covers `(r-1, c)`, `(r, c)`, `(r+1, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub anchor: Pos,
    pub orientation: Orientation,
}

impl Wall {
    #[inline]
    pub const fn new(anchor: Pos, orientation: Orientation) -> Self {
        Self { anchor, orientation }
    }

    #[inline]
    pub const fn horizontal(row: u8, col: u8) -> Self {
        Self::new(Pos::new(row, col), Orientation::Horizontal)
    }

    #[inline]
    pub const fn vertical(row: u8, col: u8) -> Self {
        Self::new(Pos::new(row, col), Orientation::Vertical)
    }

    /// The two segment slots covered by this wall.
    ///
    /// Callers must ensure the anchor is an interior connector.
    #[inline]
    pub fn segments(self) -> [Pos; 2] {
        let Pos { row, col } = self.anchor;
        match self.orientation {
            Orientation::Horizontal => [Pos::new(row, col - 1), Pos::new(row, col + 1)],
            Orientation::Vertical => [Pos::new(row - 1, col), Pos::new(row + 1, col)],
        }
    }

    /// Segment, connector, segment
    #[inline]
    pub fn cells(self) -> [Pos; 3] {
        let [a, b] = self.segments();
        [a, self.anchor, b]
    }
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move the pawn to the given cell
    Pawn(Pos),
    /// Place a wall
    Wall(Wall),
}

impl Move {
    #[inline]
    pub fn is_pawn(self) -> bool {
        matches!(self, Move::Pawn(_))
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, Move::Wall(_))
    }

    /// Destination cell for pawn moves
    #[inline]
    pub fn target(self) -> Option<Pos> {
        match self {
            Move::Pawn(pos) => Some(pos),
            Move::Wall(_) => None,
        }
    }
}
