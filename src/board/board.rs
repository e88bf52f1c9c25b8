//! Board structure with player records

use super::grid::Grid;
use super::{
    Move, Orientation, PlayerId, Pos, Wall, EMPTY, HORIZONTAL_CONNECTOR, MAX_WALLS,
    PAWN_DIM, VERTICAL_CONNECTOR, WALL_SEGMENT,
};
use crate::error::MoveError;

/// Per-player record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub id: PlayerId,
    /// Current cell
    pub pos: Pos,
    /// Row the pawn must reach
    pub objective_row: u8,
    /// Remaining wall budget
    pub walls_left: u8,
}

/// Game board: lattice plus both player records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    players: [PlayerState; 2],
    wall_budget: u8,
}

impl Board {
    /// Standard 9x9 board with 10 walls each
    pub fn new() -> Self {
        Self::with_walls(PAWN_DIM, MAX_WALLS)
    }

    /// Board with `pawn_dim` pawn rows (lattice side `2 * pawn_dim - 1`)
    pub fn with_pawn_dim(pawn_dim: usize) -> Self {
        Self::with_walls(pawn_dim, MAX_WALLS)
    }

    /// Board with a custom size and wall budget.
    ///
    /// Player one starts at the bottom centre and heads for row 0, player two
    /// starts at the top centre and heads for the last row.
    pub fn with_walls(pawn_dim: usize, walls: u8) -> Self {
        assert!((2..=64).contains(&pawn_dim), "pawn_dim must be in 2..=64");
        let size = pawn_dim * 2 - 1;
        let last = (size - 1) as u8;
        // Centre column rounded to an even (cell) coordinate
        let centre = ((pawn_dim / 2) * 2) as u8;

        let p1 = PlayerState {
            id: PlayerId::One,
            pos: Pos::new(last, centre),
            objective_row: 0,
            walls_left: walls,
        };
        let p2 = PlayerState {
            id: PlayerId::Two,
            pos: Pos::new(0, centre),
            objective_row: last,
            walls_left: walls,
        };

        let mut grid = Grid::new(size);
        grid.set(p1.pos, PlayerId::One.code());
        grid.set(p2.pos, PlayerId::Two.code());

        Self {
            grid,
            players: [p1, p2],
            wall_budget: walls,
        }
    }

    /// Lattice side length
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Pawn rows (`N`)
    #[inline]
    pub fn pawn_dim(&self) -> usize {
        (self.size() + 1) / 2
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Raw lattice value at `pos`
    #[inline]
    pub fn get(&self, pos: Pos) -> u8 {
        self.grid.get(pos)
    }

    #[inline]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    /// Current cell of a pawn
    #[inline]
    pub fn pawn(&self, id: PlayerId) -> Pos {
        self.players[id.index()].pos
    }

    #[inline]
    pub fn walls_left(&self, id: PlayerId) -> u8 {
        self.players[id.index()].walls_left
    }

    /// Walls this player has on the board
    #[inline]
    pub fn walls_placed(&self, id: PlayerId) -> u8 {
        self.wall_budget - self.walls_left(id)
    }

    /// Budget each player started with
    #[inline]
    pub fn wall_budget(&self) -> u8 {
        self.wall_budget
    }

    #[inline]
    pub fn objective_row(&self, id: PlayerId) -> u8 {
        self.players[id.index()].objective_row
    }

    /// True when the pawn stands on its objective row
    #[inline]
    pub fn has_reached_goal(&self, id: PlayerId) -> bool {
        self.pawn(id).row == self.objective_row(id)
    }

    /// Player occupying a cell, if any
    #[inline]
    pub fn occupant(&self, pos: Pos) -> Option<PlayerId> {
        if pos.is_cell() {
            PlayerId::from_code(self.grid.get(pos))
        } else {
            None
        }
    }

    /// True when the wall slot between two adjacent cells is open.
    ///
    /// `from` and `to` must be cells two lattice steps apart on one axis.
    #[inline]
    pub fn is_passage_open(&self, from: Pos, to: Pos) -> bool {
        let mid = Pos::new(
            ((u16::from(from.row) + u16::from(to.row)) / 2) as u8,
            ((u16::from(from.col) + u16::from(to.col)) / 2) as u8,
        );
        self.grid.is_empty(mid)
    }

    /// Move a pawn without validation.
    ///
    /// Use `apply_move` for game moves.
    pub fn place_pawn(&mut self, id: PlayerId, to: Pos) {
        let from = self.pawn(id);
        if self.grid.get(from) == id.code() {
            self.grid.set(from, EMPTY);
        }
        self.grid.set(to, id.code());
        self.players[id.index()].pos = to;
    }

    /// Place a wall and charge one wall to `id`, without validation.
    ///
    /// Use `apply_move` for game moves.
    pub fn place_wall(&mut self, wall: Wall, id: PlayerId) {
        let [a, b] = wall.segments();
        self.grid.set(a, WALL_SEGMENT);
        self.grid.set(b, WALL_SEGMENT);
        self.grid.set(wall.anchor, wall.orientation.connector_code());
        let state = &mut self.players[id.index()];
        state.walls_left = state.walls_left.saturating_sub(1);
    }

    /// Overwrite a wall budget, clamped to the starting budget
    pub(crate) fn set_walls_left(&mut self, id: PlayerId, walls: u8) {
        self.players[id.index()].walls_left = walls.min(self.wall_budget);
    }

    /// Apply a move without validation. Shared by the authoritative path and
    /// the search simulator so both follow the same move semantics.
    #[inline]
    pub(crate) fn play_unchecked(&mut self, mv: Move, id: PlayerId) {
        match mv {
            Move::Pawn(to) => self.place_pawn(id, to),
            Move::Wall(wall) => self.place_wall(wall, id),
        }
    }

    /// Validate and commit a move.
    ///
    /// The board is untouched when the move is rejected.
    pub fn apply_move(&mut self, mv: Move, id: PlayerId) -> Result<(), MoveError> {
        crate::rules::validate_move(self, id, mv)?;
        self.play_unchecked(mv, id);
        Ok(())
    }

    /// All walls currently on the board
    pub fn walls(&self) -> Vec<Wall> {
        self.grid
            .connector_positions()
            .filter_map(|pos| match self.grid.get(pos) {
                HORIZONTAL_CONNECTOR => Some(Wall::new(pos, Orientation::Horizontal)),
                VERTICAL_CONNECTOR => Some(Wall::new(pos, Orientation::Vertical)),
                _ => None,
            })
            .collect()
    }

    /// True when the anchor is an interior connector of this board
    #[inline]
    pub fn is_valid_anchor(&self, anchor: Pos) -> bool {
        anchor.is_connector()
            && (anchor.row as usize) < self.size()
            && (anchor.col as usize) < self.size()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
