//! Flat lattice storage for walls, connectors and pawns

use super::{Pos, EMPTY};

/// Square lattice of `size * size` bytes, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty lattice
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!((pos.row as usize) < self.size && (pos.col as usize) < self.size);
        pos.row as usize * self.size + pos.col as usize
    }

    /// Value stored at a lattice point
    #[inline]
    pub fn get(&self, pos: Pos) -> u8 {
        self.cells[self.index(pos)]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, value: u8) {
        let idx = self.index(pos);
        self.cells[idx] = value;
    }

    /// True when nothing is stored at `pos`
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == EMPTY
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Iterate every pawn cell (even/even point)
    pub fn cell_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size)
            .step_by(2)
            .flat_map(move |r| (0..size).step_by(2).map(move |c| Pos::new(r as u8, c as u8)))
    }

    /// Iterate every connector point (odd/odd point)
    pub fn connector_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (1..size)
            .step_by(2)
            .flat_map(move |r| (1..size).step_by(2).map(move |c| Pos::new(r as u8, c as u8)))
    }
}
