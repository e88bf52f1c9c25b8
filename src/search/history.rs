//! Visit history for root-level anti-oscillation
//!
//! Retains the last few cells the AI pawn has occupied across the whole game.
//! The search uses it to penalize returning to recently visited cells.

use std::collections::VecDeque;

use crate::board::Pos;

/// Cells retained
pub const HISTORY_LEN: usize = 6;

/// Minimum retained visits before the stuck test applies
const STUCK_MIN_VISITS: usize = 4;
/// At most this many distinct cells in the window counts as stuck
const STUCK_MAX_DISTINCT: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitHistory {
    cells: VecDeque<Pos>,
}

impl VisitHistory {
    pub fn new() -> Self {
        Self {
            cells: VecDeque::with_capacity(HISTORY_LEN),
        }
    }

    /// Record a visited cell, evicting the oldest past `HISTORY_LEN`
    pub fn push(&mut self, cell: Pos) {
        if self.cells.len() == HISTORY_LEN {
            self.cells.pop_front();
        }
        self.cells.push_back(cell);
    }

    /// Times `cell` appears in the window
    pub fn count(&self, cell: Pos) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Triangular penalty `k(k+1)/2` for a cell seen `k` times
    pub fn penalty(&self, cell: Pos) -> f64 {
        let k = self.count(cell) as f64;
        k * (k + 1.0) / 2.0
    }

    /// True when the pawn keeps revisiting two cells or fewer
    pub fn is_stuck(&self) -> bool {
        if self.cells.len() < STUCK_MIN_VISITS {
            return false;
        }
        let mut distinct: Vec<Pos> = Vec::with_capacity(HISTORY_LEN);
        for &cell in &self.cells {
            if !distinct.contains(&cell) {
                distinct.push(cell);
            }
        }
        distinct.len() <= STUCK_MAX_DISTINCT
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Pos> {
        self.cells.iter()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_evicts_oldest() {
        let mut history = VisitHistory::new();
        for col in 0..8u8 {
            history.push(Pos::new(0, col * 2));
        }
        assert_eq!(history.len(), HISTORY_LEN);
        assert_eq!(history.count(Pos::new(0, 0)), 0);
        assert_eq!(history.count(Pos::new(0, 2)), 0);
        assert_eq!(history.iter().next(), Some(&Pos::new(0, 4)));
    }

    #[test]
    fn test_triangular_penalty() {
        let mut history = VisitHistory::new();
        let cell = Pos::new(8, 8);
        assert_eq!(history.penalty(cell), 0.0);
        history.push(cell);
        assert_eq!(history.penalty(cell), 1.0);
        history.push(cell);
        assert_eq!(history.penalty(cell), 3.0);
        history.push(cell);
        assert_eq!(history.penalty(cell), 6.0);
    }

    #[test]
    fn test_stuck_detection() {
        let a = Pos::new(8, 8);
        let b = Pos::new(8, 10);
        let mut history = VisitHistory::new();
        history.push(a);
        history.push(b);
        history.push(a);
        // Too short to judge
        assert!(!history.is_stuck());
        history.push(b);
        assert!(history.is_stuck());

        history.push(Pos::new(6, 10));
        assert!(!history.is_stuck());

        history.clear();
        assert!(history.is_empty());
    }
}
