//! Path reachability for pawns
//!
//! Both searches walk the cell graph: two axis-adjacent cells are connected
//! when the wall slot between them is open. Pawns never block a path.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::board::{Board, PlayerId, Pos};

/// Cell-to-cell steps (two lattice units each)
pub(crate) const STEPS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Neighbouring cells reachable in one step through an open slot
#[inline]
pub(crate) fn open_neighbors(board: &Board, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    let size = board.size();
    STEPS.iter().filter_map(move |&(dr, dc)| {
        let next = pos.offset(dr, dc, size)?;
        board.is_passage_open(pos, next).then_some(next)
    })
}

#[inline]
fn cell_index(pos: Pos, size: usize) -> usize {
    pos.row as usize * size + pos.col as usize
}

/// Breadth-first search from the player's pawn to its objective row.
///
/// Returns as soon as a dequeued cell lies on the objective row.
pub fn has_path(board: &Board, player: PlayerId) -> bool {
    has_path_from(board, board.pawn(player), board.objective_row(player))
}

/// Same as [`has_path`] from an arbitrary start cell
fn has_path_from(board: &Board, start: Pos, objective_row: u8) -> bool {
    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut queue = VecDeque::with_capacity(size * size / 4);

    visited[cell_index(start, size)] = true;
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        if pos.row == objective_row {
            return true;
        }
        for next in open_neighbors(board, pos) {
            let idx = cell_index(next, size);
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }
    false
}

/// Shortest number of pawn steps to the objective row, `None` when the row
/// is unreachable.
///
/// A* with `h = |row - objective_row|` in cell units. The goal test only
/// looks at the row, so the horizontal offset never enters the estimate.
/// `None` can only come up on a hypothetical board; committed boards always
/// keep a path for both players.
pub fn shortest_path_length(board: &Board, player: PlayerId) -> Option<u32> {
    shortest_path_from(board, board.pawn(player), board.objective_row(player))
}

/// Same as [`shortest_path_length`] from an arbitrary start cell
fn shortest_path_from(board: &Board, start: Pos, objective_row: u8) -> Option<u32> {
    let size = board.size();
    let heuristic = |pos: Pos| u32::from(pos.row.abs_diff(objective_row)) / 2;

    let mut best_g = vec![u32::MAX; size * size];
    // (f, g, row, col), smallest f first
    let mut open = BinaryHeap::new();

    best_g[cell_index(start, size)] = 0;
    open.push(Reverse((heuristic(start), 0u32, start.row, start.col)));

    while let Some(Reverse((_, g, row, col))) = open.pop() {
        let pos = Pos::new(row, col);
        if row == objective_row {
            return Some(g);
        }
        if g > best_g[cell_index(pos, size)] {
            continue;
        }
        for next in open_neighbors(board, pos) {
            let next_g = g + 1;
            let idx = cell_index(next, size);
            if next_g < best_g[idx] {
                best_g[idx] = next_g;
                open.push(Reverse((next_g + heuristic(next), next_g, next.row, next.col)));
            }
        }
    }
    None
}
