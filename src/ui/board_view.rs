//! Board rendering for the Quoridor GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Move, Orientation, PlayerId, Pos, Wall};
use crate::rules::{is_legal_wall, pawn_targets};

use super::theme::*;

/// What the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hover {
    Cell(Pos),
    Wall(Wall),
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    gap_size: f32,
    /// Lattice side of the board last drawn
    lattice: usize,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            gap_size: 48.0 * GAP_RATIO,
            lattice: crate::board::GRID_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the move clicked, if legal.
    ///
    /// `interactive` is false while the AI thinks or after the game ends.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: PlayerId,
        last_move: Option<Move>,
        suggested_move: Option<Move>,
        orientation: Orientation,
        interactive: bool,
    ) -> Option<Move> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y) - 20.0;

        let n = board.pawn_dim() as f32;
        self.lattice = board.size();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (n + (n - 1.0) * GAP_RATIO);
        self.gap_size = self.cell_size * GAP_RATIO;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        self.draw_cells(&painter, board);
        self.draw_coordinates(&painter);
        self.draw_walls(&painter, board);

        if let Some(mv) = last_move {
            self.draw_last_move(&painter, mv);
        }

        if interactive {
            self.draw_targets(&painter, board, current_turn);
        }

        self.draw_pawns(&painter, board, current_turn);

        if let Some(mv) = suggested_move {
            self.draw_move_preview(&painter, mv, suggestion());
        }

        if !interactive {
            return None;
        }

        let hover = response
            .hover_pos()
            .and_then(|p| self.screen_to_lattice(p))
            .and_then(|pos| self.hover_at(pos, orientation));

        let mut clicked = None;
        match hover {
            Some(Hover::Cell(pos)) => {
                if pawn_targets(board, current_turn).contains(&pos) {
                    let rect = self.lattice_rect(pos).shrink(2.0);
                    painter.rect_stroke(rect, CornerRadius::same(4), Stroke::new(2.0, hover_valid()), egui::StrokeKind::Inside);
                    if response.clicked() {
                        clicked = Some(Move::Pawn(pos));
                    }
                }
            }
            Some(Hover::Wall(wall)) => {
                let is_valid = board.walls_left(current_turn) > 0 && is_legal_wall(board, wall);
                let color = if is_valid { hover_valid() } else { hover_invalid() };
                self.draw_move_preview(&painter, Move::Wall(wall), color);
                if response.clicked() && is_valid {
                    clicked = Some(Move::Wall(wall));
                }
            }
            None => {}
        }

        clicked
    }

    /// Paint cells, tinting both objective rows
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let last = (board.size() - 1) as u8;
        for pos in board.grid().cell_positions() {
            let fill = if pos.row == 0 {
                GOAL_ROW_TINT_ONE
            } else if pos.row == last {
                GOAL_ROW_TINT_TWO
            } else {
                CELL_FILL
            };
            painter.rect_filled(self.lattice_rect(pos), CornerRadius::same(3), fill);
        }
    }

    /// Column letters on top, row numbers on the left
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        let cells = (self.lattice + 1) / 2;
        for i in 0..cells {
            let rect = self.lattice_rect(Pos::new(0, (i * 2) as u8));
            let letter = (b'a' + i as u8) as char;
            let pos = Pos2::new(rect.center().x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), COORD_TEXT);

            let rect = self.lattice_rect(Pos::new((i * 2) as u8, 0));
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, rect.center().y);
            painter.text(pos, egui::Align2::CENTER_CENTER, format!("{}", cells - i), font.clone(), COORD_TEXT);
        }
    }

    fn draw_walls(&self, painter: &Painter, board: &Board) {
        for wall in board.walls() {
            let rect = self.wall_rect(wall);
            painter.rect_filled(rect, CornerRadius::same(2), WALL_COLOR);
            painter.rect_stroke(rect, CornerRadius::same(2), Stroke::new(1.0, WALL_EDGE), egui::StrokeKind::Inside);
        }
    }

    fn draw_targets(&self, painter: &Painter, board: &Board, turn: PlayerId) {
        let radius = self.cell_size * TARGET_RADIUS_RATIO;
        for pos in pawn_targets(board, turn) {
            painter.circle_filled(self.lattice_rect(pos).center(), radius, target_marker());
        }
    }

    fn draw_pawns(&self, painter: &Painter, board: &Board, turn: PlayerId) {
        let radius = self.cell_size * PAWN_RADIUS_RATIO;
        for id in [PlayerId::One, PlayerId::Two] {
            let center = self.lattice_rect(board.pawn(id)).center();
            let color = match id {
                PlayerId::One => PAWN_ONE,
                PlayerId::Two => PAWN_TWO,
            };

            // Shadow
            painter.circle_filled(center + Vec2::new(2.0, 2.0), radius, egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60));
            painter.circle_filled(center, radius, color);

            if id == turn {
                painter.circle_stroke(center, radius + 3.0, Stroke::new(2.0, PAWN_HIGHLIGHT));
            }
        }
    }

    fn draw_last_move(&self, painter: &Painter, mv: Move) {
        match mv {
            Move::Pawn(pos) => {
                let rect = self.lattice_rect(pos);
                painter.circle_filled(rect.right_top() + Vec2::new(-8.0, 8.0), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
            }
            Move::Wall(wall) => {
                let rect = self.wall_rect(wall).expand(2.0);
                painter.rect_stroke(rect, CornerRadius::same(2), Stroke::new(2.0, LAST_MOVE_MARKER), egui::StrokeKind::Outside);
            }
        }
    }

    /// Translucent wall or pawn marker
    fn draw_move_preview(&self, painter: &Painter, mv: Move, color: egui::Color32) {
        match mv {
            Move::Pawn(pos) => {
                let radius = self.cell_size * PAWN_RADIUS_RATIO;
                painter.circle_filled(self.lattice_rect(pos).center(), radius, color);
            }
            Move::Wall(wall) => {
                painter.rect_filled(self.wall_rect(wall), CornerRadius::same(2), color);
            }
        }
    }

    /// Classify a hovered lattice point: cells are pawn targets, anything
    /// else snaps to the nearest wall anchor.
    fn hover_at(&self, pos: Pos, orientation: Orientation) -> Option<Hover> {
        if pos.is_cell() {
            return Some(Hover::Cell(pos));
        }
        if self.lattice < 3 {
            return None;
        }
        let max_odd = (self.lattice - 2) as u8;
        let snap = |v: u8| if v % 2 == 1 { v } else if v < max_odd { v + 1 } else { v - 1 };
        Some(Hover::Wall(Wall::new(Pos::new(snap(pos.row), snap(pos.col)), orientation)))
    }

    /// Offset of lattice index `k` along either axis
    fn axis_start(&self, k: u8) -> f32 {
        let pair = f32::from(k / 2) * (self.cell_size + self.gap_size);
        let inner = if k % 2 == 1 { self.cell_size } else { 0.0 };
        BOARD_MARGIN + pair + inner
    }

    fn axis_len(&self, k: u8) -> f32 {
        if k % 2 == 0 {
            self.cell_size
        } else {
            self.gap_size
        }
    }

    /// Screen rectangle of a lattice point
    fn lattice_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min + Vec2::new(self.axis_start(pos.col), self.axis_start(pos.row));
        Rect::from_min_size(min, Vec2::new(self.axis_len(pos.col), self.axis_len(pos.row)))
    }

    fn wall_rect(&self, wall: Wall) -> Rect {
        let [a, b] = wall.segments();
        self.lattice_rect(a).union(self.lattice_rect(b))
    }

    /// Convert screen coordinates to a lattice point
    fn screen_to_lattice(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let stride = self.cell_size + self.gap_size;
        let axis = |v: f32| -> Option<u8> {
            if v < 0.0 {
                return None;
            }
            let pair = (v / stride).floor();
            let k = pair as usize * 2 + usize::from(v - pair * stride >= self.cell_size);
            (k < self.lattice).then_some(k as u8)
        };
        Some(Pos::new(axis(relative.y)?, axis(relative.x)?))
    }
}
