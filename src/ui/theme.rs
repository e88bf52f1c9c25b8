//! Theme constants for the Quoridor GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(92, 58, 33);
pub const CELL_FILL: Color32 = Color32::from_rgb(222, 184, 135);
pub const GOAL_ROW_TINT_ONE: Color32 = Color32::from_rgb(232, 196, 150);
pub const GOAL_ROW_TINT_TWO: Color32 = Color32::from_rgb(210, 176, 140);
pub const COORD_TEXT: Color32 = Color32::from_rgb(240, 220, 190);

// Walls
pub const WALL_COLOR: Color32 = Color32::from_rgb(245, 205, 90);
pub const WALL_EDGE: Color32 = Color32::from_rgb(150, 110, 30);

// Pawns
pub const PAWN_ONE: Color32 = Color32::from_rgb(200, 55, 55);
pub const PAWN_TWO: Color32 = Color32::from_rgb(50, 90, 200);
pub const PAWN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 255, 255);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 230, 120);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn target_marker() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 160, 80, 140)
}

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 120, 160)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 120)
}

pub fn suggestion() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 110)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
/// Gap width relative to a cell
pub const GAP_RATIO: f32 = 0.28;
pub const PAWN_RADIUS_RATIO: f32 = 0.36;
pub const TARGET_RADIUS_RATIO: f32 = 0.16;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
