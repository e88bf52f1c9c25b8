//! GUI module for the Quoridor game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::QuoridorApp;
pub use game_state::{GameMode, GameState};
