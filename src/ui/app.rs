//! Main application for the Quoridor GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::{Move, Orientation, PlayerId};
use crate::engine::{Difficulty, SearchType};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;

/// Main Quoridor application
pub struct QuoridorApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    /// File used by Save and Load
    save_path: String,
}

impl Default for QuoridorApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
            save_path: "quoridor_save.json".to_string(),
        }
    }
}

fn player_name(id: PlayerId) -> &'static str {
    match id {
        PlayerId::One => "RED",
        PlayerId::Two => "BLUE",
    }
}

fn player_color(id: PlayerId) -> egui::Color32 {
    match id {
        PlayerId::One => PAWN_ONE,
        PlayerId::Two => PAWN_TWO,
    }
}

/// Short algebraic-style label: `e2` for pawns, `e2h` for walls
fn move_label(mv: Move, pawn_dim: usize) -> String {
    let square = |row: u8, col: u8| {
        let file = (b'a' + col / 2) as char;
        let rank = pawn_dim - usize::from(row / 2);
        format!("{file}{rank}")
    };
    match mv {
        Move::Pawn(pos) => square(pos.row, pos.col),
        Move::Wall(wall) => {
            // Name the wall by the cell above-left of its anchor
            let suffix = match wall.orientation {
                Orientation::Horizontal => 'h',
                Orientation::Vertical => 'v',
            };
            format!("{}{}", square(wall.anchor.row - 1, wall.anchor.col - 1), suffix)
        }
    }
}

impl QuoridorApp {
    /// Create a new app with the default mode
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.horizontal(|ui| {
                        ui.label("File:");
                        ui.text_edit_singleline(&mut self.save_path);
                    });
                    if ui.button("Save").clicked() {
                        self.state.save_game(&self.save_path);
                        ui.close_menu();
                    }
                    if ui.button("Load").clicked() {
                        self.state.load_game(&self.save_path);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Game", |ui| {
                    for difficulty in Difficulty::ALL {
                        for human in [PlayerId::One, PlayerId::Two] {
                            let text = format!("New Game (vs AI {} - you {})", difficulty.label(), player_name(human));
                            if ui.button(text).clicked() {
                                self.state = GameState::new(GameMode::PvE { human, difficulty });
                                ui.close_menu();
                            }
                        }
                    }
                    ui.separator();
                    if ui.button("New Game (PvP)").clicked() {
                        self.state = GameState::new(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Redo").clicked() {
                        self.state.redo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human, difficulty } => {
                            format!("PvE {} - You: {}", difficulty.label(), player_name(human))
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_walls_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(winner) = self.state.game.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn card_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(10.0).color(TEXT_MUTED));
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("QUORIDOR").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Reach the far side first").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, player_color(turn));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player_name(turn)).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(self.state.player_label(turn)).size(11.0).color(TEXT_SECONDARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.is_hinting() {
                        ("Searching hint...", TIMER_WARNING)
                    } else if self.state.game.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "TIMER");
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 {
                    TIMER_NORMAL
                } else if secs < 2.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Remaining walls per player, one bar per wall
    fn render_walls_card(&self, ui: &mut egui::Ui) {
        let board = self.state.game.board();
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "WALLS");
            ui.add_space(8.0);

            for id in [PlayerId::One, PlayerId::Two] {
                let left = board.walls_left(id);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player_name(id)).size(11.0).strong().color(player_color(id)));
                    for i in 0..board.wall_budget() {
                        let color = if i < left { WALL_COLOR } else { BUTTON_BG };
                        let (rect, _) = ui.allocate_exact_size(Vec2::new(5.0, 14.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, CornerRadius::same(1), color);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{left}")).size(14.0).color(TEXT_SECONDARY));
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "ACTIONS");
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);
            let button = |ui: &mut egui::Ui, text: &str| {
                btn_frame
                    .show(ui, |ui| {
                        ui.add(
                            egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                                .sense(egui::Sense::click()),
                        )
                        .clicked()
                    })
                    .inner
            };

            ui.horizontal(|ui| {
                if button(ui, "Undo (U)") {
                    self.state.undo();
                }
                if button(ui, "Redo (Y)") {
                    self.state.redo();
                }
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                let wall_text = match self.state.wall_orientation {
                    Orientation::Horizontal => "Wall: horizontal (R)",
                    Orientation::Vertical => "Wall: vertical (R)",
                };
                if button(ui, wall_text) {
                    self.state.toggle_orientation();
                }
                if self.state.mode == GameMode::PvP && button(ui, "Hint (H)") {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        let pawn_dim = self.state.game.board().pawn_dim();
        Self::card_frame().show(ui, |ui| {
            Self::card_title(ui, "AI DEBUG");
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(TIMER_NORMAL));
                        ui.label(RichText::new(format!("Score: {:.2}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                if result.search_type == SearchType::AlphaBeta {
                    let stats = &result.stats;
                    ui.label(
                        RichText::new(format!(
                            "Cutoffs {} ({:.0}% first)  leaves {}",
                            stats.cutoffs,
                            stats.first_move_rate(),
                            stats.leaf_evals
                        ))
                        .size(10.0)
                        .color(TEXT_MUTED),
                    );
                }

                if let Some(mv) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {}", move_label(mv, pawn_dim))).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }

            if let Some((id, eval)) = &self.state.last_eval {
                ui.add_space(6.0);
                ui.separator();
                let path = |p: Option<u32>| p.map_or("-".to_string(), |d| d.to_string());
                ui.label(RichText::new(format!("Eval for {}: {:.2}", player_name(*id), eval.total)).size(10.0).color(TEXT_SECONDARY));
                ui.label(
                    RichText::new(format!(
                        "Paths {} vs {}  progress {:.0}%",
                        path(eval.own_path),
                        path(eval.opponent_path),
                        eval.progress * 100.0
                    ))
                    .size(10.0)
                    .color(TEXT_MUTED),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: PlayerId) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(player_name(winner)).size(18.0).strong().color(player_color(winner)));
                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("in {} moves", self.state.game.move_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);
                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let new_game = ui.add(
                                egui::Label::new(RichText::new("New Game (N)").size(14.0).strong().color(TEXT_PRIMARY))
                                    .sense(egui::Sense::click()),
                            );
                            if new_game.clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive = !self.state.game.is_over() && self.state.is_human_turn() && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                self.state.game.board(),
                self.state.current_turn(),
                self.state.game.last_move().map(|entry| entry.mv),
                self.state.suggested_move,
                self.state.wall_orientation,
                interactive,
            );

            if let Some(mv) = clicked {
                if let Err(msg) = self.state.try_human_move(mv) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // Typing a file name must not trigger shortcuts
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // R - Rotate wall preview
            if i.key_pressed(egui::Key::R) {
                self.state.toggle_orientation();
            }

            // H - Hint (PvP mode)
            if i.key_pressed(egui::Key::H) && self.state.mode == GameMode::PvP {
                self.state.request_suggestion();
            }

            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            if i.key_pressed(egui::Key::Y) {
                self.state.redo();
            }

            // N - New game in the same mode
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for QuoridorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.game.is_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling the worker and the clock
        if self.state.is_ai_thinking() || !self.state.game.is_over() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Wall};

    #[test]
    fn test_move_labels() {
        assert_eq!(move_label(Move::Pawn(Pos::new(16, 8)), 9), "e1");
        assert_eq!(move_label(Move::Pawn(Pos::new(0, 0)), 9), "a9");
        assert_eq!(move_label(Move::Wall(Wall::horizontal(15, 7)), 9), "d2h");
        assert_eq!(move_label(Move::Wall(Wall::vertical(1, 1)), 9), "a9v");
    }
}
