//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, Key, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameConfig, GameState};
use super::theme::*;
use crate::{GameStatus, Mark};

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    /// Parameters being edited on the setup screen, when it is open
    setup: Option<GameConfig>,
}

impl TicTacToeApp {
    /// Create the app around an already-constructed first game
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
            setup: None,
        }
    }

    /// Q quits, R restarts, anytime outside text input
    fn handle_keys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if ctx.input(|i| i.key_pressed(Key::R)) {
            self.state.restart();
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (R)").clicked() {
                        self.state.restart();
                        ui.close_menu();
                    }
                    if ui.button("Resize Grid…").clicked() {
                        self.setup = Some(self.state.config);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit (Q)").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.state.config;
                    ui.label(format!(
                        "{}×{} · {} in a row",
                        config.size, config.size, config.win_length
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_grid_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

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

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("✕").size(20.0).color(X_COLOR));
            ui.label(RichText::new("◯").size(20.0).color(O_COLOR));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC TAC TOE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (glyph, name, color) = match self.state.status() {
                GameStatus::InProgress => match self.state.game.turn() {
                    Mark::O => ("◯", "O to move", O_COLOR),
                    _ => ("✕", "X to move", X_COLOR),
                },
                GameStatus::Won(Mark::O) => ("◯", "O wins!", O_COLOR),
                GameStatus::Won(_) => ("✕", "X wins!", X_COLOR),
                GameStatus::Draw => ("—", "It's a draw", TEXT_SECONDARY),
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(glyph).size(34.0).color(color));
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.add_space(6.0);
                    ui.label(RichText::new(name).size(16.0).strong().color(TEXT_PRIMARY));
                    let status = if self.state.is_game_over() {
                        ("Game over", TEXT_MUTED)
                    } else {
                        ("In progress", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(11.0).color(status.1));
                });
            });
        });
    }

    /// Render grid parameters card
    fn render_grid_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("GRID").size(10.0).color(TEXT_MUTED));
            ui.add_space(4.0);
            let config = self.state.config;
            ui.label(
                RichText::new(format!("{}×{}", config.size, config.size))
                    .size(20.0)
                    .color(TEXT_PRIMARY),
            );
            ui.label(
                RichText::new(format!("{} in a row to win", config.win_length))
                    .size(12.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            if ui.button("New Game").clicked() {
                self.state.restart();
            }
            if ui.button("Resize Grid…").clicked() {
                self.setup = Some(self.state.config);
            }
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    /// Render rejected-move message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new(msg).size(12.0).color(STATUS_ERROR));
        });
    }

    /// End-of-game dialog: outcome plus Play Again / Resize Grid / Quit
    fn render_game_over_window(&mut self, ctx: &Context) {
        let outcome = match self.state.status() {
            GameStatus::Won(mark) => format!("Winner: {mark}"),
            _ => "It's a draw!".to_string(),
        };

        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.label(RichText::new(outcome).size(18.0).strong().color(TEXT_PRIMARY));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(RichText::new("Play Again").strong()).clicked() {
                        self.state.restart();
                    }
                    if ui.button("Resize Grid").clicked() {
                        self.setup = Some(self.state.config);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.add_space(2.0);
            });
    }

    /// Grid-parameter prompt; starting a game here discards the old one
    fn render_setup_window(&mut self, ctx: &Context) {
        let Some(mut config) = self.setup else {
            return;
        };

        let mut close = false;
        egui::Window::new("Resize Grid")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.add(
                    egui::Slider::new(&mut config.size, 1..=GameConfig::MAX_SIZE)
                        .text("Grid size"),
                );
                config.clamp();
                ui.add(
                    egui::Slider::new(&mut config.win_length, 1..=config.size)
                        .text("Win length"),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(RichText::new("Start").strong()).clicked() {
                        match self.state.resize(config) {
                            Ok(()) => close = true,
                            Err(err) => self.state.message = Some(err.to_string()),
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
                ui.add_space(2.0);
            });

        self.setup = if close { None } else { Some(config) };
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);

        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                let win_line = self.state.game.win_line();
                let clicked = self.board_view.show(
                    ui,
                    self.state.game.board(),
                    self.state.game.turn(),
                    self.state.last_move,
                    win_line.as_ref(),
                    self.state.is_game_over(),
                );
                if let Some(pos) = clicked {
                    self.state.try_place(pos);
                }
            });

        if self.setup.is_some() {
            self.render_setup_window(ctx);
        } else if self.state.is_game_over() {
            self.render_game_over_window(ctx);
        }
    }
}
