use std::time::Instant;

use eframe::egui;

use crate::controller::GameController;
use super::board::BoardView;

pub struct TicTacToeApp {
    controller: GameController,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(controller: GameController) -> Self {
        Self {
            controller,
            board_view: BoardView::new(),
        }
    }

    fn render_banner(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.controller.banner() else {
            ui.label(self.controller.status_text());
            return;
        };

        ui.label(
            egui::RichText::new(message)
                .size(24.0)
                .color(egui::Color32::from_rgb(40, 120, 60)),
        );
        if ui.button("New Game").clicked() {
            self.controller.reset();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.controller.tick(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Tic Tac Toe");
                ui.add_space(8.0);
                self.render_banner(ui);
                ui.add_space(8.0);

                let snapshot = self.controller.snapshot();
                let clicked = self.board_view.show(
                    ui,
                    &snapshot.board,
                    self.controller.winning_line(),
                    self.controller.accepts_input(),
                );
                if let Some(index) = clicked {
                    self.controller.handle_cell_click(index, now);
                }

                ui.add_space(12.0);
                if ui.button("Reset Game").clicked() {
                    self.controller.reset();
                }
            });
        });

        if let Some(wait) = self.controller.time_until_next_step(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
