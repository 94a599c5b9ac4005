use common::games::tictactoe::{BOARD_SIDE, Board, Mark, Position, WinningLine};
use eframe::egui;

pub struct BoardView {
    last_hover: Option<usize>,
}

impl BoardView {
    const MIN_CELL_SIZE: f32 = 50.0;
    const MAX_CELL_SIZE: f32 = 130.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available: egui::Vec2) -> f32 {
        let side = available.x.min(available.y) / BOARD_SIDE as f32;
        side.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, position: Position, cell_size: f32) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + position.col as f32 * cell_size,
                board_rect.top() + position.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn index_at(board_rect: egui::Rect, point: egui::Pos2, cell_size: f32) -> Option<usize> {
        if !board_rect.contains(point) {
            return None;
        }
        let col = ((point.x - board_rect.left()) / cell_size) as usize;
        let row = ((point.y - board_rect.top()) / cell_size) as usize;
        Position::new(row, col).index()
    }

    /// Draws the grid and returns the index of a clicked empty cell, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<WinningLine>,
        interactive: bool,
    ) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_size() - egui::vec2(0.0, 80.0));
        let board_size = cell_size * BOARD_SIDE as f32;

        let sense = if interactive {
            egui::Sense::click()
        } else {
            egui::Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(egui::vec2(board_size, board_size), sense);
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(line) = winning_line {
            for index in line.cells {
                if let Some(position) = Position::from_index(index) {
                    painter.rect_filled(
                        Self::cell_rect(rect, position, cell_size),
                        0.0,
                        egui::Color32::from_rgb(255, 230, 140),
                    );
                }
            }
        }

        self.last_hover = None;
        if interactive
            && let Some(hover_pos) = response.hover_pos()
            && let Some(index) = Self::index_at(rect, hover_pos, cell_size)
            && board.is_empty(index)
            && let Some(position) = Position::from_index(index)
        {
            painter.rect_filled(
                Self::cell_rect(rect, position, cell_size),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
            self.last_hover = Some(index);
        }

        let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                stroke,
            );
        }

        for (index, &mark) in board.cells().iter().enumerate() {
            let Some(position) = Position::from_index(index) else {
                continue;
            };
            let cell_rect = Self::cell_rect(rect, position, cell_size);
            match mark {
                Mark::Computer => draw_x(painter, cell_rect),
                Mark::Player => draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if response.clicked() {
            return self.last_hover;
        }
        None
    }
}

fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

    painter.line_segment(
        [
            egui::pos2(rect.left() + padding, rect.top() + padding),
            egui::pos2(rect.right() - padding, rect.bottom() - padding),
        ],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(rect.right() - padding, rect.top() + padding),
            egui::pos2(rect.left() + padding, rect.bottom() - padding),
        ],
        stroke,
    );
}

fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
    let padding = rect.width() * 0.2;
    let radius = rect.width() / 2.0 - padding;
    let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

    painter.circle_stroke(rect.center(), radius, stroke);
}
