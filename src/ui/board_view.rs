//! Board rendering for the tic-tac-toe GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Mark, Pos, WinLine};

use super::theme::*;

/// Board view handles rendering and input for the game grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any.
    ///
    /// Any in-bounds cell click is reported; the engine decides whether
    /// the move is legal.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Pos>,
        win_line: Option<&WinLine>,
        game_over: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / board.size() as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Board background; cell gaps read as grid lines
        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        painter.rect_filled(self.playfield_rect(board), CornerRadius::same(2), GRID_LINE);

        let win_cells: Vec<Pos> = win_line.map(|l| l.cells().collect()).unwrap_or_default();
        self.draw_cells(&painter, board, &win_cells);

        // Draw last move marker
        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(board, pointer_pos) {
                    let hover_color = if board.is_empty(board_pos) {
                        hover_valid()
                    } else {
                        hover_invalid()
                    };
                    self.draw_mark(&painter, board_pos, current_turn, hover_color);

                    if response.clicked() {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// The grid area inside the margin
    fn playfield_rect(&self, board: &Board) -> Rect {
        let side = self.cell_size * board.size() as f32;
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(side),
        )
    }

    /// Draw every cell with its mark, tinting the winning run
    fn draw_cells(&self, painter: &Painter, board: &Board, win_cells: &[Pos]) {
        for pos in board.positions() {
            let rect = self.cell_rect(pos);
            let bg = if win_cells.contains(&pos) {
                WIN_HIGHLIGHT
            } else {
                CELL_BG
            };
            painter.rect_filled(rect, CornerRadius::same(2), bg);

            match board.get(pos) {
                Mark::X => self.draw_mark(painter, pos, Mark::X, X_COLOR),
                Mark::O => self.draw_mark(painter, pos, Mark::O, O_COLOR),
                Mark::Empty => {}
            }
        }
    }

    /// Paint an X or O glyph into a cell
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark, color: Color32) {
        let rect = self.cell_rect(pos).shrink(self.cell_size * MARK_INSET_RATIO);
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, color);

        match mark {
            Mark::X => {
                painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
                painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
            }
            Mark::O => {
                painter.circle_stroke(rect.center(), rect.width() / 2.0, stroke);
            }
            Mark::Empty => {}
        }
    }

    /// Small dot marking the most recent move
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let center = rect.left_top() + Vec2::splat(self.cell_size * 0.12);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Screen rectangle of a cell, inset by the grid gap
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(CELL_GAP)
    }

    /// Map a screen position to a board cell
    fn screen_to_board(&self, board: &Board, screen_pos: Pos2) -> Option<Pos> {
        let offset = screen_pos - (self.board_rect.min + Vec2::splat(BOARD_MARGIN));
        if offset.x < 0.0 || offset.y < 0.0 {
            return None;
        }

        let col = (offset.x / self.cell_size) as usize;
        let row = (offset.y / self.cell_size) as usize;
        let pos = Pos::new(row, col);
        board.contains(pos).then_some(pos)
    }
}
