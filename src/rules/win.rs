//! Win condition checking generalized to K-in-a-row
//!
//! A player wins with `win_length` consecutive identical marks in any of
//! four directions. Every check is anchored at the first cell of a
//! candidate run, so a direction is only examined when the whole
//! K-length window stays on the board.

use crate::board::{Board, Mark, Pos};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// A completed run of identical marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub mark: Mark,
    pub start: Pos,
    pub end: Pos,
}

impl WinLine {
    /// Iterate the cells of the run, from `start` to `end` inclusive
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let dir = (
            (self.end.row as isize - self.start.row as isize).signum(),
            (self.end.col as isize - self.start.col as isize).signum(),
        );
        let len = self
            .start
            .row
            .abs_diff(self.end.row)
            .max(self.start.col.abs_diff(self.end.col))
            + 1;
        (0..len).map(move |i| self.start.step(dir, i))
    }
}

/// Fast win check anchored at a single cell.
///
/// Examines only the four K-length windows starting at `pos`. Returns
/// the run if one is complete, `None` otherwise (always `None` for an
/// empty anchor cell).
pub fn win_at(board: &Board, pos: Pos, win_length: usize) -> Option<WinLine> {
    let mark = board.get(pos);
    if mark == Mark::Empty {
        return None;
    }

    for &dir in &DIRECTIONS {
        if !window_fits(board.size(), pos, dir, win_length) {
            continue;
        }
        if (0..win_length).all(|i| board.get(pos.step(dir, i)) == mark) {
            return Some(WinLine {
                mark,
                start: pos,
                end: pos.step(dir, win_length - 1),
            });
        }
    }

    None
}

/// Whether the K-length window anchored at `pos` stays on the board
fn window_fits(size: usize, pos: Pos, dir: (isize, isize), win_length: usize) -> bool {
    let steps = win_length as isize - 1;
    let end_row = pos.row as isize + dir.0 * steps;
    let end_col = pos.col as isize + dir.1 * steps;
    (0..size as isize).contains(&end_row) && (0..size as isize).contains(&end_col)
}

/// Scan the whole board for a winning run.
///
/// Applies the anchored check to every cell in row-major order and
/// returns the first complete run. O(N²·K); runs once per interactive
/// move, not a hot path.
pub fn check_winner(board: &Board, win_length: usize) -> Option<WinLine> {
    board.positions().find_map(|pos| win_at(board, pos, win_length))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, mark) in marks {
            board.set(Pos::new(row, col), mark);
        }
        board
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(
            3,
            &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)],
        );
        let line = check_winner(&board, 3).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Pos::new(0, 0));
        assert_eq!(line.end, Pos::new(0, 2));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(
            3,
            &[(0, 1, Mark::O), (1, 1, Mark::O), (2, 1, Mark::O)],
        );
        let line = check_winner(&board, 3).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, Pos::new(0, 1));
        assert_eq!(line.end, Pos::new(2, 1));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        // Diagonal run on a larger grid, other cells untouched
        let board = board_with(
            4,
            &[(0, 0, Mark::X), (1, 1, Mark::X), (2, 2, Mark::X)],
        );
        let line = check_winner(&board, 3).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start, Pos::new(0, 0));
        assert_eq!(line.end, Pos::new(2, 2));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let board = board_with(
            3,
            &[(0, 2, Mark::O), (1, 1, Mark::O), (2, 0, Mark::O)],
        );
        let line = check_winner(&board, 3).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, Pos::new(0, 2));
        assert_eq!(line.end, Pos::new(2, 0));
    }

    #[test]
    fn test_shorter_run_is_not_a_win() {
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X)]);
        assert!(check_winner(&board, 3).is_none());
    }

    #[test]
    fn test_mixed_marks_break_the_run() {
        let board = board_with(
            3,
            &[(0, 0, Mark::X), (0, 1, Mark::O), (0, 2, Mark::X)],
        );
        assert!(check_winner(&board, 3).is_none());
    }

    #[test]
    fn test_win_length_two() {
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X)]);
        let line = check_winner(&board, 2).unwrap();
        assert_eq!(line.mark, Mark::X);
    }

    #[test]
    fn test_win_length_one() {
        // A single mark wins immediately when K = 1
        let board = board_with(3, &[(2, 2, Mark::O)]);
        let line = check_winner(&board, 1).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.start, line.end);
    }

    #[test]
    fn test_empty_board_no_winner() {
        let board = Board::new(5);
        assert!(check_winner(&board, 3).is_none());
    }

    #[test]
    fn test_run_shorter_than_win_length_on_big_grid() {
        // Three in a row is not enough when K = 4
        let board = board_with(
            5,
            &[(2, 0, Mark::X), (2, 1, Mark::X), (2, 2, Mark::X)],
        );
        assert!(check_winner(&board, 4).is_none());
    }

    #[test]
    fn test_win_at_anchor_only() {
        // The anchored check sees runs starting at the anchor, not
        // through it; the full scan finds them from the true start.
        let board = board_with(
            3,
            &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)],
        );
        assert!(win_at(&board, Pos::new(0, 0), 3).is_some());
        assert!(win_at(&board, Pos::new(0, 1), 3).is_none());
        assert!(check_winner(&board, 3).is_some());
    }

    #[test]
    fn test_window_anchoring_at_edges() {
        // A run hugging the right edge is found from its left end and
        // never probed off the board.
        let board = board_with(
            4,
            &[(3, 1, Mark::O), (3, 2, Mark::O), (3, 3, Mark::O)],
        );
        let line = check_winner(&board, 3).unwrap();
        assert_eq!(line.start, Pos::new(3, 1));
        assert_eq!(line.end, Pos::new(3, 3));
    }

    #[test]
    fn test_win_line_cells() {
        let line = WinLine {
            mark: Mark::X,
            start: Pos::new(0, 2),
            end: Pos::new(2, 0),
        };
        let cells: Vec<Pos> = line.cells().collect();
        assert_eq!(
            cells,
            vec![Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)]
        );
    }
}
