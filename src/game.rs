//! Game engine: board state, turn order, move validation, terminal detection
//!
//! [`Game`] is a passive state-holder driven one move at a time by a
//! caller (the GUI, a test, ...). It performs no I/O and knows nothing
//! about its caller. Restarting or resizing means constructing a new
//! instance; grid size and win length never change on a live game.

use tracing::{debug, instrument};

use crate::board::{Board, Mark, Pos};
use crate::error::{GameError, Result};
use crate::rules::{check_winner, WinLine};

/// Game lifecycle. `Won` and `Draw` are terminal: no further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// A single game of N×N tic-tac-toe with a K-in-a-row win condition.
///
/// Status is derived from the board on demand, never cached.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    win_length: usize,
    turn: Mark,
}

impl Game {
    /// Create a fresh game: empty board, X to move.
    ///
    /// Rejects `size == 0` and any `win_length` outside `1..=size`
    /// (a win length beyond the grid would make winning impossible).
    pub fn new(size: usize, win_length: usize) -> Result<Self> {
        if size == 0 {
            return Err(GameError::SizeZero);
        }
        if win_length == 0 || win_length > size {
            return Err(GameError::InvalidWinLength { win_length, size });
        }
        debug!(size, win_length, "starting new game");
        Ok(Self {
            board: Board::new(size),
            win_length,
            turn: Mark::X,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// The mark that moves next
    #[inline]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Read-only view of the board for rendering
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Attempt to place the current turn's mark at `pos`.
    ///
    /// Fails with [`GameError::GameOver`] once the game is terminal
    /// (checked before anything else), [`GameError::OutOfBounds`] for a
    /// position off the grid, and [`GameError::CellOccupied`] for a
    /// non-empty target cell. A failed move leaves board and turn
    /// untouched; a successful one flips the turn.
    #[instrument(skip(self), level = "debug")]
    pub fn play(&mut self, pos: Pos) -> Result<()> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }

        self.board.set(pos, self.turn);
        self.turn = self.turn.opponent();

        match self.status() {
            GameStatus::Won(mark) => debug!(?mark, "game won"),
            GameStatus::Draw => debug!("game drawn"),
            GameStatus::InProgress => {}
        }
        Ok(())
    }

    /// True once the board is full or a winning run exists
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() || self.win_line().is_some()
    }

    /// The mark owning a winning run, `None` for draw or in-progress.
    /// Callers distinguish those two via [`Game::is_game_over`].
    pub fn winner(&self) -> Option<Mark> {
        self.win_line().map(|line| line.mark)
    }

    /// The winning run, for highlight rendering
    pub fn win_line(&self) -> Option<WinLine> {
        check_winner(&self.board, self.win_length)
    }

    /// Derived lifecycle state
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.win_line() {
            GameStatus::Won(line.mark)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Cell content at `pos`, [`GameError::OutOfBounds`] off the grid
    pub fn mark_at(&self, pos: Pos) -> Result<Mark> {
        if !self.board.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(self.board.get(pos))
    }
}
