//! Configurable N×N tic-tac-toe with a K-in-a-row win condition
//!
//! The rules engine is generalized over grid size and win length:
//! - Any square grid of size ≥ 1
//! - K consecutive identical marks win, for any K between 1 and the
//!   grid size, in any of four directions (horizontal, vertical, both
//!   diagonals)
//! - X always moves first; turns alternate strictly
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Grid representation ([`Mark`], [`Pos`], [`Board`])
//! - [`rules`]: Win detection (anchored per-cell check and full scan)
//! - [`game`]: The [`Game`] engine driving one game from construction
//!   to a terminal win or draw
//! - [`ui`]: egui/eframe desktop shell
//!
//! The engine is passive and synchronous: a caller feeds it one move at
//! a time and queries the resulting state. Restart and resize both mean
//! constructing a fresh [`Game`]; size and win length never change on a
//! live instance.
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Game, GameStatus, Mark, Pos};
//!
//! // A 3x3 game needing three in a row
//! let mut game = Game::new(3, 3)?;
//!
//! game.play(Pos::new(0, 0))?; // X
//! game.play(Pos::new(1, 1))?; // O
//! assert_eq!(game.turn(), Mark::X);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe::GameError>(())
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos};
pub use error::{GameError, Result};
pub use game::{Game, GameStatus};
pub use rules::WinLine;
