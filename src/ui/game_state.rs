//! Game state management for the tic-tac-toe GUI

use tracing::info;

use crate::{Game, GameStatus, Pos};

/// Grid parameters for one game; a new [`Game`] is built from these on
/// every restart or resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub win_length: usize,
}

impl GameConfig {
    /// Largest grid offered by the setup screen. The engine itself has
    /// no upper limit; beyond this the cells get too small to click.
    pub const MAX_SIZE: usize = 15;

    /// Keep `win_length` inside `1..=size` while the setup sliders move
    pub fn clamp(&mut self) {
        self.size = self.size.clamp(1, Self::MAX_SIZE);
        self.win_length = self.win_length.clamp(1, self.size);
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 3,
            win_length: 3,
        }
    }
}

/// Main GUI state: the engine instance plus transient view fields
pub struct GameState {
    pub game: Game,
    pub config: GameConfig,
    pub last_move: Option<Pos>,
    pub message: Option<String>,
}

impl GameState {
    /// Construct the first game; fails on parameters the engine rejects
    pub fn new(config: GameConfig) -> crate::Result<Self> {
        Ok(Self {
            game: Game::new(config.size, config.win_length)?,
            config,
            last_move: None,
            message: None,
        })
    }

    /// Start over with the same grid parameters
    pub fn restart(&mut self) {
        if let Ok(game) = Game::new(self.config.size, self.config.win_length) {
            info!(size = self.config.size, "restarting game");
            self.game = game;
            self.last_move = None;
            self.message = None;
        }
    }

    /// Switch to new grid parameters; the current game is discarded
    pub fn resize(&mut self, config: GameConfig) -> crate::Result<()> {
        self.game = Game::new(config.size, config.win_length)?;
        info!(
            size = config.size,
            win_length = config.win_length,
            "resized grid"
        );
        self.config = config;
        self.last_move = None;
        self.message = None;
        Ok(())
    }

    /// Attempt a move for the side to play. Engine rejections become a
    /// user-facing message instead of terminating anything.
    pub fn try_place(&mut self, pos: Pos) {
        match self.game.play(pos) {
            Ok(()) => {
                self.last_move = Some(pos);
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }
}
