use thiserror::Error;

/// Errors reported by the game engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid size must be at least 1")]
    SizeZero,

    #[error("Win length {win_length} must be between 1 and grid size {size}")]
    InvalidWinLength { win_length: usize, size: usize },

    #[error("Out of bounds: {row}, {col}")]
    OutOfBounds { row: usize, col: usize },

    #[error("Cell already occupied: {row}, {col}")]
    CellOccupied { row: usize, col: usize },

    #[error("Game is already over")]
    GameOver,
}

/// Convenience Result type for engine operations
pub type Result<T> = std::result::Result<T, GameError>;
