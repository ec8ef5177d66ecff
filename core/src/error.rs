use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be between 1 and 255")]
    InvalidSize,
    #[error("Tick step and phase threshold must be positive and finite")]
    InvalidTiming,
    #[error("Minimum group size must be at least 1")]
    InvalidGroupSize,
    #[error("Board rows must be non-empty and of equal length")]
    InvalidBoardShape,
    #[error("Unknown shape symbol {0:?}")]
    UnknownShape(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
