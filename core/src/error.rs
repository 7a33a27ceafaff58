use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    InvalidDimensions,
    #[error("Chance a light starts on must be between 0 and 1")]
    InvalidChance,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
