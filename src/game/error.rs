//! Error types for game module
//!
//! Rule outcomes (illegal moves, cancelled promotions) are not errors; they are
//! reported through [`crate::game::components::MoveClassification`] and
//! [`crate::session::ClickOutcome`]. These errors only cover external input
//! that could not be turned into engine values.

/// Errors that can occur while interpreting game input
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// Square indices outside the 8x8 grid
    #[error("Square ({file}, {rank}) is off the board")]
    InvalidSquare { file: u8, rank: u8 },

    /// Algebraic square text could not be parsed
    #[error("Invalid square notation: {input:?}")]
    InvalidNotation { input: String },

    /// Promotion answer did not name a rook, knight, bishop or queen
    #[error("Invalid promotion piece: {input:?}")]
    InvalidPromotion { input: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
