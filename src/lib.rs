//! Two-player chess rules engine
//!
//! Move validation, move execution (castling, en passant, promotion), a
//! two-click selection protocol and algebraic move history. No check
//! detection: kings are captured like any other piece.
//!
//! ```no_run
//! use chess_rules::prelude::*;
//!
//! let mut session = GameSession::new();
//! session.click("e2".parse().unwrap(), &mut CancelPromotion);
//! session.click("e4".parse().unwrap(), &mut CancelPromotion);
//! println!("{}", session.history().dump());
//! ```

pub mod core;
pub mod game;
pub mod ui;

pub use game::session;

/// Commonly used engine types
pub mod prelude {
    pub use crate::game::components::{
        Color, MoveClassification, Occupant, Piece, PieceKind, RecordedMove, Square,
    };
    pub use crate::game::error::{GameError, GameResult};
    pub use crate::game::resources::{
        AlwaysPromote, CancelPromotion, CapturedPieces, CurrentTurn, MoveHistory,
        PromotionChooser, PromotionPiece, Selection,
    };
    pub use crate::game::rules::{apply_move, classify, AppliedMove, Board};
    pub use crate::game::session::{ClickOutcome, GameSession, MoveReport};
}
