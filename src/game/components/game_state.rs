//! Move classification and move records

use super::piece::{Color, PieceKind};
use super::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validator verdict for a requested move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveClassification {
    Illegal,
    Normal,
    /// King and rook swap sides; `kingside` when the rook stands on file 7
    Castle { kingside: bool },
    PawnDoubleStep,
    /// Legal pawn move onto the far rank, waiting for a promotion choice
    PromotionCandidate,
}

impl MoveClassification {
    pub fn is_legal(self) -> bool {
        !matches!(self, MoveClassification::Illegal)
    }
}

/// One accepted ply, as stored in the move history
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordedMove {
    Normal {
        color: Color,
        kind: PieceKind,
        from: Square,
        to: Square,
        was_capture: bool,
        promotion: Option<PieceKind>,
    },
    Castle {
        color: Color,
        kingside: bool,
    },
}

impl RecordedMove {
    pub fn color(&self) -> Color {
        match *self {
            RecordedMove::Normal { color, .. } | RecordedMove::Castle { color, .. } => color,
        }
    }
}

impl fmt::Display for RecordedMove {
    /// `Nb1c3`, `e5xd6`, `e7e8=Q`, `0-0`, `0-0-0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RecordedMove::Castle { kingside: true, .. } => f.write_str("0-0"),
            RecordedMove::Castle {
                kingside: false, ..
            } => f.write_str("0-0-0"),
            RecordedMove::Normal {
                kind,
                from,
                to,
                was_capture,
                promotion,
                ..
            } => {
                write!(f, "{}{}", kind.letter(), from)?;
                if was_capture {
                    f.write_str("x")?;
                }
                write!(f, "{}", to)?;
                if let Some(promoted) = promotion {
                    write!(f, "={}", promoted.letter())?;
                }
                Ok(())
            }
        }
    }
}
