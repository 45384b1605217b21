//! Pawn promotion choice
//!
//! When a pawn reaches the far rank the engine blocks on a
//! [`PromotionChooser`] until it names a piece or cancels. The chooser is the
//! only collaborator the engine waits on.

use crate::game::components::{Color, PieceKind, Square};
use crate::game::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kinds a pawn may promote to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromotionPiece {
    Rook,
    Knight,
    Bishop,
    Queen,
}

impl PromotionPiece {
    /// The fixed set offered to the chooser
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Rook,
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Queen,
    ];

    pub fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    pub fn letter(self) -> &'static str {
        self.kind().letter()
    }
}

impl FromStr for PromotionPiece {
    type Err = GameError;

    /// Accepts `q r b n` in either case, or the full name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q" | "queen" => Ok(PromotionPiece::Queen),
            "r" | "rook" => Ok(PromotionPiece::Rook),
            "b" | "bishop" => Ok(PromotionPiece::Bishop),
            "n" | "knight" => Ok(PromotionPiece::Knight),
            _ => Err(GameError::InvalidPromotion {
                input: s.to_string(),
            }),
        }
    }
}

/// Synchronous promotion prompt
///
/// `None` cancels the move; the engine then leaves the board and selection
/// exactly as they were.
pub trait PromotionChooser {
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionPiece>;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, Square) -> Option<PromotionPiece>,
{
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionPiece> {
        self(color, square)
    }
}

/// Chooser that always answers with the same piece
#[derive(Clone, Copy, Debug)]
pub struct AlwaysPromote(pub PromotionPiece);

impl PromotionChooser for AlwaysPromote {
    fn choose(&mut self, _color: Color, _square: Square) -> Option<PromotionPiece> {
        Some(self.0)
    }
}

/// Chooser that always cancels
#[derive(Clone, Copy, Debug, Default)]
pub struct CancelPromotion;

impl PromotionChooser for CancelPromotion {
    fn choose(&mut self, _color: Color, _square: Square) -> Option<PromotionPiece> {
        None
    }
}
