//! Piece data: colour, kind, moved flag and square occupants

use super::square::Square;
use serde::{Deserialize, Serialize};

/// Side colour. Light sits on rows 6-7 and advances toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Light,
    Dark,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a single pawn step
    pub fn forward(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row the pawns start on (double-step origin)
    pub fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row a pawn promotes on
    pub fn far_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    pub fn back_rank(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Notation letter; pawns have none
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::King => "K",
            PieceKind::Queen => "Q",
            PieceKind::Rook => "R",
            PieceKind::Bishop => "B",
            PieceKind::Knight => "N",
            PieceKind::Pawn => "",
        }
    }

    /// Material value in pawns. Kings count 0.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

/// A piece on the board
///
/// `has_moved` flips to `true` the first time the piece is the source of a
/// completed move (castling included) and never resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    /// An unmoved piece
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }
}

/// What a square holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Occupant {
    #[default]
    Empty,
    Piece(Piece),
    /// Square skipped by a pawn double-step; `pawn` is where that pawn now stands.
    /// Lives for exactly one ply and never blocks line of sight.
    EnPassantTarget { pawn: Square },
}

impl Occupant {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Piece(piece) => Some(piece),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Blocks sliding moves; only real pieces do
    pub fn is_blocking(self) -> bool {
        matches!(self, Occupant::Piece(_))
    }

    pub fn is_en_passant_target(self) -> bool {
        matches!(self, Occupant::EnPassantTarget { .. })
    }
}

impl From<Piece> for Occupant {
    fn from(piece: Piece) -> Self {
        Occupant::Piece(piece)
    }
}
