//! Board state: the 8x8 grid of occupants
//!
//! Plain read/write container. Rules live in [`super::piece_moves`] and
//! [`super::apply_move`]; nothing here validates.

use crate::game::components::{Color, Occupant, Piece, PieceKind, Square};

/// Back rank layout, file 0 to file 7
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Represents the state of the board for move validation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Occupant; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [Occupant::Empty; 64],
        }
    }

    /// The 32-piece starting position
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::Light, Color::Dark] {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (file, kind) in BACK_ROW.iter().enumerate() {
                board.place(Square::new(file as u8, back), Piece::new(color, *kind));
                board.place(
                    Square::new(file as u8, pawns),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Occupant {
        self.squares[square.index()]
    }

    pub fn set(&mut self, square: Square, occupant: Occupant) {
        self.squares[square.index()] = occupant;
    }

    pub fn place(&mut self, square: Square, piece: Piece) {
        self.set(square, Occupant::Piece(piece));
    }

    pub fn clear(&mut self, square: Square) {
        self.set(square, Occupant::Empty);
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.get(square).piece()
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_empty()
    }

    /// Every square with its occupant, top row first
    pub fn iter(&self) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().map(move |square| (square, self.get(square)))
    }

    /// Squares holding pieces
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter()
            .filter_map(|(square, occupant)| occupant.piece().map(|piece| (square, piece)))
    }

    /// Squares currently marked as en-passant targets
    pub fn en_passant_targets(&self) -> impl Iterator<Item = Square> + '_ {
        self.iter()
            .filter(|(_, occupant)| occupant.is_en_passant_target())
            .map(|(square, _)| square)
    }

    pub(crate) fn clear_en_passant_targets(&mut self) {
        for occupant in self.squares.iter_mut() {
            if occupant.is_en_passant_target() {
                *occupant = Occupant::Empty;
            }
        }
    }
}
