//! Plain-text board rendering for terminals
//!
//! Rank index 0 is printed first, so light's pieces sit at the bottom.
//! The selected square is bracketed. En-passant markers are not drawn.

use crate::core::EngineSettings;
use crate::game::components::{Color, Occupant, Piece, PieceKind, Square};
use crate::game::resources::Selection;
use crate::game::rules::Board;
use std::fmt::Write;

/// Rendering switches, usually taken from [`EngineSettings`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    pub coordinates: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            coordinates: true,
        }
    }
}

impl From<&EngineSettings> for RenderOptions {
    fn from(settings: &EngineSettings) -> Self {
        Self {
            unicode: settings.unicode_pieces,
            coordinates: settings.show_coordinates,
        }
    }
}

/// Unicode chess glyph
pub fn piece_char(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::King) => '\u{2654}',
        (Color::Light, PieceKind::Queen) => '\u{2655}',
        (Color::Light, PieceKind::Rook) => '\u{2656}',
        (Color::Light, PieceKind::Bishop) => '\u{2657}',
        (Color::Light, PieceKind::Knight) => '\u{2658}',
        (Color::Light, PieceKind::Pawn) => '\u{2659}',
        (Color::Dark, PieceKind::King) => '\u{265A}',
        (Color::Dark, PieceKind::Queen) => '\u{265B}',
        (Color::Dark, PieceKind::Rook) => '\u{265C}',
        (Color::Dark, PieceKind::Bishop) => '\u{265D}',
        (Color::Dark, PieceKind::Knight) => '\u{265E}',
        (Color::Dark, PieceKind::Pawn) => '\u{265F}',
    }
}

/// ASCII fallback: uppercase light, lowercase dark
pub fn piece_ascii(piece: Piece) -> char {
    let upper = match piece.kind {
        PieceKind::King => 'K',
        PieceKind::Queen => 'Q',
        PieceKind::Rook => 'R',
        PieceKind::Bishop => 'B',
        PieceKind::Knight => 'N',
        PieceKind::Pawn => 'P',
    };
    match piece.color {
        Color::Light => upper,
        Color::Dark => upper.to_ascii_lowercase(),
    }
}

/// Render `board` as eight lines of three-column cells
pub fn render_board(board: &Board, selection: Selection, options: RenderOptions) -> String {
    let mut out = String::new();
    let files_line = "   a  b  c  d  e  f  g  h\n";

    if options.coordinates {
        out.push_str(files_line);
    }

    for rank in 0..8u8 {
        if options.coordinates {
            let _ = write!(out, "{} ", 8 - rank);
        }
        for file in 0..8u8 {
            let square = Square::new(file, rank);
            let glyph = match board.get(square) {
                Occupant::Piece(piece) if options.unicode => piece_char(piece),
                Occupant::Piece(piece) => piece_ascii(piece),
                Occupant::Empty | Occupant::EnPassantTarget { .. } => '.',
            };
            let (open, close) = if selection.square() == Some(square) {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(glyph);
            out.push(close);
        }
        if options.coordinates {
            let _ = write!(out, " {}", 8 - rank);
        }
        out.push('\n');
    }

    if options.coordinates {
        out.push_str(files_line);
    }
    out
}
