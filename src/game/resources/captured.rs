//! Captured pieces tally
//!
//! Bookkeeping fed from [`crate::session::MoveReport::captured`]. The engine
//! never updates it itself; front-ends own one and call
//! [`CapturedPieces::add_capture`] after each move.
//!
//! Positive material advantage means light is ahead.

use crate::game::components::{Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};

/// Pieces each side has taken
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Dark pieces taken by light
    pub light_captured: Vec<PieceKind>,
    /// Light pieces taken by dark
    pub dark_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Credit the capture of `piece` to its opponent
    pub fn add_capture(&mut self, piece: Piece) {
        match piece.color {
            Color::Light => self.dark_captured.push(piece.kind),
            Color::Dark => self.light_captured.push(piece.kind),
        }
    }

    /// How many `kind` pieces of `captured_color` have been taken
    pub fn count(&self, captured_color: Color, kind: PieceKind) -> usize {
        let taken = match captured_color {
            Color::Light => &self.dark_captured,
            Color::Dark => &self.light_captured,
        };
        taken.iter().filter(|&&k| k == kind).count()
    }

    pub fn material_advantage(&self) -> i32 {
        let light: i32 = self.light_captured.iter().map(|k| k.value()).sum();
        let dark: i32 = self.dark_captured.iter().map(|k| k.value()).sum();
        light - dark
    }

    pub fn clear(&mut self) {
        self.light_captured.clear();
        self.dark_captured.clear();
    }
}
