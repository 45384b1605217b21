//! Game session - the two-click selection protocol
//!
//! A [`GameSession`] owns every piece of mutable game state (board, turn,
//! selection, history) and advances it one click at a time:
//!
//! ```text
//! Unselected --click own piece--> Selected(s)
//! Selected(s) --click s--> Unselected
//! Selected(s) --click t, illegal--> Selected(s)
//! Selected(s) --click t, legal--> Unselected (turn passes)
//! Selected(s) --click t, promotion cancelled--> Selected(s)
//! ```
//!
//! Every click is fully resolved, including a blocking promotion prompt,
//! before [`GameSession::click`] returns. Sessions are not shared; callers
//! that expose one to several threads must serialize access themselves.

use crate::game::components::{Color, Occupant, Piece, RecordedMove, Square};
use crate::game::resources::{CurrentTurn, MoveHistory, PromotionChooser, Selection};
use crate::game::rules::{apply_move, classify, Board};
use tracing::{debug, info};

/// Everything a front-end needs after an accepted move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Removed piece, feeding capture animations and [`crate::game::resources::CapturedPieces`]
    pub captured: Option<Piece>,
    /// Board after the move
    pub board: Board,
    pub record: RecordedMove,
}

/// What a single click did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Empty square, en-passant marker or opponent piece with nothing selected
    Ignored,
    /// A piece of the side to move is now selected
    Selected(Square),
    /// The selected square was clicked again
    Deselected,
    /// The move was illegal; the selection is kept
    Rejected { from: Square, to: Square },
    /// The promotion prompt was cancelled; nothing changed
    PromotionCancelled { from: Square, to: Square },
    Moved(MoveReport),
}

/// One game between two local players
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    turn: CurrentTurn,
    selection: Selection,
    history: MoveHistory,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Standard starting position, light to move
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::Light)
    }

    /// Start from an arbitrary position
    pub fn from_board(board: Board, color_to_move: Color) -> Self {
        Self {
            board,
            turn: CurrentTurn::starting_with(color_to_move),
            selection: Selection::Unselected,
            history: MoveHistory::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn color_to_move(&self) -> Color {
        self.turn.color
    }

    pub fn turn(&self) -> CurrentTurn {
        self.turn
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Feed one clicked square into the selection protocol
    ///
    /// `chooser` is only consulted when the click completes a pawn move onto
    /// the far rank.
    pub fn click(&mut self, square: Square, chooser: &mut impl PromotionChooser) -> ClickOutcome {
        match self.selection {
            Selection::Unselected => self.select(square),
            Selection::Selected(from) if from == square => {
                self.selection.clear();
                debug!("[SELECTION] Deselected {}", square);
                ClickOutcome::Deselected
            }
            Selection::Selected(from) => self.try_move(from, square, chooser),
        }
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        match self.board.get(square) {
            Occupant::Piece(piece) if piece.color == self.turn.color => {
                self.selection = Selection::Selected(square);
                debug!(
                    "[SELECTION] Selected {:?} {:?} at {}",
                    piece.color, piece.kind, square
                );
                ClickOutcome::Selected(square)
            }
            Occupant::Piece(piece) => {
                debug!(
                    "[SELECTION] Ignored {:?} piece at {}: {:?} to move",
                    piece.color, square, self.turn.color
                );
                ClickOutcome::Ignored
            }
            Occupant::Empty | Occupant::EnPassantTarget { .. } => ClickOutcome::Ignored,
        }
    }

    fn try_move(
        &mut self,
        from: Square,
        to: Square,
        chooser: &mut impl PromotionChooser,
    ) -> ClickOutcome {
        let classification = classify(&self.board, from, to);
        if !classification.is_legal() {
            debug!("[SELECTION] Rejected {} -> {}, keeping selection", from, to);
            return ClickOutcome::Rejected { from, to };
        }

        let Some(applied) = apply_move(&mut self.board, from, to, classification, chooser) else {
            debug!("[PROMOTION] Cancelled {} -> {}", from, to);
            return ClickOutcome::PromotionCancelled { from, to };
        };

        info!(
            "[MOVE] {}. {:?} plays {}",
            self.turn.move_number, self.turn.color, applied.record
        );

        self.history.add_move(applied.record);
        self.selection.clear();
        self.turn.switch();

        ClickOutcome::Moved(MoveReport {
            captured: applied.captured,
            board: self.board,
            record: applied.record,
        })
    }
}
