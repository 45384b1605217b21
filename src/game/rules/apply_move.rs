//! Move execution
//!
//! Applies an accepted [`MoveClassification`] to the board. Promotion moves
//! ask the [`PromotionChooser`] before anything is written, so a cancelled
//! promotion leaves the board untouched.

use super::board_state::Board;
use crate::game::components::{
    MoveClassification, Occupant, Piece, PieceKind, RecordedMove, Square,
};
use crate::game::resources::PromotionChooser;
use tracing::debug;

/// Result of a completed transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    /// Piece removed from the board, including a pawn taken en passant
    pub captured: Option<Piece>,
    pub record: RecordedMove,
}

/// Apply `classification` for `from -> to`
///
/// Returns `None` when nothing was done: the move was `Illegal`, or it was a
/// promotion and the chooser cancelled.
///
/// # Panics
///
/// When `from` holds no piece.
pub fn apply_move(
    board: &mut Board,
    from: Square,
    to: Square,
    classification: MoveClassification,
    chooser: &mut impl PromotionChooser,
) -> Option<AppliedMove> {
    let Some(mover) = board.piece_at(from) else {
        panic!("apply_move called with no piece on {}", from);
    };

    let promotion = match classification {
        MoveClassification::Illegal => return None,
        MoveClassification::Castle { kingside } => {
            return Some(apply_castle(board, from, to, mover, kingside));
        }
        MoveClassification::PromotionCandidate => {
            let choice = chooser.choose(mover.color, to)?;
            debug!(
                "[PROMOTION] {:?} pawn {} -> {} promotes to {:?}",
                mover.color,
                from,
                to,
                choice.kind()
            );
            Some(choice.kind())
        }
        MoveClassification::Normal | MoveClassification::PawnDoubleStep => None,
    };

    let captured = take_capture(board, mover, to);

    // Targets live for one ply: clear after the capture is resolved and
    // before a new one is placed.
    board.clear_en_passant_targets();

    board.clear(from);
    board.place(
        to,
        Piece {
            kind: promotion.unwrap_or(mover.kind),
            ..mover.moved()
        },
    );

    if classification == MoveClassification::PawnDoubleStep {
        let skipped = Square::new(to.file, (to.rank as i8 - mover.color.forward()) as u8);
        board.set(skipped, Occupant::EnPassantTarget { pawn: to });
        debug!("[MOVE] En-passant target placed on {}", skipped);
    }

    Some(AppliedMove {
        captured,
        record: RecordedMove::Normal {
            color: mover.color,
            kind: mover.kind,
            from,
            to,
            was_capture: captured.is_some(),
            promotion,
        },
    })
}

/// Remove whatever `mover` captures by landing on `to`
///
/// Landing on an en-passant target takes the pawn that skipped over it,
/// whichever piece lands there.
fn take_capture(board: &mut Board, mover: Piece, to: Square) -> Option<Piece> {
    match board.get(to) {
        Occupant::Piece(piece) => Some(piece),
        Occupant::EnPassantTarget { pawn } => {
            debug_assert_eq!(
                Some(pawn),
                to.offset(0, -mover.color.forward()),
                "en-passant target does not sit behind its pawn"
            );
            let taken = board.piece_at(pawn);
            board.clear(pawn);
            debug!("[MOVE] En passant on {} removes pawn from {}", to, pawn);
            taken
        }
        Occupant::Empty => None,
    }
}

fn apply_castle(
    board: &mut Board,
    from: Square,
    to: Square,
    mover: Piece,
    kingside: bool,
) -> AppliedMove {
    let (king_square, rook_square) = if mover.kind == PieceKind::King {
        (from, to)
    } else {
        (to, from)
    };
    let (Some(king), Some(rook)) = (board.piece_at(king_square), board.piece_at(rook_square))
    else {
        panic!("castle between {} and {} without both pieces", from, to);
    };

    let rank = king_square.rank;
    let (king_file, rook_file) = if kingside { (6, 5) } else { (2, 3) };

    board.clear_en_passant_targets();
    board.clear(king_square);
    board.clear(rook_square);
    board.place(Square::new(king_file, rank), king.moved());
    board.place(Square::new(rook_file, rank), rook.moved());

    AppliedMove {
        captured: None,
        record: RecordedMove::Castle {
            color: mover.color,
            kingside,
        },
    }
}
