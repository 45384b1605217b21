//! Chess piece movement rules
//!
//! [`classify`] is a pure function from (board, from, to) to a
//! [`MoveClassification`]. There is no check detection: a king is captured
//! like any other piece and self-check is not rejected.

use super::board_state::Board;
use super::obstruction::{diagonal_clear, horizontal_clear, vertical_clear};
use crate::game::components::{MoveClassification, Occupant, Piece, PieceKind, Square};

/// Classify a requested move
///
/// # Panics
///
/// When `from == to` or `from` does not hold a piece. Both are caller
/// contract violations; the selection state machine never produces them.
pub fn classify(board: &Board, from: Square, to: Square) -> MoveClassification {
    assert_ne!(from, to, "classify called with identical squares {}", from);
    let Some(moving) = board.piece_at(from) else {
        panic!("classify called with no piece on {}", from);
    };

    let target = board.get(to);
    if let Occupant::Piece(other) = target {
        if other.color == moving.color {
            return classify_castle(board, from, moving, to, other);
        }
    }

    let d_file = to.file as i8 - from.file as i8;
    let d_rank = to.rank as i8 - from.rank as i8;

    let legal = match moving.kind {
        PieceKind::King => d_file.abs() <= 1 && d_rank.abs() <= 1,
        PieceKind::Queen => {
            straight_line_clear(board, from, to, d_file, d_rank)
                || diagonal_line_clear(board, from, to, d_file, d_rank)
        }
        PieceKind::Rook => straight_line_clear(board, from, to, d_file, d_rank),
        PieceKind::Bishop => diagonal_line_clear(board, from, to, d_file, d_rank),
        PieceKind::Knight => matches!((d_file.abs(), d_rank.abs()), (2, 1) | (1, 2)),
        PieceKind::Pawn => return classify_pawn(board, from, moving, to, d_file, d_rank),
    };

    if legal {
        MoveClassification::Normal
    } else {
        MoveClassification::Illegal
    }
}

/// Friendly-fire is only legal as an unmoved king/rook pair on a clear rank
fn classify_castle(
    board: &Board,
    from: Square,
    moving: Piece,
    to: Square,
    other: Piece,
) -> MoveClassification {
    let rook_square = match (moving.kind, other.kind) {
        (PieceKind::King, PieceKind::Rook) => to,
        (PieceKind::Rook, PieceKind::King) => from,
        _ => return MoveClassification::Illegal,
    };

    if moving.has_moved || other.has_moved || from.rank != to.rank {
        return MoveClassification::Illegal;
    }

    if !horizontal_clear(board, from.rank, from.file, to.file) {
        return MoveClassification::Illegal;
    }

    MoveClassification::Castle {
        kingside: rook_square.file == 7,
    }
}

fn straight_line_clear(board: &Board, from: Square, to: Square, d_file: i8, d_rank: i8) -> bool {
    if d_file == 0 {
        vertical_clear(board, from.file, from.rank, to.rank)
    } else if d_rank == 0 {
        horizontal_clear(board, from.rank, from.file, to.file)
    } else {
        false
    }
}

fn diagonal_line_clear(board: &Board, from: Square, to: Square, d_file: i8, d_rank: i8) -> bool {
    d_file.abs() == d_rank.abs() && diagonal_clear(board, from, to)
}

fn classify_pawn(
    board: &Board,
    from: Square,
    pawn: Piece,
    to: Square,
    d_file: i8,
    d_rank: i8,
) -> MoveClassification {
    let forward = pawn.color.forward();
    // En-passant targets count as occupied: they are capturable, not gaps.
    let dest_empty = board.is_empty(to);
    let step_result = if to.rank == pawn.color.far_rank() {
        MoveClassification::PromotionCandidate
    } else {
        MoveClassification::Normal
    };

    if d_file == 0 {
        if d_rank == forward && dest_empty {
            return step_result;
        }
        if d_rank == 2 * forward && from.rank == pawn.color.pawn_start_rank() && dest_empty {
            let skipped = Square::new(to.file, (to.rank as i8 - forward) as u8);
            if board.is_empty(skipped) {
                return MoveClassification::PawnDoubleStep;
            }
        }
        return MoveClassification::Illegal;
    }

    if d_file.abs() == 1 && d_rank == forward && !dest_empty {
        return step_result;
    }

    MoveClassification::Illegal
}
