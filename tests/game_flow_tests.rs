//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Turn alternation
//! - Selection transitions
//! - En passant across several plies
//! - Promotion choice and cancellation
//! - Move history output

use chess_rules::prelude::*;

/// Parse an algebraic square, panicking on typos in the test itself
fn at(name: &str) -> Square {
    name.parse().expect("valid square in test")
}

/// Play `moves` as two clicks each, asserting every one is accepted
fn play(session: &mut GameSession, moves: &[(&str, &str)]) -> Vec<MoveReport> {
    moves
        .iter()
        .map(|&(from, to)| {
            assert_eq!(
                session.click(at(from), &mut CancelPromotion),
                ClickOutcome::Selected(at(from)),
                "could not select {}",
                from
            );
            match session.click(at(to), &mut CancelPromotion) {
                ClickOutcome::Moved(report) => report,
                other => panic!("{} -> {} was not played: {:?}", from, to, other),
            }
        })
        .collect()
}

/// Light pawn on d7 about to promote, kings tucked away
fn promotion_position() -> GameSession {
    let mut board = Board::empty();
    board.place(Square::new(3, 1), Piece::new(Color::Light, PieceKind::Pawn).moved());
    board.place(Square::new(4, 7), Piece::new(Color::Light, PieceKind::King));
    board.place(Square::new(7, 0), Piece::new(Color::Dark, PieceKind::King));
    GameSession::from_board(board, Color::Light)
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_moves_first() {
    let mut session = GameSession::new();

    assert_eq!(session.color_to_move(), Color::Light);
    assert_eq!(
        session.click(at("e7"), &mut CancelPromotion),
        ClickOutcome::Ignored,
        "dark pieces cannot be selected on light's turn"
    );
    assert_eq!(session.selection(), Selection::Unselected);
}

#[test]
fn test_turn_flips_once_per_move() {
    let mut session = GameSession::new();

    play(&mut session, &[("e2", "e4")]);
    assert_eq!(session.color_to_move(), Color::Dark);
    assert_eq!(session.turn().move_number, 1);

    play(&mut session, &[("e7", "e5")]);
    assert_eq!(session.color_to_move(), Color::Light);
    assert_eq!(session.turn().move_number, 2);
}

#[test]
fn test_turn_kept_on_rejection_and_deselect() {
    let mut session = GameSession::new();

    session.click(at("b1"), &mut CancelPromotion);
    assert_eq!(
        session.click(at("b3"), &mut CancelPromotion),
        ClickOutcome::Rejected {
            from: at("b1"),
            to: at("b3")
        }
    );
    assert_eq!(session.selection(), Selection::Selected(at("b1")));
    assert_eq!(session.click(at("b1"), &mut CancelPromotion), ClickOutcome::Deselected);

    assert_eq!(session.color_to_move(), Color::Light);
    assert!(session.history().is_empty());
    assert_eq!(*session.board(), Board::standard());
}

// ============================================================================
// Selection Transition Tests
// ============================================================================

#[test]
fn test_clicking_own_piece_while_selected_is_rejected() {
    //! Switching pieces takes a deselect first; the second click is a move attempt
    let mut session = GameSession::new();

    session.click(at("g1"), &mut CancelPromotion);
    assert_eq!(
        session.click(at("g2"), &mut CancelPromotion),
        ClickOutcome::Rejected {
            from: at("g1"),
            to: at("g2")
        }
    );
    assert_eq!(session.selection(), Selection::Selected(at("g1")));
}

#[test]
fn test_en_passant_marker_cannot_be_selected() {
    let mut session = GameSession::new();
    play(&mut session, &[("a2", "a4")]);

    assert!(session.board().get(at("a3")).is_en_passant_target());
    assert_eq!(session.click(at("a3"), &mut CancelPromotion), ClickOutcome::Ignored);
    assert_eq!(session.selection(), Selection::Unselected);
}

#[test]
fn test_move_report_matches_session_board() {
    let mut session = GameSession::new();
    let reports = play(&mut session, &[("g1", "f3")]);

    assert_eq!(reports[0].board, *session.board());
    assert_eq!(reports[0].captured, None);
    assert_eq!(reports[0].record.to_string(), "Ng1f3");
}

// ============================================================================
// En Passant Tests
// ============================================================================

#[test]
fn test_en_passant_capture() {
    //! a2-a4 skips over a3; the dark pawn on b4 takes it immediately
    let mut session = GameSession::new();
    let reports = play(
        &mut session,
        &[
            ("h2", "h3"),
            ("b7", "b5"),
            ("h3", "h4"),
            ("b5", "b4"),
            ("a2", "a4"),
            ("b4", "a3"),
        ],
    );

    let board = session.board();
    assert!(board.is_empty(at("a4")), "the double-stepped pawn is removed");
    assert_eq!(
        board.piece_at(at("a3")),
        Some(Piece::new(Color::Dark, PieceKind::Pawn).moved())
    );
    assert_eq!(board.en_passant_targets().count(), 0);

    let last = reports.last().expect("six moves played");
    assert_eq!(last.captured.map(|p| (p.color, p.kind)), Some((Color::Light, PieceKind::Pawn)));
    assert_eq!(last.record.to_string(), "b4xa3");
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let mut session = GameSession::new();
    play(
        &mut session,
        &[
            ("h2", "h3"),
            ("b7", "b5"),
            ("h3", "h4"),
            ("b5", "b4"),
            ("a2", "a4"),
            ("h7", "h6"),
            ("g2", "g3"),
        ],
    );

    assert!(session.board().is_empty(at("a3")));
    session.click(at("b4"), &mut CancelPromotion);
    assert_eq!(
        session.click(at("a3"), &mut CancelPromotion),
        ClickOutcome::Rejected {
            from: at("b4"),
            to: at("a3")
        }
    );
}

// ============================================================================
// Castling Tests
// ============================================================================

#[test]
fn test_castle_after_clearing_kingside() {
    let mut session = GameSession::new();
    let reports = play(
        &mut session,
        &[
            ("g1", "f3"),
            ("a7", "a6"),
            ("g2", "g3"),
            ("a6", "a5"),
            ("f1", "g2"),
            ("a5", "a4"),
            ("e1", "h1"),
        ],
    );

    let board = session.board();
    assert_eq!(board.piece_at(at("g1")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(board.piece_at(at("f1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(board.is_empty(at("e1")));
    assert!(board.is_empty(at("h1")));
    assert_eq!(reports.last().map(|r| r.record.to_string()), Some("0-0".to_string()));
    assert_eq!(session.color_to_move(), Color::Dark);
}

#[test]
fn test_castle_blocked_from_start() {
    let mut session = GameSession::new();
    session.click(at("e1"), &mut CancelPromotion);
    assert!(matches!(
        session.click(at("h1"), &mut CancelPromotion),
        ClickOutcome::Rejected { .. }
    ));
}

// ============================================================================
// Promotion Tests
// ============================================================================

#[test]
fn test_promotion_cancel_keeps_everything() {
    let mut session = promotion_position();
    let before = *session.board();

    session.click(Square::new(3, 1), &mut CancelPromotion);
    assert_eq!(
        session.click(Square::new(3, 0), &mut CancelPromotion),
        ClickOutcome::PromotionCancelled {
            from: Square::new(3, 1),
            to: Square::new(3, 0)
        }
    );

    assert_eq!(*session.board(), before);
    assert_eq!(session.selection(), Selection::Selected(Square::new(3, 1)));
    assert_eq!(session.color_to_move(), Color::Light);
    assert!(session.history().is_empty());
}

#[test]
fn test_promotion_retry_after_cancel() {
    let mut session = promotion_position();
    session.click(Square::new(3, 1), &mut CancelPromotion);
    session.click(Square::new(3, 0), &mut CancelPromotion);

    let outcome = session.click(Square::new(3, 0), &mut AlwaysPromote(PromotionPiece::Queen));
    let ClickOutcome::Moved(report) = outcome else {
        panic!("promotion should complete: {:?}", outcome);
    };

    assert_eq!(report.record.to_string(), "d7d8=Q");
    assert_eq!(session.color_to_move(), Color::Dark);
}

#[test]
fn test_promotion_each_kind() {
    for choice in PromotionPiece::ALL {
        let mut session = promotion_position();
        let mut asked = Vec::new();
        let mut chooser = |color: Color, square: Square| -> Option<PromotionPiece> {
            asked.push((color, square));
            Some(choice)
        };

        session.click(Square::new(3, 1), &mut chooser);
        let outcome = session.click(Square::new(3, 0), &mut chooser);
        assert!(matches!(outcome, ClickOutcome::Moved(_)), "{:?}", outcome);

        assert_eq!(
            session.board().piece_at(Square::new(3, 0)),
            Some(Piece::new(Color::Light, choice.kind()).moved())
        );
        assert!(session.board().is_empty(Square::new(3, 1)));
        assert_eq!(asked, vec![(Color::Light, Square::new(3, 0))]);
    }
}

#[test]
fn test_chooser_not_consulted_for_ordinary_moves() {
    let mut session = GameSession::new();
    let mut calls = 0;
    let mut chooser = |_: Color, _: Square| -> Option<PromotionPiece> {
        calls += 1;
        None
    };

    session.click(at("e2"), &mut chooser);
    assert!(matches!(
        session.click(at("e4"), &mut chooser),
        ClickOutcome::Moved(_)
    ));
    assert_eq!(calls, 0);
}

// ============================================================================
// History Tests
// ============================================================================

#[test]
fn test_history_dump_after_short_game() {
    let mut session = GameSession::new();
    play(
        &mut session,
        &[
            ("e2", "e4"),
            ("d7", "d5"),
            ("e4", "d5"),
            ("d8", "d5"),
            ("b1", "c3"),
        ],
    );

    assert_eq!(
        session.history().dump(),
        "1. e2e4 d7d5\n2. e4xd5 Qd8xd5\n3. Nb1c3"
    );
    assert_eq!(session.history().len(), 5);
}

#[test]
fn test_history_json_export() {
    let mut session = GameSession::new();
    play(&mut session, &[("e2", "e4"), ("e7", "e5")]);

    let json = session.history().to_json().expect("history serialises");
    let restored: MoveHistory = serde_json::from_str(&json).expect("history deserialises");
    assert_eq!(&restored, session.history());
}

#[test]
fn test_history_dump_when_dark_starts() {
    let mut session = GameSession::from_board(Board::standard(), Color::Dark);
    play(&mut session, &[("e7", "e5"), ("e2", "e4"), ("g8", "f6")]);

    assert_eq!(session.history().dump(), "1. ... e7e5\n2. e2e4 Ng8f6");
}
