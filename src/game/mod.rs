//! Chess game logic module
//!
//! # Module Organization
//!
//! - `components` - Plain data: squares, pieces, occupants, move records
//! - `rules` - Pure chess logic (board, obstruction, validation, execution)
//! - `resources` - Per-session state (CurrentTurn, Selection, MoveHistory, CapturedPieces)
//! - `session` - [`GameSession`], the click-driven state machine tying it together
//! - `error` - Input parsing errors
//!
//! Data flows one way: a click reaches the session, the session asks
//! `rules::classify`, and accepted moves go through `rules::apply_move`
//! before the record is appended to the history.

pub mod components;
pub mod error;
pub mod resources;
pub mod rules;
pub mod session;

pub use session::{ClickOutcome, GameSession, MoveReport};
