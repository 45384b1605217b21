//! Chess rules module - Pure game logic
//!
//! # Module Structure
//!
//! - `board_state` - The 8x8 occupant grid
//! - `obstruction` - Rank, file and diagonal line-of-sight checks
//! - `piece_moves` - [`classify`]: legality and special-move detection
//! - `apply_move` - [`apply_move`]: board transition for an accepted move
//!
//! Validation never mutates; execution only mutates once every input
//! (including a promotion choice) is known.

pub mod apply_move;
pub mod board_state;
pub mod obstruction;
pub mod piece_moves;


// Re-export commonly used items
pub use apply_move::{apply_move, AppliedMove};
pub use board_state::Board;
pub use obstruction::{diagonal_clear, horizontal_clear, vertical_clear};
pub use piece_moves::classify;
