//! Chess game components module
//!
//! Components are pure data structures with no rule logic.
//! Organized by domain: squares, pieces, and move records.

pub mod game_state;
pub mod piece;
pub mod square;


// Re-export all components for convenience
pub use game_state::*;
pub use piece::*;
pub use square::*;
