//! Session resources - state owned by one game session
//!
//! ## Turn Management
//! - [`CurrentTurn`] - Whose move it is and the move number
//!
//! ## Player Interaction
//! - [`Selection`] - Square picked by the first click
//! - [`PromotionChooser`] - Promotion prompt collaborator
//!
//! ## Game History
//! - [`MoveHistory`] - Ordered move record and the numbered dump
//! - [`CapturedPieces`] - Capture tally kept by front-ends

pub mod captured;
pub mod history;
pub mod promotion;
pub mod selection;
pub mod turn;

pub use captured::*;
pub use history::*;
pub use promotion::*;
pub use selection::*;
pub use turn::*;
