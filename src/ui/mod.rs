//! UI module - terminal presentation
//!
//! - **text_board**: board rendering with unicode or ASCII glyphs

pub mod text_board;

pub use text_board::*;
