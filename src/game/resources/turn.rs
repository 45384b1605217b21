//! Turn tracking
//!
//! Single source of truth for whose move it is. The move number follows
//! notation numbering: it increments when dark hands the turn back to light.
//!
//! ```text
//! Move 1: Light plays → switch() → Dark plays → switch() → Move 2: Light plays
//! ```

use crate::game::components::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTurn {
    pub color: Color,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self::starting_with(Color::Light)
    }
}

impl CurrentTurn {
    pub fn starting_with(color: Color) -> Self {
        Self {
            color,
            move_number: 1,
        }
    }

    /// Hand the move to the other side
    pub fn switch(&mut self) {
        if self.color == Color::Dark {
            self.move_number += 1;
        }
        self.color = self.color.opponent();
    }
}
