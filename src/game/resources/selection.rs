//! Selection state for the two-click move protocol

use crate::game::components::Square;

/// Either nothing is selected or one square holding a piece of the side to move
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(Square),
}

impl Selection {
    pub fn square(self) -> Option<Square> {
        match self {
            Selection::Selected(square) => Some(square),
            Selection::Unselected => None,
        }
    }

    pub fn is_selected(self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    pub fn clear(&mut self) {
        *self = Selection::Unselected;
    }
}
