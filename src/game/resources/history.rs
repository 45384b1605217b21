//! Move history tracking
//!
//! Keeps every accepted ply in order and renders the numbered listing shown
//! on a "show history" request:
//!
//! ```text
//! 1. e2e4 e7e5
//! 2. Ng1f3 Nb8c6
//! 3. Bf1c4
//! ```

use crate::game::components::{Color, RecordedMove};
use serde::{Deserialize, Serialize};

/// Chronological record of all moves made in the game
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    /// Plies in the order they were played
    pub moves: Vec<RecordedMove>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: RecordedMove) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&RecordedMove> {
        self.moves.last()
    }

    /// Number of plies recorded
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn get_move(&self, index: usize) -> Option<&RecordedMove> {
        self.moves.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecordedMove> {
        self.moves.iter()
    }

    /// Numbered move pairs, one per line; an odd trailing move prints alone
    ///
    /// A history that opens with a dark move starts with `1. ... <move>` so
    /// light's column stays on the left.
    pub fn dump(&self) -> String {
        let (opening, rest) = match self.moves.split_first() {
            Some((first, rest)) if first.color() == Color::Dark => (Some(first), rest),
            _ => (None, self.moves.as_slice()),
        };

        let mut lines: Vec<String> = opening
            .map(|first| format!("1. ... {}", first))
            .into_iter()
            .collect();
        let offset = lines.len();
        lines.extend(rest.chunks(2).enumerate().map(|(i, pair)| {
            let number = i + 1 + offset;
            match pair {
                [white, black] => format!("{}. {} {}", number, white, black),
                [white] => format!("{}. {}", number, white),
                _ => unreachable!("chunks(2) yields one or two moves"),
            }
        }));
        lines.join("\n")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
