//! Board coordinates
//!
//! `file` 0 is the a-file. `rank` is the internal row index: row 0 is the
//! top of the grid (dark's back rank), so the printed rank number is
//! `8 - rank`.

use crate::game::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A square on the 8x8 grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    /// Build a square from indices the caller already knows are in range
    pub const fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Self { file, rank }
    }

    /// Build a square from untrusted indices
    pub fn try_new(file: u8, rank: u8) -> GameResult<Self> {
        if file > 7 || rank > 7 {
            return Err(GameError::InvalidSquare { file, rank });
        }
        Ok(Self { file, rank })
    }

    /// Square displaced by a signed offset, or `None` when it leaves the board
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Index into a row-major 64 element array
    pub(crate) const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn file_letter(self) -> char {
        (b'a' + self.file) as char
    }

    /// Printed rank number (1..=8)
    pub fn rank_number(self) -> u8 {
        8 - self.rank
    }

    /// All 64 squares, top row first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank_number())
    }
}

impl FromStr for Square {
    type Err = GameError;

    /// Parse `"e2"`-style notation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidNotation {
            input: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(invalid());
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(invalid());
        }
        Ok(Square::new(file - b'a', 8 - (rank - b'0')))
    }
}
