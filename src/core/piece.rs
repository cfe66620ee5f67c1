use super::types::{Cell, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A marker placed on the board. Never moves once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: PlayerId,
    pub position: Cell,
}

impl Piece {
    pub fn new(owner: PlayerId, position: Cell) -> Self {
        Piece { owner, position }
    }

    pub fn display_char(&self) -> char {
        self.owner.symbol()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.display_char(), self.position)
    }
}
