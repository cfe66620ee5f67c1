use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    First,  // moves first, 'X'
    Second, // 'O'
}

impl Default for PlayerId {
    fn default() -> Self {
        PlayerId::First
    }
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PlayerId::First => 'X',
            PlayerId::Second => 'O',
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerId::First => write!(f, "First (X)"),
            PlayerId::Second => write!(f, "Second (O)"),
        }
    }
}

/// Board coordinate (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Neighbour one step along `(dr, dc)`, or `None` when it leaves `0..size`.
    pub fn offset(self, dr: isize, dc: isize, size: usize) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Cell { row, col })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for p in [PlayerId::First, PlayerId::Second] {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_offset_stays_on_board() {
        let c = Cell::new(0, 2);
        assert_eq!(c.offset(1, -1, 3), Some(Cell::new(1, 1)));
        assert_eq!(c.offset(-1, 0, 3), None);
        assert_eq!(c.offset(0, 1, 3), None);
    }
}
