use crate::core::{Board, Cell, PlayerId};
use crate::error::GameError;

/// A seat in the match: anything that can propose a cell for a read-only board.
pub trait PlayerController {
    /// Pick an empty, in-bounds cell. `NoLegalMove` when the board is full.
    fn choose_move(&self, board: &Board) -> Result<Cell, GameError>;
    fn name(&self) -> &str;
    fn player_id(&self) -> PlayerId;

    /// Whether the mover waits on a person at the terminal.
    fn is_interactive(&self) -> bool {
        false
    }
}
