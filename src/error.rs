use crate::core::Cell;

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell {cell} is outside the {size}x{size} board")]
    OutOfBounds { cell: Cell, size: usize },

    #[error("cell {0} is already occupied")]
    CellOccupied(Cell),

    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("the match is already over")]
    GameOver,

    #[error("player quit the match")]
    Aborted,

    #[error("terminal I/O failed: {0}")]
    Terminal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = GameError::OutOfBounds {
            cell: Cell::new(3, 7),
            size: 3,
        };
        assert_eq!(err.to_string(), "cell (3, 7) is outside the 3x3 board");
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = GameError::InvalidConfiguration("win_length must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: win_length must be > 0"
        );
    }
}
