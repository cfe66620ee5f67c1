use crate::core::{Board, Cell, Piece, PlayerId};
use crate::error::GameError;

/// Build a board from text rows: `X` and `O` are pieces, `.` or a space is empty.
///
/// Every row must be as long as there are rows.
pub fn board_from_rows(rows: &[&str]) -> Result<Board, GameError> {
    let size = rows.len();
    let mut board = Board::new(size);

    for (row, line) in rows.iter().enumerate() {
        let symbols: Vec<char> = line.chars().collect();
        if symbols.len() != size {
            return Err(GameError::InvalidConfiguration(format!(
                "row {} has {} cells, expected {}",
                row,
                symbols.len(),
                size
            )));
        }

        for (col, symbol) in symbols.into_iter().enumerate() {
            let owner = match symbol.to_ascii_uppercase() {
                'X' => PlayerId::First,
                'O' => PlayerId::Second,
                '.' | ' ' => continue,
                other => {
                    return Err(GameError::InvalidConfiguration(format!(
                        "unknown symbol '{}' at ({}, {})",
                        other, row, col
                    )))
                }
            };
            board.place(Piece::new(owner, Cell::new(row, col)))?;
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_parse_into_pieces() {
        let board = board_from_rows(&["X.O", "...", ".x."]).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.piece_count(), 3);
        assert_eq!(
            board.occupant(Cell::new(0, 2)).map(|p| p.owner),
            Some(PlayerId::Second)
        );
        assert_eq!(
            board.occupant(Cell::new(2, 1)).map(|p| p.owner),
            Some(PlayerId::First)
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = board_from_rows(&["X..", ".."]).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert!(board_from_rows(&["Z"]).is_err());
    }
}
