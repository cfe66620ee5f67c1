use crate::core::{Board, Cell, PlayerId};
use crate::error::GameError;
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// Uniform choice among the free cells.
pub struct RandomAI {
    player_id: PlayerId,
    name: String,
    rng: RefCell<StdRng>,
}

impl RandomAI {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self::from_rng(player_id, name, StdRng::from_entropy())
    }

    /// Reproducible mover: the same seed on the same boards yields the same cells.
    pub fn with_seed(player_id: PlayerId, name: &str, seed: u64) -> Self {
        Self::from_rng(player_id, name, StdRng::seed_from_u64(seed))
    }

    fn from_rng(player_id: PlayerId, name: &str, rng: StdRng) -> Self {
        RandomAI {
            player_id,
            name: name.to_string(),
            rng: RefCell::new(rng),
        }
    }
}

impl PlayerController for RandomAI {
    fn choose_move(&self, board: &Board) -> Result<Cell, GameError> {
        let mut rng = self.rng.borrow_mut();
        board
            .free_cells()
            .choose(&mut *rng)
            .copied()
            .ok_or(GameError::NoLegalMove)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{board_from_rows, Piece};

    #[test]
    fn test_random_ai_selects_free_cell() {
        let board = board_from_rows(&["XO.", ".X.", "O.."]).unwrap();
        let ai = RandomAI::new(PlayerId::First, "Random AI");
        for _ in 0..100 {
            let cell = ai.choose_move(&board).unwrap();
            assert!(board.is_empty(cell), "{} is occupied", cell);
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut board = Board::new(5);
        let a = RandomAI::with_seed(PlayerId::First, "A", 42);
        let b = RandomAI::with_seed(PlayerId::First, "B", 42);

        for _ in 0..10 {
            let cell = a.choose_move(&board).unwrap();
            assert_eq!(b.choose_move(&board), Ok(cell));
            board.place(Piece::new(PlayerId::First, cell)).unwrap();
        }
    }

    #[test]
    fn test_covers_every_free_cell() {
        let board = Board::new(2);
        let ai = RandomAI::with_seed(PlayerId::Second, "Random AI", 7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(ai.choose_move(&board).unwrap());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_no_legal_move_on_full_board() {
        let board = board_from_rows(&["XO", "OX"]).unwrap();
        let ai = RandomAI::new(PlayerId::First, "Random AI");
        assert_eq!(ai.choose_move(&board), Err(GameError::NoLegalMove));
    }
}
