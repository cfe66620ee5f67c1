use super::evaluator::{Evaluator, TerminalOnly};
use super::search::{ply_owner, search_root, terminal_score, Placement, SearchParams};
use crate::config::MatchConfig;
use crate::core::{Board, Cell, Piece, PlayerId};
use crate::error::GameError;
use crate::player::PlayerController;
use std::cell::RefCell;

/// Exhaustive depth-bounded minimax.
pub struct MinimaxAI {
    player_id: PlayerId,
    name: String,
    params: SearchParams,
    evaluator: Box<dyn Evaluator>,
    nodes_evaluated: RefCell<u64>,
}

impl MinimaxAI {
    pub fn new(player_id: PlayerId, name: &str, config: &MatchConfig) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            params: SearchParams::from(config),
            evaluator: Box::new(TerminalOnly),
            nodes_evaluated: RefCell::new(0),
        }
    }

    pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Nodes visited by the last `best_move` call.
    pub fn nodes_visited(&self) -> u64 {
        *self.nodes_evaluated.borrow()
    }

    /// Best cell for this player and its score. The board is left exactly as it was given.
    pub fn best_move(&self, board: &mut Board) -> Result<(Cell, i32), GameError> {
        *self.nodes_evaluated.borrow_mut() = 0;

        // The root move is depth 0; the opponent answers next, on a minimizing ply.
        let (cell, score) = search_root(board, self.player_id, |board, piece, _floor| {
            self.minimax(board, piece, 0, false)
        })?;

        log::debug!(
            "{} ({:?}) minimax picked {} score={} nodes={}",
            self.name,
            self.player_id,
            cell,
            score,
            self.nodes_visited()
        );
        Ok((cell, score))
    }

    /// Score the position reached by `last`, placed at `depth`. `maximizing` tells whether
    /// the next ply belongs to this player.
    fn minimax(&self, board: &mut Board, last: Piece, depth: usize, maximizing: bool) -> i32 {
        *self.nodes_evaluated.borrow_mut() += 1;

        if let Some(score) = terminal_score(
            board,
            &last,
            depth,
            self.player_id,
            &self.params,
            self.evaluator.as_ref(),
        ) {
            return score;
        }

        let mover = ply_owner(self.player_id, depth + 1);
        debug_assert_eq!(maximizing, mover == self.player_id);

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for cell in board.free_cells() {
            let piece = Piece::new(mover, cell);
            let mut placed = match Placement::new(board, piece) {
                Ok(placed) => placed,
                Err(_) => continue,
            };
            let score = self.minimax(&mut placed, piece, depth + 1, !maximizing);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board) -> Result<Cell, GameError> {
        let mut scratch = board.clone();
        let (cell, _) = self.best_move(&mut scratch)?;
        debug_assert_eq!(&scratch, board);
        Ok(cell)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }
}
