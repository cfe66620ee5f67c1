use super::evaluator::{Evaluator, TerminalOnly};
use super::search::{ply_owner, search_root, terminal_score, Placement, SearchParams};
use crate::config::MatchConfig;
use crate::core::{Board, Cell, Piece, PlayerId};
use crate::error::GameError;
use crate::player::PlayerController;

use std::cell::RefCell;

/// Minimax with alpha-beta pruning. Same move and score as [`super::MinimaxAI`]
/// for the same input, usually with far fewer nodes.
pub struct AlphaBetaAI {
    player_id: PlayerId,
    name: String,
    params: SearchParams,
    evaluator: Box<dyn Evaluator>,
    nodes_evaluated: RefCell<u64>,
}

impl AlphaBetaAI {
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

    pub fn nodes_visited(&self) -> u64 {
        *self.nodes_evaluated.borrow()
    }

    // --- Search Root ---
    pub fn best_move(&self, board: &mut Board) -> Result<(Cell, i32), GameError> {
        *self.nodes_evaluated.borrow_mut() = 0;

        // Root is a max node: the best score so far is alpha for every later sibling.
        // Siblings that cannot beat it come back <= alpha and never replace it.
        let (cell, score) = search_root(board, self.player_id, |board, piece, floor| {
            self.alpha_beta(board, piece, 0, false, floor, i32::MAX)
        })?;

        log::debug!(
            "{} ({:?}) alpha-beta picked {} score={} nodes={}",
            self.name,
            self.player_id,
            cell,
            score,
            self.nodes_visited()
        );
        Ok((cell, score))
    }

    // --- Alpha-Beta Search ---
    fn alpha_beta(
        &self,
        board: &mut Board,
        last: Piece,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
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

        if maximizing {
            let mut best = i32::MIN;
            for cell in board.free_cells() {
                let piece = Piece::new(mover, cell);
                let Ok(mut placed) = Placement::new(board, piece) else {
                    continue;
                };
                let score = self.alpha_beta(&mut placed, piece, depth + 1, false, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if score >= beta {
                    break; // beta cutoff
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for cell in board.free_cells() {
                let piece = Piece::new(mover, cell);
                let Ok(mut placed) = Placement::new(board, piece) else {
                    continue;
                };
                let score = self.alpha_beta(&mut placed, piece, depth + 1, true, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if score <= alpha {
                    break; // alpha cutoff
                }
            }
            best
        }
    }
}

impl PlayerController for AlphaBetaAI {
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
