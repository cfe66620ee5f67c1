//! Pieces shared by the minimax and alpha-beta movers: ply ownership, the scoped
//! placement guard, terminal scoring and the root move loop.

use super::evaluator::Evaluator;
use crate::config::MatchConfig;
use crate::core::{Board, Cell, Piece, PlayerId};
use crate::error::GameError;
use crate::logic::is_winning_move;
use std::ops::{Deref, DerefMut};

/// Score of a win found on the root move itself.
pub const WIN_SCORE: i32 = 1_000_000;
/// Subtracted per ply so that shallower wins (and later losses) score better.
pub const DEPTH_PENALTY: i32 = 1;

/// Limits of one search, fixed for the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    pub win_length: usize,
    /// Deepest ply index explored below the root move (root move is depth 0)
    pub max_depth: usize,
}

impl From<&MatchConfig> for SearchParams {
    fn from(config: &MatchConfig) -> Self {
        SearchParams {
            win_length: config.win_length,
            max_depth: config.search_depth,
        }
    }
}

/// Owner of the piece placed at `depth`. The root move is depth 0 and belongs to `root`;
/// ownership alternates strictly from there.
pub fn ply_owner(root: PlayerId, depth: usize) -> PlayerId {
    if depth % 2 == 0 {
        root
    } else {
        root.opponent()
    }
}

/// Speculative piece that is taken back off the board when the guard goes out of scope.
pub struct Placement<'a> {
    board: &'a mut Board,
    piece: Piece,
}

impl<'a> Placement<'a> {
    pub fn new(board: &'a mut Board, piece: Piece) -> Result<Self, GameError> {
        board.place(piece)?;
        Ok(Placement { board, piece })
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.piece.position);
    }
}

/// Score of the node reached by `last` at `depth`, if the walk stops here.
///
/// Checked in order: a win for the owner of `last`, a full board (draw), the depth cutoff.
pub fn terminal_score(
    board: &Board,
    last: &Piece,
    depth: usize,
    root: PlayerId,
    params: &SearchParams,
    evaluator: &dyn Evaluator,
) -> Option<i32> {
    if is_winning_move(board, last, params.win_length) {
        let score = WIN_SCORE - depth as i32 * DEPTH_PENALTY;
        return Some(if last.owner == root { score } else { -score });
    }
    if board.is_full() {
        return Some(0);
    }
    if depth >= params.max_depth {
        return Some(evaluator.evaluate(board, root));
    }
    None
}

/// Try every free cell for `root` in row-major order and keep the strictly best score;
/// the first cell wins ties.
///
/// `score_child` receives the board with the root piece on it, that piece, and the best
/// score found so far (`i32::MIN` before the first child) for use as a lower bound.
pub fn search_root<F>(
    board: &mut Board,
    root: PlayerId,
    mut score_child: F,
) -> Result<(Cell, i32), GameError>
where
    F: FnMut(&mut Board, Piece, i32) -> i32,
{
    let mut best: Option<(Cell, i32)> = None;

    for cell in board.free_cells() {
        let piece = Piece::new(root, cell);
        let mut placed = Placement::new(board, piece)?;
        let floor = best.map_or(i32::MIN, |(_, score)| score);
        let score = score_child(&mut *placed, piece, floor);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((cell, score));
        }
    }

    best.ok_or(GameError::NoLegalMove)
}
