//! Evaluator trait for board evaluation
//!
//! Scores non-terminal positions where the search is cut off by depth. The tree walk
//! never looks inside an evaluator, so a positional heuristic can be dropped in
//! without touching minimax or alpha-beta.

use crate::core::{Board, PlayerId};

/// Trait for evaluating board positions
pub trait Evaluator: Send + Sync {
    /// Score the board from `perspective`'s point of view
    ///
    /// Returns:
    ///   - Positive score: `perspective` is better off
    ///   - Negative score: the opponent is better off
    ///   - Zero: nothing to tell apart
    fn evaluate(&self, board: &Board, perspective: PlayerId) -> i32;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}

/// Knows only wins and draws, which the search detects itself, so every cutoff is neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOnly;

impl Evaluator for TerminalOnly {
    fn evaluate(&self, _board: &Board, _perspective: PlayerId) -> i32 {
        0
    }

    fn name(&self) -> &str {
        "terminal-only"
    }
}
