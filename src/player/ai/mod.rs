pub mod alpha_beta;
pub mod evaluator;
pub mod minimax;
pub mod random;
pub mod search;

pub use alpha_beta::AlphaBetaAI;
pub use evaluator::{Evaluator, TerminalOnly};
pub use minimax::MinimaxAI;
pub use random::RandomAI;
