//! N-in-a-row on a square board: the rules engine, search movers and a terminal front end.
//!
//! ```no_run
//! use n_in_a_row::{AlphaBetaAI, GameSession, MatchConfig, PlayerId, RandomAI};
//!
//! let config = MatchConfig::new(3, 3, 3)?;
//! let mut session = GameSession::new(config)?;
//! let p1 = RandomAI::new(PlayerId::First, "Random AI X");
//! let p2 = AlphaBetaAI::new(PlayerId::Second, "AlphaBeta AI O", &config);
//! let state = session.play(&p1, &p2, |_| Ok(()))?;
//! println!("{:?}", state.outcome());
//! # Ok::<(), n_in_a_row::GameError>(())
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;

pub use config::{AppConfig, MatchConfig};
pub use crate::core::{Board, Cell, Piece, PlayerId};
pub use error::GameError;
pub use game::{GameSession, MatchState, Outcome};
pub use player::{AlphaBetaAI, ControllerKind, MinimaxAI, PlayerController, RandomAI};
