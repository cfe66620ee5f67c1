pub mod ai;
pub mod controller;
pub mod tui;

pub use ai::{AlphaBetaAI, MinimaxAI, RandomAI};
pub use controller::PlayerController;
pub use tui::TuiController;

use crate::config::MatchConfig;
use crate::core::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerKind {
    Human,
    Random,
    Minimax,
    AlphaBeta,
}

impl ControllerKind {
    pub const ALL: [ControllerKind; 4] = [
        ControllerKind::Human,
        ControllerKind::Random,
        ControllerKind::Minimax,
        ControllerKind::AlphaBeta,
    ];

    pub fn is_ai(self) -> bool {
        self != ControllerKind::Human
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            ControllerKind::Human => "Human",
            ControllerKind::Random => "Random AI",
            ControllerKind::Minimax => "Minimax AI",
            ControllerKind::AlphaBeta => "AlphaBeta AI",
        };
        f.write_str(label)
    }
}

/// Build the mover for one seat. `seed` only matters for the random mover; `None`
/// seeds it from the OS.
pub fn build_controller(
    kind: ControllerKind,
    player_id: PlayerId,
    config: &MatchConfig,
    seed: Option<u64>,
) -> Box<dyn PlayerController> {
    let name = format!("{} {}", kind, player_id.symbol());
    match kind {
        ControllerKind::Human => Box::new(TuiController::new(player_id, &name)),
        ControllerKind::Random => match seed {
            Some(seed) => Box::new(RandomAI::with_seed(player_id, &name, seed)),
            None => Box::new(RandomAI::new(player_id, &name)),
        },
        ControllerKind::Minimax => Box::new(MinimaxAI::new(player_id, &name, config)),
        ControllerKind::AlphaBeta => Box::new(AlphaBetaAI::new(player_id, &name, config)),
    }
}
