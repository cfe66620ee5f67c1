use crate::config::{MatchConfig, SelfPlaySettings};
use crate::core::PlayerId;
use crate::error::GameError;
use crate::game::{GameSession, Outcome};
use crate::player::{build_controller, ControllerKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

const REPORT_DIR: &str = "selfplay_reports";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub first: ControllerKind,
    pub second: ControllerKind,
    pub game: MatchConfig,
    /// Base seed for the random movers
    pub seed: u64,
    pub save_report: bool,
}

impl SelfPlayConfig {
    pub fn from_settings(settings: &SelfPlaySettings, game: MatchConfig) -> Self {
        SelfPlayConfig {
            num_games: settings.num_games,
            first: settings.first,
            second: settings.second,
            game,
            seed: settings.seed,
            save_report: settings.save_report,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub game: usize,
    pub winner: Option<PlayerId>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub first: String,
    pub second: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new(first: ControllerKind, second: ControllerKind) -> Self {
        Self {
            first: first.to_string(),
            second: second.to_string(),
            ..Self::default()
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(PlayerId::First) => self.first_wins += 1,
            Some(PlayerId::Second) => self.second_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }

    pub fn rate(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        count as f64 / self.total_games as f64 * 100.0
    }
}

/// Play `num_games` AI-vs-AI matches across the rayon pool.
///
/// Game `i` seeds its random movers with `seed + 2i` and `seed + 2i + 1`, so the same
/// config always produces the same results.
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    config.game.validate()?;
    if !config.first.is_ai() || !config.second.is_ai() {
        return Err(GameError::InvalidConfiguration(
            "self-play needs two AI seats".to_string(),
        )
        .into());
    }

    log::info!(
        "self-play: {} games, {} vs {} on {}x{} (win {}, depth {})",
        config.num_games,
        config.first,
        config.second,
        config.game.board_size,
        config.game.board_size,
        config.game.win_length,
        config.game.search_depth
    );

    let results: Vec<GameResult> = (0..config.num_games)
        .into_par_iter()
        .map(|game_idx| play_one(config, game_idx))
        .collect::<Result<_, GameError>>()?;

    let mut stats = SelfPlayStats::new(config.first, config.second);
    for result in results {
        stats.add_result(result);
    }
    log::info!(
        "self-play done: {} / {} / {} (first / second / draw)",
        stats.first_wins,
        stats.second_wins,
        stats.draws
    );

    if config.save_report {
        let path = save_report(&stats)?;
        log::info!("report written to {}", path.display());
    }
    Ok(stats)
}

fn play_one(config: &SelfPlayConfig, game_idx: usize) -> Result<GameResult, GameError> {
    let start_time = Instant::now();
    let base = config.seed.wrapping_add(2 * game_idx as u64);
    let p1 = build_controller(config.first, PlayerId::First, &config.game, Some(base));
    let p2 = build_controller(
        config.second,
        PlayerId::Second,
        &config.game,
        Some(base.wrapping_add(1)),
    );

    let mut session = GameSession::new(config.game)?;
    let state = session.play(p1.as_ref(), p2.as_ref(), |_| Ok(()))?;
    let winner = match state.outcome() {
        Outcome::Win(player) => Some(player),
        _ => None,
    };

    let result = GameResult {
        game: game_idx + 1,
        winner,
        moves: session.move_count(),
        time_ms: start_time.elapsed().as_millis(),
    };
    log::debug!(
        "game {} finished: {:?} in {} moves",
        result.game,
        result.winner,
        result.moves
    );
    Ok(result)
}

/// Write the stats to `selfplay_reports/report_<timestamp>.json`.
pub fn save_report(stats: &SelfPlayStats) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(REPORT_DIR)?;

    let filename = PathBuf::from(REPORT_DIR).join(format!(
        "report_{}.json",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(filename)
}
