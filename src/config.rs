use crate::error::GameError;
use crate::player::ControllerKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_PATH: &str = "n_in_a_row.json";

/// Per-match rules, fixed once the session is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub board_size: usize,
    /// Stones in a row needed to win, the same for both players
    pub win_length: usize,
    /// Plies the search looks below its own candidate move
    pub search_depth: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            board_size: 7,
            win_length: 5,
            search_depth: 2,
        }
    }
}

impl MatchConfig {
    pub fn new(
        board_size: usize,
        win_length: usize,
        search_depth: usize,
    ) -> Result<Self, GameError> {
        let config = MatchConfig {
            board_size,
            win_length,
            search_depth,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| -> Result<(), GameError> {
            Err(GameError::InvalidConfiguration(msg))
        };
        if self.board_size == 0 {
            return invalid("board_size must be > 0".to_string());
        }
        if self.win_length == 0 {
            return invalid("win_length must be > 0".to_string());
        }
        if self.search_depth == 0 {
            return invalid("search_depth must be > 0".to_string());
        }
        if self.win_length > self.board_size {
            return invalid(format!(
                "win_length {} exceeds board_size {}",
                self.win_length, self.board_size
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlaySettings {
    pub num_games: usize,
    pub first: ControllerKind,
    pub second: ControllerKind,
    pub seed: u64,
    pub save_report: bool,
}

impl Default for SelfPlaySettings {
    fn default() -> Self {
        SelfPlaySettings {
            num_games: 10,
            first: ControllerKind::AlphaBeta,
            second: ControllerKind::Random,
            seed: 0,
            save_report: false,
        }
    }
}

/// Everything read from `n_in_a_row.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: MatchConfig,
    /// Default seats for a local match, first then second
    pub players: [ControllerKind; 2],
    pub selfplay: SelfPlaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: MatchConfig::default(),
            players: [ControllerKind::Human, ControllerKind::AlphaBeta],
            selfplay: SelfPlaySettings::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path.as_ref())?;
        let config: AppConfig = serde_json::from_str(&config_str)?;
        config.game.validate()?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load(CONFIG_PATH).unwrap_or_else(|e| {
            log::warn!("using default config ({}: {})", CONFIG_PATH, e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        MatchConfig::default().validate().unwrap();
        AppConfig::default().game.validate().unwrap();
    }

    #[test]
    fn test_rejects_bad_values() {
        for (size, win, depth) in [(0, 0, 1), (3, 0, 1), (3, 3, 0), (3, 4, 2)] {
            let err = MatchConfig::new(size, win, depth).unwrap_err();
            assert!(
                matches!(err, GameError::InvalidConfiguration(_)),
                "{:?}",
                (size, win, depth)
            );
        }
    }

    #[test]
    fn test_win_length_equal_to_size_is_fine() {
        let config = MatchConfig::new(3, 3, 1).unwrap();
        assert_eq!(config.board_size, 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "game": { "board_size": 3, "win_length": 3 } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.game.board_size, 3);
        assert_eq!(config.game.search_depth, 2);
        assert_eq!(config.players, [ControllerKind::Human, ControllerKind::AlphaBeta]);
        assert_eq!(config.selfplay.num_games, 10);
    }

    #[test]
    fn test_load_rejects_invalid_game() {
        let dir = std::env::temp_dir().join(format!("n_in_a_row_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        std::fs::write(&path, r#"{ "game": { "board_size": 3, "win_length": 5 } }"#).unwrap();

        assert!(AppConfig::load(&path).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
