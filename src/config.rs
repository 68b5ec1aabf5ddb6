use std::path::Path;

use log::warn;

use crate::board::Player;
use crate::error::ConfigError;
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// Front end configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayerNames,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerNames {
    pub one: String,
    pub two: String,
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayerNames {
            one: "Player 1".to_string(),
            two: "Player 2".to_string(),
        }
    }
}

impl PlayerNames {
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardConfig::default(),
            players: PlayerNames::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        // columns are entered as a single digit
        if self.board.width > 9 {
            return Err(ConfigError::Validation("board.width must be <= 9".into()));
        }
        // the whole board is drawn on screen at once
        if self.board.height > 9 {
            return Err(ConfigError::Validation("board.height must be <= 9".into()));
        }
        if self.board.width < WIN_LENGTH && self.board.height < WIN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board must be at least {} wide or {} high",
                WIN_LENGTH, WIN_LENGTH
            )));
        }
        if self.players.one.trim().is_empty() || self.players.two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player names must not be empty".into(),
            ));
        }
        Ok(())
    }
}
