use gridiron_core::Team;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Team name is empty: {0}")]
    EmptyTeamName(&'static str),
    #[error("Home and away teams share abbreviation: {0}")]
    DuplicateTeams(String),
}

/// Game setup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Team playing at home
    pub home_team: Team,
    /// Visiting team
    pub away_team: Team,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            home_team: Team::new("Home Team", "HOME"),
            away_team: Team::new("Away Team", "AWAY"),
        }
    }
}

impl GameConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.home_team.name.trim().is_empty() {
            return Err(ConfigError::EmptyTeamName("home_team"));
        }
        if self.away_team.name.trim().is_empty() {
            return Err(ConfigError::EmptyTeamName("away_team"));
        }
        if self
            .home_team
            .abbreviation
            .eq_ignore_ascii_case(&self.away_team.abbreviation)
        {
            return Err(ConfigError::DuplicateTeams(
                self.home_team.abbreviation.clone(),
            ));
        }
        Ok(())
    }
}

/// Load game configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: GameConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<GameConfig, ConfigError> {
    let config: GameConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<GameConfig, ConfigError> {
    let default_config = include_str!("game_config.json");
    load_config_from_str(default_config)
}
