use gridiron_clock::{Half, Quarter};
use gridiron_core::{HalfType, QuarterType, Seconds, Team, format_clock};
use gridiron_ports::GameClock;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// A game between two teams, owning both halves of its clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    home_team: Team,
    away_team: Team,
    first_half: Half,
    second_half: Half,
}

impl Game {
    /// Pair two teams into a new game with full-length halves
    pub fn new(home_team: Team, away_team: Team) -> Self {
        debug!(
            "New game: {} ({}) vs {} ({})",
            home_team, home_team.abbreviation, away_team, away_team.abbreviation
        );

        Self {
            home_team,
            away_team,
            first_half: Half::new(HalfType::First),
            second_half: Half::new(HalfType::Second),
        }
    }

    /// Create a game from configuration
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.home_team.clone(), config.away_team.clone())
    }

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn first_half(&self) -> &Half {
        &self.first_half
    }

    pub fn first_half_mut(&mut self) -> &mut Half {
        &mut self.first_half
    }

    pub fn second_half(&self) -> &Half {
        &self.second_half
    }

    pub fn second_half_mut(&mut self) -> &mut Half {
        &mut self.second_half
    }

    /// Both halves in playing order
    pub fn halves(&self) -> [&Half; 2] {
        [&self.first_half, &self.second_half]
    }

    /// Find a quarter by label across both halves
    pub fn quarter(&self, quarter_type: QuarterType) -> Option<&Quarter> {
        self.first_half
            .quarter(quarter_type)
            .or_else(|| self.second_half.quarter(quarter_type))
    }

    pub fn quarter_mut(&mut self, quarter_type: QuarterType) -> Option<&mut Quarter> {
        match self.first_half.quarter_mut(quarter_type) {
            Some(quarter) => Some(quarter),
            None => self.second_half.quarter_mut(quarter_type),
        }
    }

    /// The first quarter in playing order that still has time left
    pub fn current_quarter(&self) -> Option<&Quarter> {
        self.first_half
            .current_quarter()
            .or_else(|| self.second_half.current_quarter())
    }

    pub fn current_quarter_mut(&mut self) -> Option<&mut Quarter> {
        match self.first_half.current_quarter_mut() {
            Some(quarter) => Some(quarter),
            None => self.second_half.current_quarter_mut(),
        }
    }

    /// Regulation time left across both halves
    pub fn time_remaining(&self) -> Seconds {
        self.first_half.time_remaining() + self.second_half.time_remaining()
    }
}

impl GameClock for Game {
    fn time_remaining(&self) -> Seconds {
        Game::time_remaining(self)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {} {}",
            self.away_team.abbreviation,
            self.home_team.abbreviation,
            format_clock(self.time_remaining())
        )
    }
}
