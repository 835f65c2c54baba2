//! Gridiron Game
//!
//! Game setup on top of the clock hierarchy:
//!
//! - **Game**: two teams and the two halves of the clock
//! - **Config**: JSON game configuration (teams) with an embedded default
//!
//! ```text
//! Game
//!  ├── home_team / away_team
//!  ├── first_half  ── Q1, Q2
//!  └── second_half ── Q3, Q4
//! ```
//!
//! Advancing the clock is left to an external driver, which mutates quarters
//! in place through [`Game::current_quarter_mut`] or [`Game::quarter_mut`].

pub mod config;
pub mod game;

pub use config::{ConfigError, GameConfig, load_config, load_config_from_str, load_default_config};
pub use game::Game;

// Re-export the clock surface for convenience
pub use gridiron_clock::{GameClock, Half, HalfType, Quarter, QuarterType, Seconds};
pub use gridiron_core::Team;
