use serde::{Deserialize, Serialize};

/// Label identifying a period of game time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuarterType {
    First,
    Second,
    Third,
    Fourth,
    Overtime,
    /// Terminal label: no further play time remains
    GameOver,
}

impl QuarterType {
    /// Returns true for the four regulation quarters
    pub fn is_regulation(&self) -> bool {
        matches!(
            self,
            QuarterType::First | QuarterType::Second | QuarterType::Third | QuarterType::Fourth
        )
    }

    /// Returns true if the label marks the end of the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuarterType::GameOver)
    }
}

impl std::fmt::Display for QuarterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            QuarterType::First => "Q1",
            QuarterType::Second => "Q2",
            QuarterType::Third => "Q3",
            QuarterType::Fourth => "Q4",
            QuarterType::Overtime => "OT",
            QuarterType::GameOver => "FINAL",
        };
        write!(f, "{}", label)
    }
}
