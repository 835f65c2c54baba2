use serde::{Deserialize, Serialize};

use super::QuarterType;

/// Label identifying a half of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HalfType {
    First,
    Second,
    GameOver,
}

impl HalfType {
    /// The pair of quarter labels a half of this type is built with.
    ///
    /// Only `First` maps to the opening quarters; every other label,
    /// `GameOver` included, maps to the third and fourth quarters.
    pub fn quarter_types(&self) -> [QuarterType; 2] {
        match self {
            HalfType::First => [QuarterType::First, QuarterType::Second],
            HalfType::Second | HalfType::GameOver => [QuarterType::Third, QuarterType::Fourth],
        }
    }

    /// Returns true if the label marks the end of the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, HalfType::GameOver)
    }
}

impl std::fmt::Display for HalfType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HalfType::First => "1st Half",
            HalfType::Second => "2nd Half",
            HalfType::GameOver => "FINAL",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_pairing() {
        assert_eq!(
            HalfType::First.quarter_types(),
            [QuarterType::First, QuarterType::Second]
        );
        assert_eq!(
            HalfType::Second.quarter_types(),
            [QuarterType::Third, QuarterType::Fourth]
        );
        // GameOver falls through to the second-half pairing
        assert_eq!(
            HalfType::GameOver.quarter_types(),
            [QuarterType::Third, QuarterType::Fourth]
        );
    }
}
