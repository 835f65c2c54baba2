use serde::{Deserialize, Serialize};

/// A team taking part in a game
///
/// Teams are supplied by the caller; the clock model never validates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    /// Full display name (e.g., "Green Bay Packers")
    pub name: String,
    /// Short scoreboard code (e.g., "GB")
    pub abbreviation: String,
}

impl Team {
    /// Create a new team
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_from_json() {
        let team: Team =
            serde_json::from_str(r#"{"name":"Chicago Bears","abbreviation":"CHI"}"#).unwrap();
        assert_eq!(team, Team::new("Chicago Bears", "CHI"));
        assert_eq!(team.to_string(), "Chicago Bears");
    }
}
