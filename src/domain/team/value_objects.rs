use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum number of committed players a team may hold
pub const TEAM_CAPACITY: usize = 11;

/// Represents one of the league's teams
///
/// The set of titles is closed: teams are not user-extensible, and
/// [`TeamTitle::all`] exposes the stable order used when spilling players
/// into alternate teams during allotment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamTitle {
    Warriors,
    Titans,
    Strikers,
    Gladiators,
    Rangers,
}

impl TeamTitle {
    /// All team titles in their fixed enumeration order
    ///
    /// # Example
    /// ```
    /// use league_registry::domain::team::TeamTitle;
    ///
    /// assert_eq!(TeamTitle::all()[0], TeamTitle::Warriors);
    /// ```
    pub fn all() -> [TeamTitle; 5] {
        [
            TeamTitle::Warriors,
            TeamTitle::Titans,
            TeamTitle::Strikers,
            TeamTitle::Gladiators,
            TeamTitle::Rangers,
        ]
    }

    /// Returns the display/storage value for this title
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamTitle::Warriors => "Warriors",
            TeamTitle::Titans => "Titans",
            TeamTitle::Strikers => "Strikers",
            TeamTitle::Gladiators => "Gladiators",
            TeamTitle::Rangers => "Rangers",
        }
    }
}

impl std::fmt::Display for TeamTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TeamTitle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warriors" => Ok(TeamTitle::Warriors),
            "Titans" => Ok(TeamTitle::Titans),
            "Strikers" => Ok(TeamTitle::Strikers),
            "Gladiators" => Ok(TeamTitle::Gladiators),
            "Rangers" => Ok(TeamTitle::Rangers),
            other => Err(format!("Unknown team title: {}", other)),
        }
    }
}
