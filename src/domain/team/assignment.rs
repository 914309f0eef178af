use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::TeamTitle;
use crate::domain::player::PlayerId;

/// A committed player-to-team pairing
///
/// Created only when the admin finalizes allotment. Immutable once
/// created: no reassignment or removal is modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub player_id: PlayerId,
    pub team_title: TeamTitle,
    pub allotted_at: DateTime<Utc>,
}

impl TeamAssignment {
    /// Creates a new assignment stamped with the current time
    pub fn new(player_id: PlayerId, team_title: TeamTitle) -> Self {
        Self {
            player_id,
            team_title,
            allotted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assignment_carries_player_and_team() {
        let player_id = PlayerId::new("PL001").unwrap();
        let assignment = TeamAssignment::new(player_id.clone(), TeamTitle::Titans);

        assert_eq!(assignment.player_id, player_id);
        assert_eq!(assignment.team_title, TeamTitle::Titans);
    }
}
