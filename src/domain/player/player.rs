use super::value_objects::PlayerId;
use crate::domain::team::TeamTitle;

/// Player aggregate root
///
/// Represents one roster entry: the player's identity, credential, and an
/// optional current team title (absent = unassigned). The title is set
/// tentatively during registration and written back to the roster only
/// when the admin commits the allotment.
///
/// # Invariants
/// - Identifier satisfies the `PlayerId` rules
/// - Name cannot be empty
///
/// # Example
/// ```
/// use league_registry::domain::player::Player;
///
/// let player = Player::new("PL001", "Arjun Mehta", "secret", 4).expect("valid player");
/// assert_eq!(player.id().as_str(), "PL001");
/// assert!(player.team_title().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    password: String,
    years_of_experience: u8,
    team_title: Option<TeamTitle>,
}

impl Player {
    /// Creates a new unassigned Player
    ///
    /// # Arguments
    /// * `id` - Roster identifier (validated by `PlayerId`)
    /// * `name` - Display name (cannot be empty)
    /// * `password` - Login credential, stored as provided
    /// * `years_of_experience` - Seasons played before joining the league
    ///
    /// # Returns
    /// * `Ok(Player)` - New unassigned player
    /// * `Err(String)` - If any invariant is violated
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
        years_of_experience: u8,
    ) -> Result<Self, String> {
        let id = PlayerId::new(id)?;
        let name = name.into();
        if name.is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        Ok(Self {
            id,
            name,
            password: password.into(),
            years_of_experience,
            team_title: None,
        })
    }

    /// Sets the player's team title
    pub fn assign_to_team(&mut self, title: TeamTitle) {
        self.team_title = Some(title);
    }

    // ===== Getters =====

    /// Returns the player's identifier
    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    /// Returns the player's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored credential
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the seasons of experience on record
    pub fn years_of_experience(&self) -> u8 {
        self.years_of_experience
    }

    /// Returns the current team title, if any
    pub fn team_title(&self) -> Option<TeamTitle> {
        self.team_title
    }

    /// Reconstructs a Player from persistence layer data
    ///
    /// This method bypasses validation since the data was validated when
    /// it was stored.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: PlayerId,
        name: String,
        password: String,
        years_of_experience: u8,
        team_title: Option<TeamTitle>,
    ) -> Self {
        Self {
            id,
            name,
            password,
            years_of_experience,
            team_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_player_with_valid_fields() {
        let result = Player::new("PL001", "Arjun Mehta", "secret", 4);

        assert!(result.is_ok());
        let player = result.unwrap();
        assert_eq!(player.id().as_str(), "PL001");
        assert_eq!(player.name(), "Arjun Mehta");
        assert_eq!(player.password(), "secret");
        assert_eq!(player.years_of_experience(), 4);
        assert!(player.team_title().is_none());
    }

    #[test]
    fn create_player_with_empty_name_fails() {
        let result = Player::new("PL001", "", "secret", 4);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Name cannot be empty"));
    }

    #[test]
    fn create_player_with_invalid_id_fails() {
        let result = Player::new("PL 001", "Arjun Mehta", "secret", 4);

        assert!(result.is_err());
    }

    #[test]
    fn assign_to_team_sets_title() {
        let mut player = Player::new("PL001", "Arjun Mehta", "secret", 4).unwrap();

        player.assign_to_team(TeamTitle::Strikers);

        assert_eq!(player.team_title(), Some(TeamTitle::Strikers));
    }

    #[test]
    fn from_persistence_preserves_title() {
        let id = PlayerId::new("PL002").unwrap();
        let player = Player::from_persistence(
            id,
            "Ravi Iyer".to_string(),
            "secret".to_string(),
            2,
            Some(TeamTitle::Rangers),
        );

        assert_eq!(player.team_title(), Some(TeamTitle::Rangers));
    }
}
