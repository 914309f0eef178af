use async_trait::async_trait;

use crate::domain::errors::LeagueResult;
use crate::domain::player::Player;
use crate::domain::team::TeamTitle;

/// Repository trait for the player roster
///
/// Defines the contract for looking up and persisting players.
/// Implementations should handle storage-specific details.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find a player by identifier
    async fn find_by_id(&self, id: &str) -> LeagueResult<Option<Player>>;

    /// Return every player on the roster
    async fn find_all(&self) -> LeagueResult<Vec<Player>>;

    /// Add a new player to the roster
    ///
    /// Fails with `LeagueError::DuplicateIdentity` if the id is taken.
    async fn add(&self, player: Player) -> LeagueResult<()>;

    /// Write a player's team title back to the roster
    ///
    /// Fails with `LeagueError::PlayerNotFound` if the id is unknown.
    async fn update_team_title(&self, id: &str, title: TeamTitle) -> LeagueResult<()>;
}
