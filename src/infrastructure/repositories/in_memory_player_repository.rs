use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::{LeagueError, LeagueResult};
use crate::domain::player::Player;
use crate::domain::repositories::PlayerRepository;
use crate::domain::team::TeamTitle;

/// In-memory implementation of PlayerRepository
///
/// Holds the roster in a lock-protected list. Backs tests and embedded
/// use; the trait contract is identical to the file-backed store.
#[derive(Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<Vec<Player>>,
}

impl InMemoryPlayerRepository {
    /// Creates an empty in-memory roster
    pub fn new() -> Self {
        Self {
            players: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find_by_id(&self, id: &str) -> LeagueResult<Option<Player>> {
        let players = self.players.read().await;

        Ok(players.iter().find(|p| p.id().as_str() == id).cloned())
    }

    async fn find_all(&self) -> LeagueResult<Vec<Player>> {
        Ok(self.players.read().await.clone())
    }

    async fn add(&self, player: Player) -> LeagueResult<()> {
        let mut players = self.players.write().await;
        if players.iter().any(|p| p.id() == player.id()) {
            return Err(LeagueError::DuplicateIdentity(
                player.id().as_str().to_string(),
            ));
        }

        players.push(player);
        Ok(())
    }

    async fn update_team_title(&self, id: &str, title: TeamTitle) -> LeagueResult<()> {
        let mut players = self.players.write().await;
        let player = players
            .iter_mut()
            .find(|p| p.id().as_str() == id)
            .ok_or_else(|| LeagueError::PlayerNotFound(id.to_string()))?;

        player.assign_to_team(title);
        Ok(())
    }
}
