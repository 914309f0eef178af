use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::errors::{LeagueError, LeagueResult};
use crate::domain::player::{Player, PlayerId};
use crate::domain::repositories::PlayerRepository;
use crate::domain::team::TeamTitle;

/// On-disk roster row
///
/// Simple struct for (de)serializing one roster line. An empty
/// `team_title` column means the player is unassigned.
#[derive(Debug, Serialize, Deserialize)]
struct PlayerRecord {
    id: String,
    name: String,
    password: String,
    years_of_experience: u8,
    team_title: String,
}

impl PlayerRecord {
    fn into_player(self) -> LeagueResult<Player> {
        let id = PlayerId::new(self.id).map_err(LeagueError::InvalidRecord)?;
        let team_title = if self.team_title.is_empty() {
            None
        } else {
            Some(TeamTitle::from_str(&self.team_title).map_err(LeagueError::InvalidRecord)?)
        };

        Ok(Player::from_persistence(
            id,
            self.name,
            self.password,
            self.years_of_experience,
            team_title,
        ))
    }
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().as_str().to_string(),
            name: player.name().to_string(),
            password: player.password().to_string(),
            years_of_experience: player.years_of_experience(),
            team_title: player
                .team_title()
                .map(|title| title.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

/// CSV-file implementation of PlayerRepository
///
/// Re-reads the roster file on every query, so callers always observe the
/// persisted state. A missing file reads as an empty roster; the file is
/// created on the first write.
pub struct CsvPlayerRepository {
    path: PathBuf,
}

impl CsvPlayerRepository {
    /// Creates a repository over the given roster file
    ///
    /// # Arguments
    /// * `path` - Location of the roster CSV file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> LeagueResult<Vec<Player>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut players = Vec::new();
        for result in reader.deserialize() {
            let record: PlayerRecord = result?;
            players.push(record.into_player()?);
        }

        Ok(players)
    }

    fn store(&self, players: &[Player]) -> LeagueResult<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for player in players {
            writer.serialize(PlayerRecord::from(player))?;
        }
        writer.flush()?;

        Ok(())
    }
}

#[async_trait]
impl PlayerRepository for CsvPlayerRepository {
    async fn find_by_id(&self, id: &str) -> LeagueResult<Option<Player>> {
        let players = self.load()?;

        Ok(players.into_iter().find(|p| p.id().as_str() == id))
    }

    async fn find_all(&self) -> LeagueResult<Vec<Player>> {
        self.load()
    }

    async fn add(&self, player: Player) -> LeagueResult<()> {
        let mut players = self.load()?;
        if players.iter().any(|p| p.id() == player.id()) {
            return Err(LeagueError::DuplicateIdentity(
                player.id().as_str().to_string(),
            ));
        }

        info!("Adding player {} to roster file", player.id());
        players.push(player);
        self.store(&players)
    }

    async fn update_team_title(&self, id: &str, title: TeamTitle) -> LeagueResult<()> {
        let mut players = self.load()?;
        let player = players
            .iter_mut()
            .find(|p| p.id().as_str() == id)
            .ok_or_else(|| LeagueError::PlayerNotFound(id.to_string()))?;

        player.assign_to_team(title);
        self.store(&players)
    }
}
