use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::errors::{LeagueError, LeagueResult};
use crate::domain::player::PlayerId;
use crate::domain::repositories::TeamAssignmentRepository;
use crate::domain::team::{TeamAssignment, TeamTitle};

/// On-disk committed assignment row
#[derive(Debug, Serialize, Deserialize)]
struct AssignmentRecord {
    player_id: String,
    team_title: String,
    allotted_at: DateTime<Utc>,
}

impl AssignmentRecord {
    fn into_assignment(self) -> LeagueResult<TeamAssignment> {
        let player_id = PlayerId::new(self.player_id).map_err(LeagueError::InvalidRecord)?;
        let team_title =
            TeamTitle::from_str(&self.team_title).map_err(LeagueError::InvalidRecord)?;

        Ok(TeamAssignment {
            player_id,
            team_title,
            allotted_at: self.allotted_at,
        })
    }
}

impl From<&TeamAssignment> for AssignmentRecord {
    fn from(assignment: &TeamAssignment) -> Self {
        Self {
            player_id: assignment.player_id.as_str().to_string(),
            team_title: assignment.team_title.as_str().to_string(),
            allotted_at: assignment.allotted_at,
        }
    }
}

/// CSV-file implementation of TeamAssignmentRepository
///
/// Committed pairings are append-only rows; the file grows by one line per
/// allotted player. A missing file reads as no assignments.
pub struct CsvTeamAssignmentRepository {
    path: PathBuf,
}

impl CsvTeamAssignmentRepository {
    /// Creates a repository over the given assignments file
    ///
    /// # Arguments
    /// * `path` - Location of the committed-assignments CSV file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> LeagueResult<Vec<TeamAssignment>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut assignments = Vec::new();
        for result in reader.deserialize() {
            let record: AssignmentRecord = result?;
            assignments.push(record.into_assignment()?);
        }

        Ok(assignments)
    }

    fn append(&self, assignment: &TeamAssignment) -> LeagueResult<()> {
        // Write the header only when starting a fresh file
        let write_headers =
            !self.path.exists() || std::fs::metadata(&self.path)?.len() == 0;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_headers)
            .from_writer(file);
        writer.serialize(AssignmentRecord::from(assignment))?;
        writer.flush()?;

        Ok(())
    }
}

#[async_trait]
impl TeamAssignmentRepository for CsvTeamAssignmentRepository {
    async fn find_all(&self) -> LeagueResult<Vec<TeamAssignment>> {
        self.load()
    }

    async fn count_for_team(&self, title: TeamTitle) -> LeagueResult<usize> {
        let assignments = self.load()?;

        Ok(assignments
            .iter()
            .filter(|a| a.team_title == title)
            .count())
    }

    async fn add(&self, assignment: TeamAssignment) -> LeagueResult<()> {
        info!(
            "Recording assignment of {} to team {}",
            assignment.player_id, assignment.team_title
        );
        self.append(&assignment)
    }
}
