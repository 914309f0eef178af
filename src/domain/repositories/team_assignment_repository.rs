use async_trait::async_trait;

use crate::domain::errors::LeagueResult;
use crate::domain::team::{TeamAssignment, TeamTitle};

/// Repository trait for committed team assignments
///
/// Assignments are append-only: a pairing is final once committed.
#[async_trait]
pub trait TeamAssignmentRepository: Send + Sync {
    /// Return every committed assignment
    async fn find_all(&self) -> LeagueResult<Vec<TeamAssignment>>;

    /// Count committed assignments for one team
    async fn count_for_team(&self, title: TeamTitle) -> LeagueResult<usize>;

    /// Commit a player-to-team pairing
    async fn add(&self, assignment: TeamAssignment) -> LeagueResult<()>;
}
