use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::errors::LeagueResult;
use crate::domain::repositories::TeamAssignmentRepository;
use crate::domain::team::{TeamAssignment, TeamTitle};

/// In-memory implementation of TeamAssignmentRepository
#[derive(Default)]
pub struct InMemoryTeamAssignmentRepository {
    assignments: RwLock<Vec<TeamAssignment>>,
}

impl InMemoryTeamAssignmentRepository {
    /// Creates an empty in-memory assignment store
    pub fn new() -> Self {
        Self {
            assignments: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TeamAssignmentRepository for InMemoryTeamAssignmentRepository {
    async fn find_all(&self) -> LeagueResult<Vec<TeamAssignment>> {
        Ok(self.assignments.read().await.clone())
    }

    async fn count_for_team(&self, title: TeamTitle) -> LeagueResult<usize> {
        let assignments = self.assignments.read().await;

        Ok(assignments
            .iter()
            .filter(|a| a.team_title == title)
            .count())
    }

    async fn add(&self, assignment: TeamAssignment) -> LeagueResult<()> {
        self.assignments.write().await.push(assignment);
        Ok(())
    }
}
