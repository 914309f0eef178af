use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::AdminCredentials;
use crate::domain::errors::{LeagueError, LeagueResult};
use crate::domain::player::Player;
use crate::domain::repositories::{PlayerRepository, TeamAssignmentRepository};
use crate::domain::team::{TeamAssignment, TeamTitle, TEAM_CAPACITY};

/// Outcome of a registration attempt
///
/// These are expected user-facing results, not faults; conditions the
/// caller must handle distinctly are raised as [`LeagueError`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The player was queued for allotment
    Registered,
    /// The supplied password did not match the stored credential
    InvalidCredentials,
    /// The roster holds no players at all
    NoPlayersAvailable,
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RegistrationOutcome::Registered => "Registered",
            RegistrationOutcome::InvalidCredentials => "Invalid credentials",
            RegistrationOutcome::NoPlayersAvailable => "No players available",
        };
        write!(f, "{}", text)
    }
}

/// Outcome of an admin allotment run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllotmentOutcome {
    /// Every pending player was handled
    PlayersAllotted,
    /// The pending list was empty
    NoPlayerRegistered,
    /// The supplied admin identity did not match
    InvalidAdminCredentials,
}

impl fmt::Display for AllotmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AllotmentOutcome::PlayersAllotted => "Players allotted to teams",
            AllotmentOutcome::NoPlayerRegistered => "No player is registered",
            AllotmentOutcome::InvalidAdminCredentials => "Invalid credentials for admin",
        };
        write!(f, "{}", text)
    }
}

/// League registration service
///
/// Validates player credentials and team capacity, tracks the in-memory
/// list of registered-but-unassigned players, and commits them into teams
/// when the administrator runs the allotment.
///
/// # Concurrency
/// One lock guards the pending list and is held for the full duration of
/// every registration and allotment call, so at most one of those
/// operations executes at a time. The serialization is part of the service
/// contract, not an implementation detail: capacity checks and commits
/// against the stores happen inside the critical section.
pub struct LeagueTeamService {
    players: Arc<dyn PlayerRepository>,
    assignments: Arc<dyn TeamAssignmentRepository>,
    admin: AdminCredentials,
    pending: Mutex<Vec<Player>>,
}

impl LeagueTeamService {
    /// Creates a service over the given stores and admin identity
    ///
    /// # Arguments
    /// * `players` - Player roster store
    /// * `assignments` - Committed-assignment store
    /// * `admin` - The single administrator identity
    pub fn new(
        players: Arc<dyn PlayerRepository>,
        assignments: Arc<dyn TeamAssignmentRepository>,
        admin: AdminCredentials,
    ) -> Self {
        Self {
            players,
            assignments,
            admin,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Adds a new player record to the roster
    ///
    /// # Returns
    /// * `Ok(())` - Player persisted to the roster store
    /// * `Err(LeagueError::DuplicateIdentity)` - A player with that id exists
    pub async fn add_player(&self, player: Player) -> LeagueResult<()> {
        self.players.add(player).await
    }

    /// Registers a player for the given team title
    ///
    /// On success the title is set tentatively on the queued copy and the
    /// player joins the pending list; nothing is committed to the stores
    /// until the admin runs [`allot_players`](Self::allot_players).
    ///
    /// # Returns
    /// * `Ok(RegistrationOutcome::NoPlayersAvailable)` - The roster is empty
    /// * `Ok(RegistrationOutcome::InvalidCredentials)` - Password mismatch
    /// * `Ok(RegistrationOutcome::Registered)` - Queued for allotment
    /// * `Err(LeagueError::PlayerNotFound)` - Unknown player id
    /// * `Err(LeagueError::PlayerAlreadyAllotted)` - A committed assignment
    ///   already exists for this player
    /// * `Err(LeagueError::TeamAlreadyFormed)` - The requested team is full
    pub async fn register_player(
        &self,
        player_id: &str,
        password: &str,
        team_title: TeamTitle,
    ) -> LeagueResult<RegistrationOutcome> {
        let mut pending = self.pending.lock().await;

        if self.players.find_all().await?.is_empty() {
            return Ok(RegistrationOutcome::NoPlayersAvailable);
        }

        let mut player = match self.players.find_by_id(player_id).await? {
            Some(player) => player,
            None => return Err(LeagueError::PlayerNotFound(player_id.to_string())),
        };

        if player.password() != password {
            warn!("Rejected registration for {}: wrong password", player_id);
            return Ok(RegistrationOutcome::InvalidCredentials);
        }

        if self.has_committed_assignment(player_id).await? {
            return Err(LeagueError::PlayerAlreadyAllotted(player_id.to_string()));
        }

        if self.assignments.count_for_team(team_title).await? >= TEAM_CAPACITY {
            return Err(LeagueError::TeamAlreadyFormed);
        }

        player.assign_to_team(team_title);
        pending.push(player);
        info!("Registered {} for team {}", player_id, team_title);

        Ok(RegistrationOutcome::Registered)
    }

    /// Returns a snapshot of the pending list
    ///
    /// The snapshot is read-only and may be stale as soon as another
    /// registration lands.
    pub async fn registered_players(&self) -> Vec<Player> {
        self.pending.lock().await.clone()
    }

    /// Counts roster players whose stored team title matches the given one
    pub async fn existing_players_in_team(&self, team_title: TeamTitle) -> LeagueResult<usize> {
        let players = self.players.find_all().await?;

        Ok(players
            .iter()
            .filter(|p| p.team_title() == Some(team_title))
            .count())
    }

    /// Commits the pending list into teams
    ///
    /// Runs in two phases: pending players go to `requested_title` while
    /// it has capacity, and anyone left spills into the remaining teams in
    /// their fixed enumeration order. Each committed player produces
    /// exactly one stored assignment and one roster title write. The
    /// pending list itself is iterated, not drained; entries already
    /// committed are skipped on later runs.
    ///
    /// Allotment is not transactional: a failure mid-run leaves the
    /// assignments committed so far intact.
    ///
    /// # Returns
    /// * `Ok(AllotmentOutcome::InvalidAdminCredentials)` - Admin mismatch
    /// * `Ok(AllotmentOutcome::NoPlayerRegistered)` - Pending list is empty
    /// * `Ok(AllotmentOutcome::PlayersAllotted)` - Every pending player handled
    /// * `Err(LeagueError::TeamAlreadyFormed)` - Every team is at capacity,
    ///   either before the run starts or with players still left over after it
    pub async fn allot_players(
        &self,
        admin_name: &str,
        password: &str,
        requested_title: TeamTitle,
    ) -> LeagueResult<AllotmentOutcome> {
        let pending = self.pending.lock().await;

        if !self.admin.matches(admin_name, password) {
            warn!("Rejected allotment: invalid admin credentials");
            return Ok(AllotmentOutcome::InvalidAdminCredentials);
        }

        if pending.is_empty() {
            return Ok(AllotmentOutcome::NoPlayerRegistered);
        }

        if self.all_teams_filled().await? {
            return Err(LeagueError::TeamAlreadyFormed);
        }

        // Phase 1: the requested team, walking the pending list from the
        // front. The index advances whether or not a commit occurred.
        let mut index = 0;
        let mut committed = 0;
        while index < pending.len()
            && self.assignments.count_for_team(requested_title).await? < TEAM_CAPACITY
        {
            let player = &pending[index];
            if self.is_unassigned(player).await? {
                self.commit(player, requested_title).await?;
                committed += 1;
            }
            index += 1;
        }

        // Phase 2: spill the remainder into teams in enumeration order.
        for title in TeamTitle::all() {
            while index < pending.len()
                && self.assignments.count_for_team(title).await? < TEAM_CAPACITY
            {
                let player = &pending[index];
                if self.is_unassigned(player).await? {
                    self.commit(player, title).await?;
                    committed += 1;
                }
                index += 1;
            }
        }

        // Leftover players mean demand exceeded the league's capacity.
        if index < pending.len() && self.all_teams_filled().await? {
            return Err(LeagueError::TeamAlreadyFormed);
        }

        info!(
            "Allotted {} of {} pending players",
            committed,
            pending.len()
        );

        Ok(AllotmentOutcome::PlayersAllotted)
    }

    /// True if a committed assignment exists for the given player id
    async fn has_committed_assignment(&self, player_id: &str) -> LeagueResult<bool> {
        let assignments = self.assignments.find_all().await?;

        Ok(assignments
            .iter()
            .any(|a| a.player_id.as_str() == player_id))
    }

    /// True if the player exists on the roster with no team title set
    ///
    /// Guards the commit step so a player finalized through another path
    /// is never committed twice.
    async fn is_unassigned(&self, player: &Player) -> LeagueResult<bool> {
        let found = self.players.find_by_id(player.id().as_str()).await?;

        Ok(matches!(found, Some(stored) if stored.team_title().is_none()))
    }

    /// True iff every team already holds a full complement of players
    async fn all_teams_filled(&self) -> LeagueResult<bool> {
        for title in TeamTitle::all() {
            if self.assignments.count_for_team(title).await? < TEAM_CAPACITY {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Commits one player: store the assignment, write the title back
    async fn commit(&self, player: &Player, title: TeamTitle) -> LeagueResult<()> {
        self.assignments
            .add(TeamAssignment::new(player.id().clone(), title))
            .await?;
        self.players
            .update_team_title(player.id().as_str(), title)
            .await?;
        info!("Committed {} to team {}", player.id(), title);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_outcome_display() {
        assert_eq!(RegistrationOutcome::Registered.to_string(), "Registered");
        assert_eq!(
            RegistrationOutcome::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(
            RegistrationOutcome::NoPlayersAvailable.to_string(),
            "No players available"
        );
    }

    #[test]
    fn allotment_outcome_display() {
        assert_eq!(
            AllotmentOutcome::PlayersAllotted.to_string(),
            "Players allotted to teams"
        );
        assert_eq!(
            AllotmentOutcome::NoPlayerRegistered.to_string(),
            "No player is registered"
        );
        assert_eq!(
            AllotmentOutcome::InvalidAdminCredentials.to_string(),
            "Invalid credentials for admin"
        );
    }
}
