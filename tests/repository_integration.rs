//! Integration tests for the CSV-backed stores
//!
//! These tests verify that the file-backed repositories round-trip their
//! records, reject duplicate identities, and behave sensibly around
//! missing files and reopened handles.

use std::path::PathBuf;

use league_registry::domain::errors::LeagueError;
use league_registry::domain::player::{Player, PlayerId};
use league_registry::domain::repositories::{PlayerRepository, TeamAssignmentRepository};
use league_registry::domain::team::{TeamAssignment, TeamTitle};
use league_registry::infrastructure::repositories::{
    CsvPlayerRepository, CsvTeamAssignmentRepository,
};
use uuid::Uuid;

/// Unique file path so parallel tests never collide
fn temp_csv_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}-{}.csv", prefix, Uuid::new_v4()))
}

fn test_player(id: &str) -> Player {
    Player::new(id, format!("Player {}", id), "secret", 5).expect("valid player")
}

#[tokio::test]
async fn roster_round_trip() {
    let path = temp_csv_path("roster");
    let repo = CsvPlayerRepository::new(&path);

    repo.add(test_player("PL001")).await.expect("add first player");
    repo.add(test_player("PL002")).await.expect("add second player");

    let all = repo.find_all().await.expect("read roster");
    assert_eq!(all.len(), 2, "Both players should be on the roster");

    let found = repo
        .find_by_id("PL002")
        .await
        .expect("lookup should succeed")
        .expect("player should exist");
    assert_eq!(found.name(), "Player PL002");
    assert_eq!(found.password(), "secret");
    assert_eq!(found.years_of_experience(), 5);
    assert!(found.team_title().is_none());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn duplicate_roster_id_is_rejected() {
    let path = temp_csv_path("roster-dup");
    let repo = CsvPlayerRepository::new(&path);

    repo.add(test_player("PL001")).await.expect("first add succeeds");
    let result = repo.add(test_player("PL001")).await;

    assert!(matches!(result, Err(LeagueError::DuplicateIdentity(id)) if id == "PL001"));
    assert_eq!(
        repo.find_all().await.unwrap().len(),
        1,
        "The duplicate must not be written"
    );

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn missing_roster_file_reads_as_empty() {
    let path = temp_csv_path("roster-missing");
    let repo = CsvPlayerRepository::new(&path);

    assert!(repo.find_all().await.expect("read should succeed").is_empty());
    assert!(repo
        .find_by_id("PL001")
        .await
        .expect("lookup should succeed")
        .is_none());
}

#[tokio::test]
async fn team_title_update_persists_across_handles() {
    let path = temp_csv_path("roster-title");
    let repo = CsvPlayerRepository::new(&path);

    repo.add(test_player("PL001")).await.expect("add player");
    repo.update_team_title("PL001", TeamTitle::Gladiators)
        .await
        .expect("title update succeeds");

    // A fresh handle over the same file must see the persisted title
    let reopened = CsvPlayerRepository::new(&path);
    let found = reopened
        .find_by_id("PL001")
        .await
        .expect("lookup should succeed")
        .expect("player should exist");
    assert_eq!(found.team_title(), Some(TeamTitle::Gladiators));

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn updating_unknown_player_fails() {
    let path = temp_csv_path("roster-unknown");
    let repo = CsvPlayerRepository::new(&path);

    let result = repo.update_team_title("PL404", TeamTitle::Rangers).await;

    assert!(matches!(result, Err(LeagueError::PlayerNotFound(id)) if id == "PL404"));
}

#[tokio::test]
async fn assignments_append_across_handles() {
    let path = temp_csv_path("assignments");

    let repo = CsvTeamAssignmentRepository::new(&path);
    let first = TeamAssignment::new(PlayerId::new("PL001").unwrap(), TeamTitle::Warriors);
    repo.add(first.clone()).await.expect("first append succeeds");

    // A second handle appends to the same file rather than truncating it
    let reopened = CsvTeamAssignmentRepository::new(&path);
    let second = TeamAssignment::new(PlayerId::new("PL002").unwrap(), TeamTitle::Titans);
    reopened.add(second.clone()).await.expect("second append succeeds");

    let all = reopened.find_all().await.expect("read assignments");
    assert_eq!(all.len(), 2, "Both assignments should be on file");
    assert_eq!(all[0], first, "Records should round-trip unchanged");
    assert_eq!(all[1], second);

    assert_eq!(
        reopened
            .count_for_team(TeamTitle::Warriors)
            .await
            .unwrap(),
        1
    );
    assert_eq!(
        reopened.count_for_team(TeamTitle::Strikers).await.unwrap(),
        0
    );

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn missing_assignment_file_reads_as_empty() {
    let path = temp_csv_path("assignments-missing");
    let repo = CsvTeamAssignmentRepository::new(&path);

    assert!(repo.find_all().await.expect("read should succeed").is_empty());
    assert_eq!(
        repo.count_for_team(TeamTitle::Warriors)
            .await
            .expect("count should succeed"),
        0
    );
}
