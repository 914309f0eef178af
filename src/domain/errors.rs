use thiserror::Error;

/// Errors that can occur in the league registration core
///
/// Expected user-facing results (wrong password, empty roster, and so on)
/// are not errors; they are returned as outcome values by the service.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("player already exists: {0}")]
    DuplicateIdentity(String),

    #[error("player not found: {0}")]
    PlayerNotFound(String),

    #[error("player already allotted to a team: {0}")]
    PlayerAlreadyAllotted(String),

    #[error("maximum number of players reached for the team")]
    TeamAlreadyFormed,

    #[error("invalid store record: {0}")]
    InvalidRecord(String),

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store format error: {0}")]
    Csv(#[from] csv::Error),
}

pub type LeagueResult<T> = Result<T, LeagueError>;
