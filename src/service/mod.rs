// Registration service module
// The core: credential checks, the pending list, and team allotment

pub mod league_team_service;

pub use league_team_service::{AllotmentOutcome, LeagueTeamService, RegistrationOutcome};
