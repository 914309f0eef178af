// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod csv_player_repository;
pub mod csv_team_assignment_repository;
pub mod in_memory_player_repository;
pub mod in_memory_team_assignment_repository;

pub use csv_player_repository::CsvPlayerRepository;
pub use csv_team_assignment_repository::CsvTeamAssignmentRepository;
pub use in_memory_player_repository::InMemoryPlayerRepository;
pub use in_memory_team_assignment_repository::InMemoryTeamAssignmentRepository;
