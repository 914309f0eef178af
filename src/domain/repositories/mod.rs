// Repository interfaces (ports) consumed by the registration service
// Implementations live in the infrastructure layer

pub mod player_repository;
pub mod team_assignment_repository;

pub use player_repository::PlayerRepository;
pub use team_assignment_repository::TeamAssignmentRepository;
