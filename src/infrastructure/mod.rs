// Infrastructure layer module
// Contains storage adapters for the domain repository interfaces
// Follows Hexagonal Architecture

pub mod repositories;
