// Team domain module
// Contains the team title enumeration and the committed assignment record

pub mod assignment;
pub mod value_objects;

// Re-export main types for convenience
pub use assignment::TeamAssignment;
pub use value_objects::{TeamTitle, TEAM_CAPACITY};
