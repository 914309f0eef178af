use serde::{Deserialize, Serialize};
use std::fmt;

/// Player identifier value object
///
/// # Invariants
/// - Must not be empty
/// - Must not contain whitespace or commas (roster rows are comma-separated)
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a new PlayerId value object
    ///
    /// # Arguments
    /// * `id` - The identifier string to validate
    ///
    /// # Returns
    /// * `Ok(PlayerId)` - If the identifier is valid
    /// * `Err(String)` - If the identifier is invalid
    ///
    /// # Example
    /// ```
    /// use league_registry::domain::player::value_objects::PlayerId;
    ///
    /// let id = PlayerId::new("PL001").expect("valid id");
    /// assert_eq!(id.as_str(), "PL001");
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if Self::is_valid(&id) {
            Ok(PlayerId(id))
        } else {
            Err(format!("Invalid player id: {:?}", id))
        }
    }

    /// Validates an identifier string
    ///
    /// # Validation Rules
    /// - Must not be empty
    /// - Must not contain whitespace or commas
    fn is_valid(id: &str) -> bool {
        !id.is_empty() && !id.contains(|c: char| c.is_whitespace() || c == ',')
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_id() {
        assert!(PlayerId::new("PL001").is_ok());
    }

    #[test]
    fn valid_id_with_dash() {
        assert!(PlayerId::new("player-17").is_ok());
    }

    #[test]
    fn invalid_id_empty() {
        assert!(PlayerId::new("").is_err());
    }

    #[test]
    fn invalid_id_with_space() {
        assert!(PlayerId::new("PL 001").is_err());
    }

    #[test]
    fn invalid_id_with_comma() {
        assert!(PlayerId::new("PL,001").is_err());
    }

    #[test]
    fn id_display() {
        let id = PlayerId::new("PL001").unwrap();
        assert_eq!(format!("{}", id), "PL001");
    }

    #[test]
    fn id_equality() {
        let id1 = PlayerId::new("PL001").unwrap();
        let id2 = PlayerId::new("PL001").unwrap();
        assert_eq!(id1, id2);
    }
}
