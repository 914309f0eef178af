// Admin identity configuration
// Injected into the service rather than baked in as constants

use serde::Deserialize;

/// Credentials for the single league administrator
///
/// The admin identity is fixed configuration: one name/password pair,
/// compared literally against what the caller supplies. It is injected
/// into the service so deployments and tests can swap it out.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminCredentials {
    pub name: String,
    pub password: String,
}

impl AdminCredentials {
    /// Creates admin credentials from explicit values
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }

    /// Loads admin credentials from the environment
    ///
    /// Reads `LEAGUE_ADMIN_NAME` and `LEAGUE_ADMIN_PASSWORD`, falling back
    /// to the stock `admin`/`pass` identity when a variable is unset.
    pub fn from_env() -> Self {
        let name = std::env::var("LEAGUE_ADMIN_NAME").unwrap_or_else(|_| {
            tracing::warn!("LEAGUE_ADMIN_NAME not set, using default");
            "admin".to_string()
        });
        let password = std::env::var("LEAGUE_ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("LEAGUE_ADMIN_PASSWORD not set, using default");
            "pass".to_string()
        });

        Self { name, password }
    }

    /// True if the supplied pair matches this identity exactly
    pub fn matches(&self, name: &str, password: &str) -> bool {
        self.name == name && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_credentials() {
        let admin = AdminCredentials::new("admin", "pass");
        assert!(admin.matches("admin", "pass"));
    }

    #[test]
    fn wrong_name_does_not_match() {
        let admin = AdminCredentials::new("admin", "pass");
        assert!(!admin.matches("root", "pass"));
    }

    #[test]
    fn wrong_password_does_not_match() {
        let admin = AdminCredentials::new("admin", "pass");
        assert!(!admin.matches("admin", "wrong"));
    }

    #[test]
    fn from_env_reads_variables_and_defaults() {
        std::env::set_var("LEAGUE_ADMIN_NAME", "league-admin");
        std::env::set_var("LEAGUE_ADMIN_PASSWORD", "s3cret");
        let admin = AdminCredentials::from_env();
        assert_eq!(admin.name, "league-admin");
        assert_eq!(admin.password, "s3cret");

        std::env::remove_var("LEAGUE_ADMIN_NAME");
        std::env::remove_var("LEAGUE_ADMIN_PASSWORD");
        let admin = AdminCredentials::from_env();
        assert!(admin.matches("admin", "pass"));
    }
}
