//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::fmt;

/// Configuration parse errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("AUTH_USERS entry {0:?} is not in email:password form")]
    MalformedUser(String),

    #[error("BCRYPT_COST must be a number between 4 and 31, got {0:?}")]
    InvalidCost(String),
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Demo accounts as comma separated `email:password` pairs
    /// Example: demo@example.com:secret,admin@example.com:hunter2
    pub auth_users: Option<String>,

    /// bcrypt cost used when hashing the demo passwords
    pub bcrypt_cost: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            auth_users: std::env::var("AUTH_USERS").ok(),
            bcrypt_cost: std::env::var("BCRYPT_COST").ok(),
        }
    }

    /// Parse `AUTH_USERS` into `(email, password)` pairs.
    ///
    /// Empty entries are skipped. The password may itself contain `:`.
    pub fn credentials(&self) -> Result<Vec<(String, String)>, ConfigError> {
        let Some(users) = self.auth_users.as_deref() else {
            return Ok(Vec::new());
        };

        users
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once(':') {
                Some((email, password)) if !email.trim().is_empty() && !password.is_empty() => {
                    Ok((email.trim().to_string(), password.to_string()))
                }
                _ => Err(ConfigError::MalformedUser(entry.to_string())),
            })
            .collect()
    }

    /// bcrypt cost, `bcrypt::DEFAULT_COST` when unset
    pub fn bcrypt_cost(&self) -> Result<u32, ConfigError> {
        match self.bcrypt_cost.as_deref() {
            None => Ok(bcrypt::DEFAULT_COST),
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or_else(|| ConfigError::InvalidCost(raw.to_string())),
        }
    }
}

// AUTH_USERS carries plaintext passwords
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("auth_users", &self.auth_users.as_ref().map(|_| "<redacted>"))
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(users: Option<&str>, cost: Option<&str>) -> Config {
        Config {
            auth_users: users.map(str::to_string),
            bcrypt_cost: cost.map(str::to_string),
        }
    }

    #[test]
    fn test_no_users() {
        let config = make_config(None, None);
        assert_eq!(config.credentials(), Ok(Vec::new()));
    }

    #[test]
    fn test_blank_users_count_as_none() {
        let config = make_config(Some("  "), None);
        assert_eq!(config.credentials(), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_users() {
        let config = make_config(Some("demo@example.com:secret, admin@example.com:a:b:c,"), None);

        assert_eq!(
            config.credentials(),
            Ok(vec![
                ("demo@example.com".to_string(), "secret".to_string()),
                ("admin@example.com".to_string(), "a:b:c".to_string()),
            ])
        );
    }

    #[test]
    fn test_malformed_user() {
        assert_eq!(
            make_config(Some("demo@example.com"), None).credentials(),
            Err(ConfigError::MalformedUser("demo@example.com".to_string()))
        );
        assert!(
            make_config(Some("demo@example.com:"), None)
                .credentials()
                .is_err()
        );
        assert!(make_config(Some(":secret"), None).credentials().is_err());
    }

    #[test]
    fn test_bcrypt_cost_default() {
        assert_eq!(make_config(None, None).bcrypt_cost(), Ok(bcrypt::DEFAULT_COST));
    }

    #[test]
    fn test_bcrypt_cost_parsing() {
        assert_eq!(make_config(None, Some("4")).bcrypt_cost(), Ok(4));
        assert_eq!(
            make_config(None, Some("3")).bcrypt_cost(),
            Err(ConfigError::InvalidCost("3".to_string()))
        );
        assert!(make_config(None, Some("fast")).bcrypt_cost().is_err());
    }

    #[test]
    fn test_config_debug_hides_passwords() {
        let config = make_config(Some("demo@example.com:secret"), Some("10"));
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("<redacted>"));
        assert!(!debug_str.contains("secret"));
        assert!(!debug_str.contains("demo@example.com"));
        assert!(debug_str.contains("bcrypt_cost"));
    }

    #[test]
    fn test_config_debug_without_users() {
        let debug_str = format!("{:?}", make_config(None, None));
        assert!(debug_str.contains("auth_users: None"));
    }
}
