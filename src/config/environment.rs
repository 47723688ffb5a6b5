//! Deployment environment selection.
//!
//! The environment names the optional `{environment}.toml` overlay that
//! `ConfigLoader` merges on top of `default.toml`. It is read once from
//! `PUSH_APP_ENV` and defaults to development when unset.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

/// Deployment environment the sender runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development, the default
    #[default]
    Development,
    /// Test runs
    Test,
    /// Production deployments
    Production,
}

impl Environment {
    /// Environment variable consulted by [`Environment::from_env`]
    pub const ENV_VAR: &'static str = "PUSH_APP_ENV";

    /// Reads `PUSH_APP_ENV`, falling back to `Development` when the
    /// variable is unset or holds an unrecognized value
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Lowercase name, also the stem of the overlay file (`test` ->
    /// `test.toml`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_names_and_short_forms() {
        let cases = [
            ("development", Environment::Development),
            ("dev", Environment::Development),
            ("test", Environment::Test),
            ("production", Environment::Production),
            ("prod", Environment::Production),
            ("PRODUCTION", Environment::Production),
            ("Dev", Environment::Development),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<Environment>().unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown_value() {
        let err = "qa".parse::<Environment>().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownEnvironment { ref value } if value == "qa"
        ));
    }

    #[test]
    fn test_default_is_development() {
        assert_eq!(Environment::default(), Environment::Development);
    }

    #[test]
    fn test_as_str_matches_overlay_file_stem() {
        assert_eq!(Environment::Test.as_str(), "test");
        assert_eq!(Environment::Test.to_string(), "test");
    }
}
