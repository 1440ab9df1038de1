//! Run mode selection.

use std::fmt;
use std::str::FromStr;

use super::keys;
use super::source::EnvSource;
use crate::error::ConfigError;

/// Whether the process runs as a local development instance or in production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Development,
    Production,
}

impl RunMode {
    /// Read the run mode from `APP_ENV`. Unset or empty means development.
    pub fn from_source(source: &impl EnvSource) -> Result<Self, ConfigError> {
        match source.var(keys::APP_ENV) {
            Some(value) if !value.is_empty() => value.parse(),
            _ => Ok(Self::default()),
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::UnknownRunMode(s.to_string())),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("development".parse::<RunMode>().unwrap(), RunMode::Development);
        assert_eq!("DEV".parse::<RunMode>().unwrap(), RunMode::Development);
        assert_eq!("Production".parse::<RunMode>().unwrap(), RunMode::Production);
        assert_eq!("prod".parse::<RunMode>().unwrap(), RunMode::Production);
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        let err = "staging".parse::<RunMode>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRunMode(ref v) if v == "staging"));
    }

    #[test]
    fn test_from_source_defaults_to_development() {
        let mut env: HashMap<String, String> = HashMap::new();
        assert_eq!(RunMode::from_source(&env).unwrap(), RunMode::Development);

        env.insert("APP_ENV".to_string(), String::new());
        assert_eq!(RunMode::from_source(&env).unwrap(), RunMode::Development);

        env.insert("APP_ENV".to_string(), "production".to_string());
        assert!(RunMode::from_source(&env).unwrap().is_production());
    }
}
