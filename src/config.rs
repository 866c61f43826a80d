//! Configuration for the address book demo binary.
//!
//! The library itself reads no environment; only the binary uses this to pick
//! its log level. A `.env` file is loaded if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted in `LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the demo binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // We use dotenvy::dotenv() which doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => Self::default().log_level,
        };

        Ok(Config { log_level })
    }

    /// Normalize and validate a log level name.
    fn parse_log_level(value: &str) -> ConfigResult<String> {
        let level = value.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), value),
            });
        }
        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        assert_eq!(Config::default().log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", " DEBUG ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "loud");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "LOG_LEVEL");
                assert!(reason.contains("loud"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(Config::parse_log_level("warn").unwrap(), "warn");
        assert!(Config::parse_log_level("").is_err());
    }
}
