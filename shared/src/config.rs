//! Environment-backed configuration helpers
//!
//! Values are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Environment variables take precedence over .env file values. These helpers
//! are only meant for building configuration structs in `main`; business logic
//! receives the finished struct and never reads the environment itself.

use std::str::FromStr;

use crate::errors::{SharedError, SharedResult};

/// Load a `.env` file if one exists. Silently does nothing otherwise.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

/// Read a variable, treating unset and blank values the same
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read a variable or fall back to a default
pub fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

/// Read and parse a variable, falling back to a default when unset
pub fn env_parse<T: FromStr>(key: &str, default: T) -> SharedResult<T> {
    match env_opt(key) {
        Some(raw) => raw.parse().map_err(|_| SharedError::InvalidConfig {
            field: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_uses_default_when_unset() {
        std::env::remove_var("SHARED_TEST_UNSET_KEY");
        assert_eq!(env_or("SHARED_TEST_UNSET_KEY", "fallback"), "fallback");
    }

    #[test]
    fn test_blank_value_counts_as_unset() {
        std::env::set_var("SHARED_TEST_BLANK_KEY", "   ");
        assert_eq!(env_opt("SHARED_TEST_BLANK_KEY"), None);
        assert_eq!(env_or("SHARED_TEST_BLANK_KEY", "x"), "x");
    }

    #[test]
    fn test_env_parse() {
        std::env::set_var("SHARED_TEST_PORT_OK", "2525");
        assert_eq!(env_parse::<u16>("SHARED_TEST_PORT_OK", 587), Ok(2525));

        std::env::set_var("SHARED_TEST_PORT_BAD", "not-a-port");
        let err = env_parse::<u16>("SHARED_TEST_PORT_BAD", 587).unwrap_err();
        assert_eq!(
            err,
            SharedError::InvalidConfig {
                field: "SHARED_TEST_PORT_BAD".to_string(),
                value: "not-a-port".to_string(),
            }
        );

        std::env::remove_var("SHARED_TEST_PORT_UNSET");
        assert_eq!(env_parse::<u16>("SHARED_TEST_PORT_UNSET", 587), Ok(587));
    }
}
