//! Environment Configuration Helpers
//!
//! Typed reads of process environment variables. Malformed optional values
//! fall back to their default with a warning instead of aborting startup.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set in environment")]
    Missing(String),
}

/// Read a required variable
pub fn env_required(key: &str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Read a variable or fall back to a default
pub fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Read a boolean flag (`true`/`false`/`1`/`0`/`yes`/`no`)
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => parse_bool(&raw).unwrap_or_else(|| {
            tracing::warn!(key, value = %raw, "Invalid boolean, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Read a duration given in whole seconds
pub fn env_secs(key: &str, default: Duration) -> Duration {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(e) => {
                tracing::warn!(key, value = %raw, error = %e, "Invalid seconds value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
