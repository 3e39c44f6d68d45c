//! Environment variable helpers
//!
//! Blank values are treated the same as unset ones, so an empty
//! `DB_PORT=` in a compose file falls back to the default instead of
//! producing a parse error.

use std::str::FromStr;

/// Read a variable, ignoring it when unset or blank.
pub fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read a variable as a string with a fallback.
pub fn env_string_or(key: &str, default: &str) -> String {
    env_non_empty(key).unwrap_or_else(|| default.to_string())
}

/// Parse a variable, falling back to `default` when unset, blank or invalid.
///
/// Invalid values are logged so a typo does not silently change behavior.
pub fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env_non_empty(key) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "Ignoring unparsable environment value");
                default
            }
        },
        None => default,
    }
}
