//! Environment variable access.
//!
//! All configuration of this gateway arrives through the process
//! environment (optionally seeded from a `.env` file at startup), so the
//! readers here define what "set" means for every variable.

use std::env;

/// Read `key` from the environment, falling back to `default` when the
/// variable is unset, empty, or whitespace-only. Values are trimmed.
pub fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        }
        Err(_) => default.to_string(),
    }
}

/// Interpret `key` as a boolean flag. Accepts "1", "true", and "yes" in
/// any case; everything else, including unset, is off.
pub fn env_flag(key: &str) -> bool {
    matches!(
        env::var(key)
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
            .as_str(),
        "1" | "true" | "yes"
    )
}
