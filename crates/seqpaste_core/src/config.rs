//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_MAX_PASTE_SIZE, DEFAULT_PORT};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for SeqPaste.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the redb database file.
    pub db_path: String,
    pub port: u16,
    /// Upper bound on request bodies accepted by the HTTP layer.
    pub max_paste_size: usize,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String, home: Option<PathBuf>) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    // Prefer explicit HOME if set (Unix, some Windows shells)
    if let Some(home) = non_empty("HOME") {
        return Some(PathBuf::from(home));
    }

    // Windows USERPROFILE
    if let Some(profile) = non_empty("USERPROFILE") {
        return Some(PathBuf::from(profile));
    }

    std::env::current_dir().ok()
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unparseable numeric values fall back to their defaults.
    ///
    /// # Arguments
    /// - `lookup`: Returns the raw value for a variable name, if set.
    ///
    /// # Returns
    /// A populated [`Config`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = resolve_home_dir(&lookup);
        let db_path = match lookup("DB_PATH") {
            Some(path) => expand_tilde(path, home),
            None => home
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cache")
                .join("seqpaste")
                .join("db")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            db_path,
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            max_paste_size: lookup("MAX_PASTE_SIZE")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_PASTE_SIZE),
        }
    }
}
