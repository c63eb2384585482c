//! Server configuration parsed from environment variables.
//!
//! Every `from_env` constructor delegates to a `from_lookup` twin that takes
//! the variable source as a closure, so tests never touch the process
//! environment.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Listener and static-file settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Portfolio site served at `/`.
    pub website_dir: PathBuf,
    /// Widget wasm bundle served at `/pkg`.
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    /// Build from `PORT`, `WEBSITE_DIR` and `PKG_DIR`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let website_dir = get("WEBSITE_DIR").map_or_else(default_website_dir, PathBuf::from);
        let pkg_dir = get("PKG_DIR").map_or_else(default_pkg_dir, PathBuf::from);

        Ok(Self { port, website_dir, pkg_dir })
    }
}

fn default_website_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("website")
}

fn default_pkg_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("client/pkg")
}

/// Parse `key` from `get`, falling back to `default` when unset or malformed.
pub(crate) fn lookup_parse<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    get(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
