//! skein configuration.
//!
//! Loaded from `~/.skein/config.toml`; every field is optional and a
//! missing file is the same as an empty one. The display handle resolves
//! through a chain:
//!
//! 1. `--handle <name>` — explicit per-invocation override
//! 2. `SKEIN_HANDLE` env var — session level
//! 3. `~/.skein/config.toml` — global default
//! 4. the built-in fallback

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

/// Fallback handle when nothing in the chain yields one.
pub const DEFAULT_HANDLE: &str = "you";

/// skein configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Display handle for the user's own posts and story.
    pub handle: Option<String>,
}

/// Errors loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads `~/.skein/config.toml`. Missing file or home directory
    /// yields the default config.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads a config file, treating a missing file as empty.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// The config file path: `~/.skein/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".skein").join("config.toml"))
    }
}

/// Resolves the display handle from the tiered chain.
pub fn resolve_handle(explicit: Option<&str>, config: &Config) -> String {
    if let Some(handle) = explicit
        && !handle.is_empty()
    {
        return handle.to_string();
    }

    if let Ok(handle) = env::var("SKEIN_HANDLE")
        && !handle.is_empty()
    {
        return handle;
    }

    if let Some(handle) = &config.handle
        && !handle.is_empty()
    {
        return handle.clone();
    }

    DEFAULT_HANDLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    #[test]
    fn missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.handle.is_none());
    }

    #[test]
    fn handle_is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "handle = \"alexjohnson\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.handle.as_deref(), Some("alexjohnson"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "handle = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_handle_wins() {
        // Explicit values short-circuit before the env or config are
        // consulted, so this holds regardless of the test environment.
        let config = Config {
            handle: Some("from-config".into()),
        };

        assert_eq!(resolve_handle(Some("explicit"), &config), "explicit");
    }

    #[test]
    fn empty_explicit_handle_is_skipped() {
        let config = Config {
            handle: Some("from-config".into()),
        };

        // Falls through to the config (assuming SKEIN_HANDLE is unset in
        // the test environment, which resolve_handle checks first).
        let resolved = resolve_handle(Some(""), &config);
        assert_ne!(resolved, "");
    }
}
