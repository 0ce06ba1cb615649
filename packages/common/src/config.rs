//! Environment configuration with `.env` fallback
//!
//! Values are looked up in the process environment first and then in the
//! entries of a `.env` file. The file never overrides a variable that is set
//! in the real environment. Unlike a process-wide cache, an [`EnvConfig`] is an
//! ordinary value that callers construct and pass around.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default dotenv file name, resolved against the working directory
pub const DOTENV_FILE: &str = ".env";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The dotenv file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Offending path
        path: PathBuf,
        /// Underlying dotenv error
        #[source]
        source: dotenvy::Error,
    },
}

/// Environment-backed configuration source
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    dotenv: HashMap<String, String>,
    // `None` reads the process environment
    environment: Option<HashMap<String, String>>,
}

impl EnvConfig {
    /// Configuration without any dotenv entries (process environment only)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `./.env` if present
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] when the file exists but cannot be read.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_dotenv_path(DOTENV_FILE)
    }

    /// Load dotenv entries from `path`; a missing file yields an empty set
    ///
    /// The process environment is never modified.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] when the file exists but cannot be read.
    pub fn from_dotenv_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match dotenvy::from_path_iter(path) {
            Ok(entries) => Ok(Self::from_entries(entries)),
            Err(e) if e.not_found() => {
                log::debug!("No dotenv file at {}", path.display());
                Ok(Self::new())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse dotenv `KEY=VALUE` lines
    ///
    /// Comments and quoting follow `dotenvy`. Lines that fail to parse are
    /// skipped. The first occurrence of a key wins.
    #[must_use]
    pub fn from_dotenv_str(contents: &str) -> Self {
        Self::from_entries(dotenvy::from_read_iter(contents.as_bytes()))
    }

    fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = dotenvy::Result<(String, String)>>,
    {
        let mut dotenv = HashMap::new();
        for entry in entries {
            match entry {
                Ok((key, value)) => {
                    dotenv.entry(key).or_insert(value);
                }
                Err(e) => log::warn!("Skipping dotenv line: {e}"),
            }
        }
        Self {
            dotenv,
            environment: None,
        }
    }

    /// Replace the process environment with explicit `vars`
    ///
    /// Lookups then consult `vars` where they would have read `std::env`.
    #[must_use]
    pub fn with_environment<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.environment = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Stop consulting the process environment; only dotenv entries apply
    #[must_use]
    pub fn detached(self) -> Self {
        self.with_environment(std::iter::empty::<(String, String)>())
    }

    /// Look up `key`: non-empty environment variable first, then dotenv entry
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let from_env = match &self.environment {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        };
        match from_env {
            Some(value) if !value.is_empty() => Some(value),
            _ => self.dotenv.get(key).cloned(),
        }
    }

    /// Look up `key`, falling back to `default`
    #[must_use]
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Look up `key` as an integer; absent or unparsable values yield `default`
    #[must_use]
    pub fn get_i64_or(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring non-numeric value for {key}");
                default
            }),
            None => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_values_and_strips_quotes() {
        let config = EnvConfig::from_dotenv_str(
            "FOO=bar\nQUOTED='quoted value'\nDOUBLE=\"double quoted\"\n#COMMENT=skip\nINVALIDLINE\n=novalue\nAFTER=kept\n",
        )
        .detached();
        assert_eq!(config.get_or("FOO", "missing"), "bar");
        assert_eq!(config.get_or("QUOTED", "missing"), "quoted value");
        assert_eq!(config.get_or("DOUBLE", "missing"), "double quoted");
        assert_eq!(config.get_or("COMMENT", "fallback"), "fallback");
        assert_eq!(config.get("INVALIDLINE"), None);
        assert_eq!(config.get_or("AFTER", "missing"), "kept");
        assert_eq!(config.get_or("UNSET", "fallback"), "fallback");
    }

    #[test]
    fn integer_parsing_falls_back_to_default() {
        let config = EnvConfig::from_dotenv_str("NUM=123\nBAD=notanumber\n").detached();
        assert_eq!(config.get_i64_or("NUM", 0), 123);
        assert_eq!(config.get_i64_or("BAD", 50), 50);
        assert_eq!(config.get_i64_or("MISSING", 77), 77);
    }

    #[test]
    fn first_occurrence_wins() {
        let config = EnvConfig::from_dotenv_str("DUP=one\nDUP=two\n").detached();
        assert_eq!(config.get("DUP").as_deref(), Some("one"));
    }

    #[test]
    fn environment_wins_over_dotenv() {
        let config = EnvConfig::from_dotenv_str("KEY=from-file\nOTHER=file\n")
            .with_environment([("KEY", "from-env"), ("OTHER", "")]);
        assert_eq!(config.get("KEY").as_deref(), Some("from-env"));
        // empty variables fall through to the file
        assert_eq!(config.get("OTHER").as_deref(), Some("file"));
    }

    #[test]
    fn detached_ignores_process_environment() {
        let config = EnvConfig::new().detached();
        assert_eq!(config.get("PATH"), None);
    }

    #[test]
    fn missing_file_is_empty_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = EnvConfig::from_dotenv_path(dir.path().join(".env"))
            .expect("load")
            .detached();
        assert_eq!(config.get("ANYTHING"), None);
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env");
        std::fs::write(&path, "FILE_KEY=from-file\n").expect("write");
        let config = EnvConfig::from_dotenv_path(&path).expect("load").detached();
        assert_eq!(config.get("FILE_KEY").as_deref(), Some("from-file"));
    }
}
