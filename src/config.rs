//! Runtime configuration: where the log file lives and how verbose it is.

use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "REGFORM_LOG";

/// Filter used when [`LOG_FILTER_ENV`] is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "regform=info";

const LOG_FILE_NAME: &str = "regform.log";

/// Errors that can occur while building the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The data directory could not be created.
    #[error("could not create data directory {path}: {source}")]
    CreateDataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    data_dir: PathBuf,
    log_filter: String,
}

impl Config {
    /// Loads the configuration from the XDG data directory and environment.
    ///
    /// The data directory (`~/.local/share/regform/`) is created if it does
    /// not already exist.
    pub fn load() -> Result<Self, ConfigError> {
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        let filter = std::env::var(LOG_FILTER_ENV).ok();
        Self::with_data_dir(data_dir.join("regform"), filter)
    }

    /// Builds a configuration rooted at `data_dir`.
    pub fn with_data_dir(
        data_dir: impl Into<PathBuf>,
        log_filter: Option<String>,
    ) -> Result<Self, ConfigError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|source| ConfigError::CreateDataDir {
            path: data_dir.clone(),
            source,
        })?;
        let log_filter = log_filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Ok(Self {
            data_dir,
            log_filter,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the log file inside the data directory.
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    /// The `tracing` filter directive.
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("regform");
        let config = Config::with_data_dir(&root, None).unwrap();
        assert!(root.is_dir());
        assert_eq!(config.data_dir(), root);
    }

    #[test]
    fn log_file_lives_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_data_dir(dir.path(), None).unwrap();
        assert_eq!(config.log_file(), dir.path().join("regform.log"));
    }

    #[test]
    fn default_filter_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_data_dir(dir.path(), None).unwrap();
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_data_dir(dir.path(), Some("  ".into())).unwrap();
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn explicit_filter_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_data_dir(dir.path(), Some("regform=debug".into())).unwrap();
        assert_eq!(config.log_filter(), "regform=debug");
    }

    #[test]
    fn data_dir_that_is_a_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = Config::with_data_dir(file.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::CreateDataDir { .. }));
    }
}
