use std::path::PathBuf;

use thiserror::Error;

/// Overrides the platform directories with a single root when set.
pub const HOME_ENV: &str = "VERINFO_HOME";

const APP_DIR: &str = "verinfo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppPathsError {
    #[error("no {0} directory is available for the current user")]
    Unavailable(&'static str),
}

/// Where settings are read from and where the log file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl AppPaths {
    /// Resolve the directories from `VERINFO_HOME`, or from the platform
    /// defaults when it is unset or empty.
    ///
    /// # Errors
    /// Returns an error when the platform has no config or data directory for
    /// the current user.
    pub fn new() -> Result<Self, AppPathsError> {
        match std::env::var_os(HOME_ENV) {
            Some(root) if !root.is_empty() => Ok(Self::rooted_at(root)),
            _ => Self::platform(),
        }
    }

    fn platform() -> Result<Self, AppPathsError> {
        let config_dir = dirs::config_dir().ok_or(AppPathsError::Unavailable("config"))?;
        let log_dir = dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .ok_or(AppPathsError::Unavailable("data"))?;
        Ok(Self {
            config_dir: config_dir.join(APP_DIR),
            log_dir: log_dir.join(APP_DIR).join("logs"),
        })
    }

    /// Keep everything below one directory.
    #[must_use]
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            log_dir: root.join("logs"),
            config_dir: root,
        }
    }

    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("verinfo.log")
    }

    /// Create both directories if they are missing.
    ///
    /// # Errors
    /// Returns the first I/O error hit while creating them.
    pub fn create_dirs(&self) -> std::io::Result<()> {
        [&self.config_dir, &self.log_dir]
            .into_iter()
            .try_for_each(std::fs::create_dir_all)
    }
}
