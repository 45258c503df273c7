use std::path::PathBuf;

use thiserror::Error;
use verinfo_core::VersionParseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read settings from {}: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid version info: {0}")]
    Version(#[from] VersionParseError),

    #[error("failed to render build info: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
