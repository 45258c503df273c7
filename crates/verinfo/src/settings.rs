use serde::Deserialize;
use std::path::{Path, PathBuf};
use verinfo_core::{StaticVersionInfo, VersionParseError};
use verinfo_platform::{AppPaths, CryptoBackend};

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Version info to report instead of this binary's own package version.
    #[serde(default)]
    pub version_info: Option<StaticVersionInfo>,

    #[serde(default)]
    pub crypto: CryptoBackend,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default)]
    pub log_to_file: bool,

    #[serde(default)]
    pub log_file: Option<PathBuf>,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version_info: None,
            crypto: CryptoBackend::Disabled,
            debug_logging: false,
            log_to_file: false,
            log_file: None,
            max_log_size_bytes: default_max_log_size_bytes(),
        }
    }
}

impl AppSettings {
    /// Settings from the platform config directory. Only a missing file (or
    /// no config directory at all) yields the defaults.
    pub fn load() -> Result<Self, AppError> {
        match AppPaths::new() {
            Ok(paths) => Self::load_or_default(&paths.settings_file()),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Like [`AppSettings::load_from`], but a file that does not exist is not
    /// an error.
    pub fn load_or_default(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Settings from an explicitly named file; every failure is reported.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AppError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Where file logging goes, if enabled.
    pub fn log_path(&self) -> Option<PathBuf> {
        if !self.log_to_file {
            return None;
        }
        self.log_file
            .clone()
            .or_else(|| AppPaths::new().ok().map(|paths| paths.log_file()))
    }

    /// The provider to enable for this process.
    pub fn version_provider(&self) -> Result<StaticVersionInfo, VersionParseError> {
        match &self.version_info {
            Some(info) => Ok(info.clone()),
            None => builtin_version_info(),
        }
    }
}

fn builtin_version_info() -> Result<StaticVersionInfo, VersionParseError> {
    StaticVersionInfo::builder(env!("CARGO_PKG_VERSION"))
        .git_version(option_env!("VERINFO_GIT_VERSION").unwrap_or("none"))
        .allocator("system")
        .build_field("target_arch", std::env::consts::ARCH, true)
        .build_field("target_os", std::env::consts::OS, true)
        .build_field("target_family", std::env::consts::FAMILY, true)
        .build_field(
            "build_flags",
            option_env!("VERINFO_BUILD_FLAGS").unwrap_or_default(),
            true,
        )
        .build_field(
            "profile",
            if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
            true,
        )
        .build_field("crate", env!("CARGO_PKG_NAME"), false)
        .build()
}

#[cfg(test)]
mod tests {
    use verinfo_core::VersionProvider;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").expect("valid settings");

        assert!(settings.version_info.is_none());
        assert_eq!(settings.crypto, CryptoBackend::Disabled);
        assert!(!settings.debug_logging);
        assert_eq!(settings.max_log_size_bytes, 5 * 1024 * 1024);
        assert_eq!(settings.log_path(), None);
    }

    #[test]
    fn builtin_provider_reports_package_version() {
        let provider = AppSettings::default()
            .version_provider()
            .expect("package version parses");

        assert_eq!(provider.version(), env!("CARGO_PKG_VERSION"));
        assert!(
            provider
                .build_info()
                .iter()
                .any(|field| field.key == "target_arch" && field.value == std::env::consts::ARCH)
        );
    }

    #[test]
    fn configured_version_info_takes_precedence() {
        let settings: AppSettings = serde_json::from_str(
            r#"{
                "version_info": {"version": "5.0.3", "gitVersion": "657fea5a"},
                "crypto": {"kind": "platform", "name": "Apple Secure Transport"}
            }"#,
        )
        .expect("valid settings");

        let provider = settings.version_provider().expect("configured provider");

        assert_eq!(provider.version(), "5.0.3");
        assert_eq!(provider.git_version(), "657fea5a");
        assert_eq!(settings.crypto, CryptoBackend::apple_secure_transport());
    }

    #[test]
    fn explicit_log_file_is_used_when_file_logging_enabled() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"log_to_file": true, "log_file": "/tmp/verinfo-test.log"}"#)
                .expect("valid settings");

        assert_eq!(
            settings.log_path(),
            Some(PathBuf::from("/tmp/verinfo-test.log"))
        );
    }

    #[test]
    fn load_from_reports_invalid_json() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").expect("settings file should be written");

        let error = AppSettings::load_from(&path).expect_err("invalid json is rejected");

        assert!(matches!(error, AppError::SettingsParse { .. }));
    }

    #[test]
    fn load_or_default_accepts_missing_file_only() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let missing = temp_dir.path().join("absent.json");
        let malformed = temp_dir.path().join("settings.json");
        std::fs::write(&malformed, r#"{"version_info": {"version": "x.y"}}"#)
            .expect("settings file should be written");

        let defaults = AppSettings::load_or_default(&missing).expect("missing file is fine");
        let error = AppSettings::load_or_default(&malformed).expect_err("bad file is reported");

        assert!(defaults.version_info.is_none());
        assert!(matches!(error, AppError::SettingsParse { .. }));
    }

    #[test]
    fn load_from_reports_missing_file() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");

        let error = AppSettings::load_from(&temp_dir.path().join("absent.json"))
            .expect_err("missing file is rejected");

        assert!(matches!(error, AppError::SettingsRead { .. }));
    }
}
