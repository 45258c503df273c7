use serde::Deserialize;

use crate::traits::VersionProvider;
use crate::types::{BuildInfoField, VersionComponents, VersionParseError};

/// In-memory provider holding values fixed at construction.
///
/// Built either through [`StaticVersionInfo::builder`] or deserialized from a
/// settings document. Numeric components that are not given explicitly are
/// derived from the version string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawVersionInfo")]
pub struct StaticVersionInfo {
    version: String,
    git_version: String,
    components: VersionComponents,
    modules: Vec<String>,
    allocator: String,
    js_engine: String,
    target_min_os: String,
    build_info: Vec<BuildInfoField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVersionInfo {
    version: String,

    #[serde(default = "default_git_version")]
    git_version: String,

    #[serde(default)]
    major_version: Option<u32>,

    #[serde(default)]
    minor_version: Option<u32>,

    #[serde(default)]
    patch_version: Option<u32>,

    #[serde(default)]
    extra_version: Option<u32>,

    #[serde(default)]
    modules: Vec<String>,

    #[serde(default = "default_allocator")]
    allocator: String,

    #[serde(default = "default_js_engine")]
    js_engine: String,

    #[serde(default = "default_target_min_os")]
    target_min_os: String,

    #[serde(default)]
    build_info: Vec<BuildInfoField>,
}

fn default_git_version() -> String {
    "none".to_string()
}

fn default_allocator() -> String {
    "system".to_string()
}

fn default_js_engine() -> String {
    "none".to_string()
}

fn default_target_min_os() -> String {
    "unknown".to_string()
}

impl TryFrom<RawVersionInfo> for StaticVersionInfo {
    type Error = VersionParseError;

    fn try_from(raw: RawVersionInfo) -> Result<Self, Self::Error> {
        let explicit = (
            raw.major_version,
            raw.minor_version,
            raw.patch_version,
            raw.extra_version,
        );
        let components = if let (Some(major), Some(minor), Some(patch), Some(extra)) = explicit {
            VersionComponents::new(major, minor, patch, extra)
        } else {
            let parsed = VersionComponents::parse(&raw.version)?;
            VersionComponents::new(
                raw.major_version.unwrap_or(parsed.major),
                raw.minor_version.unwrap_or(parsed.minor),
                raw.patch_version.unwrap_or(parsed.patch),
                raw.extra_version.unwrap_or(parsed.extra),
            )
        };

        Ok(Self {
            version: raw.version,
            git_version: raw.git_version,
            components,
            modules: raw.modules,
            allocator: raw.allocator,
            js_engine: raw.js_engine,
            target_min_os: raw.target_min_os,
            build_info: raw.build_info,
        })
    }
}

impl StaticVersionInfo {
    #[must_use]
    pub fn builder(version: impl Into<String>) -> StaticVersionInfoBuilder {
        StaticVersionInfoBuilder {
            raw: RawVersionInfo {
                version: version.into(),
                git_version: default_git_version(),
                major_version: None,
                minor_version: None,
                patch_version: None,
                extra_version: None,
                modules: Vec::new(),
                allocator: default_allocator(),
                js_engine: default_js_engine(),
                target_min_os: default_target_min_os(),
                build_info: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct StaticVersionInfoBuilder {
    raw: RawVersionInfo,
}

impl StaticVersionInfoBuilder {
    #[must_use]
    pub fn git_version(mut self, git_version: impl Into<String>) -> Self {
        self.raw.git_version = git_version.into();
        self
    }

    /// Pin all four numeric components instead of deriving them.
    #[must_use]
    pub fn components(mut self, components: VersionComponents) -> Self {
        self.raw.major_version = Some(components.major);
        self.raw.minor_version = Some(components.minor);
        self.raw.patch_version = Some(components.patch);
        self.raw.extra_version = Some(components.extra);
        self
    }

    #[must_use]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.raw.modules.push(module.into());
        self
    }

    #[must_use]
    pub fn allocator(mut self, allocator: impl Into<String>) -> Self {
        self.raw.allocator = allocator.into();
        self
    }

    #[must_use]
    pub fn js_engine(mut self, js_engine: impl Into<String>) -> Self {
        self.raw.js_engine = js_engine.into();
        self
    }

    #[must_use]
    pub fn target_min_os(mut self, target_min_os: impl Into<String>) -> Self {
        self.raw.target_min_os = target_min_os.into();
        self
    }

    #[must_use]
    pub fn build_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        in_build_info: bool,
    ) -> Self {
        self.raw
            .build_info
            .push(BuildInfoField::new(key, value, in_build_info));
        self
    }

    /// Finish the provider.
    ///
    /// # Errors
    /// Returns an error when numeric components were not pinned and cannot
    /// be derived from the version string.
    pub fn build(self) -> Result<StaticVersionInfo, VersionParseError> {
        StaticVersionInfo::try_from(self.raw)
    }
}

impl VersionProvider for StaticVersionInfo {
    fn major_version(&self) -> u32 {
        self.components.major
    }

    fn minor_version(&self) -> u32 {
        self.components.minor
    }

    fn patch_version(&self) -> u32 {
        self.components.patch
    }

    fn extra_version(&self) -> u32 {
        self.components.extra
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn git_version(&self) -> &str {
        &self.git_version
    }

    fn modules(&self) -> &[String] {
        &self.modules
    }

    fn allocator(&self) -> &str {
        &self.allocator
    }

    fn js_engine(&self) -> &str {
        &self.js_engine
    }

    fn target_min_os(&self) -> &str {
        &self.target_min_os
    }

    fn build_info(&self) -> &[BuildInfoField] {
        &self.build_info
    }

    fn components(&self) -> VersionComponents {
        self.components
    }
}
