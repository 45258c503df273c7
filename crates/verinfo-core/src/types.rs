use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One key/value pair describing the build environment.
///
/// `in_build_info` controls whether the pair shows up in the rendered
/// diagnostic document; fields with the flag cleared are for internal use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildInfoField {
    pub key: String,
    pub value: String,
    #[serde(rename = "inBuildInfo", default = "default_true")]
    pub in_build_info: bool,
}

fn default_true() -> bool {
    true
}

impl BuildInfoField {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>, in_build_info: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            in_build_info,
        }
    }
}

/// What `instance` does when no provider has been enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotEnabledAction {
    /// Missing version info is a configuration error; the process aborts.
    AllowUnfilled,
    /// Hand out the sentinel fallback provider.
    Fallback,
}

/// The four numeric components reported in `versionArray`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VersionComponents {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub extra: u32,
}

impl VersionComponents {
    #[must_use]
    pub fn new(major: u32, minor: u32, patch: u32, extra: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            extra,
        }
    }

    #[must_use]
    pub fn to_array(self) -> [u32; 4] {
        [self.major, self.minor, self.patch, self.extra]
    }
}

impl fmt::Display for VersionComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.extra != 0 {
            write!(f, "-{}", self.extra)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionComponent {
    Major,
    Minor,
    Patch,
    Extra,
}

impl fmt::Display for VersionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
            Self::Extra => write!(f, "extra"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionParseError {
    #[error("Expected X[.Y[.Z]][-pre] format, got: {input}")]
    InvalidFormat { input: String },
    #[error("Invalid {component} version: {value}")]
    InvalidComponent {
        component: VersionComponent,
        value: String,
    },
}

impl VersionComponents {
    /// Derive numeric components from a human-readable version string.
    ///
    /// Strict semver is tried first. Shorter forms such as `5.0` or `5` are
    /// accepted with the missing parts set to zero. The extra component is
    /// the trailing number of the pre-release tag (`5.0.0-rc3` yields 3) and
    /// zero for a release build.
    ///
    /// # Errors
    /// Returns an error when the string is not a dotted numeric version.
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        if let Ok(parsed) = Version::parse(trimmed) {
            let major = narrow(parsed.major, VersionComponent::Major)?;
            let minor = narrow(parsed.minor, VersionComponent::Minor)?;
            let patch = narrow(parsed.patch, VersionComponent::Patch)?;
            let extra = extra_from_pre_release(parsed.pre.as_str())?;
            return Ok(Self::new(major, minor, patch, extra));
        }

        let (core, suffix) = split_core_and_suffix(trimmed);
        if core.is_empty() {
            return Err(VersionParseError::InvalidFormat {
                input: input.to_string(),
            });
        }

        let mut parts = core.split('.');
        let major = parse_part(parts.next(), VersionComponent::Major)?;
        let minor = parse_optional_part(parts.next(), VersionComponent::Minor)?;
        let patch = parse_optional_part(parts.next(), VersionComponent::Patch)?;
        if parts.next().is_some() {
            return Err(VersionParseError::InvalidFormat {
                input: input.to_string(),
            });
        }

        let pre = suffix
            .strip_prefix('-')
            .map(|rest| rest.split('+').next().unwrap_or_default())
            .unwrap_or_default();
        let extra = extra_from_pre_release(pre)?;

        Ok(Self::new(major, minor, patch, extra))
    }
}

fn narrow(value: u64, component: VersionComponent) -> Result<u32, VersionParseError> {
    u32::try_from(value).map_err(|_| VersionParseError::InvalidComponent {
        component,
        value: value.to_string(),
    })
}

fn parse_part(part: Option<&str>, component: VersionComponent) -> Result<u32, VersionParseError> {
    let part = part.unwrap_or_default();
    part.parse()
        .map_err(|_| VersionParseError::InvalidComponent {
            component,
            value: part.to_string(),
        })
}

fn parse_optional_part(
    part: Option<&str>,
    component: VersionComponent,
) -> Result<u32, VersionParseError> {
    match part {
        None => Ok(0),
        Some(_) => parse_part(part, component),
    }
}

fn split_core_and_suffix(version: &str) -> (&str, &str) {
    let suffix_idx = version.find(['-', '+']).unwrap_or(version.len());
    (&version[..suffix_idx], &version[suffix_idx..])
}

fn extra_from_pre_release(pre: &str) -> Result<u32, VersionParseError> {
    let trailing_digits = pre.chars().rev().take_while(char::is_ascii_digit).count();
    let digits = &pre[pre.len() - trailing_digits..];
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse()
        .map_err(|_| VersionParseError::InvalidComponent {
            component: VersionComponent::Extra,
            value: pre.to_string(),
        })
}
