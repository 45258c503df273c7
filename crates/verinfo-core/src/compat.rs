use regex::Regex;
use std::sync::LazyLock;

use crate::traits::VersionProvider;

static MAJOR_MINOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.").expect("major.minor pattern should compile")
});

/// Extract the leading `major.minor` pair from a version string.
///
/// Only the prefix is inspected: the string must start with two dot
/// terminated digit groups (`5.0.` in `5.0.3-rc1`). Anything after the
/// second dot is ignored. Digit groups that do not fit in a `u32` are
/// treated the same as a missing match.
#[must_use]
pub fn parse_major_minor(version: &str) -> Option<(u32, u32)> {
    let captures = MAJOR_MINOR.captures(version)?;
    let major = captures.get(1)?.as_str().parse().ok()?;
    let minor = captures.get(2)?.as_str().parse().ok()?;
    Some((major, minor))
}

/// Whether `other` was produced by a binary of the same release series as
/// `provider`.
///
/// Despite the name, both the major AND the minor component have to match.
/// Callers depend on that behavior, so it stays. Unparsable input is simply
/// not compatible.
#[must_use]
pub fn is_same_major_version<P>(provider: &P, other: &str) -> bool
where
    P: VersionProvider + ?Sized,
{
    match parse_major_minor(other) {
        Some((major, minor)) => {
            major == provider.major_version() && minor == provider.minor_version()
        }
        None => false,
    }
}
