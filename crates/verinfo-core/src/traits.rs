use crate::types::{BuildInfoField, VersionComponents};

/// Version and build metadata of the running binary.
///
/// Implementations are immutable: every accessor returns the same answer for
/// the lifetime of the process, so a provider can be shared freely between
/// threads once it has been enabled.
pub trait VersionProvider: Send + Sync {
    fn major_version(&self) -> u32;

    fn minor_version(&self) -> u32;

    fn patch_version(&self) -> u32;

    fn extra_version(&self) -> u32;

    /// Human readable version, for example `5.0.3`.
    fn version(&self) -> &str;

    fn git_version(&self) -> &str;

    /// Optional build modules, in the order they were configured.
    fn modules(&self) -> &[String];

    fn allocator(&self) -> &str;

    fn js_engine(&self) -> &str;

    fn target_min_os(&self) -> &str;

    fn build_info(&self) -> &[BuildInfoField];

    fn components(&self) -> VersionComponents {
        VersionComponents::new(
            self.major_version(),
            self.minor_version(),
            self.patch_version(),
            self.extra_version(),
        )
    }

    /// See [`crate::is_same_major_version`]; minor versions must match too.
    fn is_same_major_version(&self, other_version: &str) -> bool {
        crate::compat::is_same_major_version(self, other_version)
    }

    fn make_version_string(&self, binary_name: &str) -> String {
        format!("{binary_name} v{}", self.version())
    }
}
