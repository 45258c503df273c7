use std::sync::LazyLock;

use crate::traits::VersionProvider;
use crate::types::BuildInfoField;

const UNKNOWN: &str = "unknown";

/// Provider handed out when nothing has been enabled and the caller accepts
/// best-effort answers. Every field reports an "unknown" sentinel.
#[derive(Debug)]
pub struct FallbackVersionInfo {
    modules: Vec<String>,
}

static FALLBACK: LazyLock<FallbackVersionInfo> = LazyLock::new(|| FallbackVersionInfo {
    modules: vec![UNKNOWN.to_string()],
});

impl FallbackVersionInfo {
    /// The shared instance, built on first use.
    #[must_use]
    pub fn get() -> &'static Self {
        &FALLBACK
    }
}

impl VersionProvider for FallbackVersionInfo {
    fn major_version(&self) -> u32 {
        0
    }

    fn minor_version(&self) -> u32 {
        0
    }

    fn patch_version(&self) -> u32 {
        0
    }

    fn extra_version(&self) -> u32 {
        0
    }

    fn version(&self) -> &str {
        UNKNOWN
    }

    fn git_version(&self) -> &str {
        "none"
    }

    fn modules(&self) -> &[String] {
        &self.modules
    }

    fn allocator(&self) -> &str {
        UNKNOWN
    }

    fn js_engine(&self) -> &str {
        UNKNOWN
    }

    fn target_min_os(&self) -> &str {
        UNKNOWN
    }

    fn build_info(&self) -> &[BuildInfoField] {
        &[]
    }
}
