/// Largest user document the server accepts, in bytes.
pub const MAX_DOCUMENT_SIZE: i64 = 16 * 1024 * 1024;

/// Facts about the compiled binary that are not part of the version itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformFacts {
    /// Pointer width in bits.
    pub bits: u32,
    /// Whether this is a non-optimized build with debug assertions enabled.
    pub debug: bool,
    pub max_document_size: i64,
    /// Whether a minimum target OS version means anything on this platform.
    pub reports_target_min_os: bool,
}

impl PlatformFacts {
    #[must_use]
    pub fn host() -> Self {
        Self {
            bits: usize::BITS,
            debug: cfg!(debug_assertions),
            max_document_size: MAX_DOCUMENT_SIZE,
            reports_target_min_os: cfg!(target_os = "windows"),
        }
    }
}

impl Default for PlatformFacts {
    fn default() -> Self {
        Self::host()
    }
}
