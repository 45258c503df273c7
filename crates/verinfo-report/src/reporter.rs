use verinfo_core::VersionProvider;
use verinfo_platform::{CryptoBackend, PlatformFacts};

use crate::document::BuildInfoDocument;
use crate::event::{BuildInfoEvent, TargetMinOsEvent};

const LOG_TARGET: &str = "verinfo::build_info";

/// Everything besides the provider that goes into a build-info report.
#[derive(Debug, Clone, Default)]
pub struct BuildInfoReporter {
    facts: PlatformFacts,
    crypto: CryptoBackend,
}

impl BuildInfoReporter {
    #[must_use]
    pub fn new(facts: PlatformFacts, crypto: CryptoBackend) -> Self {
        Self { facts, crypto }
    }

    #[must_use]
    pub fn with_crypto(mut self, crypto: CryptoBackend) -> Self {
        self.crypto = crypto;
        self
    }

    #[must_use]
    pub fn facts(&self) -> PlatformFacts {
        self.facts
    }

    #[must_use]
    pub fn crypto(&self) -> &CryptoBackend {
        &self.crypto
    }

    #[must_use]
    pub fn document<'a>(&'a self, provider: &'a dyn VersionProvider) -> BuildInfoDocument<'a> {
        BuildInfoDocument::new(provider, self.facts, &self.crypto)
    }

    #[must_use]
    pub fn event<'a>(&'a self, provider: &'a dyn VersionProvider) -> BuildInfoEvent<'a> {
        BuildInfoEvent::new(provider, &self.crypto)
    }

    /// See [`CryptoBackend::openssl_version`].
    #[must_use]
    pub fn openssl_version(&self, prefix: &str, suffix: &str) -> String {
        self.crypto.openssl_version(prefix, suffix)
    }

    pub fn log_build_info(&self, provider: &dyn VersionProvider) {
        log::info!(target: LOG_TARGET, "Build Info {}", self.event(provider));
    }
}

/// Logs the minimum target OS, whatever the platform.
pub fn log_target_min_os(provider: &dyn VersionProvider) {
    log::info!(
        target: LOG_TARGET,
        "Target operating system minimum version {}",
        TargetMinOsEvent::new(provider)
    );
}
