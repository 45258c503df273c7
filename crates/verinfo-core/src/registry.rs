//! Process-wide holder of the active [`VersionProvider`].
//!
//! The slot is meant to be written once, during single-threaded start-up,
//! before any thread that reads version info is spawned. Re-enabling a
//! different provider later is allowed, but callers must make sure nothing
//! still relies on answers from the old one. The registry never owns the
//! provider; it only stores a `'static` reference to it.
//!
//! Code that wants to avoid the global can build its own
//! [`ProviderRegistry`] and pass it to the places that need it.

use std::sync::{PoisonError, RwLock};

use crate::error::VersionError;
use crate::fallback::FallbackVersionInfo;
use crate::traits::VersionProvider;
use crate::types::NotEnabledAction;

pub struct ProviderRegistry {
    active: RwLock<Option<&'static dyn VersionProvider>>,
}

static GLOBAL: ProviderRegistry = ProviderRegistry::new();

impl ProviderRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: RwLock::new(None),
        }
    }

    /// Install `provider` as the active provider, replacing any previous one.
    pub fn enable(&self, provider: &'static dyn VersionProvider) {
        log::debug!(
            "Enabling version info {} ({})",
            provider.version(),
            provider.git_version()
        );
        *self
            .active
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(provider);
    }

    /// Enable an owned provider. Its storage is leaked so that it lives for
    /// the rest of the process.
    pub fn enable_boxed(
        &self,
        provider: Box<dyn VersionProvider>,
    ) -> &'static dyn VersionProvider {
        let provider: &'static dyn VersionProvider = Box::leak(provider);
        self.enable(provider);
        provider
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.active().is_some()
    }

    /// Non-fatal lookup of the active provider.
    ///
    /// # Errors
    /// Returns [`VersionError::NotConfigured`] when nothing has been enabled.
    pub fn try_instance(&self) -> Result<&'static dyn VersionProvider, VersionError> {
        self.active().ok_or(VersionError::NotConfigured)
    }

    /// The active provider, or whatever `action` prescribes when there is none.
    ///
    /// With [`NotEnabledAction::AllowUnfilled`] a missing provider is treated
    /// as an unrecoverable configuration error and the process is aborted.
    #[must_use]
    pub fn instance(&self, action: NotEnabledAction) -> &'static dyn VersionProvider {
        if let Some(provider) = self.active() {
            return provider;
        }

        match action {
            NotEnabledAction::Fallback => {
                let fallback: &'static dyn VersionProvider = FallbackVersionInfo::get();
                fallback
            }
            NotEnabledAction::AllowUnfilled => terminate_not_configured(),
        }
    }

    fn active(&self) -> Option<&'static dyn VersionProvider> {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn terminate_not_configured() -> ! {
    log::error!("Terminating because valid version info has not been configured");
    log::logger().flush();
    std::process::abort()
}

/// The process-wide registry.
#[must_use]
pub fn global() -> &'static ProviderRegistry {
    &GLOBAL
}

/// Enable `provider` on the process-wide registry.
pub fn enable(provider: &'static dyn VersionProvider) {
    GLOBAL.enable(provider);
}

/// Look up the provider on the process-wide registry.
#[must_use]
pub fn instance(action: NotEnabledAction) -> &'static dyn VersionProvider {
    GLOBAL.instance(action)
}
