//! Attribute sets handed to the logger.
//!
//! Sequences are not materialized up front: they are produced from the
//! provider's data each time the event is rendered, so a logger that drops
//! the record never walks them and one that renders twice gets the same
//! output both times.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use verinfo_core::{BuildInfoField, VersionProvider};
use verinfo_platform::CryptoBackend;

/// A `buildInfo` entry as it appears in the log view: a single-key document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> From<&'a BuildInfoField> for EnvironmentEntry<'a> {
    fn from(field: &'a BuildInfoField) -> Self {
        Self {
            key: &field.key,
            value: &field.value,
        }
    }
}

impl Serialize for EnvironmentEntry<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}

/// Serializes a restartable iterator as a sequence without collecting it.
struct LazySeq<I>(I);

impl<I> Serialize for LazySeq<I>
where
    I: Iterator + Clone,
    I::Item: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.clone())
    }
}

/// Log entries are stricter than the diagnostic document: a field must be
/// flagged for build info AND carry a non-empty value.
fn logged_in_environment(field: &&BuildInfoField) -> bool {
    field.in_build_info && !field.value.is_empty()
}

/// The "Build Info" record written at start-up.
pub struct BuildInfoEvent<'a> {
    provider: &'a dyn VersionProvider,
    crypto: &'a CryptoBackend,
}

impl<'a> BuildInfoEvent<'a> {
    #[must_use]
    pub fn new(provider: &'a dyn VersionProvider, crypto: &'a CryptoBackend) -> Self {
        Self { provider, crypto }
    }

    pub fn modules(&self) -> impl Iterator<Item = &'a str> + Clone + use<'a> {
        let provider = self.provider;
        provider.modules().iter().map(String::as_str)
    }

    /// Build environment entries worth logging, in insertion order.
    pub fn environment(
        &self,
    ) -> impl Iterator<Item = EnvironmentEntry<'a>> + Clone + use<'a> {
        let provider = self.provider;
        provider
            .build_info()
            .iter()
            .filter(logged_in_environment)
            .map(EnvironmentEntry::from)
    }

    /// Running OpenSSL version, present only when OpenSSL is the backend.
    #[must_use]
    pub fn openssl_version(&self) -> Option<String> {
        self.crypto
            .is_openssl()
            .then(|| self.crypto.openssl_version("", ""))
    }
}

impl Serialize for BuildInfoEvent<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let provider = self.provider;
        let openssl_version = self.openssl_version();

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("version", provider.version())?;
        map.serialize_entry("gitVersion", provider.git_version())?;
        if let Some(openssl_version) = &openssl_version {
            map.serialize_entry("openSSLVersion", openssl_version)?;
        }
        map.serialize_entry("allocator", provider.allocator())?;
        map.serialize_entry("modules", &LazySeq(self.modules()))?;
        map.serialize_entry("environment", &LazySeq(self.environment()))?;
        map.end()
    }
}

impl fmt::Display for BuildInfoEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}

/// The single-attribute record naming the minimum target OS.
pub struct TargetMinOsEvent<'a> {
    target_min_os: &'a str,
}

impl<'a> TargetMinOsEvent<'a> {
    #[must_use]
    pub fn new(provider: &'a dyn VersionProvider) -> Self {
        Self {
            target_min_os: provider.target_min_os(),
        }
    }
}

impl Serialize for TargetMinOsEvent<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("targetMinOS", self.target_min_os)?;
        map.end()
    }
}

impl fmt::Display for TargetMinOsEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}

fn write_json<T: Serialize>(f: &mut fmt::Formatter<'_>, value: &T) -> fmt::Result {
    let rendered = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&rendered)
}

#[cfg(test)]
mod tests {
    use verinfo_core::{FallbackVersionInfo, StaticVersionInfo};

    use super::*;

    fn provider() -> StaticVersionInfo {
        StaticVersionInfo::builder("5.0.3")
            .git_version("657fea5a")
            .module("enterprise")
            .module("ninja")
            .allocator("tcmalloc")
            .target_min_os("macOS 10.14")
            .build_field("distmod", "ubuntu2204", true)
            .build_field("ccflags", "", true)
            .build_field("linkflags", "-pthread", false)
            .build_field("target_arch", "x86_64", true)
            .build()
            .expect("valid version in test")
    }

    #[test]
    fn environment_requires_flag_and_non_empty_value() {
        let provider = provider();
        let crypto = CryptoBackend::Disabled;
        let event = BuildInfoEvent::new(&provider, &crypto);

        let entries: Vec<_> = event.environment().collect();

        assert_eq!(
            entries,
            [
                EnvironmentEntry {
                    key: "distmod",
                    value: "ubuntu2204"
                },
                EnvironmentEntry {
                    key: "target_arch",
                    value: "x86_64"
                },
            ]
        );
    }

    #[test]
    fn environment_is_restartable() {
        let provider = provider();
        let crypto = CryptoBackend::Disabled;
        let event = BuildInfoEvent::new(&provider, &crypto);

        let sequence = event.environment();
        let first: Vec<_> = sequence.clone().collect();
        let second: Vec<_> = sequence.collect();

        assert_eq!(first, second);
    }

    #[test]
    fn event_renders_attributes_in_order() {
        let provider = provider();
        let crypto = CryptoBackend::Disabled;
        let event = BuildInfoEvent::new(&provider, &crypto);

        assert_eq!(
            event.to_string(),
            concat!(
                r#"{"version":"5.0.3","gitVersion":"657fea5a","allocator":"tcmalloc","#,
                r#""modules":["enterprise","ninja"],"#,
                r#""environment":[{"distmod":"ubuntu2204"},{"target_arch":"x86_64"}]}"#
            )
        );
    }

    #[test]
    fn openssl_version_only_logged_for_openssl_backend() {
        let provider = provider();
        let openssl = CryptoBackend::openssl("OpenSSL 3.0.2 15 Mar 2022", "OpenSSL 3.0.2");
        let schannel = CryptoBackend::windows_schannel();

        let with_openssl = BuildInfoEvent::new(&provider, &openssl).to_string();
        let with_schannel = BuildInfoEvent::new(&provider, &schannel).to_string();

        assert!(with_openssl.contains(
            r#""gitVersion":"657fea5a","openSSLVersion":"OpenSSL 3.0.2 15 Mar 2022","allocator""#
        ));
        assert!(!with_schannel.contains("openSSLVersion"));
    }

    #[test]
    fn fallback_event_has_unknown_module_and_empty_environment() {
        let crypto = CryptoBackend::Disabled;
        let event = BuildInfoEvent::new(FallbackVersionInfo::get(), &crypto);

        let value: serde_json::Value =
            serde_json::from_str(&event.to_string()).expect("event renders valid json");

        assert_eq!(value["modules"], serde_json::json!(["unknown"]));
        assert_eq!(value["environment"], serde_json::json!([]));
    }

    #[test]
    fn target_min_os_event_has_single_attribute() {
        let provider = provider();

        let event = TargetMinOsEvent::new(&provider);

        assert_eq!(event.to_string(), r#"{"targetMinOS":"macOS 10.14"}"#);
    }
}
