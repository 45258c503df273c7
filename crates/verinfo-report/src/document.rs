//! The structured build-info document returned to diagnostic commands.
//!
//! Field names, nesting and order are a contract with consumers that diff or
//! snapshot the document, so entries are always written in a fixed sequence:
//!
//! `version`, `gitVersion`, `targetMinOS` (Windows only), `modules`,
//! `allocator`, `javascriptEngine`, `versionArray`, `openssl`,
//! `buildEnvironment`, `bits`, `debug`, `maxBsonObjectSize`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use verinfo_core::{BuildInfoField, VersionProvider};
use verinfo_platform::{CryptoBackend, PlatformFacts};

const BASE_FIELD_COUNT: usize = 11;

pub struct BuildInfoDocument<'a> {
    provider: &'a dyn VersionProvider,
    facts: PlatformFacts,
    crypto: &'a CryptoBackend,
}

impl<'a> BuildInfoDocument<'a> {
    #[must_use]
    pub fn new(
        provider: &'a dyn VersionProvider,
        facts: PlatformFacts,
        crypto: &'a CryptoBackend,
    ) -> Self {
        Self {
            provider,
            facts,
            crypto,
        }
    }

    fn field_count(&self) -> usize {
        BASE_FIELD_COUNT + usize::from(self.facts.reports_target_min_os)
    }

    /// Write the document's entries into a map that is already open, so the
    /// fields can be embedded in a larger response.
    ///
    /// # Errors
    /// Propagates whatever the underlying serializer reports.
    pub fn append_to<M>(&self, map: &mut M) -> Result<(), M::Error>
    where
        M: SerializeMap,
    {
        let provider = self.provider;

        map.serialize_entry("version", provider.version())?;
        map.serialize_entry("gitVersion", provider.git_version())?;
        if self.facts.reports_target_min_os {
            map.serialize_entry("targetMinOS", provider.target_min_os())?;
        }
        map.serialize_entry("modules", provider.modules())?;
        map.serialize_entry("allocator", provider.allocator())?;
        map.serialize_entry("javascriptEngine", provider.js_engine())?;
        map.serialize_entry("versionArray", &provider.components().to_array())?;
        map.serialize_entry("openssl", &OpensslInfo(self.crypto))?;
        map.serialize_entry("buildEnvironment", &BuildEnvironment(provider.build_info()))?;
        map.serialize_entry("bits", &self.facts.bits)?;
        map.serialize_entry("debug", &self.facts.debug)?;
        map.serialize_entry("maxBsonObjectSize", &self.facts.max_document_size)?;
        Ok(())
    }

    /// Render the document as compact JSON.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Render the document as indented JSON.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for BuildInfoDocument<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.field_count()))?;
        self.append_to(&mut map)?;
        map.end()
    }
}

struct OpensslInfo<'a>(&'a CryptoBackend);

impl Serialize for OpensslInfo<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let compiled = self.0.compiled();
        let mut map = serializer.serialize_map(Some(1 + usize::from(compiled.is_some())))?;
        map.serialize_entry("running", self.0.running())?;
        if let Some(compiled) = compiled {
            map.serialize_entry("compiled", compiled)?;
        }
        map.end()
    }
}

/// Every field flagged for the build-info document, empty values included.
struct BuildEnvironment<'a>(&'a [BuildInfoField]);

impl Serialize for BuildEnvironment<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for field in self.0.iter().filter(|field| field.in_build_info) {
            map.serialize_entry(&field.key, &field.value)?;
        }
        map.end()
    }
}
