//! Manifest JSON: `{ "<label>": { "version": "...", "url": "..." }, ... }`.

use serde::Deserialize;
use std::collections::BTreeMap;

use super::error::UnknownVersionError;

/// One manifest value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    pub version: String,
    pub url: String,
}

/// A version resolved from the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Label it was looked up by, e.g. `latest`.
    pub label: String,
    pub version: String,
    pub url: String,
}

/// Parsed manifest, keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Look up `label`; unknown labels list what is available.
    pub fn resolve(&self, label: &str) -> Result<CatalogEntry, UnknownVersionError> {
        match self.entries.get(label) {
            Some(entry) => Ok(CatalogEntry {
                label: label.to_string(),
                version: entry.version.clone(),
                url: entry.url.clone(),
            }),
            None => Err(UnknownVersionError {
                label: label.to_string(),
                known: self.known_versions(),
            }),
        }
    }

    /// `(label, version)` pairs, sorted by label.
    pub fn known_versions(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(label, entry)| (label.clone(), entry.version.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
