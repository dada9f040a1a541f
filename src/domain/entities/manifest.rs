//! Build manifest entity
//!
//! The persisted mapping from component identity to bundle. This is the only
//! artifact that survives a build pass; the SSR runtime reads it to decide
//! which hydration script to emit for a page.
//!
//! The serialized form is deterministic: keys are ordered and nothing
//! time-dependent is stored, so two passes over identical inputs produce
//! byte-identical documents.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{BuildStatus, BuildTarget};
use crate::domain::value_objects::ContentHash;

/// One component's entry in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Artifact path relative to the output directory
    pub file: String,
    /// Hash of the artifact bytes (cache busting)
    pub hash: ContentHash,
    /// Hash of the component source the artifact was built from
    pub source_hash: ContentHash,
    /// Names exported by the component module
    #[serde(default)]
    pub exports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildManifest {
    pub version: u32,
    #[serde(default)]
    pub components: BTreeMap<String, ManifestEntry>,
}

impl Default for BuildManifest {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildManifest {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            components: BTreeMap::new(),
        }
    }

    /// Build a manifest from a finished pass.
    ///
    /// Returns `None` unless every target succeeded: a manifest is never
    /// derived from a partial set.
    pub fn from_targets(targets: &[BuildTarget]) -> Option<Self> {
        let mut manifest = Self::new();
        for target in targets {
            let BuildStatus::Succeeded { artifact_hash } = target.status() else {
                return None;
            };
            manifest.components.insert(
                target.id().to_string(),
                ManifestEntry {
                    file: target.output().to_string(),
                    hash: artifact_hash.clone(),
                    source_hash: target.component().fingerprint().clone(),
                    exports: target.component().exports().to_vec(),
                },
            );
        }
        Some(manifest)
    }

    pub fn get(&self, id: &str) -> Option<&ManifestEntry> {
        self.components.get(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Artifact paths referenced by this manifest
    pub fn files(&self) -> BTreeSet<&str> {
        self.components.values().map(|e| e.file.as_str()).collect()
    }

    /// Artifact paths referenced here but not by `newer`
    pub fn files_dropped_by<'a>(&'a self, newer: &BuildManifest) -> Vec<&'a str> {
        let keep = newer.files();
        self.files()
            .into_iter()
            .filter(|f| !keep.contains(f))
            .collect()
    }

    /// Serialize to the on-disk form (pretty JSON with trailing newline)
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

/// Whether a manifest `file` value stays inside the directory it is relative to
pub fn is_contained_relative(file: &str) -> bool {
    let path = Path::new(file);
    !file.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
