//! Client component entity

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ComponentId, ContentHash};

/// A component source file marked for client-side hydration.
///
/// Created by the classifier and immutable for the rest of the build pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientComponent {
    id: ComponentId,
    source: PathBuf,
    exports: Vec<String>,
    fingerprint: ContentHash,
}

impl ClientComponent {
    pub fn new(
        id: ComponentId,
        source: impl Into<PathBuf>,
        exports: Vec<String>,
        fingerprint: ContentHash,
    ) -> Self {
        Self {
            id,
            source: source.into(),
            exports,
            fingerprint,
        }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    /// Path of the source file as found on disk
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Exported names (`default` for a default export)
    pub fn exports(&self) -> &[String] {
        &self.exports
    }

    /// Hash of the source bytes
    pub fn fingerprint(&self) -> &ContentHash {
        &self.fingerprint
    }
}
