//! JSON Manifest Repository
//!
//! Stores the build manifest as pretty-printed JSON, replaced atomically so
//! the SSR runtime never reads a half-written document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::BuildManifest;
use crate::domain::ports::ManifestRepository;
use crate::error::{GxrError, GxrResult};
use crate::infrastructure::fs::atomic_write;

pub struct JsonManifestRepository {
    path: PathBuf,
}

impl JsonManifestRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestRepository for JsonManifestRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> GxrResult<Option<BuildManifest>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let manifest =
            BuildManifest::from_json(&content).map_err(|e| GxrError::CorruptManifest {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(Some(manifest))
    }

    fn save(&self, manifest: &BuildManifest) -> GxrResult<()> {
        let json = manifest.to_json()?;
        atomic_write(&self.path, json.as_bytes())
    }
}
