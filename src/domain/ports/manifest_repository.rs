//! Manifest Repository port
//!
//! Abstracts loading and committing the build manifest so the writer's
//! all-or-nothing logic can be exercised against failing storage.

use std::path::Path;

use crate::domain::entities::BuildManifest;
use crate::error::GxrResult;

pub trait ManifestRepository: Send + Sync {
    /// Location readers find the manifest at
    fn path(&self) -> &Path;

    /// Load the currently committed manifest, `None` if there is none yet
    fn load(&self) -> GxrResult<Option<BuildManifest>>;

    /// Replace the committed manifest.
    ///
    /// Must be atomic toward readers: they observe either the old document
    /// or the new one, never a partial write.
    fn save(&self, manifest: &BuildManifest) -> GxrResult<()>;
}
