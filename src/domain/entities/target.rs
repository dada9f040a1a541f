//! Build target entity
//!
//! One client component paired with where its bundle goes and how building it
//! went. Targets live for exactly one build pass.

use std::path::{Path, PathBuf};

use crate::domain::entities::ClientComponent;
use crate::domain::value_objects::{ComponentId, ContentHash};

/// Status of a single bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    /// Not attempted yet
    Pending,
    /// Artifact written; carries the artifact's content hash
    Succeeded { artifact_hash: ContentHash },
    /// Bundler failed; carries the captured message
    Failed { error: String },
}

impl BuildStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BuildStatus::Pending => "pending",
            BuildStatus::Succeeded { .. } => "succeeded",
            BuildStatus::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    component: ClientComponent,
    /// Artifact path relative to the output directory, `/`-separated
    output: String,
    status: BuildStatus,
}

impl BuildTarget {
    /// Resolve the output location for `component` under `bundle_dir`.
    pub fn new(component: ClientComponent, bundle_dir: &str) -> Self {
        let bundle_dir = bundle_dir.trim_matches('/');
        let artifact = component.id().artifact_name();
        let output = if bundle_dir.is_empty() {
            artifact
        } else {
            format!("{}/{}", bundle_dir, artifact)
        };

        Self {
            component,
            output,
            status: BuildStatus::Pending,
        }
    }

    pub fn component(&self) -> &ClientComponent {
        &self.component
    }

    pub fn id(&self) -> &ComponentId {
        self.component.id()
    }

    /// Manifest-facing artifact path (`hydrate/Counter.js`)
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Artifact path resolved under `root`
    pub fn output_path(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(self.output.split('/'));
        path
    }

    pub fn status(&self) -> &BuildStatus {
        &self.status
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self.status, BuildStatus::Succeeded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, BuildStatus::Failed { .. })
    }

    pub fn succeed(&mut self, artifact_hash: ContentHash) {
        self.status = BuildStatus::Succeeded { artifact_hash };
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.status = BuildStatus::Failed {
            error: error.into(),
        };
    }
}
