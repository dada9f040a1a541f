//! Build Result
//!
//! What a pass produced, reported to the CLI and the watch loop.

use std::path::PathBuf;

use crate::domain::entities::{BuildStatus, BuildTarget};

/// Per-component outcome of a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetReport {
    pub component: String,
    pub output: String,
    pub status: BuildStatus,
}

impl From<&BuildTarget> for TargetReport {
    fn from(target: &BuildTarget) -> Self {
        Self {
            component: target.id().to_string(),
            output: target.output().to_string(),
            status: target.status().clone(),
        }
    }
}

/// Result of a build pass
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    /// Client components classified
    pub components: usize,
    /// One report per component, in identity order
    pub targets: Vec<TargetReport>,
    /// Whether a new manifest was committed
    pub manifest_committed: bool,
    pub manifest_path: PathBuf,
    /// Targets whose previous bundle was carried over unchanged
    pub reused: usize,
    /// Artifacts removed after the commit
    pub pruned: Vec<PathBuf>,
    /// Non-fatal problems
    pub warnings: Vec<String>,
    /// Pass-level failure (duplicate identity, commit failure)
    pub error: Option<String>,
    /// Remedy for `error`, when there is an obvious one
    pub hint: Option<&'static str>,
}

impl BuildResult {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            ..Self::default()
        }
    }

    pub fn succeeded(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| matches!(t.status, BuildStatus::Succeeded { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.targets
            .iter()
            .filter(|t| matches!(t.status, BuildStatus::Failed { .. }))
            .count()
    }

    /// `(component, message)` for every failed target
    pub fn failures(&self) -> Vec<(&str, &str)> {
        self.targets
            .iter()
            .filter_map(|t| match &t.status {
                BuildStatus::Failed { error } => Some((t.component.as_str(), error.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.failed() == 0 && self.manifest_committed
    }
}
