//! Change relevance filter
//!
//! Decides which raw file-system notifications should wake the coordinator.
//! Editors touch files without changing them (autosave, atomic-save dances),
//! so a content hash per path is kept and unchanged content is dropped.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use notify::event::{EventKind, ModifyKind};

use crate::application::classify::ComponentClassifier;
use crate::domain::value_objects::ContentHash;

pub struct ChangeFilter {
    classifier: ComponentClassifier,
    ignored_root: Option<PathBuf>,
    hashes: HashMap<PathBuf, ContentHash>,
}

impl ChangeFilter {
    /// `ignored_root` is typically the output directory, so bundles written
    /// inside the watched tree never retrigger a build.
    pub fn new(classifier: ComponentClassifier, ignored_root: Option<PathBuf>) -> Self {
        Self {
            classifier,
            ignored_root,
            hashes: HashMap::new(),
        }
    }

    /// Record the current content of every component file under `root`
    pub fn seed(&mut self, root: &Path) {
        let walker = WalkBuilder::new(root)
            .hidden(true)
            .parents(false)
            .require_git(false)
            .build();
        for entry in walker.filter_map(Result::ok) {
            let path = entry.path();
            if !self.classifier.is_component_file(path) {
                continue;
            }
            if let Ok(bytes) = fs::read(path) {
                self.hashes
                    .insert(path.to_path_buf(), ContentHash::from_bytes(&bytes));
            }
        }
        tracing::debug!(files = self.hashes.len(), "seeded change filter");
    }

    pub fn tracked(&self) -> usize {
        self.hashes.len()
    }

    /// Whether a change at `path` should trigger a rebuild.
    ///
    /// A path that can no longer be read counts as a change (deletion).
    pub fn is_relevant(&mut self, path: &Path) -> bool {
        if !self.classifier.is_component_file(path) {
            return false;
        }
        if self
            .ignored_root
            .as_deref()
            .is_some_and(|root| path.starts_with(root))
        {
            return false;
        }

        match fs::read(path) {
            Ok(bytes) => {
                let hash = ContentHash::from_bytes(&bytes);
                if self.hashes.get(path) == Some(&hash) {
                    return false;
                }
                self.hashes.insert(path.to_path_buf(), hash);
                true
            }
            Err(_) => {
                self.hashes.remove(path);
                true
            }
        }
    }
}

/// Event kinds that can change what a build produces
pub fn is_content_event(kind: &EventKind) -> bool {
    match kind {
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) | EventKind::Any => {
            true
        }
        EventKind::Access(_) | EventKind::Other => false,
    }
}
