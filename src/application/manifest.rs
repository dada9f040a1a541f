//! Manifest Writer
//!
//! Turns a finished pass into the committed manifest. All or nothing: staged
//! artifacts are promoted and the manifest replaced only when every target
//! succeeded; otherwise the output directory is left exactly as it was.
//!
//! Commit order keeps readers consistent:
//! 1. promote staged artifacts (new files appear, old ones stay)
//! 2. replace the manifest atomically
//! 3. prune artifacts only the previous manifest referenced
//!
//! Every live file a promotion replaces is first linked into the staging
//! directory. If a later promotion or the manifest save fails, the replaced
//! files are restored and newly added ones removed before the error returns.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::{is_contained_relative, BuildManifest, BuildTarget};
use crate::domain::ports::ManifestRepository;
use crate::error::{GxrError, GxrResult};

/// Subdirectory of the staging directory holding displaced live artifacts
const DISPLACED_DIR: &str = ".displaced";

/// What the writer did with a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// New manifest is live
    Committed {
        path: PathBuf,
        entries: usize,
        pruned: Vec<PathBuf>,
    },
    /// Pass had failures; nothing was touched
    Skipped { failed: usize },
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitOutcome::Committed { .. })
    }
}

pub struct ManifestWriter<R: ManifestRepository> {
    repository: R,
    output_dir: PathBuf,
}

impl<R: ManifestRepository> ManifestWriter<R> {
    pub fn new(repository: R, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            repository,
            output_dir: output_dir.into(),
        }
    }

    pub fn manifest_path(&self) -> &Path {
        self.repository.path()
    }

    /// The manifest currently on disk, if any
    pub fn load_previous(&self) -> GxrResult<Option<BuildManifest>> {
        self.repository.load()
    }

    /// Commit `targets`, whose artifacts were bundled into `staging`.
    ///
    /// `previous` is the manifest being replaced; its artifacts that the new
    /// manifest no longer references are pruned after the commit.
    pub fn commit(
        &self,
        targets: &[BuildTarget],
        staging: &Path,
        previous: Option<&BuildManifest>,
    ) -> GxrResult<CommitOutcome> {
        let Some(manifest) = BuildManifest::from_targets(targets) else {
            let failed = targets.iter().filter(|t| !t.is_succeeded()).count();
            return Ok(CommitOutcome::Skipped { failed });
        };

        let mut journal = PromotionJournal::new(staging.join(DISPLACED_DIR));
        for target in targets {
            if let Err(e) = self.promote(target, staging, &mut journal) {
                journal.roll_back();
                return Err(e);
            }
        }

        if let Err(e) = self.repository.save(&manifest) {
            journal.roll_back();
            return Err(e);
        }

        let pruned = match previous {
            Some(previous) => self.prune(previous, &manifest),
            None => Vec::new(),
        };

        Ok(CommitOutcome::Committed {
            path: self.repository.path().to_path_buf(),
            entries: manifest.len(),
            pruned,
        })
    }

    fn promote(
        &self,
        target: &BuildTarget,
        staging: &Path,
        journal: &mut PromotionJournal,
    ) -> GxrResult<()> {
        if !is_contained_relative(target.output()) {
            return Err(GxrError::PathEscape {
                path: PathBuf::from(target.output()),
                root: self.output_dir.clone(),
            });
        }

        let from = target.output_path(staging);
        let to = target.output_path(&self.output_dir);
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent)?;
        }
        journal.record(&to, target.output())?;
        fs::rename(&from, &to)?;
        Ok(())
    }

    /// Remove artifacts the new manifest no longer references.
    ///
    /// Best effort: the manifest is already committed, so failures are logged.
    fn prune(&self, previous: &BuildManifest, current: &BuildManifest) -> Vec<PathBuf> {
        let mut pruned = Vec::new();
        for file in previous.files_dropped_by(current) {
            if !is_contained_relative(file) {
                tracing::warn!(file, "refusing to prune path outside output directory");
                continue;
            }
            let mut path = self.output_dir.clone();
            path.extend(file.split('/'));
            match fs::remove_file(&path) {
                Ok(()) => pruned.push(path),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "prune failed"),
            }
        }
        pruned
    }
}

/// Live paths touched by a commit, with the backup of what they held before
struct PromotionJournal {
    backup_root: PathBuf,
    entries: Vec<(PathBuf, Option<PathBuf>)>,
}

impl PromotionJournal {
    fn new(backup_root: PathBuf) -> Self {
        Self {
            backup_root,
            entries: Vec::new(),
        }
    }

    /// Remember `live` before it is replaced, keeping its current bytes
    fn record(&mut self, live: &Path, relative: &str) -> GxrResult<()> {
        let backup = if live.is_file() {
            let mut backup = self.backup_root.clone();
            backup.extend(relative.split('/'));
            if let Some(parent) = backup.parent() {
                fs::create_dir_all(parent)?;
            }
            if fs::hard_link(live, &backup).is_err() {
                fs::copy(live, &backup)?;
            }
            Some(backup)
        } else {
            None
        };
        self.entries.push((live.to_path_buf(), backup));
        Ok(())
    }

    /// Put every recorded path back the way it was, newest first
    fn roll_back(self) {
        for (live, backup) in self.entries.into_iter().rev() {
            let restored = match &backup {
                Some(backup) => fs::rename(backup, &live),
                None => fs::remove_file(&live),
            };
            match restored {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %live.display(), error = %e, "failed to restore artifact")
                }
            }
        }
    }
}
