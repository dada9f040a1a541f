//! Output directory lock
//!
//! One build pass per output directory at a time, across processes. The lock
//! is advisory (`fs2`) and released when the guard drops.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::GxrResult;

pub const LOCK_FILE_NAME: &str = ".gxr.lock";

#[derive(Debug)]
pub struct BuildLock {
    file: File,
    path: PathBuf,
}

impl BuildLock {
    /// Block until the exclusive lock on `output_dir` is held
    pub fn acquire(output_dir: &Path) -> GxrResult<Self> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;
        file.lock_exclusive()?;
        tracing::debug!(path = %path.display(), "build lock acquired");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for BuildLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
