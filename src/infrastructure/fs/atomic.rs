//! Atomic file replacement
//!
//! Writes go to a temp file in the destination directory, are flushed, then
//! renamed over the target. Readers see the old bytes or the new bytes.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::GxrResult;

/// Replace `path` with `content` atomically, creating parent directories.
pub fn atomic_write(path: &Path, content: &[u8]) -> GxrResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
