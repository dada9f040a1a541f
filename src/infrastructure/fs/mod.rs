//! File System Helpers
//!
//! Atomic replacement and cross-process locking for the output directory.

mod atomic;
mod lock;

pub use atomic::atomic_write;
pub use lock::{BuildLock, LOCK_FILE_NAME};
