//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `bundler/` - External bundler process (`CommandBundler`)
//! - `events/` - Event sinks (NDJSON)
//! - `fs/` - Atomic writes and the output directory lock
//! - `repositories/` - Manifest persistence

pub mod bundler;
pub mod events;
pub mod fs;
pub mod repositories;

// Re-export for convenience
pub use bundler::CommandBundler;
pub use events::JsonEventSink;
pub use fs::{atomic_write, BuildLock};
pub use repositories::JsonManifestRepository;
