//! Watch Use Case
//!
//! Continuous rebuilds while components are being edited. It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Relevance filtering (extension + content hash)
//! - Debouncing and build serialization (`WatchSession`)
//! - Rebuilds through the same build pass `gxr build` runs
//!
//! ## Architecture
//!
//! - `WatchUseCase` - initial build, subscription, then the loop
//! - `WatchCoordinator` - single-threaded event loop owning the session
//! - `WatchSession` - explicit state machine, clock passed in
//! - `ChangeFilter` - drops irrelevant and no-op notifications
//! - `WatchEvent` - Events emitted during watch operation
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(WatchOptions::from_config(&config));
//! use_case.start(running, move || build.run(&sink), |event| { ... })?;
//! ```

mod coordinator;
mod event;
mod filter;
mod session;
mod use_case;


pub use coordinator::{BuildRunner, WatchCoordinator, WatchMessage, WatchStats};
pub use event::{WatchEvent, WatchOptions};
pub use filter::{is_content_event, ChangeFilter};
pub use session::{SessionAction, WatchSession, WatchState, MAX_DEBOUNCE};
pub use use_case::WatchUseCase;
