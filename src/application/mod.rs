//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - One build pass (classify, bundle, commit manifest)
//! - `WatchUseCase` - Debounced, serialized rebuilds on file changes
//!
//! ## Services
//!
//! - `ComponentClassifier` - Finds client components under a directory
//! - `BundleProducer` - Runs the bundler over targets on a bounded pool
//! - `ManifestWriter` - All-or-nothing manifest commit

pub mod build;
pub mod bundle;
pub mod classify;
pub mod manifest;
pub mod watch;

pub use build::{BuildOptions, BuildResult, BuildUseCase, TargetReport};
pub use bundle::BundleProducer;
pub use classify::{Classification, ComponentClassifier};
pub use manifest::{CommitOutcome, ManifestWriter};
pub use watch::{WatchEvent, WatchOptions, WatchStats, WatchUseCase};
