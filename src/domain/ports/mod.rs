//! Domain Ports
//!
//! Interfaces the application layer depends on; infrastructure provides the
//! implementations.

pub mod build_events;
pub mod bundler;
pub mod manifest_repository;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use bundler::{BundleRequest, Bundler, BundlerError};
pub use manifest_repository::ManifestRepository;
