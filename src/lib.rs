//! gxr - hydration bundles for server-rendered React components
//!
//! gxr scans a components directory for modules that opt into client-side
//! hydration with a `"use client"` directive, bundles each through an external
//! bundler, and publishes a manifest mapping component names to bundles. The
//! server renderer reads that manifest to emit hydration script tags.
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, ports, pure services
//! - `application` - build and watch use cases
//! - `infrastructure` - bundler process, manifest file, event sinks, fs helpers
//! - `presentation` - CLI definition and use case factory

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod tracing_setup;

// Re-exports for convenience
pub use application::{BuildOptions, BuildResult, BuildUseCase, WatchEvent, WatchOptions, WatchUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{BuildManifest, ClientComponent, ManifestEntry};
pub use domain::ports::{BuildEvent, BuildEventSink, Bundler};
pub use error::{GxrError, GxrResult};
