//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{BuildOptions, BuildUseCase, WatchOptions, WatchUseCase};
use crate::config::Config;
use crate::error::GxrResult;
use crate::infrastructure::{CommandBundler, JsonManifestRepository};

/// Type alias for the concrete BuildUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildUseCase<CommandBundler, JsonManifestRepository>;

/// Create a build use case with all dependencies wired up
///
/// Fails only when the configured bundler command is unusable.
pub fn create_build_use_case(config: &Config) -> GxrResult<ConcreteBuildUseCase> {
    let bundler = CommandBundler::new(&config.bundler.command)?;
    let repository = JsonManifestRepository::new(config.build.manifest_path());
    let options = BuildOptions::from_config(config);

    Ok(BuildUseCase::new(options, bundler, repository))
}

/// Create a watch use case for the configured directories
pub fn create_watch_use_case(config: &Config) -> WatchUseCase {
    WatchUseCase::new(WatchOptions::from_config(config))
}
