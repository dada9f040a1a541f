//! Build Options
//!
//! Configuration for a single build pass.

use std::path::PathBuf;

use crate::config::Config;

/// Options for a build pass
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub components_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Bundle subdirectory of `output_dir`
    pub bundle_dir: String,
    pub concurrency: usize,
    pub extensions: Vec<String>,
}

impl BuildOptions {
    pub fn new(components_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        let defaults = Config::default().build;
        let concurrency = defaults.effective_concurrency();
        Self {
            components_dir: components_dir.into(),
            output_dir: output_dir.into(),
            bundle_dir: defaults.bundle_dir,
            concurrency,
            extensions: defaults.extensions,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            components_dir: config.build.components_dir.clone(),
            output_dir: config.build.output_dir.clone(),
            bundle_dir: config.build.bundle_dir.clone(),
            concurrency: config.build.effective_concurrency(),
            extensions: config.build.extensions.clone(),
        }
    }

    pub fn with_bundle_dir(mut self, bundle_dir: impl Into<String>) -> Self {
        self.bundle_dir = bundle_dir.into();
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}
