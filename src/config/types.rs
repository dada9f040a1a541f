//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GxrResult;

use super::loader;
use super::ConfigWarning;

/// Build pass configuration (`[build]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Root scanned for client components
    #[serde(default = "default_components_dir")]
    pub components_dir: PathBuf,

    /// Directory bundles and the manifest are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Subdirectory of `output_dir` holding the bundles
    #[serde(default = "default_bundle_dir")]
    pub bundle_dir: String,

    /// Manifest file name inside `output_dir`
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Parallel bundler invocations (defaults to available parallelism)
    #[serde(default)]
    pub concurrency: Option<usize>,

    /// Recognized component file extensions, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
            output_dir: default_output_dir(),
            bundle_dir: default_bundle_dir(),
            manifest: default_manifest(),
            concurrency: None,
            extensions: default_extensions(),
        }
    }
}

impl BuildConfig {
    /// Effective worker count, never zero
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1)
            })
            .max(1)
    }

    /// Absolute-or-relative location of the manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(&self.manifest)
    }
}

fn default_components_dir() -> PathBuf {
    PathBuf::from("./client/components")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./public")
}

fn default_bundle_dir() -> String {
    "hydrate".to_string()
}

fn default_manifest() -> String {
    "gxr-manifest.json".to_string()
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts", "jsx", "js", "mjs"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// External bundler configuration (`[bundler]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundlerConfig {
    /// Program and arguments; `{entry}` and `{output}` are substituted
    #[serde(default = "default_bundler_command")]
    pub command: Vec<String>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            command: default_bundler_command(),
        }
    }
}

fn default_bundler_command() -> Vec<String> {
    [
        "esbuild",
        "{entry}",
        "--bundle",
        "--format=esm",
        "--minify",
        "--outfile={output}",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Watch loop configuration (`[watch]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub bundler: BundlerConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GxrResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GxrResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (GXR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::apply_env_overrides(self, |key| std::env::var(key).ok())
    }
}
