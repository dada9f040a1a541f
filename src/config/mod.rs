//! Configuration module for gxr
//!
//! Configuration hierarchy (highest priority first):
//! 1. CLI flags
//! 2. Environment variables (GXR_*)
//! 3. Config file (`gxr.toml` in the working directory, or `--config`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{apply_env_overrides, load_or_default, load_with_warnings, CONFIG_FILE_NAME};
pub use types::{BuildConfig, BundlerConfig, Config, WatchConfig};
