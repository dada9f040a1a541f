//! Error types for gxr
//!
//! Library code returns [`GxrResult`]; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gxr operations
pub type GxrResult<T> = Result<T, GxrError>;

/// Main error type for gxr operations
#[derive(Error, Debug)]
pub enum GxrError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Two source files resolve to the same component identity
    #[error("duplicate component '{id}': {first} and {second} resolve to the same manifest key")]
    DuplicateComponent {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// The configured bundler command has no program
    #[error("bundler command is empty - set [bundler] command in gxr.toml")]
    EmptyBundlerCommand,

    /// Manifest on disk could not be read back
    #[error("corrupt manifest at {path}: {message}")]
    CorruptManifest { path: PathBuf, message: String },

    /// Artifact path in a manifest escapes the output directory
    #[error("path '{path}' escapes output directory '{root}'")]
    PathEscape { path: PathBuf, root: PathBuf },

    /// Worker pool could not be created
    #[error("failed to start bundler pool: {0}")]
    Pool(String),

    /// File watcher could not be set up
    #[error("file watcher error: {0}")]
    Watch(String),
}

impl GxrError {
    /// One-line remedy shown under the error, when there is an obvious one
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            GxrError::DuplicateComponent { .. } => {
                Some("Rename or remove one of the files so each component name is unique.")
            }
            GxrError::EmptyBundlerCommand => Some(
                "Set [bundler] command, e.g. [\"esbuild\", \"{entry}\", \"--bundle\", \"--outfile={output}\"].",
            ),
            GxrError::InvalidConfig { .. } => Some("Fix the TOML syntax in the config file."),
            _ => None,
        }
    }
}

impl From<notify::Error> for GxrError {
    fn from(err: notify::Error) -> Self {
        GxrError::Watch(err.to_string())
    }
}
