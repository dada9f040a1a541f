//! Bundler port - the external compiler/bundler boundary
//!
//! The pipeline treats the bundler as a black box: one entry source in, one
//! artifact out, or a failure message.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ComponentId;

/// One bundler invocation
#[derive(Debug, Clone, Copy)]
pub struct BundleRequest<'a> {
    /// Component being bundled (for diagnostics)
    pub component: &'a ComponentId,
    /// Entry source file
    pub entry: &'a Path,
    /// Where the artifact must be written
    pub output: &'a Path,
}

/// Bundler invocation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundlerError {
    /// The bundler process could not be started
    #[error("failed to launch '{program}': {message}")]
    Launch { program: String, message: String },
    /// The bundler ran and reported an error
    #[error("{0}")]
    Failed(String),
    /// The bundler exited successfully without writing the artifact
    #[error("bundler reported success but wrote no artifact at {0}")]
    MissingArtifact(PathBuf),
}

/// Abstract bundler interface
///
/// Implementations:
/// - `CommandBundler` - spawns an external command (esbuild by default)
/// - test fakes that write artifacts in-process
///
/// Implementations must be safe to call from several threads at once; the
/// bundle producer fans requests out over a worker pool.
pub trait Bundler: Send + Sync {
    /// Short name used in messages
    fn name(&self) -> &str;

    /// Bundle `request.entry` into `request.output`, blocking until done
    fn bundle(&self, request: &BundleRequest<'_>) -> Result<(), BundlerError>;
}

impl<B: Bundler + ?Sized> Bundler for std::sync::Arc<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn bundle(&self, request: &BundleRequest<'_>) -> Result<(), BundlerError> {
        (**self).bundle(request)
    }
}
