//! Domain Entities
//!
//! - `ClientComponent`: a hydration-marked source file found by the classifier
//! - `BuildTarget`: a component plus its output location and build status
//! - `BuildManifest`: the committed identity → bundle mapping

mod component;
mod manifest;
mod target;

pub use component::ClientComponent;
pub use manifest::{is_contained_relative, BuildManifest, ManifestEntry};
pub use target::{BuildStatus, BuildTarget};
