//! Component identity value object.

use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

/// Stable identity of a client component.
///
/// Derived from the source path relative to the components directory:
/// `/`-separated, extension stripped. `forms/Input.tsx` becomes `forms/Input`.
/// Two sources with the same stem in the same directory (`Counter.tsx`,
/// `Counter.jsx`) share an identity, which the classifier reports as a
/// duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Build an identity from a path relative to the components root.
    ///
    /// Returns `None` for paths that are absolute, contain `..`, or have no
    /// file stem.
    pub fn from_relative_path(relative: &Path) -> Option<Self> {
        let mut segments: Vec<String> = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_str()?.to_string()),
                Component::CurDir => {}
                _ => return None,
            }
        }

        let file = segments.pop()?;
        let stem = Path::new(&file).file_stem()?.to_str()?.to_string();
        if stem.is_empty() {
            return None;
        }
        segments.push(stem);
        Some(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Artifact file name for this component, relative to the bundle directory.
    pub fn artifact_name(&self) -> String {
        format!("{}.js", self.0)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn strips_extension() {
        let id = ComponentId::from_relative_path(Path::new("Counter.tsx")).unwrap();
        assert_eq!(id.as_str(), "Counter");
    }

    #[test]
    fn keeps_nested_directories() {
        let path: PathBuf = ["forms", "inputs", "Email.jsx"].iter().collect();
        let id = ComponentId::from_relative_path(&path).unwrap();
        assert_eq!(id.as_str(), "forms/inputs/Email");
        assert_eq!(id.artifact_name(), "forms/inputs/Email.js");
    }

    #[test]
    fn only_last_extension_is_stripped() {
        let id = ComponentId::from_relative_path(Path::new("widget.client.tsx")).unwrap();
        assert_eq!(id.as_str(), "widget.client");
    }

    #[test]
    fn rejects_parent_segments() {
        assert!(ComponentId::from_relative_path(Path::new("../Counter.tsx")).is_none());
    }

    #[test]
    fn ignores_current_dir_segments() {
        let id = ComponentId::from_relative_path(Path::new("./ui/Button.tsx")).unwrap();
        assert_eq!(id.as_str(), "ui/Button");
    }
}
