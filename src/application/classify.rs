//! Component Classifier
//!
//! Walks the components directory and picks out the source files that opted
//! into client-side hydration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::entities::ClientComponent;
use crate::domain::services::{exported_names, has_client_directive};
use crate::domain::value_objects::{ComponentId, ContentHash};
use crate::error::{GxrError, GxrResult};

/// Outcome of scanning a components directory
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Client components, sorted by identity
    pub components: Vec<ClientComponent>,
    /// Non-fatal problems (missing directory, unreadable files)
    pub warnings: Vec<String>,
}

/// Finds client components under a root directory
#[derive(Debug, Clone)]
pub struct ComponentClassifier {
    extensions: Vec<String>,
}

impl ComponentClassifier {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    /// Whether `path` names a file the classifier would inspect.
    ///
    /// Declaration files and test files never count as components.
    pub fn is_component_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if name.ends_with(".d.ts") || name.contains(".test.") || name.contains(".spec.") {
            return false;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known == ext))
    }

    /// Classify every component under `root`.
    ///
    /// A missing root yields an empty result plus a warning. Two files that
    /// resolve to the same identity are an error.
    pub fn classify(&self, root: &Path) -> GxrResult<Classification> {
        let mut result = Classification::default();

        if !root.is_dir() {
            result.warnings.push(format!(
                "components directory not found: {}",
                root.display()
            ));
            return Ok(result);
        }

        let mut candidates: Vec<PathBuf> = Vec::new();
        let walker = WalkBuilder::new(root)
            .hidden(true)
            .parents(false)
            .git_global(false)
            .git_exclude(false)
            .require_git(false)
            .filter_entry(|entry| {
                entry.depth() == 0 || entry.file_name().to_str() != Some("node_modules")
            })
            .build();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|t| t.is_file());
                    if is_file && self.is_component_file(entry.path()) {
                        candidates.push(entry.into_path());
                    }
                }
                Err(e) => result.warnings.push(format!("failed to scan: {}", e)),
            }
        }
        candidates.sort();

        let mut found: BTreeMap<ComponentId, ClientComponent> = BTreeMap::new();
        for path in candidates {
            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) => {
                    result
                        .warnings
                        .push(format!("skipping {}: {}", path.display(), e));
                    continue;
                }
            };

            if !has_client_directive(&source) {
                tracing::debug!(path = %path.display(), "no client directive");
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(&path);
            let Some(id) = ComponentId::from_relative_path(relative) else {
                result
                    .warnings
                    .push(format!("skipping {}: cannot derive identity", path.display()));
                continue;
            };

            if let Some(existing) = found.get(&id) {
                return Err(GxrError::DuplicateComponent {
                    id: id.to_string(),
                    first: existing.source().to_path_buf(),
                    second: path,
                });
            }

            let component = ClientComponent::new(
                id.clone(),
                path,
                exported_names(&source),
                ContentHash::from_content(&source),
            );
            found.insert(id, component);
        }

        result.components = found.into_values().collect();
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    const MARKED: &str = "\"use client\";\nexport default function C() { return null; }\n";
    const UNMARKED: &str = "export default function C() { return null; }\n";

    fn classifier() -> ComponentClassifier {
        ComponentClassifier::new(
            ["tsx", "ts", "jsx", "js", "mjs"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn ids(classification: &Classification) -> Vec<String> {
        classification
            .components
            .iter()
            .map(|c| c.id().to_string())
            .collect()
    }

    #[test]
    fn marked_component_is_found_and_unmarked_is_not() {
        let dir = tempdir().unwrap();
        write(dir.path(), "Counter.tsx", MARKED);
        write(dir.path(), "Header.tsx", UNMARKED);

        let result = classifier().classify(dir.path()).unwrap();

        assert_eq!(ids(&result), vec!["Counter"]);
        assert_eq!(result.components[0].exports(), ["default".to_string()]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn nested_components_use_slash_identities() {
        let dir = tempdir().unwrap();
        write(dir.path(), "forms/inputs/Text.jsx", MARKED);
        write(dir.path(), "Button.js", MARKED);

        let result = classifier().classify(dir.path()).unwrap();

        assert_eq!(ids(&result), vec!["Button", "forms/inputs/Text"]);
    }

    #[test]
    fn missing_directory_is_a_warning() {
        let dir = tempdir().unwrap();
        let result = classifier().classify(&dir.path().join("absent")).unwrap();

        assert!(result.components.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("components directory not found"));
    }

    #[test]
    fn duplicate_identity_is_an_error() {
        let dir = tempdir().unwrap();
        write(dir.path(), "Counter.tsx", MARKED);
        write(dir.path(), "Counter.jsx", MARKED);

        let err = classifier().classify(dir.path()).unwrap_err();

        match err {
            GxrError::DuplicateComponent { id, first, second } => {
                assert_eq!(id, "Counter");
                assert!(first.ends_with("Counter.jsx"));
                assert!(second.ends_with("Counter.tsx"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unmarked_duplicate_is_not_a_collision() {
        let dir = tempdir().unwrap();
        write(dir.path(), "Counter.tsx", MARKED);
        write(dir.path(), "Counter.ts", UNMARKED);

        let result = classifier().classify(dir.path()).unwrap();
        assert_eq!(ids(&result), vec!["Counter"]);
    }

    #[test]
    fn skips_declarations_tests_and_foreign_extensions() {
        let dir = tempdir().unwrap();
        write(dir.path(), "types.d.ts", MARKED);
        write(dir.path(), "Counter.test.tsx", MARKED);
        write(dir.path(), "Counter.spec.js", MARKED);
        write(dir.path(), "styles.css", MARKED);
        write(dir.path(), "README.md", MARKED);

        let result = classifier().classify(dir.path()).unwrap();
        assert!(result.components.is_empty());
    }

    #[test]
    fn skips_node_modules_hidden_and_gitignored() {
        let dir = tempdir().unwrap();
        write(dir.path(), "node_modules/lib/Widget.js", MARKED);
        write(dir.path(), ".cache/Widget.js", MARKED);
        write(dir.path(), "generated/Widget.js", MARKED);
        write(dir.path(), ".gitignore", "generated/\n");
        write(dir.path(), "Real.tsx", MARKED);

        let result = classifier().classify(dir.path()).unwrap();
        assert_eq!(ids(&result), vec!["Real"]);
    }

    #[test]
    fn fingerprint_tracks_source_bytes() {
        let dir = tempdir().unwrap();
        write(dir.path(), "Counter.tsx", MARKED);

        let result = classifier().classify(dir.path()).unwrap();
        assert_eq!(
            result.components[0].fingerprint(),
            &ContentHash::from_content(MARKED)
        );
    }

    #[test]
    fn is_component_file_respects_configured_extensions() {
        let only_tsx = ComponentClassifier::new(vec!["tsx".to_string()]);
        assert!(only_tsx.is_component_file(Path::new("a/B.tsx")));
        assert!(!only_tsx.is_component_file(Path::new("a/B.jsx")));
        assert!(!only_tsx.is_component_file(Path::new("a/B")));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn marked_files_are_found_at_any_depth(
            segments in prop::collection::vec("[a-z]{1,8}", 0..4),
            name in "[A-Z][a-zA-Z]{0,10}",
            marked in any::<bool>(),
        ) {
            let dir = tempdir().unwrap();
            let mut rel: Vec<String> = segments.clone();
            rel.push(format!("{}.tsx", name));
            write(dir.path(), &rel.join("/"), if marked { MARKED } else { UNMARKED });

            let result = classifier().classify(dir.path()).unwrap();

            let mut expected_id = segments;
            expected_id.push(name);
            if marked {
                prop_assert_eq!(ids(&result), vec![expected_id.join("/")]);
            } else {
                prop_assert!(result.components.is_empty());
            }
        }
    }
}
