//! Build Use Case
//!
//! One build pass: classify → bundle → commit manifest. Invoked by both
//! `gxr build` and every watch rebuild. Stateless between runs; everything a
//! pass creates besides the committed output is discarded when it returns.
//!
//! The only state read back is the committed manifest: a component whose
//! source hash matches its entry, and whose live bundle still hashes to the
//! recorded value, is carried over without invoking the bundler.

use std::fs;
use std::path::Path;

use crate::application::bundle::BundleProducer;
use crate::application::classify::ComponentClassifier;
use crate::application::manifest::{CommitOutcome, ManifestWriter};
use crate::domain::entities::{BuildManifest, BuildTarget};
use crate::domain::ports::{BuildEvent, BuildEventSink, Bundler, ManifestRepository};
use crate::domain::value_objects::ContentHash;
use crate::error::GxrResult;
use crate::infrastructure::fs::BuildLock;

use super::options::BuildOptions;
use super::result::{BuildResult, TargetReport};

/// Prefix of the per-pass staging directory inside the output directory
pub const STAGING_PREFIX: &str = ".gxr-staging-";

/// Build use case - orchestrates one build pass
///
/// Parameterized by its ports so tests can drive it with in-process fakes.
pub struct BuildUseCase<B, R>
where
    B: Bundler,
    R: ManifestRepository,
{
    options: BuildOptions,
    classifier: ComponentClassifier,
    producer: BundleProducer<B>,
    writer: ManifestWriter<R>,
}

impl<B, R> BuildUseCase<B, R>
where
    B: Bundler,
    R: ManifestRepository,
{
    pub fn new(options: BuildOptions, bundler: B, repository: R) -> Self {
        let classifier = ComponentClassifier::new(options.extensions.clone());
        let producer = BundleProducer::new(bundler, options.concurrency);
        let writer = ManifestWriter::new(repository, options.output_dir.clone());
        Self {
            options,
            classifier,
            producer,
            writer,
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn classifier(&self) -> &ComponentClassifier {
        &self.classifier
    }

    /// Run one pass, reporting progress to `events`.
    ///
    /// Never panics on build problems: every failure ends up in the result.
    pub fn run(&self, events: &dyn BuildEventSink) -> BuildResult {
        events.on_event(BuildEvent::Started {
            components_dir: self.options.components_dir.clone(),
            output_dir: self.options.output_dir.clone(),
        });

        let mut result = BuildResult::new(self.writer.manifest_path());
        if let Err(e) = self.run_pass(events, &mut result) {
            tracing::debug!(error = %e, "build pass failed");
            result.error = Some(e.to_string());
            result.hint = e.hint();
        }

        events.on_event(BuildEvent::Completed {
            succeeded: result.succeeded(),
            failed: result.failed(),
            committed: result.manifest_committed,
            error: result.error.clone(),
        });
        result
    }

    fn run_pass(&self, events: &dyn BuildEventSink, result: &mut BuildResult) -> GxrResult<()> {
        let output_dir = &self.options.output_dir;
        fs::create_dir_all(output_dir)?;
        let _lock = BuildLock::acquire(output_dir)?;

        let classification = self.classifier.classify(&self.options.components_dir)?;
        for warning in classification.warnings {
            events.on_event(BuildEvent::Warning {
                message: warning.clone(),
            });
            result.warnings.push(warning);
        }

        result.components = classification.components.len();
        events.on_event(BuildEvent::Classified {
            count: result.components,
        });

        let previous = match self.writer.load_previous() {
            Ok(previous) => previous,
            Err(e) => {
                let warning = format!("ignoring previous manifest: {}", e);
                events.on_event(BuildEvent::Warning {
                    message: warning.clone(),
                });
                result.warnings.push(warning);
                None
            }
        };

        let staging = staging_dir(output_dir)?;
        let mut targets: Vec<BuildTarget> = classification
            .components
            .into_iter()
            .map(|component| BuildTarget::new(component, &self.options.bundle_dir))
            .collect();

        if let Some(previous) = &previous {
            result.reused = self.reuse_unchanged(&mut targets, previous, staging.path(), events);
        }
        self.producer.produce(&mut targets, staging.path(), events)?;
        result.targets = targets.iter().map(TargetReport::from).collect();

        match self
            .writer
            .commit(&targets, staging.path(), previous.as_ref())?
        {
            CommitOutcome::Committed {
                path,
                entries,
                pruned,
            } => {
                result.manifest_committed = true;
                events.on_event(BuildEvent::ManifestCommitted { path, entries });
                for path in &pruned {
                    events.on_event(BuildEvent::ArtifactPruned { path: path.clone() });
                }
                result.pruned = pruned;
            }
            CommitOutcome::Skipped { failed } => {
                events.on_event(BuildEvent::ManifestSkipped {
                    reason: format!(
                        "{} component{} failed to bundle; previous manifest kept",
                        failed,
                        if failed == 1 { "" } else { "s" }
                    ),
                });
            }
        }

        Ok(())
    }

    /// Stage the live bundle of every target whose source is unchanged since
    /// `previous` was committed, marking it succeeded. Returns how many.
    fn reuse_unchanged(
        &self,
        targets: &mut [BuildTarget],
        previous: &BuildManifest,
        staging: &Path,
        events: &dyn BuildEventSink,
    ) -> usize {
        let mut reused = 0;
        for (index, target) in targets.iter_mut().enumerate() {
            let Some(entry) = previous.get(target.id().as_str()) else {
                continue;
            };
            if entry.file != target.output() || &entry.source_hash != target.component().fingerprint()
            {
                continue;
            }

            let Ok(bytes) = fs::read(target.output_path(&self.options.output_dir)) else {
                continue;
            };
            if ContentHash::from_bytes(&bytes) != entry.hash {
                tracing::debug!(component = %target.id(), "live bundle modified; rebuilding");
                continue;
            }

            let staged = target.output_path(staging);
            let copied = match staged.parent() {
                Some(parent) => fs::create_dir_all(parent).and_then(|()| fs::write(&staged, &bytes)),
                None => fs::write(&staged, &bytes),
            };
            if let Err(e) = copied {
                tracing::debug!(component = %target.id(), error = %e, "cannot stage previous bundle");
                continue;
            }

            target.succeed(entry.hash.clone());
            events.on_event(BuildEvent::TargetReused {
                index,
                component: target.id().to_string(),
                output: target.output().to_string(),
            });
            reused += 1;
        }
        reused
    }
}

/// Per-pass scratch directory, removed on drop
fn staging_dir(output_dir: &Path) -> GxrResult<tempfile::TempDir> {
    Ok(tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(output_dir)?)
}
