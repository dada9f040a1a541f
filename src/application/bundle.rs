//! Bundle Producer
//!
//! Fans the build targets out over a bounded worker pool. Each target is
//! bundled into the pass's staging directory; results are written back by
//! target position, never by completion order.

use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::domain::entities::BuildTarget;
use crate::domain::ports::{BuildEvent, BuildEventSink, BundleRequest, Bundler, BundlerError};
use crate::domain::value_objects::ContentHash;
use crate::error::{GxrError, GxrResult};

pub struct BundleProducer<B: Bundler> {
    bundler: B,
    concurrency: usize,
}

impl<B: Bundler> BundleProducer<B> {
    pub fn new(bundler: B, concurrency: usize) -> Self {
        Self {
            bundler,
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Bundle every target into `staging`, recording each outcome on the
    /// target. A failing target never affects the others. Targets already
    /// marked succeeded (carried over from a previous pass) are left alone.
    pub fn produce(
        &self,
        targets: &mut [BuildTarget],
        staging: &Path,
        events: &dyn BuildEventSink,
    ) -> GxrResult<()> {
        let pending = targets.iter().filter(|t| !t.is_succeeded()).count();
        if pending == 0 {
            return Ok(());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.concurrency.min(pending))
            .thread_name(|i| format!("gxr-bundle-{}", i))
            .build()
            .map_err(|e| GxrError::Pool(e.to_string()))?;

        let outcomes: Vec<Option<Result<ContentHash, String>>> = pool.install(|| {
            targets
                .par_iter()
                .enumerate()
                .map(|(index, target)| {
                    (!target.is_succeeded())
                        .then(|| self.bundle_one(index, target, staging, events))
                })
                .collect()
        });

        for (target, outcome) in targets.iter_mut().zip(outcomes) {
            match outcome {
                Some(Ok(hash)) => target.succeed(hash),
                Some(Err(error)) => target.fail(error),
                None => {}
            }
        }

        Ok(())
    }

    fn bundle_one(
        &self,
        index: usize,
        target: &BuildTarget,
        staging: &Path,
        events: &dyn BuildEventSink,
    ) -> Result<ContentHash, String> {
        let component = target.id().to_string();
        if events.wants_detailed_events() {
            events.on_event(BuildEvent::TargetStarted {
                index,
                component: component.clone(),
            });
        }

        let output = target.output_path(staging);
        let outcome = self.invoke(target, &output);

        match &outcome {
            Ok(hash) => {
                tracing::debug!(component = %component, hash = %hash.short(8), "bundled");
                events.on_event(BuildEvent::TargetSucceeded {
                    index,
                    component,
                    output: target.output().to_string(),
                });
            }
            Err(error) => {
                tracing::debug!(component = %component, error = %error, "bundle failed");
                events.on_event(BuildEvent::TargetFailed {
                    index,
                    component,
                    error: error.clone(),
                });
            }
        }

        outcome
    }

    fn invoke(&self, target: &BuildTarget, output: &Path) -> Result<ContentHash, String> {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("cannot create {}: {}", parent.display(), e))?;
        }

        let request = BundleRequest {
            component: target.id(),
            entry: target.component().source(),
            output,
        };
        self.bundler.bundle(&request).map_err(|e| e.to_string())?;

        if !output.is_file() {
            return Err(BundlerError::MissingArtifact(output.to_path_buf()).to_string());
        }

        let bytes = fs::read(output).map_err(|e| format!("cannot read artifact: {}", e))?;
        Ok(ContentHash::from_bytes(&bytes))
    }
}
