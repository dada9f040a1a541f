//! Watch Use Case implementation

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::classify::ComponentClassifier;
use crate::error::GxrResult;

use super::coordinator::{BuildRunner, WatchCoordinator, WatchMessage, WatchStats};
use super::event::{WatchEvent, WatchOptions};
use super::filter::{is_content_event, ChangeFilter};

/// Watch Use Case
///
/// Runs the mandatory initial build, subscribes to the components directory
/// and hands control to the coordinator loop. This is the main entry point for
/// the `gxr watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
}

impl WatchUseCase {
    /// Create a new WatchUseCase
    pub fn new(options: WatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false.
    /// Use the callback to receive events.
    pub fn start<R, F>(
        &self,
        running: Arc<AtomicBool>,
        runner: R,
        on_event: F,
    ) -> GxrResult<WatchStats>
    where
        R: BuildRunner,
        F: Fn(WatchEvent),
    {
        on_event(WatchEvent::WatchStarted {
            components_dir: self.options.components_dir.display().to_string(),
            output_dir: self.options.output_dir.display().to_string(),
            debounce_ms: u64::try_from(self.options.debounce.as_millis()).unwrap_or(u64::MAX),
        });

        let coordinator = WatchCoordinator::new(self.options.debounce, runner);

        on_event(WatchEvent::BuildStarted { initial: true });
        let started = Instant::now();
        let result = coordinator.runner().run_build();
        on_event(WatchEvent::build_complete(&result, started.elapsed()));

        // Held for the lifetime of the loop; dropping it ends the subscription
        let _watcher = match self.subscribe(coordinator.sender())? {
            Some(watcher) => Some(watcher),
            None => {
                on_event(WatchEvent::Warning {
                    message: format!(
                        "components directory not found: {} (not watching)",
                        self.options.components_dir.display()
                    ),
                });
                None
            }
        };

        Ok(coordinator.run(&running, &on_event))
    }

    fn subscribe(
        &self,
        sender: std::sync::mpsc::Sender<WatchMessage>,
    ) -> GxrResult<Option<RecommendedWatcher>> {
        let components_dir = &self.options.components_dir;
        if !components_dir.is_dir() {
            return Ok(None);
        }

        let watch_root = components_dir
            .canonicalize()
            .unwrap_or_else(|_| components_dir.clone());
        let ignored_root = self.options.output_dir.canonicalize().ok();

        let classifier = ComponentClassifier::new(self.options.extensions.clone());
        let mut filter = ChangeFilter::new(classifier, ignored_root);
        filter.seed(&watch_root);

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let event = match res {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::warn!(error = %e, "file watcher error");
                        return;
                    }
                };
                if !is_content_event(&event.kind) {
                    return;
                }
                for path in event.paths {
                    if filter.is_relevant(&path) {
                        let _ = sender.send(WatchMessage::Changed(path));
                    }
                }
            },
            Config::default(),
        )?;

        watcher.watch(&watch_root, RecursiveMode::Recursive)?;
        tracing::debug!(root = %watch_root.display(), "watching");
        Ok(Some(watcher))
    }
}
