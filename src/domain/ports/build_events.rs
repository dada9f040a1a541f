//! Build Event Port
//!
//! Provides an observable interface for build passes.
//! Enables progress reporting, NDJSON event streams, and test recording.

use std::path::PathBuf;

/// Event emitted during a build pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// Pass started
    Started {
        components_dir: PathBuf,
        output_dir: PathBuf,
    },

    /// Non-fatal problem (missing directory, unreadable file)
    Warning { message: String },

    /// Classification finished
    Classified { count: usize },

    /// Bundler invoked for a component
    TargetStarted { index: usize, component: String },

    /// Bundle written
    TargetSucceeded {
        index: usize,
        component: String,
        output: String,
    },

    /// Source unchanged since the last commit; previous bundle carried over
    TargetReused {
        index: usize,
        component: String,
        output: String,
    },

    /// Bundle failed
    TargetFailed {
        index: usize,
        component: String,
        error: String,
    },

    /// Manifest replaced on disk
    ManifestCommitted { path: PathBuf, entries: usize },

    /// Manifest left untouched
    ManifestSkipped { reason: String },

    /// Stale artifact removed after a commit
    ArtifactPruned { path: PathBuf },

    /// Pass finished; `error` carries a pass-level failure
    Completed {
        succeeded: usize,
        failed: usize,
        committed: bool,
        error: Option<String>,
    },
}

/// Trait for receiving build events
///
/// Implementations:
/// - ConsoleEventSink (binary): human-readable progress
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
///
/// Target events arrive from bundler worker threads, hence `Send + Sync`.
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Whether per-target events are wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

impl<S: BuildEventSink + ?Sized> BuildEventSink for std::sync::Arc<S> {
    fn on_event(&self, event: BuildEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingEventSink;
    use super::*;

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink::default();

        sink.on_event(BuildEvent::Classified { count: 2 });
        sink.on_event(BuildEvent::Warning {
            message: "components directory not found".to_string(),
        });

        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.warnings(), vec!["components directory not found"]);
    }

    #[test]
    fn noop_sink_wants_no_details() {
        assert!(!NoopEventSink.wants_detailed_events());
    }
}
