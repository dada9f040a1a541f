//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// `command` field stamped on every line (`build` or `watch`)
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let command = self.command;
        let json = match event {
            BuildEvent::Started {
                components_dir,
                output_dir,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": command,
                    "components_dir": components_dir.display().to_string(),
                    "output_dir": output_dir.display().to_string(),
                })
            }

            BuildEvent::Warning { message } => {
                serde_json::json!({
                    "event": "warning",
                    "command": command,
                    "message": message,
                })
            }

            BuildEvent::Classified { count } => {
                serde_json::json!({
                    "event": "classified",
                    "command": command,
                    "components": count,
                })
            }

            BuildEvent::TargetStarted { index, component } => {
                serde_json::json!({
                    "event": "item_start",
                    "command": command,
                    "index": index,
                    "component": component,
                })
            }

            BuildEvent::TargetSucceeded {
                index,
                component,
                output,
            } => {
                serde_json::json!({
                    "event": "item_built",
                    "command": command,
                    "index": index,
                    "component": component,
                    "output": output,
                })
            }

            BuildEvent::TargetReused {
                index,
                component,
                output,
            } => {
                serde_json::json!({
                    "event": "item_reused",
                    "command": command,
                    "index": index,
                    "component": component,
                    "output": output,
                })
            }

            BuildEvent::TargetFailed {
                index,
                component,
                error,
            } => {
                serde_json::json!({
                    "event": "item_error",
                    "command": command,
                    "index": index,
                    "component": component,
                    "error": error,
                })
            }

            BuildEvent::ManifestCommitted { path, entries } => {
                serde_json::json!({
                    "event": "manifest_committed",
                    "command": command,
                    "path": path.display().to_string(),
                    "entries": entries,
                })
            }

            BuildEvent::ManifestSkipped { reason } => {
                serde_json::json!({
                    "event": "manifest_skipped",
                    "command": command,
                    "reason": reason,
                })
            }

            BuildEvent::ArtifactPruned { path } => {
                serde_json::json!({
                    "event": "artifact_pruned",
                    "command": command,
                    "path": path.display().to_string(),
                })
            }

            BuildEvent::Completed {
                succeeded,
                failed,
                committed,
                error,
            } => {
                let status = if failed == 0 && committed && error.is_none() {
                    "success"
                } else {
                    "failed"
                };
                let mut json = serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "succeeded": succeeded,
                    "failed": failed,
                    "committed": committed,
                });
                if let Some(error) = error {
                    json["error"] = serde_json::Value::String(error);
                }
                json
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
