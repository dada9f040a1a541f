//! Watch event types and options

use std::path::PathBuf;
use std::time::Duration;

use crate::application::build::BuildResult;
use crate::config::Config;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory subscribed to for changes
    pub components_dir: PathBuf,
    /// Build output; changes under it are never relevant
    pub output_dir: PathBuf,
    /// Recognized component extensions
    pub extensions: Vec<String>,
    /// Quiet period after the last change before a rebuild starts
    pub debounce: Duration,
}

impl WatchOptions {
    /// Create new watch options with minimal required fields
    pub fn new(components_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        let defaults = Config::default();
        Self {
            components_dir: components_dir.into(),
            output_dir: output_dir.into(),
            extensions: defaults.build.extensions,
            debounce: Duration::from_millis(defaults.watch.debounce_ms),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            components_dir: config.build.components_dir.clone(),
            output_dir: config.build.output_dir.clone(),
            extensions: config.build.extensions.clone(),
            debounce: Duration::from_millis(config.watch.debounce_ms),
        }
    }

    /// Set the debounce window
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted {
        components_dir: String,
        output_dir: String,
        debounce_ms: u64,
    },
    /// Non-fatal problem (e.g. nothing to subscribe to)
    Warning { message: String },
    /// Relevant file changed
    FileChanged { path: String },
    /// Build pass started
    BuildStarted { initial: bool },
    /// Build pass finished
    BuildComplete {
        components: usize,
        succeeded: usize,
        failed: usize,
        committed: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<String>,
        duration_ms: u64,
    },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Summary event for a finished pass
    pub fn build_complete(result: &BuildResult, duration: Duration) -> Self {
        WatchEvent::BuildComplete {
            components: result.components,
            succeeded: result.succeeded(),
            failed: result.failed(),
            committed: result.manifest_committed,
            error: result.error.clone(),
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
