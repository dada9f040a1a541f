//! Watch coordinator loop
//!
//! A single thread owns the [`WatchSession`]. File changes (from the notify
//! thread) and build completions (from the build worker) arrive as messages on
//! one channel, so every transition happens here, in arrival order. The
//! debounce timer is the `recv_timeout` deadline.

use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::application::build::BuildResult;

use super::event::WatchEvent;
use super::session::{SessionAction, WatchSession};

/// Upper bound on how long the loop sleeps before rechecking the running flag
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Input to the coordinator loop
#[derive(Debug)]
pub enum WatchMessage {
    /// A relevant file changed
    Changed(PathBuf),
    /// The build worker finished
    BuildFinished {
        result: BuildResult,
        duration: Duration,
    },
}

/// Runs one build pass; called from the build worker thread
pub trait BuildRunner: Send + Sync + 'static {
    fn run_build(&self) -> BuildResult;
}

impl<F> BuildRunner for F
where
    F: Fn() -> BuildResult + Send + Sync + 'static,
{
    fn run_build(&self) -> BuildResult {
        self()
    }
}

/// Counters reported when the loop exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchStats {
    pub changes: usize,
    pub builds_started: usize,
    pub builds_completed: usize,
}

pub struct WatchCoordinator<R: BuildRunner> {
    session: WatchSession,
    runner: Arc<R>,
    sender: Sender<WatchMessage>,
    receiver: Receiver<WatchMessage>,
    worker: Option<JoinHandle<()>>,
    stats: WatchStats,
}

impl<R: BuildRunner> WatchCoordinator<R> {
    pub fn new(debounce: Duration, runner: R) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            session: WatchSession::new(debounce),
            runner: Arc::new(runner),
            sender,
            receiver,
            worker: None,
            stats: WatchStats::default(),
        }
    }

    /// Handle for producers (the file watcher) to feed the loop
    pub fn sender(&self) -> Sender<WatchMessage> {
        self.sender.clone()
    }

    /// Shared runner, for the initial build before the loop starts
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run until `running` is cleared. An in-flight build is awaited, never
    /// abandoned.
    pub fn run<F>(mut self, running: &AtomicBool, on_event: F) -> WatchStats
    where
        F: Fn(WatchEvent),
    {
        while running.load(Ordering::SeqCst) {
            let wait = self
                .session
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .map_or(POLL_INTERVAL, |d| d.min(POLL_INTERVAL));

            match self.receiver.recv_timeout(wait) {
                Ok(message) => self.handle(message, &on_event),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if self.session.on_tick(Instant::now()) == SessionAction::StartBuild {
                self.start_build(&on_event);
            }
        }

        while self.session.is_building() {
            match self.receiver.recv() {
                Ok(message @ WatchMessage::BuildFinished { .. }) => {
                    self.handle(message, &on_event)
                }
                Ok(WatchMessage::Changed(_)) => {}
                Err(_) => break,
            }
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }

        on_event(WatchEvent::Shutdown);
        self.stats
    }

    fn handle<F>(&mut self, message: WatchMessage, on_event: &F)
    where
        F: Fn(WatchEvent),
    {
        match message {
            WatchMessage::Changed(path) => {
                self.stats.changes += 1;
                tracing::debug!(path = %path.display(), state = ?self.session.state(), "change");
                on_event(WatchEvent::FileChanged {
                    path: path.display().to_string(),
                });
                self.session.on_change(Instant::now());
            }
            WatchMessage::BuildFinished { result, duration } => {
                self.stats.builds_completed += 1;
                if let Some(worker) = self.worker.take() {
                    let _ = worker.join();
                }
                on_event(WatchEvent::build_complete(&result, duration));
                self.session.on_build_finished(Instant::now());
            }
        }
    }

    fn start_build<F>(&mut self, on_event: &F)
    where
        F: Fn(WatchEvent),
    {
        self.stats.builds_started += 1;
        on_event(WatchEvent::BuildStarted { initial: false });

        let runner = Arc::clone(&self.runner);
        let sender = self.sender.clone();
        let spawned = thread::Builder::new()
            .name("gxr-build".to_string())
            .spawn(move || {
                let started = Instant::now();
                let result = panic::catch_unwind(AssertUnwindSafe(|| runner.run_build()))
                    .unwrap_or_else(|_| BuildResult {
                        error: Some("build panicked".to_string()),
                        ..BuildResult::default()
                    });
                let _ = sender.send(WatchMessage::BuildFinished {
                    result,
                    duration: started.elapsed(),
                });
            });

        match spawned {
            Ok(handle) => self.worker = Some(handle),
            Err(e) => {
                tracing::warn!(error = %e, "failed to spawn build worker");
                let _ = self.sender.send(WatchMessage::BuildFinished {
                    result: BuildResult {
                        error: Some(format!("failed to spawn build worker: {}", e)),
                        ..BuildResult::default()
                    },
                    duration: Duration::ZERO,
                });
            }
        }
    }
}
