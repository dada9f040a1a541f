//! Watch session state machine
//!
//! The session is a plain value owned by the coordinator loop and advanced
//! through explicit transitions; it never reads the clock itself. Callers pass
//! `now` so every transition is deterministic under test.
//!
//! ```text
//! Idle ──change──▶ Debouncing ──change──▶ Debouncing (deadline reset)
//!                       │
//!                   deadline ──▶ Building ──done──▶ Idle
//!                                   │
//!                                change
//!                                   ▼
//!                     BuildingWithPendingChange ──done──▶ Debouncing
//! ```

use std::time::{Duration, Instant};

/// Longest quiet period honored; larger values are clamped
pub const MAX_DEBOUNCE: Duration = Duration::from_secs(60 * 60);

/// Observable coordinator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    Debouncing,
    Building,
    BuildingWithPendingChange,
}

/// What the loop must do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    None,
    StartBuild,
}

#[derive(Debug, Clone)]
pub struct WatchSession {
    debounce: Duration,
    deadline: Option<Instant>,
    build_in_progress: bool,
    rebuild_pending: bool,
}

impl WatchSession {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce: debounce.min(MAX_DEBOUNCE),
            deadline: None,
            build_in_progress: false,
            rebuild_pending: false,
        }
    }

    pub fn state(&self) -> WatchState {
        match (self.build_in_progress, self.rebuild_pending) {
            (true, true) => WatchState::BuildingWithPendingChange,
            (true, false) => WatchState::Building,
            (false, _) if self.deadline.is_some() => WatchState::Debouncing,
            (false, _) => WatchState::Idle,
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn is_building(&self) -> bool {
        self.build_in_progress
    }

    /// When the loop must wake up next, if a debounce is running
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    fn deadline_after(&self, now: Instant) -> Instant {
        now.checked_add(self.debounce).unwrap_or(now)
    }

    /// A relevant file changed
    pub fn on_change(&mut self, now: Instant) {
        if self.build_in_progress {
            self.rebuild_pending = true;
        } else {
            self.deadline = Some(self.deadline_after(now));
        }
    }

    /// Check the debounce deadline. Starts a build only when none is running.
    pub fn on_tick(&mut self, now: Instant) -> SessionAction {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                if self.build_in_progress {
                    self.rebuild_pending = true;
                    SessionAction::None
                } else {
                    self.build_in_progress = true;
                    SessionAction::StartBuild
                }
            }
            _ => SessionAction::None,
        }
    }

    /// The in-flight build finished (successfully or not)
    pub fn on_build_finished(&mut self, now: Instant) {
        self.build_in_progress = false;
        if self.rebuild_pending {
            self.rebuild_pending = false;
            self.deadline = Some(self.deadline_after(now));
        }
    }
}
