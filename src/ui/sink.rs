//! Console Event Sink
//!
//! Human-readable build progress. Failures and warnings go to stderr.

use gxr::domain::ports::{BuildEvent, BuildEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::build::render_build_event;

pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        let Some(line) = render_build_event(&event, self.ui.verbose, self.ui.color, self.ui.unicode)
        else {
            return;
        };
        match event {
            BuildEvent::Warning { .. } | BuildEvent::TargetFailed { .. } => eprint!("{line}"),
            _ => print!("{line}"),
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.verbose > 0
    }
}
