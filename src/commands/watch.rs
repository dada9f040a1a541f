use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use gxr::application::WatchEvent;
use gxr::config::Config;
use gxr::domain::ports::BuildEventSink;
use gxr::infrastructure::JsonEventSink;
use gxr::presentation::{create_build_use_case, create_watch_use_case};

use crate::ui::context::UiContext;
use crate::ui::sink::ConsoleEventSink;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(config: &Config, ui: &UiContext) -> Result<()> {
    let build = create_build_use_case(config)?;
    let watch = create_watch_use_case(config);

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &config.build.components_dir.display().to_string(),
                &config.build.output_dir.display().to_string(),
                ui.color,
                ui.unicode,
            )
        );
    }

    let sink: Arc<dyn BuildEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout("watch"))
    } else {
        Arc::new(ConsoleEventSink::new(*ui))
    };
    let runner = move || build.run(sink.as_ref());

    let ui = *ui;
    let stats = watch.start(running, runner, move |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, ui.color, ui.unicode);
        match event {
            WatchEvent::Warning { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    tracing::debug!(
        changes = stats.changes,
        builds = stats.builds_completed,
        "watch finished"
    );
    Ok(())
}
