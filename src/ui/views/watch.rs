use gxr::application::WatchEvent;

use crate::ui::primitives::icon::Icon;
use crate::ui::views::build::render_header;

pub fn render_watch_header(
    components_dir: &str,
    output_dir: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    render_header(
        Icon::Watch,
        "gxr watch",
        &[
            ("Components", components_dir.to_string()),
            ("Output", output_dir.to_string()),
            ("Hint", "Press Ctrl+C to stop".to_string()),
        ],
        supports_color,
        supports_unicode,
    )
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted {
            components_dir,
            debounce_ms,
            ..
        } => format!(
            "{} {} Watching: {} ({} ms debounce)\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            components_dir,
            debounce_ms
        ),
        WatchEvent::Warning { message } => format!(
            "{} {} {}\n",
            prefix,
            Icon::Warning.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::BuildStarted { initial } => format!(
            "{} {} {}...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode),
            if *initial { "Initial build" } else { "Rebuilding" }
        ),
        WatchEvent::BuildComplete {
            components,
            succeeded,
            failed,
            committed,
            error,
            duration_ms,
        } => {
            if let Some(error) = error {
                return format!(
                    "{} {} Build failed: {}\n",
                    prefix,
                    Icon::Error.colored(supports_color, supports_unicode),
                    error
                );
            }
            let icon = if *failed > 0 || !committed {
                Icon::Error
            } else {
                Icon::Success
            }
            .colored(supports_color, supports_unicode);

            if *failed > 0 {
                format!(
                    "{} {} Build: {} built, {} failed, manifest kept ({} ms)\n",
                    prefix, icon, succeeded, failed, duration_ms
                )
            } else {
                format!(
                    "{} {} Build: {} component(s) ({} ms)\n",
                    prefix, icon, components, duration_ms
                )
            }
        }
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_started_event_with_watch_icon() {
        let event = WatchEvent::WatchStarted {
            components_dir: "client/components".to_string(),
            output_dir: "public".to_string(),
            debounce_ms: 300,
        };
        let rendered = render_watch_event("00:00:00", &event, false, false);
        assert_eq!(
            rendered,
            "[00:00:00] [~] Watching: client/components (300 ms debounce)\n"
        );
    }

    #[test]
    fn renders_failed_pass_as_kept_manifest() {
        let event = WatchEvent::BuildComplete {
            components: 2,
            succeeded: 1,
            failed: 1,
            committed: false,
            error: None,
            duration_ms: 12,
        };
        let rendered = render_watch_event("12:00:01", &event, false, false);
        assert!(rendered.contains("[FAIL] Build: 1 built, 1 failed, manifest kept"));
    }

    #[test]
    fn header_mentions_ctrl_c() {
        let rendered = render_watch_header("client/components", "public", false, true);
        assert!(rendered.contains("Press Ctrl+C to stop"));
        assert!(rendered.starts_with("⟳ gxr watch"));
    }
}
